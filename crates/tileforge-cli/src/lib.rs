//! Library surface for the Tileforge CLI.
//!
//! `main.rs` stays focused on argument parsing and dispatch; the command
//! implementations live here so they can be integration-tested.

pub mod commands;
