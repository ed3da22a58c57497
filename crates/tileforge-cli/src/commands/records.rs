//! Records demo command
//!
//! Exercises the in-memory record store end to end: saves a few creations
//! for a local identity and prints the full and usable-only views.

use std::process::ExitCode;

use anyhow::{anyhow, Result};
use colored::Colorize;
use tileforge_spec::{
    Identity, LocalIdentity, MemoryRecordStore, NewRecord, RecordStore,
};

/// Run the records demo for the given user name.
pub fn run(user: &str) -> Result<ExitCode> {
    let identity = LocalIdentity::named(user);
    let caller = identity
        .record_key()
        .ok_or_else(|| anyhow!("no identity present"))?;
    let store = MemoryRecordStore::new();

    let entries = [
        ("Brushed Steel", true),
        ("Experiment 7", false),
        ("Wet Cobblestone", true),
    ];
    for (title, usable) in entries {
        store
            .save(
                &caller,
                NewRecord {
                    title: title.to_string(),
                    thumbnail: None,
                    creative_freedom: false,
                    usable,
                    settings_summary: format!("Category: demo | Seed: 0 | Title: {}", title),
                },
            )
            .map_err(|e| anyhow!("save failed: {}", e))?;
    }

    // An empty title must be rejected without disturbing saved records.
    let rejected = store.save(
        &caller,
        NewRecord {
            title: String::new(),
            thumbnail: None,
            creative_freedom: false,
            usable: true,
            settings_summary: String::new(),
        },
    );

    println!("{} {}", "Records for:".cyan().bold(), caller);
    let all = store
        .records_for(&caller)
        .map_err(|e| anyhow!("listing failed: {}", e))?;
    for record in &all {
        let flag = if record.usable {
            "usable".green()
        } else {
            "draft ".yellow()
        };
        println!("  [{}] {}", flag, record.title);
    }

    println!("{}", "Usable only:".cyan().bold());
    let usable = store
        .usable_records_for(&caller)
        .map_err(|e| anyhow!("listing failed: {}", e))?;
    for record in &usable {
        println!("  {} {}", "✓".green(), record.title);
    }

    if let Err(err) = rejected {
        println!(
            "{} empty title rejected as expected: {}",
            "Note:".dimmed(),
            err
        );
    }

    Ok(ExitCode::SUCCESS)
}
