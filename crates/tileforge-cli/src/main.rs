//! Tileforge CLI - seamless tileable PBR map generation
//!
//! This binary exposes the synthesis engine as commands: generating a map
//! set to disk and demonstrating the creation record store.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tileforge_synth::ExportFormat;

use tileforge_cli::commands;

/// Tileforge - Deterministic Tileable PBR Map Generation
#[derive(Parser)]
#[command(name = "tileforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a five-channel PBR map set and export it
    Generate {
        /// Material category label (free-form)
        #[arg(short, long, default_value = "material")]
        category: String,

        /// Base RNG seed
        #[arg(short, long, default_value_t = 0)]
        seed: u32,

        /// Variation percentage (0-100)
        #[arg(short, long, default_value_t = 50)]
        variation: u32,

        /// Enable the Creative Freedom-B transform (non-reproducible)
        #[arg(long)]
        creative_freedom: bool,

        /// Free-text description (metadata only)
        #[arg(short, long, default_value = "")]
        description: String,

        /// Reference image files (metadata only; validated, never read)
        #[arg(short, long)]
        reference: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "out")]
        out_dir: PathBuf,

        /// Base name for exported files
        #[arg(short, long, default_value = "material")]
        base_name: String,

        /// Export format (png or jpg)
        #[arg(short, long, default_value = "png")]
        format: ExportFormat,

        /// Override the minimum generation latency in milliseconds
        #[arg(long)]
        min_latency_ms: Option<u64>,

        /// Also write a 400px JPEG thumbnail of the albedo map
        #[arg(long)]
        thumbnail: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Demonstrate the creation record store and its usable-only view
    Records {
        /// User name to key records under
        #[arg(short, long, default_value = "local")]
        user: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            category,
            seed,
            variation,
            creative_freedom,
            description,
            reference,
            out_dir,
            base_name,
            format,
            min_latency_ms,
            thumbnail,
            json,
        } => commands::generate::run(commands::generate::GenerateArgs {
            category,
            seed,
            variation,
            creative_freedom,
            description,
            references: reference,
            out_dir,
            base_name,
            format,
            min_latency_ms,
            thumbnail,
            json,
        }),
        Commands::Records { user } => commands::records::run(&user),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
