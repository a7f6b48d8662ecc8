//! Hour-of-day counter heatmap.
//!
//! Reads a day document on stdin and writes the PNG to stdout.

use std::process::ExitCode;

use clap::Parser;
use heatmap_common::Profile;

/// Render an hourly counter heatmap from JSON on stdin to PNG on stdout
#[derive(Parser, Debug)]
#[command(name = "day-heatmap", version)]
#[command(about = "Render an hourly counter heatmap from JSON on stdin to PNG on stdout")]
struct Args {}

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let _args = Args::parse();

    heatmap_cli::main_for(Profile::Day)
}
