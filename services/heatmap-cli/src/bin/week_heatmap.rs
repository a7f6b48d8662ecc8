//! Day-of-week counter heatmap.

use std::process::ExitCode;

use clap::Parser;
use heatmap_common::Profile;

#[derive(Parser, Debug)]
#[command(name = "week-heatmap", version)]
#[command(about = "Render a weekly counter heatmap from JSON on stdin to PNG on stdout")]
struct Args {}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let _args = Args::parse();

    heatmap_cli::main_for(Profile::Week)
}
