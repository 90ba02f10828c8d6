//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive session loop
//! - Human-friendly output formatting (summaries and the text chart)

use clap::Parser;

mod cli;
mod render;
mod session;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
