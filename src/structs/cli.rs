use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "doclyzer")]
#[clap(about = "AI-powered document analysis service", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
