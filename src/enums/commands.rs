use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Run the HTTP analysis service
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Analyze a single local document and print the result
    Analyze {
        file: PathBuf,
        #[clap(short, long)]
        mime_type: Option<String>,
    },
    /// Check the configuration file for problems
    Validate,
}
