use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dlnaprofile")]
#[command(author, version, about = "Identify the DLNA media profile of a probed resource")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify the profile of a stream descriptor
    Identify {
        /// Descriptor JSON file
        #[arg(required = true)]
        input: PathBuf,

        /// Input is an ffprobe JSON report instead of a descriptor
        #[arg(long)]
        ffprobe: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the profile catalog
    Catalog {
        /// Only show one media class (image, audio, av)
        #[arg(long)]
        class: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
