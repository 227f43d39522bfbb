//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "crowdring")]
#[command(about = "Select campaign ringers with tag filters", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new campaign directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List ringers matching a tag filter
    Match {
        /// Tag list, e.g. 'region:east|region:west|size:large'
        #[arg(short, long, conflicts_with = "filter")]
        tags: Option<String>,

        /// Name of a saved filter
        #[arg(short, long)]
        filter: Option<String>,

        /// Only ringers who joined on or after this date (DD-MM-YYYY)
        #[arg(long)]
        from: Option<String>,

        /// Only ringers who joined on or before this date (DD-MM-YYYY)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show how a tag list is grouped
    Inspect {
        /// Tag list to inspect
        tags: String,
    },

    /// List or manage saved filters
    Filters {
        #[command(subcommand)]
        action: Option<FilterAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilterAction {
    /// Save a tag list under a name
    Save {
        name: String,
        tags: String,
    },

    /// Remove a saved filter
    Remove { name: String },
}
