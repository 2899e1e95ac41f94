use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank owls by pairwise comparison")]
pub struct Cli {
    #[command(flatten)]
    pub options: SessionOptions,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Directory holding the saved session (defaults to $OWL_STATE_DIR or ./owl_state)
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    /// File with item names, as a JSON array or one per line (defaults to the owl list)
    #[arg(long, global = true)]
    pub items: Option<PathBuf>,

    /// Directory searched for item photos
    #[arg(long, global = true)]
    pub photos: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Judge pairs interactively, resuming any saved session
    Judge {
        /// Auto-decide pairs whose simple scores differ by more than this
        #[arg(short, long)]
        threshold: Option<i64>,
    },
    /// Show the simple and Bradley-Terry rankings of the saved session
    Standings {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rank randomly simulated matches to exercise the estimator
    Simulate {
        /// Seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Discard the saved session
    Reset,
}
