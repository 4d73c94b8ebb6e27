//! CLI argument definitions.

use clap::Parser;

/// Nesty - organize chats into nested folders
#[derive(Parser, Debug)]
#[command(name = "nesty")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with an empty forest instead of the sample data
    #[arg(long)]
    pub empty: bool,
}
