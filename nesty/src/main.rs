//! Nesty - organize chats into nested folders.
//!
//! The tree store is a pure library: every edit command takes the current
//! forest and returns a freshly built one. This binary wraps it in an
//! interactive sidebar session that owns the forest for the lifetime of
//! the process; nothing is persisted.

use anyhow::Result;
use clap::Parser;

use nesty::cli::{execute, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    execute(cli)
}
