//! Top-level argument parser.

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Directory-backed task tracker: one directory per task under `ongoing/`
/// or `done/`, seeded from `template/`, all relative to --root.
#[derive(Parser)]
#[command(name = "task", version, about = "Directory-backed task lifecycle tracker")]
pub struct Cli {
    /// Working root holding the template/, ongoing/ and done/ directories.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}
