//! # task - directory-backed task lifecycle tracker
//!
//! Each unit of work is one directory on disk; its lifecycle stage is
//! encoded by which top-level directory currently holds it. `template/` is
//! the read-only seed payload, `ongoing/` holds in-progress tasks and
//! `done/` completed ones. The directories themselves are the database:
//! there is no index, no cache, no daemon.
//!
//! ## Quick start
//!
//! ```bash
//! mkdir template && echo hi > template/notes.txt
//!
//! # Create a task (copies the template, stamps identity, prints the report)
//! task add alpha
//!
//! # Show one task, or everything in flight
//! task info --name alpha
//! task info
//!
//! # Finish it (moves ongoing/alpha to done/alpha)
//! task done alpha
//! ```
//!
//! Each task directory carries two sidecar files next to its payload:
//! `.config` (JSON metadata, at minimum `Task-Name` and `Task-Id`) and
//! `.tags` (newline-delimited free text, seeded with the task name).
//! External tools may append further tags; `info` renders them all.
//!
//! The tool is built for a single interactive operator. Concurrent
//! invocations racing on the same name are not coordinated beyond what the
//! filesystem guarantees, and an invocation killed mid-copy leaves a
//! partial directory that has to be repaired by hand.

use chrono::Local;
use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::Commands;
use store::Store;

fn main() {
    let cli = Cli::parse();
    let store = Store::new(&cli.root);

    let result = match cli.command {
        Commands::Add { name } => cmd::cmd_add(&store, &name),
        Commands::Done { name } => cmd::cmd_done(&store, &name),
        Commands::Info { name } => cmd::cmd_info(&store, name.as_deref()),
        Commands::Completions { shell } => {
            cmd::cmd_completions(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        // Single formatting point: one line on stderr, non-zero exit.
        let ts = Local::now().format("%d-%m-%Y %H:%M:%S");
        eprintln!("error|{ts}|{e}");
        std::process::exit(1);
    }
}
