//! Command implementations for the CLI interface.
//!
//! One handler per subcommand. Handlers only orchestrate: the lifecycle
//! logic lives in [`crate::task`], and every failure is returned unchanged
//! for `main` to format. Nothing here retries or prints errors itself.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::error::TaskError;
use crate::store::Store;
use crate::task;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new task from the template and print its report.
    Add {
        /// Task name; becomes the directory name under ongoing/.
        name: String,
    },

    /// Move an ongoing task to done/, contents unchanged.
    Done {
        /// Name of the ongoing task to complete.
        name: String,
    },

    /// Show one ongoing task, or all of them.
    Info {
        /// Task name; omit to report every ongoing task.
        #[arg(long)]
        name: Option<String>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Target shell: bash | zsh | fish | powershell | elvish.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Separator printed between tasks when reporting all of them.
const SEPARATOR: &str = "********************";

/// Create a task and print its report, mirroring what `info --name` shows.
pub fn cmd_add(store: &Store, name: &str) -> Result<(), TaskError> {
    task::create(store, name)?;
    println!("{}", task::report(store, name)?);
    Ok(())
}

/// Complete a task.
pub fn cmd_done(store: &Store, name: &str) -> Result<(), TaskError> {
    task::complete(store, name)
}

/// Report one task, or every ongoing task separated by a marker line.
pub fn cmd_info(store: &Store, name: Option<&str>) -> Result<(), TaskError> {
    match name {
        Some(name) => println!("{}", task::report(store, name)?),
        None => {
            for rendered in task::report_all(store)? {
                println!("{SEPARATOR}");
                println!("{rendered}");
            }
        }
    }
    Ok(())
}

/// Emit a completion script for the given shell on stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
