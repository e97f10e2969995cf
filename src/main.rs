//! pomdeps CLI entry point
//!
//! Parses the root path argument, installs logging, runs the resolver and maps the
//! outcome to an exit status. Usage errors print the usage message and exit
//! successfully; any failed descriptor or project exits with status 1.

use anyhow::Result;
use pomdeps_cli::cli;
use pomdeps_cli::core::user_friendly_error;

fn main() -> Result<()> {
    let Some(cli) = cli::parse_args(std::env::args_os()) else {
        return Ok(());
    };

    cli::init_logging();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
