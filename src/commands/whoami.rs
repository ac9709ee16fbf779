// commands/whoami.rs

//! # Whoami Command Module
//!
//! Prints the invoking user, the platform and whether standard input is
//! redirected.
//!
//! ## Example Usage
//! ```bash
//! ./dbtools whoami
//! echo | ./dbtools whoami
//! ```

use clap::{ArgMatches, Command};

use dbtools::error::AppError;
use dbtools::print_info;
use dbtools::utils::logging::DebugLog;
use dbtools::utils::platform::{get_platform, input_is_redirected, user_id};

/// Defines the `whoami` command for the CLI application.
pub fn command() -> Command {
    Command::new("whoami").about("Show the current user and input mode")
}

/// Executes the `whoami` command.
pub fn execute(_matches: &ArgMatches, debug_log: &DebugLog) -> Result<(), AppError> {
    let user = user_id().ok_or_else(|| {
        AppError::CommandFailed("could not determine the current user".to_string())
    })?;
    debug_log.log(format!("platform: {:?}", get_platform()));

    println!("{}", user);
    if input_is_redirected() {
        print_info!("input is redirected");
    }
    Ok(())
}
