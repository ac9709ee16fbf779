// commands/resolve.rs

//! # Resolve Command Module
//!
//! Prints the connection parameters that `connect` would use, after layering
//! built-in defaults, the config file and command-line values. The password
//! is masked.
//!
//! ## Example Usage
//! ```bash
//! ./dbtools resolve --config prod.ini --user alice
//! ./dbtools resolve --json
//! ```

use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;

use dbtools::error::AppError;
use dbtools::utils::logging::DebugLog;

use crate::commands::common_args::{connection_args, options_from_matches};

/// Defines the `resolve` command for the CLI application.
pub fn command() -> Command {
    Command::new("resolve")
        .about("Show the resolved connection parameters")
        .args(connection_args())
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the parameters as JSON")
                .action(ArgAction::SetTrue),
        )
}

/// Executes the `resolve` command.
pub fn execute(matches: &ArgMatches, debug_log: &DebugLog) -> Result<(), AppError> {
    let options = options_from_matches(matches);
    debug_log.log(format!(
        "resolving with config file {}",
        options.config_path().display()
    ));

    let params = options.resolve().masked();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        println!("{}", params.to_string().cyan());
    }

    Ok(())
}
