// main.rs

//! # dbtools - Main Entry Point
//!
//! Command-line front end for the `dbtools` library. It owns the logger setup
//! and the [`DebugLog`] instance that the subcommands write to.
//!
//! ## Global Arguments
//!
//! These arguments can be specified for **any command**.
//!
//! - `--log-level` - The logging level (default: `info`). Possible values: `error`, `warn`, `info`, `debug`, `trace`.
//! - `--debug`, `-d` - Print `DEBUG:` lines to standard error.
//!
//! ## Example Usage
//! ```bash
//! ./dbtools resolve --config prod.ini
//! ./dbtools --debug connect --user alice --password secret
//! ./dbtools whoami
//! ./dbtools compare café CAFÉ
//! ```
//!
//! For detailed help, use `--help` or `-h` flags.

mod commands;

use std::process;

use clap::{Arg, ArgAction, Command};
use log::debug;

use dbtools::app::{APP_DESCRIPTION, APP_NAME, APP_VERSION, DEFAULT_LOG_LEVEL, LOG_LEVELS};
use dbtools::print_error;
use dbtools::utils::logging::{initialize_logger, DebugLog};

/// Main function that initializes the CLI and handles command execution.
fn main() {
    let matches = Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(APP_DESCRIPTION)
        // ====================
        // Global Flags
        // ====================
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Set the logging level")
                .global(true)
                .value_parser(clap::builder::PossibleValuesParser::new(LOG_LEVELS))
                .ignore_case(true)
                .default_value(DEFAULT_LOG_LEVEL)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Print DEBUG: lines to standard error")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        // ====================
        // Subcommand Definitions
        // ====================
        .subcommand(commands::resolve::command())
        .subcommand(commands::connect::command())
        .subcommand(commands::whoami::command())
        .subcommand(commands::compare::command())
        .get_matches();

    // ====================
    // Initialize Logger
    // ====================
    let log_level = matches
        .get_one::<String>("log-level")
        .map_or(DEFAULT_LOG_LEVEL, String::as_str);
    initialize_logger(log_level);

    debug!("Logger initialized with level: {}", log_level);

    let debug_log = DebugLog::stderr();
    debug_log.log(matches.get_flag("debug"));

    // ====================
    // Command Execution
    // ====================
    let result = match matches.subcommand() {
        Some(("resolve", sub_matches)) => commands::resolve::execute(sub_matches, &debug_log),
        Some(("connect", sub_matches)) => commands::connect::execute(sub_matches, &debug_log),
        Some(("whoami", sub_matches)) => commands::whoami::execute(sub_matches, &debug_log),
        Some(("compare", sub_matches)) => commands::compare::execute(sub_matches, &debug_log),
        _ => {
            print_error!("Unknown command. Use --help for usage.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        print_error!("{}", e);
        process::exit(1);
    }
}
