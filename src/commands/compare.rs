// commands/compare.rs

//! # Compare Command Module
//!
//! Compares two strings ignoring case and Unicode composition, and applies
//! placeholder substitution to the first.
//!
//! ## Example Usage
//! ```bash
//! ./dbtools compare café CAFÉ
//! ./dbtools compare NULL x --default N/A
//! ```

use clap::{Arg, ArgMatches, Command};

use dbtools::error::AppError;
use dbtools::utils::display::TextColor;
use dbtools::utils::logging::DebugLog;
use dbtools::utils::text::{clean_value, nocase_compare};

/// Defines the `compare` command for the CLI application.
pub fn command() -> Command {
    Command::new("compare")
        .about("Compare two values ignoring case and accents")
        .arg(Arg::new("left").required(true).help("First value"))
        .arg(Arg::new("right").required(true).help("Second value"))
        .arg(
            Arg::new("default")
                .long("default")
                .help("Also print the first value, or this default if it is a placeholder"),
        )
}

/// Executes the `compare` command.
pub fn execute(matches: &ArgMatches, debug_log: &DebugLog) -> Result<(), AppError> {
    let left = matches.get_one::<String>("left").map(String::as_str);
    let right = matches.get_one::<String>("right").map(String::as_str);

    let equal = nocase_compare(left, right);
    debug_log.log(format!("{:?} vs {:?}: {}", left, right, equal));

    let verdict = if equal {
        TextColor::paint("equal", TextColor::OK)
    } else {
        TextColor::paint("different", TextColor::FAIL)
    };
    println!("{}", verdict);

    if let Some(default) = matches.get_one::<String>("default") {
        println!("{}", clean_value(left, default.as_str()));
    }
    Ok(())
}
