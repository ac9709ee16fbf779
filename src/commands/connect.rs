// commands/connect.rs

//! # Connect Command Module
//!
//! Resolves the connection parameters, opens a connection and runs a trivial
//! query to prove the session works.
//!
//! ## Example Usage
//! ```bash
//! ./dbtools connect --config prod.ini
//! ./dbtools connect --server 10.0.0.5 --user alice --password secret
//! ```

use clap::{ArgMatches, Command};
use log::debug;

use dbtools::error::AppError;
use dbtools::print_success;
use dbtools::utils::connection::{Connector, PostgresConnector};
use dbtools::utils::logging::DebugLog;

use crate::commands::common_args::{connection_args, options_from_matches};

/// Defines the `connect` command for the CLI application.
pub fn command() -> Command {
    Command::new("connect")
        .about("Open a database connection and run SELECT 1")
        .args(connection_args())
}

/// Executes the `connect` command.
pub fn execute(matches: &ArgMatches, debug_log: &DebugLog) -> Result<(), AppError> {
    let params = options_from_matches(matches).resolve();
    debug_log.log_value(&params);

    let mut client = PostgresConnector.connect(&params)?;
    let messages = client
        .simple_query("SELECT 1")
        .map_err(dbtools::DbError::from)?;
    debug!("SELECT 1 returned {} messages", messages.len());

    print_success!(
        "Connected to {}:{}/{} as {}",
        params.server,
        params.port,
        params.sid,
        params.user_id
    );
    Ok(())
}
