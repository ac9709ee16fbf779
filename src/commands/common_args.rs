// commands/common_args.rs

//! # Common Command Arguments
//!
//! Connection arguments shared by `resolve` and `connect`. Each one maps to a
//! field of [`DbOptions`], the explicit-override layer of parameter
//! resolution.

use std::path::PathBuf;

use clap::{Arg, ArgMatches};
use log::debug;

use dbtools::config::db_config::DbOptions;

/// Config file to load before applying the other arguments
pub fn config() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("Key/value config file (defaults to db.ini)")
        .value_parser(clap::value_parser!(PathBuf))
}

/// Database server name or IP address
pub fn server() -> Arg {
    Arg::new("db-server")
        .long("server")
        .help("Database server name or IP address")
}

/// Database port
pub fn port() -> Arg {
    Arg::new("db-port")
        .long("port")
        .help("Database port number")
}

/// Database identifier
pub fn sid() -> Arg {
    Arg::new("db-sid")
        .long("sid")
        .help("Database identifier (used as the database name)")
}

/// User id for the connection
pub fn user() -> Arg {
    Arg::new("db-user")
        .short('u')
        .long("user")
        .help("User id for the connection")
}

/// Password for the connection
pub fn password() -> Arg {
    Arg::new("db-password")
        .long("password")
        .help("Password for the connection")
}

/// All connection arguments, in display order
pub fn connection_args() -> Vec<Arg> {
    vec![config(), server(), port(), sid(), user(), password()]
}

/// Create DbOptions from ArgMatches
pub fn options_from_matches(matches: &ArgMatches) -> DbOptions {
    let text = |id: &str| matches.get_one::<String>(id).cloned();

    let options = DbOptions {
        config: matches.get_one::<PathBuf>("config").cloned(),
        server: text("db-server"),
        port: text("db-port"),
        sid: text("db-sid"),
        user_id: text("db-user"),
        user_pw: text("db-password"),
    };

    debug!("Config File: {}", options.config_path().display());
    debug!("Explicit Server: {:?}", options.server);
    debug!("Explicit Port: {:?}", options.port);
    debug!("Explicit SID: {:?}", options.sid);
    debug!("Explicit User: {:?}", options.user_id);

    options
}
