// app.rs

//! # Application Constants
//!
//! Names, built-in connection defaults and logging options shared by the
//! library and the `dbtools` binary.

/// Application name used by the CLI.
pub const APP_NAME: &str = "dbtools";

/// Application version, taken from `Cargo.toml`.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short description shown in `--help`.
pub const APP_DESCRIPTION: &str =
    "Resolve layered database connection settings and open a connection";

/// Config file consulted when no explicit config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "db.ini";

/// Built-in database server address.
pub const DEFAULT_DB_SERVER: &str = "my-database.com";

/// Built-in database port, kept as text until the connector parses it.
pub const DEFAULT_DB_PORT: &str = "9999";

/// Built-in database identifier.
pub const DEFAULT_DB_SID: &str = "PRDDB";

/// Sentinel value that [`crate::utils::text::clean_value`] treats as missing.
pub const NO_MATCH_ROW_ID: &str = "No Match Row Id";

/// Environment variable set by the PyCharm IDE when it hosts a process.
pub const IDE_HOSTED_ENV_VAR: &str = "PYCHARM_HOSTED";

/// Logging levels accepted by `--log-level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Default logging level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
