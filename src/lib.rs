// lib.rs

//! # dbtools
//!
//! Small helpers shared by applications that talk to the same database:
//!
//! - [`config::keypair`] reads `KEY = VALUE` config files.
//! - [`config::db_config`] layers built-in defaults, a config file and explicit
//!   overrides into connection parameters.
//! - [`utils::connection`] opens the connection.
//! - [`utils::text`], [`utils::logging`], [`utils::display`] and
//!   [`utils::platform`] hold the text, debug-log, color and OS helpers.
//!
//! ## Example Usage
//! ```rust,no_run
//! use dbtools::config::db_config::DbOptions;
//! use dbtools::utils::connection::connect_to_db;
//!
//! // defaults, then db.ini, then these values
//! let client = connect_to_db(&DbOptions::new().user_id("xxx").user_pw("yyy"));
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod utils;

pub use crate::config::db_config::{DbOptions, DbParams};
pub use crate::config::keypair::{load_keypair_file, try_load_keypair_file, KeyCase, Keypairs};
pub use crate::error::AppError;
pub use crate::utils::connection::{connect_to_db, Connector, DbError, PostgresConnector};
