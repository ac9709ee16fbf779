// utils/connection.rs

//! # Connection Utility Module
//!
//! Opens a database connection from resolved [`DbParams`].
//!
//! The [`Connector`] trait is the seam between parameter resolution and the
//! client library. [`PostgresConnector`] is the production implementation,
//! built on the `postgres` crate; the resolved values are handed over as
//! they are, apart from the port which is parsed here.
//!
//! ## Example Usage
//! ```rust,no_run
//! use dbtools::config::db_config::DbOptions;
//! use dbtools::utils::connection::connect_to_db;
//!
//! let options = DbOptions::new().config("myconfig.ini");
//! let mut client = connect_to_db(&options)?;
//! client.simple_query("SELECT 1")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::{debug, info};
use postgres::{Client, NoTls};

use crate::config::db_config::{DbOptions, DbParams};

/// Errors raised while opening a connection.
#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("invalid port number '{0}'")]
    InvalidPort(String),

    #[error("failed to connect to {server}:{port}: {source}")]
    Connect {
        server: String,
        port: u16,
        #[source]
        source: postgres::Error,
    },

    #[error("query failed: {0}")]
    Query(#[from] postgres::Error),
}

/// Parses the textual port of `params`.
pub fn parse_port(params: &DbParams) -> Result<u16, DbError> {
    params
        .port
        .trim()
        .parse::<u16>()
        .map_err(|_| DbError::InvalidPort(params.port.clone()))
}

/// Opens a connection from resolved parameters.
pub trait Connector {
    type Connection;

    fn connect(&self, params: &DbParams) -> Result<Self::Connection, DbError>;
}

/// Connects with the synchronous `postgres` client, without TLS.
///
/// The database identifier is used as the database name.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresConnector;

impl PostgresConnector {
    /// Builds the client configuration for `params`.
    pub fn config(params: &DbParams) -> Result<postgres::Config, DbError> {
        Self::config_with_port(params).map(|(config, _)| config)
    }

    /// Builds the client configuration along with the port it was given.
    fn config_with_port(params: &DbParams) -> Result<(postgres::Config, u16), DbError> {
        let port = parse_port(params)?;
        let mut config = postgres::Config::new();
        config
            .host(&params.server)
            .port(port)
            .dbname(&params.sid)
            .user(&params.user_id)
            .password(&params.user_pw)
            .application_name(crate::app::APP_NAME);
        Ok((config, port))
    }
}

impl Connector for PostgresConnector {
    type Connection = Client;

    fn connect(&self, params: &DbParams) -> Result<Client, DbError> {
        let (config, port) = Self::config_with_port(params)?;

        debug!("Connecting to {}:{} as '{}'", params.server, port, params.user_id);
        let client = config.connect(NoTls).map_err(|source| DbError::Connect {
            server: params.server.clone(),
            port,
            source,
        })?;
        info!("Connected to {}:{}/{}", params.server, port, params.sid);

        Ok(client)
    }
}

/// Resolves `options` and connects with `connector`.
pub fn connect_with<C: Connector>(
    options: &DbOptions,
    connector: &C,
) -> Result<C::Connection, DbError> {
    let params = options.resolve();
    connector.connect(&params)
}

/// Resolves `options` and opens a PostgreSQL connection.
pub fn connect_to_db(options: &DbOptions) -> Result<Client, DbError> {
    connect_with(options, &PostgresConnector)
}
