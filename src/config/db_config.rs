// config/db_config.rs

//! # Database Parameter Resolution
//!
//! Builds the [`DbParams`] handed to a connector by layering three sources,
//! lowest precedence first:
//!
//! 1. built-in defaults (user id and password have none),
//! 2. values from a key/value config file (`db.ini` unless another is given),
//! 3. explicit overrides carried by [`DbOptions`].
//!
//! A blank value at any layer falls through to the layer below. Keys in the
//! config file that are not recognized are ignored. Nothing is validated
//! here; missing credentials surface as whatever error the connector raises.
//!
//! ## Config File Keys
//! ```text
//! DB_SERVER = xxxx    # name or IP address of the database server
//! DB_PORT = nnnn      # port number to connect to
//! DB_ORA_SID = xxxx   # database identifier
//! DB_USER_ID = xxxx   # user id for the connection
//! DB_USER_PW = xxxx   # password for the connection
//! ```
//!
//! ## Example Usage
//! ```rust
//! use dbtools::config::db_config::DbOptions;
//!
//! let params = DbOptions::new()
//!     .config("does-not-exist.ini")
//!     .user_id("alice")
//!     .user_pw("secret")
//!     .resolve();
//!
//! assert_eq!(params.server, "my-database.com");
//! assert_eq!(params.user_id, "alice");
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::app::{DEFAULT_CONFIG_FILE, DEFAULT_DB_PORT, DEFAULT_DB_SERVER, DEFAULT_DB_SID};
use crate::config::keypair::{load_keypair_file, KeyCase, Keypairs};

/// Config file key for the server address.
pub const KEY_DB_SERVER: &str = "db_server";
/// Config file key for the port number.
pub const KEY_DB_PORT: &str = "db_port";
/// Config file key for the database identifier.
pub const KEY_DB_SID: &str = "db_ora_sid";
/// Config file key for the user id.
pub const KEY_DB_USER_ID: &str = "db_user_id";
/// Config file key for the password.
pub const KEY_DB_USER_PW: &str = "db_user_pw";

/// Text shown in place of a password.
const MASK: &str = "********";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Resolved connection parameters.
///
/// Every field is kept as text; the port is only parsed by the connector.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct DbParams {
    pub server: String,
    pub port: String,
    pub sid: String,
    pub user_id: String,
    pub user_pw: String,
}

impl DbParams {
    /// Parameters holding only the built-in defaults.
    pub fn with_defaults() -> Self {
        Self {
            server: DEFAULT_DB_SERVER.to_string(),
            port: DEFAULT_DB_PORT.to_string(),
            sid: DEFAULT_DB_SID.to_string(),
            user_id: String::new(),
            user_pw: String::new(),
        }
    }

    fn fields_mut(&mut self) -> [(&'static str, &mut String); 5] {
        [
            (KEY_DB_SERVER, &mut self.server),
            (KEY_DB_PORT, &mut self.port),
            (KEY_DB_SID, &mut self.sid),
            (KEY_DB_USER_ID, &mut self.user_id),
            (KEY_DB_USER_PW, &mut self.user_pw),
        ]
    }

    /// Overlays non-blank values from a lower-cased key/value map.
    ///
    /// Keys that do not name a parameter are ignored.
    pub fn overlay(&mut self, keypairs: &Keypairs) {
        for (key, field) in self.fields_mut() {
            if let Some(value) = keypairs.get(key).filter(|v| !is_blank(v)) {
                debug!("Setting [{}] from config file", key);
                *field = value.clone();
            }
        }
    }

    /// Copy with the password replaced by a mask, for display.
    pub fn masked(&self) -> Self {
        let mut masked = self.clone();
        if !self.user_pw.is_empty() {
            masked.user_pw = MASK.to_string();
        }
        masked
    }
}

impl Default for DbParams {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for DbParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = self.masked();
        f.debug_struct("DbParams")
            .field("server", &masked.server)
            .field("port", &masked.port)
            .field("sid", &masked.sid)
            .field("user_id", &masked.user_id)
            .field("user_pw", &masked.user_pw)
            .finish()
    }
}

impl fmt::Display for DbParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = self.masked();
        writeln!(f, "{:<12}{}", "server:", masked.server)?;
        writeln!(f, "{:<12}{}", "port:", masked.port)?;
        writeln!(f, "{:<12}{}", "sid:", masked.sid)?;
        writeln!(f, "{:<12}{}", "user_id:", masked.user_id)?;
        write!(f, "{:<12}{}", "user_pw:", masked.user_pw)
    }
}

/// Explicit per-call settings. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbOptions {
    /// Config file to load before applying the other fields.
    /// Defaults to `db.ini` in the working directory.
    pub config: Option<PathBuf>,
    /// Name or IP address of the database server.
    pub server: Option<String>,
    /// Port number on the server.
    pub port: Option<String>,
    /// Database identifier.
    pub sid: Option<String>,
    /// User id used to log in.
    pub user_id: Option<String>,
    /// Password for the user id.
    pub user_pw: Option<String>,
}

impl DbOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = Some(path.into());
        self
    }

    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn port(mut self, port: impl ToString) -> Self {
        self.port = Some(port.to_string());
        self
    }

    pub fn sid(mut self, sid: impl Into<String>) -> Self {
        self.sid = Some(sid.into());
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn user_pw(mut self, user_pw: impl Into<String>) -> Self {
        self.user_pw = Some(user_pw.into());
        self
    }

    /// The config file that [`resolve`](Self::resolve) will read.
    pub fn config_path(&self) -> &Path {
        match &self.config {
            Some(path) if !is_blank(&path.to_string_lossy()) => path.as_path(),
            _ => Path::new(DEFAULT_CONFIG_FILE),
        }
    }

    /// Applies the non-blank override fields on top of `params`.
    pub fn apply_to(&self, params: &mut DbParams) {
        let overrides = [
            &self.server,
            &self.port,
            &self.sid,
            &self.user_id,
            &self.user_pw,
        ];
        for ((key, field), value) in params.fields_mut().into_iter().zip(overrides) {
            if let Some(value) = value.as_deref().filter(|v| !is_blank(v)) {
                debug!("Setting [{}] from explicit override", key);
                *field = value.to_string();
            }
        }
    }

    /// Merges defaults, the config file and these overrides.
    pub fn resolve(&self) -> DbParams {
        let path = self.config_path();
        debug!("Resolving database parameters using {}", path.display());

        let file_values = load_keypair_file(Some(path), KeyCase::Lower);

        let mut params = DbParams::with_defaults();
        params.overlay(&file_values);
        self.apply_to(&mut params);

        debug!("Resolved database parameters: {:?}", params);
        params
    }
}

/// Resolves the parameters for `options`. See [`DbOptions::resolve`].
pub fn resolve_db_params(options: &DbOptions) -> DbParams {
    options.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn missing_config() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.ini");
        (dir, path)
    }

    #[test]
    fn test_no_file_no_overrides_returns_defaults() {
        let (_dir, path) = missing_config();
        let params = DbOptions::new().config(&path).resolve();

        assert_eq!(params, DbParams::with_defaults());
        assert_eq!(params.server, "my-database.com");
        assert_eq!(params.port, "9999");
        assert_eq!(params.sid, "PRDDB");
        assert!(params.user_id.is_empty());
        assert!(params.user_pw.is_empty());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file = write_config("DB_SERVER = 10.0.0.5  # primary\nDB_USER_ID=alice\n");
        let params = DbOptions::new()
            .config(file.path())
            .user_pw("secret")
            .resolve();

        assert_eq!(
            params,
            DbParams {
                server: "10.0.0.5".to_string(),
                port: DEFAULT_DB_PORT.to_string(),
                sid: DEFAULT_DB_SID.to_string(),
                user_id: "alice".to_string(),
                user_pw: "secret".to_string(),
            }
        );
    }

    #[test]
    fn test_overrides_beat_file_and_defaults() {
        let file = write_config("db_server=file-host\ndb_port=1521\n");
        let params = DbOptions::new()
            .config(file.path())
            .server("override-host")
            .sid("TESTDB")
            .resolve();

        assert_eq!(params.server, "override-host");
        assert_eq!(params.port, "1521");
        assert_eq!(params.sid, "TESTDB");
    }

    #[test]
    fn test_blank_values_fall_through() {
        let file = write_config("DB_SERVER =\nDB_PORT = 1521\n");
        let params = DbOptions::new()
            .config(file.path())
            .server("")
            .port("   ")
            .user_id("")
            .resolve();

        assert_eq!(params.server, DEFAULT_DB_SERVER);
        assert_eq!(params.port, "1521");
        assert!(params.user_id.is_empty());
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let mut params = DbParams::with_defaults();
        let mut pairs = Keypairs::new();
        pairs.insert("db_timeout".to_string(), "30".to_string());
        pairs.insert("DB_SERVER".to_string(), "upper-not-matched".to_string());
        params.overlay(&pairs);

        assert_eq!(params, DbParams::with_defaults());
    }

    #[test]
    fn test_port_builder_accepts_numbers() {
        let options = DbOptions::new().port(5432);
        assert_eq!(options.port.as_deref(), Some("5432"));
    }

    #[test]
    fn test_blank_config_uses_default_file_name() {
        assert_eq!(DbOptions::new().config_path(), Path::new(DEFAULT_CONFIG_FILE));
        assert_eq!(
            DbOptions::new().config("  ").config_path(),
            Path::new(DEFAULT_CONFIG_FILE)
        );
        assert_eq!(
            DbOptions::new().config("custom.ini").config_path(),
            Path::new("custom.ini")
        );
    }

    #[test]
    fn test_password_is_masked_in_output() {
        let params = DbParams {
            user_pw: "hunter2".to_string(),
            ..DbParams::with_defaults()
        };

        assert!(!format!("{:?}", params).contains("hunter2"));
        assert!(!format!("{}", params).contains("hunter2"));
        assert_eq!(params.masked().user_pw, MASK);
        assert!(DbParams::with_defaults().masked().user_pw.is_empty());
    }
}
