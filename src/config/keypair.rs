// config/keypair.rs

//! # Key/Value File Parsing
//!
//! Reads line-oriented `KEY = VALUE` files into a [`Keypairs`] map.
//!
//! ## Format
//! ```text
//! DB_SERVER = 10.0.0.5   # trailing comment
//! # full-line comment
//!
//! DB_USER_ID=alice
//! ```
//!
//! - Everything from the first `"# "` to the end of the line is discarded.
//! - Blank lines and a bare `#` are skipped.
//! - The key/value separator is the first `=`; both sides are trimmed.
//! - A line without `=` stores the whole line as a key with an empty value.
//! - Later lines win over earlier ones with the same key.
//!
//! Two entry points are provided. [`try_load_keypair_file`] reports read
//! failures; [`load_keypair_file`] is best effort and returns whatever was
//! read before the failure, logging the problem instead of returning it.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Parsed key/value pairs.
pub type Keypairs = HashMap<String, String>;

/// Marker that starts a comment.
const COMMENT_MARKER: &str = "# ";

/// How keys are stored in the resulting map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    /// Keep keys exactly as written.
    #[default]
    Preserve,
    /// Lower-case every key.
    Lower,
}

/// Errors raised while reading a key/value file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parses one line, returning `None` for comments and blank lines.
fn parse_line(line: &str, key_case: KeyCase) -> Option<(String, String)> {
    let content = match line.find(COMMENT_MARKER) {
        Some(idx) => &line[..idx],
        None => line,
    }
    .trim();

    if content.is_empty() || content == "#" {
        return None;
    }

    let (key, value) = content.split_once('=').unwrap_or((content, ""));
    let key = match key_case {
        KeyCase::Preserve => key.trim().to_string(),
        KeyCase::Lower => key.trim().to_lowercase(),
    };

    Some((key, value.trim().to_string()))
}

/// Parses key/value pairs from in-memory text.
pub fn parse_keypairs(text: &str, key_case: KeyCase) -> Keypairs {
    text.lines()
        .filter_map(|line| parse_line(line, key_case))
        .collect()
}

/// Reads `path` line by line into `keypairs`, stopping at the first error.
fn read_into(path: &Path, key_case: KeyCase, keypairs: &mut Keypairs) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_err)?);
    for line in reader.lines() {
        let line = line.map_err(io_err)?;
        if let Some((key, value)) = parse_line(&line, key_case) {
            keypairs.insert(key, value);
        }
    }

    Ok(())
}

/// Returns the path unless it is missing or blank.
fn usable_path(config_file: Option<&Path>) -> Option<&Path> {
    config_file.filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty())
}

/// Loads a key/value file, returning an error if it cannot be read.
///
/// A missing or blank path is not an error and yields an empty map.
pub fn try_load_keypair_file(
    config_file: Option<&Path>,
    key_case: KeyCase,
) -> Result<Keypairs, ConfigError> {
    let mut keypairs = Keypairs::new();
    if let Some(path) = usable_path(config_file) {
        read_into(path, key_case, &mut keypairs)?;
    }
    Ok(keypairs)
}

/// Loads a key/value file on a best-effort basis.
///
/// Read failures are logged and the pairs read so far are returned, so a
/// missing key must be treated as "use the default" rather than as a parse
/// error.
pub fn load_keypair_file(config_file: Option<&Path>, key_case: KeyCase) -> Keypairs {
    let mut keypairs = Keypairs::new();
    let Some(path) = usable_path(config_file) else {
        return keypairs;
    };

    match read_into(path, key_case, &mut keypairs) {
        Ok(()) => debug!(
            "Loaded {} key/value pairs from {}",
            keypairs.len(),
            path.display()
        ),
        Err(ConfigError::Io { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            debug!("No config file found at: {}", path.display());
        }
        Err(e) => warn!("{} (continuing with {} pairs)", e, keypairs.len()),
    }

    keypairs
}
