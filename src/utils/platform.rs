// utils/platform.rs

//! # Platform Utility Module
//!
//! Operating system detection, redirected-input detection and lookup of the
//! invoking user's name.
//!
//! ## Example Usage
//! ```rust
//! use dbtools::utils::platform::{get_platform, input_is_redirected, user_id};
//!
//! println!("Platform: {:?}", get_platform());
//! println!("User: {:?}", user_id());
//! println!("Redirected: {}", input_is_redirected());
//! ```

use std::env;
use std::io::{self, IsTerminal};

use crate::app::IDE_HOSTED_ENV_VAR;

/// Enum representing supported platforms.
#[derive(Debug, PartialEq)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Unknown,
}

/// Determine the current operating system
pub fn get_platform() -> Platform {
    if cfg!(target_os = "windows") {
        Platform::Windows
    } else if cfg!(target_os = "macos") {
        Platform::MacOS
    } else if cfg!(target_os = "linux") {
        Platform::Linux
    } else {
        Platform::Unknown
    }
}

/// True when running inside the PyCharm run console.
pub fn ide_hosted() -> bool {
    env::var(IDE_HOSTED_ENV_VAR).map_or(false, |v| v == "1")
}

/// Decision behind [`input_is_redirected`].
///
/// The IDE console is not a terminal but is still interactive.
pub fn input_is_redirected_with(stdin_is_tty: bool, ide_hosted: bool) -> bool {
    !stdin_is_tty && !ide_hosted
}

/// Is standard input coming from a file or pipe?
pub fn input_is_redirected() -> bool {
    input_is_redirected_with(io::stdin().is_terminal(), ide_hosted())
}

/// Name of the user running this process.
#[cfg(unix)]
pub fn user_id() -> Option<String> {
    use nix::unistd::{getuid, User};

    match User::from_uid(getuid()) {
        Ok(Some(user)) => Some(user.name),
        Ok(None) => None,
        Err(e) => {
            log::debug!("passwd lookup failed: {}", e);
            None
        }
    }
}

/// Name of the user running this process.
#[cfg(windows)]
pub fn user_id() -> Option<String> {
    env::var("USERNAME").ok()
}

/// Name of the user running this process.
#[cfg(not(any(unix, windows)))]
pub fn user_id() -> Option<String> {
    env::var("USER").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_decision() {
        assert!(input_is_redirected_with(false, false));
        assert!(!input_is_redirected_with(true, false));
        assert!(!input_is_redirected_with(false, true));
        assert!(!input_is_redirected_with(true, true));
    }

    #[test]
    fn test_ide_hosted_reads_environment() {
        env::set_var(IDE_HOSTED_ENV_VAR, "1");
        assert!(ide_hosted());

        env::set_var(IDE_HOSTED_ENV_VAR, "0");
        assert!(!ide_hosted());

        env::remove_var(IDE_HOSTED_ENV_VAR);
        assert!(!ide_hosted());
    }

    #[test]
    fn test_platform_is_known_on_ci_targets() {
        let platform = get_platform();
        if cfg!(target_os = "linux") {
            assert_eq!(platform, Platform::Linux);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_user_id_matches_passwd_entry() {
        let expected = nix::unistd::User::from_uid(nix::unistd::getuid())
            .unwrap()
            .map(|u| u.name);
        assert_eq!(user_id(), expected);
    }
}
