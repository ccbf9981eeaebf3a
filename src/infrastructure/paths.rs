//! Filesystem locations and path expansion.
//!
//! Configuration lives in `$XDG_CONFIG_HOME/keyb` when the variable is set and
//! in the platform config directory otherwise. The log file lives in the
//! platform data directory.

use std::path::{Path, PathBuf};

/// Directory name used under the config and data directories.
pub const APP_DIR: &str = "keyb";

/// Default configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Default keybindings file name.
pub const KEYB_FILE: &str = "keyb.toml";

/// Returns the keyb configuration directory.
///
/// # Examples
///
/// ```no_run
/// use keyb::infrastructure::config_dir;
///
/// let dir = config_dir().expect("no config directory");
/// assert!(dir.ends_with("keyb"));
/// ```
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join(APP_DIR))
}

/// Returns the keyb data directory, home of the log file.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

/// Default path of the configuration file.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Default path of the keybindings file.
#[must_use]
pub fn default_keyb_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(KEYB_FILE))
}

/// Expands a leading `~` and `$VAR` / `${VAR}` references.
///
/// Unset variables expand to the empty string. A `~` that is not followed by
/// `/` or the end of the path is left alone.
///
/// # Examples
///
/// ```
/// use keyb::infrastructure::expand_path;
///
/// std::env::set_var("KEYB_DOC_DIR", "/opt/keyb");
/// assert_eq!(expand_path("$KEYB_DOC_DIR/keyb.toml").to_str(), Some("/opt/keyb/keyb.toml"));
/// assert_eq!(expand_path("/absolute/path").to_str(), Some("/absolute/path"));
/// ```
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    let expanded = expand_env(path);

    if expanded == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = expanded.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(expanded)
}

fn expand_env(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        let braced = chars.peek() == Some(&'{');
        if braced {
            chars.next();
        }

        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_alphanumeric() || next == '_' {
                name.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if braced && chars.peek() == Some(&'}') {
            chars.next();
        }

        if name.is_empty() {
            out.push('$');
            if braced {
                out.push('{');
            }
        } else {
            out.push_str(&std::env::var(&name).unwrap_or_default());
        }
    }

    out
}

/// Returns `path` with a `.tmp` extension appended, used for atomic writes.
#[must_use]
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
