//! Configuration file management for Sakhi.
//!
//! Supports reading settings from `~/.config/sakhi/config.toml`. A missing
//! file is not an error; defaults apply.

use crate::error::{Result, SakhiError};
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn default_reply_delay_ms() -> u64 {
    1000
}

/// Root configuration structure for config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SakhiConfig {
    /// Artificial delay before a simulated assistant reply, in milliseconds
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// UI language active at startup
    #[serde(default)]
    pub language: Language,
}

impl Default for SakhiConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            language: Language::default(),
        }
    }
}

impl SakhiConfig {
    /// Reply delay as a `Duration`.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Loads the configuration from `~/.config/sakhi/config.toml`.
///
/// Returns defaults when the file does not exist.
pub fn load_config() -> Result<SakhiConfig> {
    load_config_from(&config_path()?)
}

/// Loads the configuration from an explicit path.
///
/// Returns defaults when the file does not exist.
pub fn load_config_from(path: &Path) -> Result<SakhiConfig> {
    if !path.exists() {
        return Ok(SakhiConfig::default());
    }

    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Returns the path to the configuration file: ~/.config/sakhi/config.toml
fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SakhiError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("sakhi").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, SakhiConfig::default());
        assert_eq!(config.reply_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "language = \"ml\"").unwrap();

        let config = load_config_from(&path).unwrap();

        assert_eq!(config.language, Language::Ml);
        assert_eq!(config.reply_delay_ms, 1000);
    }

    #[test]
    fn test_invalid_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "reply_delay_ms = \"soon\"").unwrap();

        let err = load_config_from(&path).unwrap_err();

        assert!(matches!(err, SakhiError::Serialization { .. }));
    }
}
