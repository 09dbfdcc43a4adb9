use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpyError, Result};

/// Name of the defaults file looked up in the repository and config directory
pub const CONFIG_FILE_NAME: &str = "bumpy.toml";

/// Defaults for a bump run. Every field can be overridden on the command line.
///
/// ```toml
/// prefix = "api/"
/// push = "origin"
/// module = "api"
/// ```
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Tag prefix
    #[serde(default)]
    pub prefix: Option<String>,

    /// Remote to push the new tag to
    #[serde(default)]
    pub push: Option<String>,

    /// Module file or directory holding `go.mod`; relative to the repository
    #[serde(default)]
    pub module: Option<PathBuf>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpy.toml` in the repository directory
/// 3. `bumpy.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or the custom path is missing
pub fn load_config(config_path: Option<&Path>, directory: &Path) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if directory.join(CONFIG_FILE_NAME).is_file() {
        directory.join(CONFIG_FILE_NAME)
    } else if let Some(user_config) = dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
    {
        user_config
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        BumpyError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| BumpyError::config(format!("Invalid '{}': {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config("prefix = \"api/\"\npush = \"origin\"\nmodule = \"api\"\n").unwrap();
        assert_eq!(config.prefix.as_deref(), Some("api/"));
        assert_eq!(config.push.as_deref(), Some("origin"));
        assert_eq!(config.module, Some(PathBuf::from("api")));
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(parse_config("minor = true\n").is_err());
    }
}
