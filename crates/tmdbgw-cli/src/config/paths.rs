//! Config directory and credentials path resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::AppConfig;

/// Credentials file name looked up in the config directory.
const KEY_FILE_NAME: &str = "key.json";

/// Resolves the config directory.
///
/// - If `dir` is `Some`, returns it unchanged.
/// - Otherwise returns `~/.config/tmdbgw`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined (when `dir` is `None`).
pub fn resolve_config_dir(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.clone());
    }

    let home = std::env::var("HOME").context("HOME environment variable is not set")?;
    Ok(PathBuf::from(home).join(".config").join("tmdbgw"))
}

/// Resolves the config file path (`{config dir}/config.toml`).
///
/// # Errors
///
/// Returns an error if the config directory cannot be resolved.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    Ok(resolve_config_dir(dir)?.join("config.toml"))
}

/// Resolves the credentials file path.
///
/// Precedence: `key_file` argument, then `tmdb.key_file` from config,
/// then `{config dir}/key.json`.
///
/// # Errors
///
/// Returns an error if the fallback config directory cannot be resolved.
pub fn resolve_key_path(
    key_file: Option<&PathBuf>,
    config: &AppConfig,
    dir: Option<&PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = key_file {
        return Ok(path.clone());
    }
    if let Some(path) = &config.tmdb.key_file {
        return Ok(path.clone());
    }
    Ok(resolve_config_dir(dir)?.join(KEY_FILE_NAME))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_resolve_config_path_with_dir() {
        // Arrange
        let dir = PathBuf::from("/tmp/myproject");

        // Act
        let path = resolve_config_path(Some(&dir)).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/myproject/config.toml"));
    }

    #[test]
    fn test_resolve_config_path_default() {
        // Arrange & Act
        let path = resolve_config_path(None).unwrap();

        // Assert
        assert!(path.ends_with(".config/tmdbgw/config.toml"));
    }

    #[test]
    fn test_resolve_key_path_prefers_argument() {
        // Arrange
        let arg = PathBuf::from("/run/secrets/key.json");
        let mut config = AppConfig::default();
        config.tmdb.key_file = Some(PathBuf::from("/etc/tmdbgw/key.json"));

        // Act
        let path = resolve_key_path(Some(&arg), &config, None).unwrap();

        // Assert
        assert_eq!(path, arg);
    }

    #[test]
    fn test_resolve_key_path_uses_config() {
        // Arrange
        let mut config = AppConfig::default();
        config.tmdb.key_file = Some(PathBuf::from("/etc/tmdbgw/key.json"));

        // Act
        let path = resolve_key_path(None, &config, None).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/etc/tmdbgw/key.json"));
    }

    #[test]
    fn test_resolve_key_path_falls_back_to_config_dir() {
        // Arrange
        let dir = PathBuf::from("/tmp/myproject");

        // Act
        let path = resolve_key_path(None, &AppConfig::default(), Some(&dir)).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/myproject/key.json"));
    }
}
