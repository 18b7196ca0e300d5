//! Application configuration module.
//!
//! Manages the TOML config file and resolves where the TMDB
//! credentials file lives.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::AppConfig;
pub use paths::{resolve_config_dir, resolve_config_path, resolve_key_path};
