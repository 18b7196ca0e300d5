//! API key and credentials file loading.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Environment variable consulted by [`Credentials::from_env`].
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// TMDB API key (v3 auth).
///
/// Immutable once created. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            bail!("api_key must not be empty");
        }
        Ok(Self(String::from(trimmed)))
    }

    /// Returns the raw key for use as a query parameter.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// On-disk layout of the credentials file.
#[derive(Deserialize)]
struct CredentialsFile {
    /// API key.
    api_key: String,
}

/// Credentials used to authenticate TMDB API calls.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// API key.
    api_key: ApiKey,
}

impl Credentials {
    /// Creates credentials from an existing key.
    #[must_use]
    pub const fn new(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    /// Loads credentials from a JSON file of the form `{"api_key": "..."}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON,
    /// lacks `api_key`, or the key is empty.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read credentials {}", path.display()))?;
        let file: CredentialsFile = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse credentials {}", path.display()))?;
        let api_key = ApiKey::new(file.api_key)
            .with_context(|| format!("invalid credentials {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded TMDB credentials");
        Ok(Self { api_key })
    }

    /// Reads the key from the `TMDB_API_KEY` environment variable.
    ///
    /// Returns `Ok(None)` when the variable is unset or blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not valid UTF-8.
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_env_value(std::env::var(API_KEY_ENV))
    }

    /// Interprets the result of reading [`API_KEY_ENV`].
    fn from_env_value(value: Result<String, std::env::VarError>) -> Result<Option<Self>> {
        match value {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => {
                let api_key = ApiKey::new(value)
                    .with_context(|| format!("{API_KEY_ENV} environment variable is invalid"))?;
                Ok(Some(Self { api_key }))
            }
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("{API_KEY_ENV} environment variable is invalid"))
            }
        }
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Consumes the credentials, returning the API key.
    #[must_use]
    pub fn into_api_key(self) -> ApiKey {
        self.api_key
    }
}
