//! Endpoint URL builders for TMDB API v3.

use std::fmt;

use anyhow::{Result, bail};
use url::Url;

/// Default base URL for TMDB API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Media item kind.
///
/// Selects the `tv` or `movie` path segment of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Television series.
    Tv,
    /// Movie.
    Movie,
}

impl MediaType {
    /// Maps an "is TV" flag to a media type.
    #[must_use]
    pub const fn from_is_tv(is_tv: bool) -> Self {
        if is_tv { Self::Tv } else { Self::Movie }
    }

    /// Returns `true` for [`MediaType::Tv`].
    #[must_use]
    pub const fn is_tv(self) -> bool {
        matches!(self, Self::Tv)
    }

    /// Path segment used by the API (`tv` or `movie`).
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Tv => "tv",
            Self::Movie => "movie",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// TMDB endpoint URL builders.
///
/// Every builder is a pure function of its arguments and the base URL,
/// which always ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL, with trailing slash.
    base: String,
}

impl Endpoints {
    /// Creates builders rooted at the given base URL.
    ///
    /// A missing trailing slash is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be a base or carries a query
    /// string or fragment.
    pub fn new(base_url: &Url) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            bail!("base URL cannot be used as a base: {base_url}");
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            bail!("base URL must not have a query or fragment: {base_url}");
        }

        let mut base = String::from(base_url.as_str());
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self { base })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// URL for searching TV series or movies (`search/tv`, `search/movie`).
    #[must_use]
    pub fn search_url(&self, media: MediaType) -> String {
        format!("{}search/{media}", self.base)
    }

    /// Root URL for detail lookups (`tv/`, `movie/`).
    ///
    /// The caller appends the item ID.
    #[must_use]
    pub fn detailed_search_url(&self, media: MediaType) -> String {
        format!("{}{media}/", self.base)
    }

    /// URL for posting a rating to a TV series or movie.
    #[must_use]
    pub fn rating_url(&self, id: u64, media: MediaType) -> String {
        format!("{}{media}/{id}/rating", self.base)
    }

    /// URL for creating a new guest session.
    #[must_use]
    pub fn add_guest_session_url(&self) -> String {
        format!("{}authentication/guest_session/new", self.base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base: String::from(DEFAULT_BASE_URL),
        }
    }
}
