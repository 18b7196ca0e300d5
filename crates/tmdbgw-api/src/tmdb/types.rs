//! TMDB API response types and request parameters.

use serde::Deserialize;

use super::error::CallError;

// --- Search ---

/// Paged response from `search/tv` and `search/movie`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResponse<T> {
    /// Current page number.
    pub page: u32,
    /// Search results.
    pub results: Vec<T>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

/// A single TV series search result.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvSearchResult {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// First air date (YYYY-MM-DD or null).
    pub first_air_date: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Poster image path.
    pub poster_path: Option<String>,
}

/// A single movie search result.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieSearchResult {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Poster image path.
    pub poster_path: Option<String>,
}

/// Search results for either media type.
#[derive(Debug, Clone)]
pub enum SearchResults {
    /// Results of `search/tv`.
    Tv(TmdbSearchResponse<TmdbTvSearchResult>),
    /// Results of `search/movie`.
    Movie(TmdbSearchResponse<TmdbMovieSearchResult>),
}

impl SearchResults {
    /// Total number of results across all pages.
    #[must_use]
    pub const fn total_results(&self) -> u32 {
        match self {
            Self::Tv(r) => r.total_results,
            Self::Movie(r) => r.total_results,
        }
    }
}

// --- Details ---

/// Response from `tv/{series_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// First air date.
    pub first_air_date: Option<String>,
    /// Total number of episodes.
    #[serde(default)]
    pub number_of_episodes: u32,
    /// Total number of seasons.
    #[serde(default)]
    pub number_of_seasons: u32,
    /// Status (e.g., "Returning Series", "Ended").
    pub status: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

/// Response from `movie/{movie_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Release date.
    pub release_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Status (e.g., "Released").
    pub status: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

/// Genre entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Details for either media type.
#[derive(Debug, Clone)]
pub enum MediaDetails {
    /// TV series details.
    Tv(TmdbTvDetails),
    /// Movie details.
    Movie(TmdbMovieDetails),
}

// --- Guest session / rating ---

/// Response from `authentication/guest_session/new`.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestSession {
    /// Whether the session was created.
    pub success: bool,
    /// Session token passed to rating calls.
    pub guest_session_id: String,
    /// Expiry timestamp as reported by the API.
    pub expires_at: String,
}

/// Generic status body returned by write endpoints such as rating.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    /// Success flag.
    #[serde(default)]
    pub success: bool,
    /// TMDB status code.
    pub status_code: u32,
    /// Status message.
    pub status_message: String,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    #[serde(default)]
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}

// --- Parameters ---

/// Parameters for `search/tv` and `search/movie`.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: "en-US").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Filter by year.
    pub year: Option<u32>,
    /// Include adult content.
    pub include_adult: bool,
}

impl SearchParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: String::from("en-US"),
            page: 1,
            year: None,
            include_adult: false,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }
}

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.5;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// Checks that a rating lies within 0.5..=10.0 on a 0.5 grid.
///
/// # Errors
///
/// Returns [`CallError::InvalidRating`] otherwise (including NaN).
#[allow(clippy::arithmetic_side_effects)]
pub fn validate_rating(value: f64) -> Result<f64, CallError> {
    let doubled = value * 2.0;
    if (MIN_RATING..=MAX_RATING).contains(&value) && (doubled - doubled.round()).abs() < f64::EPSILON
    {
        Ok(value)
    } else {
        Err(CallError::InvalidRating { value })
    }
}
