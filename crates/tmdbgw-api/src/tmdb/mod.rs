//! TMDB API gateway module.
//!
//! Builds TMDB API v3 endpoint URLs and executes calls with the API key
//! injected as a query parameter.

mod api;
mod client;
mod credentials;
mod endpoints;
mod error;
mod options;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbGatewayApi, TmdbGatewayApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbGateway, TmdbGatewayBuilder};
pub use credentials::{API_KEY_ENV, ApiKey, Credentials};
pub use endpoints::{DEFAULT_BASE_URL, Endpoints, MediaType};
pub use error::{CallError, SERVICE_NAME};
pub use options::CallOptions;
#[allow(clippy::module_name_repetitions)]
pub use types::{
    GuestSession, MAX_RATING, MIN_RATING, MediaDetails, SearchParams, SearchResults,
    StatusResponse, TmdbErrorResponse, TmdbGenre, TmdbMovieDetails, TmdbMovieSearchResult,
    TmdbSearchResponse, TmdbTvDetails, TmdbTvSearchResult, validate_rating,
};
