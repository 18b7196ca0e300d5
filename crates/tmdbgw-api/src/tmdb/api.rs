//! `TmdbGatewayApi` trait definition.
#![allow(clippy::future_not_send)]

use super::endpoints::MediaType;
use super::error::CallError;
use super::types::{GuestSession, MediaDetails, SearchParams, SearchResults, StatusResponse};

/// Typed TMDB operations built on the gateway call.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbGatewayApi: Send)]
pub trait LocalTmdbGatewayApi {
    /// Searches for TV series or movies.
    ///
    /// # Errors
    ///
    /// Returns a [`CallError`] if the call fails or the body does not match
    /// the search response shape.
    async fn search(
        &self,
        media: MediaType,
        params: &SearchParams,
    ) -> Result<SearchResults, CallError>;

    /// Fetches details of a TV series or movie.
    ///
    /// # Errors
    ///
    /// Returns a [`CallError`] if the call fails or the body does not match
    /// the details shape.
    async fn details(
        &self,
        media: MediaType,
        id: u64,
        language: &str,
    ) -> Result<MediaDetails, CallError>;

    /// Creates a new guest session.
    ///
    /// # Errors
    ///
    /// Returns a [`CallError`] if the call fails.
    async fn create_guest_session(&self) -> Result<GuestSession, CallError>;

    /// Posts a rating for a TV series or movie as a guest.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::InvalidRating`] before any request when `value`
    /// is off the 0.5..=10.0 half-step grid, otherwise any call failure.
    async fn rate(
        &self,
        media: MediaType,
        id: u64,
        value: f64,
        guest_session_id: &str,
    ) -> Result<StatusResponse, CallError>;
}
