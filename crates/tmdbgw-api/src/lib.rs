//! API gateway library for tmdbgw.
//!
//! Builds TMDB API v3 endpoint URLs and issues calls with the API key
//! injected, normalizing every outcome into a single result contract.

/// TMDB API gateway.
pub mod tmdb;
