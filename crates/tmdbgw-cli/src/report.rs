//! Log-based rendering of API results.

use tmdbgw_api::tmdb::{
    Endpoints, GuestSession, MediaDetails, MediaType, SearchResults, StatusResponse,
};

/// Logs a page of search results as a table.
pub fn log_search_results(results: &SearchResults) {
    tracing::info!("Total results: {}", results.total_results());
    match results {
        SearchResults::Tv(page) => {
            tracing::info!("ID\tName\t\t\tOrigLang\tCountry\t\tFirstAirDate");
            for result in &page.results {
                tracing::info!(
                    "{}\t{}\t{}\t\t{}\t\t{}",
                    result.id,
                    result.name,
                    result.original_language,
                    result.origin_country.join(","),
                    result.first_air_date.as_deref().unwrap_or("-"),
                );
            }
        }
        SearchResults::Movie(page) => {
            tracing::info!("ID\tTitle\t\t\tOrigLang\tReleaseDate");
            for result in &page.results {
                tracing::info!(
                    "{}\t{}\t{}\t\t{}",
                    result.id,
                    result.title,
                    result.original_language,
                    result.release_date.as_deref().unwrap_or("-"),
                );
            }
        }
    }
}

/// Logs TV series or movie details.
pub fn log_details(details: &MediaDetails) {
    match details {
        MediaDetails::Tv(tv) => {
            tracing::info!("ID: {}", tv.id);
            tracing::info!("Name: {}", tv.name);
            tracing::info!("Original Name: {}", tv.original_name);
            tracing::info!(
                "First Air Date: {}",
                tv.first_air_date.as_deref().unwrap_or("-")
            );
            tracing::info!("Status: {}", tv.status.as_deref().unwrap_or("-"));
            tracing::info!("Seasons: {}", tv.number_of_seasons);
            tracing::info!("Episodes: {}", tv.number_of_episodes);
        }
        MediaDetails::Movie(movie) => {
            tracing::info!("ID: {}", movie.id);
            tracing::info!("Title: {}", movie.title);
            tracing::info!("Original Title: {}", movie.original_title);
            tracing::info!(
                "Release Date: {}",
                movie.release_date.as_deref().unwrap_or("-")
            );
            tracing::info!("Status: {}", movie.status.as_deref().unwrap_or("-"));
            tracing::info!(
                "Runtime: {}min",
                movie
                    .runtime
                    .map_or_else(|| String::from("-"), |r| r.to_string())
            );
        }
    }
}

/// Logs a newly created guest session.
pub fn log_guest_session(session: &GuestSession) {
    tracing::info!("Guest session: {}", session.guest_session_id);
    tracing::info!("Expires at: {}", session.expires_at);
}

/// Logs the outcome of a rating submission.
pub fn log_rating(media: MediaType, id: u64, value: f64, status: &StatusResponse) {
    tracing::info!(
        "Rated {media} {id} with {value}: {} (code {})",
        status.status_message,
        status.status_code,
    );
}

/// Logs the endpoint URLs for a media type.
pub fn log_urls(endpoints: &Endpoints, media: MediaType, id: u64) {
    tracing::info!("search: {}", endpoints.search_url(media));
    tracing::info!("details: {}", endpoints.detailed_search_url(media));
    tracing::info!("rating: {}", endpoints.rating_url(id, media));
    tracing::info!("guest session: {}", endpoints.add_guest_session_url());
}
