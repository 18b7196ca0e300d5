//! `TmdbGateway` - API key injecting call executor.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::api::LocalTmdbGatewayApi;
use super::credentials::ApiKey;
use super::endpoints::{DEFAULT_BASE_URL, Endpoints, MediaType};
use super::error::CallError;
use super::options::CallOptions;
use super::types::{
    GuestSession, MediaDetails, SearchParams, SearchResults, StatusResponse, TmdbErrorResponse,
    validate_rating,
};

/// Query parameter carrying the API key.
const API_KEY_PARAM: &str = "api_key";

/// TMDB API gateway.
///
/// Shares only the read-only key and the pooled HTTP client, so any number
/// of calls may be in flight through `&self`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbGateway {
    /// HTTP client.
    http_client: Client,
    /// Endpoint URL builders.
    endpoints: Endpoints,
    /// API key injected into every call.
    api_key: ApiKey,
}

/// Builder for `TmdbGateway`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbGatewayBuilder {
    base_url: Option<Url>,
    api_key: Option<ApiKey>,
    user_agent: Option<String>,
}

impl TmdbGatewayBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the gateway.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `user_agent` is not set.
    /// - the base URL is not usable as a base.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbGateway> {
        let api_key = self.api_key.context("api_key is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };
        let endpoints = Endpoints::new(&base_url)?;

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbGateway {
            http_client,
            endpoints,
            api_key,
        })
    }
}

impl TmdbGateway {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbGatewayBuilder {
        TmdbGatewayBuilder::new()
    }

    /// Endpoint URL builders rooted at this gateway's base URL.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Injects the API key into `options` and performs exactly one request.
    ///
    /// # Errors
    ///
    /// - [`CallError::Connect`] when no response is received.
    /// - [`CallError::Rejected`] for a non-success status whose body carries
    ///   a `status_message` (401 and 404 among them).
    /// - [`CallError::Status`] for a non-success status without one.
    /// - [`CallError::Decode`] when a success body is not valid JSON.
    /// - [`CallError::InvalidUrl`] when `options.url` does not parse.
    #[instrument(skip_all)]
    pub async fn call(&self, mut options: CallOptions) -> Result<Value, CallError> {
        let mut url = Url::parse(&options.url).map_err(|_| CallError::InvalidUrl {
            url: options.url.clone(),
        })?;
        strip_query_param(&mut url, API_KEY_PARAM);

        tracing::debug!(method = %options.method, url = %url, "TMDB API request");
        options.insert_query(API_KEY_PARAM, self.api_key.expose());

        let mut request = self
            .http_client
            .request(options.method, url)
            .query(&options.query);
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(error = %err, "TMDB API transport failure");
                return Err(CallError::Connect);
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(error = %err, "failed to read TMDB API response body");
                return Err(CallError::Connect);
            }
        };

        interpret_response(status, &body)
    }

    /// Same as [`Self::call`], delivering the result to `callback`.
    ///
    /// `callback` runs exactly once.
    pub async fn call_with<F>(&self, options: CallOptions, callback: F)
    where
        F: FnOnce(Result<Value, CallError>),
    {
        callback(self.call(options).await);
    }
}

/// Removes every `name` pair already present in the URL query.
fn strip_query_param(url: &mut Url, name: &str) {
    if !url.query_pairs().any(|(key, _)| key == name) {
        return;
    }
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != name)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
}

/// Maps a status and body to the call result.
fn interpret_response(status: StatusCode, body: &str) -> Result<Value, CallError> {
    if !status.is_success() {
        let code = status.as_u16();
        let err = serde_json::from_str::<TmdbErrorResponse>(body).map_or(
            CallError::Status { status: code },
            |error_response| CallError::Rejected {
                status: code,
                message: error_response.status_message,
            },
        );
        tracing::warn!(status = code, error = %err, "TMDB API request rejected");
        return Err(err);
    }

    serde_json::from_str(body).map_err(|err| CallError::Decode {
        detail: err.to_string(),
    })
}

/// Decodes a call result into a typed record.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T, CallError> {
    serde_json::from_value(value).map_err(|err| CallError::Decode {
        detail: err.to_string(),
    })
}

impl LocalTmdbGatewayApi for TmdbGateway {
    #[instrument(skip_all, fields(media = %media))]
    async fn search(
        &self,
        media: MediaType,
        params: &SearchParams,
    ) -> Result<SearchResults, CallError> {
        let options = CallOptions::get(self.endpoints.search_url(media))
            .query("query", params.query.clone())
            .query("language", params.language.clone())
            .query("page", params.page.to_string())
            .query("include_adult", params.include_adult.to_string())
            .query_opt("year", params.year);

        let value = self.call(options).await?;
        match media {
            MediaType::Tv => decode(value).map(SearchResults::Tv),
            MediaType::Movie => decode(value).map(SearchResults::Movie),
        }
    }

    #[instrument(skip_all, fields(media = %media, id = id))]
    async fn details(
        &self,
        media: MediaType,
        id: u64,
        language: &str,
    ) -> Result<MediaDetails, CallError> {
        let url = format!("{}{id}", self.endpoints.detailed_search_url(media));
        let options = CallOptions::get(url).query("language", language);

        let value = self.call(options).await?;
        match media {
            MediaType::Tv => decode(value).map(MediaDetails::Tv),
            MediaType::Movie => decode(value).map(MediaDetails::Movie),
        }
    }

    #[instrument(skip_all)]
    async fn create_guest_session(&self) -> Result<GuestSession, CallError> {
        let options = CallOptions::get(self.endpoints.add_guest_session_url());
        let value = self.call(options).await?;
        decode(value)
    }

    #[instrument(skip_all, fields(media = %media, id = id))]
    async fn rate(
        &self,
        media: MediaType,
        id: u64,
        value: f64,
        guest_session_id: &str,
    ) -> Result<StatusResponse, CallError> {
        let value = validate_rating(value)?;
        let options = CallOptions::post(
            self.endpoints.rating_url(id, media),
            serde_json::json!({ "value": value }),
        )
        .query("guest_session_id", guest_session_id);

        let response = self.call(options).await?;
        decode(response)
    }
}
