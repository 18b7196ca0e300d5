//! Per-call request options.

use std::collections::BTreeMap;

use reqwest::Method;
use serde_json::Value;

/// Options describing a single API call.
///
/// The gateway takes these by value and inserts the `api_key` query
/// parameter before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOptions {
    /// Target URL, usually produced by [`super::Endpoints`].
    pub url: String,
    /// Query parameters.
    pub query: BTreeMap<String, String>,
    /// HTTP method.
    pub method: Method,
    /// JSON request body.
    pub body: Option<Value>,
}

impl CallOptions {
    /// Creates options with the given method and URL.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: BTreeMap::new(),
            method,
            body: None,
        }
    }

    /// Creates `GET` options.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Creates `POST` options with a JSON body.
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            body: Some(body),
            ..Self::new(Method::POST, url)
        }
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Adds a query parameter when `value` is `Some`.
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v.to_string()),
            None => self,
        }
    }

    /// Inserts or replaces a query parameter, returning the previous value.
    pub fn insert_query(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.query.insert(key.into(), value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_has_no_body() {
        // Arrange & Act
        let options = CallOptions::get("https://example.com/3/search/tv").query("query", "dune");

        // Assert
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());
        assert_eq!(options.query.get("query").map(String::as_str), Some("dune"));
    }

    #[test]
    fn test_post_carries_body() {
        // Arrange & Act
        let options = CallOptions::post(
            "https://example.com/3/movie/1/rating",
            serde_json::json!({"value": 8.5}),
        );

        // Assert
        assert_eq!(options.method, Method::POST);
        assert_eq!(options.body, Some(serde_json::json!({"value": 8.5})));
    }

    #[test]
    fn test_query_opt_skips_none() {
        // Arrange & Act
        let options = CallOptions::get("u")
            .query_opt("year", Some(1999))
            .query_opt::<u32>("page", None);

        // Assert
        assert_eq!(options.query.get("year").map(String::as_str), Some("1999"));
        assert!(!options.query.contains_key("page"));
    }

    #[test]
    fn test_insert_query_replaces() {
        // Arrange
        let mut options = CallOptions::get("u").query("api_key", "old");

        // Act
        let previous = options.insert_query("api_key", "new");

        // Assert
        assert_eq!(previous.as_deref(), Some("old"));
        assert_eq!(options.query.get("api_key").map(String::as_str), Some("new"));
    }
}
