//! Call error type.

use std::fmt;

/// Name of the remote service used in user-facing messages.
pub const SERVICE_NAME: &str = "TMDb";

/// Error delivered by a gateway call.
///
/// `Display` yields the human-readable message handed back to callers.
#[derive(Debug, Clone, PartialEq)]
pub enum CallError {
    /// The request never produced a response (DNS, TCP, TLS, body read).
    Connect,
    /// The API rejected the request and explained why.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// `status_message` from the response body.
        message: String,
    },
    /// Non-success status without a readable error body.
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The response body was not the expected JSON.
    Decode {
        /// Decoder error text.
        detail: String,
    },
    /// Rating value outside the accepted range or grid.
    InvalidRating {
        /// Offending value.
        value: f64,
    },
    /// A request URL could not be parsed.
    InvalidUrl {
        /// Offending URL.
        url: String,
    },
}

impl CallError {
    /// HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Status { status } => Some(*status),
            Self::Connect
            | Self::Decode { .. }
            | Self::InvalidRating { .. }
            | Self::InvalidUrl { .. } => None,
        }
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "Unable to connect to {SERVICE_NAME}!"),
            Self::Rejected { message, .. } => f.write_str(message),
            Self::Status { status } => write!(f, "{SERVICE_NAME} API error (HTTP {status})"),
            Self::Decode { detail } => {
                write!(f, "failed to decode {SERVICE_NAME} response: {detail}")
            }
            Self::InvalidRating { value } => write!(
                f,
                "rating must be between 0.5 and 10.0 in steps of 0.5: {value}"
            ),
            Self::InvalidUrl { url } => write!(f, "invalid request URL: {url}"),
        }
    }
}

impl std::error::Error for CallError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_message() {
        // Arrange & Act
        let message = CallError::Connect.to_string();

        // Assert
        assert_eq!(message, "Unable to connect to TMDb!");
    }

    #[test]
    fn test_rejected_displays_service_message() {
        // Arrange
        let err = CallError::Rejected {
            status: 404,
            message: String::from("not found"),
        };

        // Act & Assert
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_status_without_body() {
        // Arrange
        let err = CallError::Status { status: 502 };

        // Act & Assert
        assert_eq!(err.to_string(), "TMDb API error (HTTP 502)");
        assert_eq!(CallError::Connect.status(), None);
    }
}
