//! Error types for provider lookups.

use thiserror::Error;

use crate::types::ProviderKind;

/// Errors that can occur while querying a provider.
///
/// None of these reach the end user: the search service converts every one
/// of them into a failed section of the result bundle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// Provider answered with a non-success status code.
    #[error("{provider} returned HTTP {status}: {detail}")]
    Unavailable {
        /// The provider that failed
        provider: ProviderKind,
        /// HTTP status code of the response
        status: u16,
        /// Leading part of the response body
        detail: String,
    },

    /// Request did not complete within the configured timeout.
    #[error("{provider} request timed out")]
    Timeout {
        /// The provider that failed
        provider: ProviderKind,
    },

    /// Network communication error occurred.
    #[error("{provider} network error: {reason}")]
    Network {
        /// The provider that failed
        provider: ProviderKind,
        /// The reason for the network error
        reason: String,
    },

    /// Response body did not have the expected JSON shape.
    #[error("{provider} sent a malformed response: {reason}")]
    MalformedResponse {
        /// The provider that failed
        provider: ProviderKind,
        /// The reason the body was rejected
        reason: String,
    },

    /// No credential is configured, so no request was made.
    #[error("{provider} has no API key configured")]
    MissingCredential {
        /// The provider that is disabled
        provider: ProviderKind,
    },

    /// HTTP client could not be constructed at startup.
    #[error("Failed to build HTTP client: {reason}")]
    ClientBuild {
        /// The reason the client could not be built
        reason: String,
    },
}

impl ProviderError {
    /// Maps a transport-level reqwest failure onto the provider taxonomy.
    pub fn from_request(provider: ProviderKind, error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout { provider }
        } else if error.is_decode() {
            Self::MalformedResponse {
                provider,
                reason: error.to_string(),
            }
        } else {
            Self::Network {
                provider,
                reason: error.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_provider() {
        let err = ProviderError::Unavailable {
            provider: ProviderKind::Specs,
            status: 502,
            detail: "bad gateway".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "vehicle specifications returned HTTP 502: bad gateway"
        );

        let err = ProviderError::MissingCredential {
            provider: ProviderKind::News,
        };
        assert_eq!(err.to_string(), "news search has no API key configured");
    }
}
