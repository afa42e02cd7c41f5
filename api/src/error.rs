use crate::endpoint::Endpoint;
use crate::transport::TransportError;
use crate::validate::ValidationError;
use std::fmt;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// The API key was empty or whitespace.
    MissingKey,
    /// The builder was finished without a transport.
    MissingTransport,
    /// Parameters broke a rule; no request was made.
    Validation { endpoint: Endpoint, source: ValidationError },
    /// The transport could not produce a response.
    Transport { endpoint: Endpoint, url: String, source: TransportError },
    /// The server answered with a non-2xx status.
    Remote { endpoint: Endpoint, status: u16, body: String },
    /// Reading a successful response body failed.
    Io { endpoint: Endpoint, source: std::io::Error },
    /// The body was not the JSON shape the endpoint returns.
    Decode { endpoint: Endpoint, source: serde_json::Error },
}

impl ApiError {
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            ApiError::MissingKey | ApiError::MissingTransport => None,
            ApiError::Validation { endpoint, .. }
            | ApiError::Transport { endpoint, .. }
            | ApiError::Remote { endpoint, .. }
            | ApiError::Io { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => Some(*endpoint),
        }
    }

    /// HTTP status for `Remote` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingKey => f.write_str("API key must not be empty"),
            ApiError::MissingTransport => f.write_str("an HTTP transport is required"),
            ApiError::Validation { endpoint, source } => {
                write!(f, "invalid {endpoint} parameters: {source}")
            }
            ApiError::Transport { endpoint, url, source } => {
                write!(f, "{endpoint} request to {url} failed: {source}")
            }
            ApiError::Remote { status, body, .. } => {
                write!(f, "API request failed with status {status}: {body}")
            }
            ApiError::Io { endpoint, source } => {
                write!(f, "error reading {endpoint} response: {source}")
            }
            ApiError::Decode { endpoint, source } => {
                write!(f, "error decoding {endpoint} response: {source}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::MissingKey | ApiError::MissingTransport | ApiError::Remote { .. } => None,
            ApiError::Validation { source, .. } => Some(source),
            ApiError::Transport { source, .. } => Some(&**source),
            ApiError::Io { source, .. } => Some(source),
            ApiError::Decode { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_carries_status_and_body() {
        let err = ApiError::Remote {
            endpoint: Endpoint::Teams,
            status: 429,
            body: "Too many requests".into(),
        };
        assert_eq!(err.to_string(), "API request failed with status 429: Too many requests");
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.endpoint(), Some(Endpoint::Teams));
    }

    #[test]
    fn validation_error_names_endpoint_and_field() {
        let err = ApiError::Validation {
            endpoint: Endpoint::Standings,
            source: ValidationError::Missing { field: "season" },
        };
        assert_eq!(err.to_string(), "invalid standings parameters: 'season' is required");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn construction_errors_have_no_endpoint() {
        assert_eq!(ApiError::MissingKey.endpoint(), None);
        assert_eq!(ApiError::MissingTransport.status(), None);
    }
}
