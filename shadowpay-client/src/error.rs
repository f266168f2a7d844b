use serde::{Deserialize, Serialize};

/// Unified error type for every ShadowPay API operation.
///
/// All variants are serializable for structured error reporting. The
/// `Display` output is what the console shows to the operator, so it stays a
/// single human-readable line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The request did not complete within the configured timeout.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API key was rejected (HTTP 401/403).
    InvalidCredentials {
        /// HTTP status code.
        status: u16,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API rejected the call (HTTP 429).
    RateLimited {
        /// Seconds from the `Retry-After` header, if present.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// A structured error returned by the API (`{"message": .., "error": ..}`).
    Api {
        /// HTTP status code.
        status: u16,
        /// Top-level message.
        message: String,
        /// Optional detail message.
        error: Option<String>,
    },

    /// An error status whose body could not be decoded as an API error.
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase or raw body excerpt.
        reason: String,
    },

    /// The response body could not be decoded.
    ParseError {
        /// Error details.
        detail: String,
    },

    /// The request body could not be encoded.
    SerializationError {
        /// Error details.
        detail: String,
    },

    /// The client itself is misconfigured (bad base URL, TLS backend failure, etc.).
    InvalidConfig {
        /// Error details.
        detail: String,
    },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "shadowpay: network error: {detail}"),
            Self::Timeout { detail } => write!(f, "shadowpay: request timeout: {detail}"),
            Self::InvalidCredentials {
                status,
                raw_message,
            } => {
                write!(f, "shadowpay: invalid API key (status {status})")?;
                write_detail(f, raw_message.as_deref())
            }
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "shadowpay: rate limited (retry after {secs}s)")
                } else {
                    write!(f, "shadowpay: rate limited")
                }
            }
            Self::Api {
                status,
                message,
                error,
            } => {
                write!(f, "shadowpay: {message} (status {status})")?;
                write_detail(f, error.as_deref())
            }
            Self::UnexpectedStatus { status, reason } => {
                write!(f, "api error (status {status}): {reason}")
            }
            Self::ParseError { detail } => write!(f, "shadowpay: parse error: {detail}"),
            Self::SerializationError { detail } => {
                write!(f, "shadowpay: serialization error: {detail}")
            }
            Self::InvalidConfig { detail } => {
                write!(f, "shadowpay: invalid configuration: {detail}")
            }
        }
    }
}

fn write_detail(f: &mut std::fmt::Formatter<'_>, detail: Option<&str>) -> std::fmt::Result {
    match detail {
        Some(d) if !d.is_empty() => write!(f, " - {d}"),
        _ => Ok(()),
    }
}

impl std::error::Error for ClientError {}

impl ClientError {
    /// Whether the failure is an ordinary business outcome (bad input, missing
    /// record, rejected key) rather than a transport or server fault.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidCredentials { .. } => true,
            Self::Api { status, .. } | Self::UnexpectedStatus { status, .. } => {
                (400..500).contains(status) && *status != 429
            }
            _ => false,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
