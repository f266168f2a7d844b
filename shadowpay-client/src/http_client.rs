//! Shared HTTP plumbing for the ShadowPay client
//!
//! Every endpoint goes through [`HttpUtils::execute_request`] so that sending,
//! logging and status classification happen in one place. Callers build their
//! own `RequestBuilder` and decide how to parse the body.

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Error body returned by the service for any status >= 400.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends the request and returns the response body of a successful call.
    ///
    /// Status codes >= 400 are turned into the matching [`ClientError`]:
    /// 401/403 become `InvalidCredentials`, 429 becomes `RateLimited`,
    /// anything else is decoded as the service's `{message, error}` body and
    /// falls back to `UnexpectedStatus` when the body has another shape.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<String> {
        log::debug!("[shadowpay] {method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("[shadowpay] Response Status: {status_code}");

        // Read before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[shadowpay] Response Body: {}", truncate_for_log(&body));

        if status_code < 400 {
            return Ok(body);
        }

        let decoded = serde_json::from_str::<ApiErrorBody>(&body).ok();

        let err = match status_code {
            401 | 403 => ClientError::InvalidCredentials {
                status: status_code,
                raw_message: decoded.map(|b| b.message),
            },
            429 => ClientError::RateLimited {
                retry_after,
                raw_message: Some(body),
            },
            _ => match decoded {
                Some(b) => ClientError::Api {
                    status: status_code,
                    message: b.message,
                    error: b.error.filter(|e| !e.is_empty()),
                },
                None => ClientError::UnexpectedStatus {
                    status: status_code,
                    reason: status
                        .canonical_reason()
                        .map_or_else(|| truncate_for_log(&body), str::to_string),
                },
            },
        };

        if err.is_expected() {
            log::warn!("[shadowpay] {method_name} {path} failed: {err}");
        } else {
            log::error!("[shadowpay] {method_name} {path} failed: {err}");
        }
        Err(err)
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[shadowpay] JSON parse failed: {e}");
            log::error!(
                "[shadowpay] Raw response: {}",
                truncate_for_log(response_text)
            );
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo> = HttpUtils::parse_json("<html>gateway</html>");
        assert!(
            matches!(&result, Err(ClientError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    // ---- ApiErrorBody ----

    #[test]
    fn error_body_without_detail() {
        let b: ApiErrorBody = serde_json::from_str(r#"{"message":"bad request"}"#).unwrap();
        assert_eq!(b.message, "bad request");
        assert!(b.error.is_none());
    }

    #[test]
    fn error_body_requires_message() {
        assert!(serde_json::from_str::<ApiErrorBody>(r#"{"error":"x"}"#).is_err());
    }
}
