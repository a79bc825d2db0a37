//! Generic request execution and error taxonomy.
//!
//! [`execute`] is the single pipeline every resource method delegates to:
//! send the request, classify the HTTP status, then decode the body as
//! JSON. Classification strictly precedes decoding — a success status with
//! a non-JSON body fails in the decode stage, never during classification.
//!
//! The executor performs no recovery: no retries, no fallback values. Every
//! failure is returned to the caller, who owns recovery policy.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// Body shape of a 422 response.
#[derive(Debug, Deserialize)]
struct ValidationBody {
    error: String,
}

/// Errors surfaced by the client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// Client initialization failed
    #[error("client init error: {0}")]
    Init(String),
    /// The server rejected the request as invalid (HTTP 422), with a
    /// server-supplied message intended for the caller
    #[error("validation error: {message}")]
    Validation {
        /// HTTP status code (always 422)
        status: u16,
        /// Server-supplied `error` field
        message: String,
    },
    /// The server returned a non-2xx status other than 422
    #[error("request failed with status {status}: {status_text}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Status reason phrase
        status_text: String,
    },
    /// The request never produced an HTTP response (DNS failure, refused
    /// connection, timeout)
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body could not be decoded as the expected JSON shape
    #[error("decode error: {0}")]
    Decode(String),
    /// The caller cancelled the request before the transport settled
    #[error("request cancelled")]
    Cancelled,
}

impl ClientError {
    /// HTTP status attached to this error, for `Validation` and `Status`.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Init(_) | Self::Transport(_) | Self::Decode(_) | Self::Cancelled => None,
        }
    }
}

/// Execute a prepared request and decode the JSON response.
///
/// Status in [200, 300) decodes the body into `T`. Status 422 decodes the
/// body and fails with [`ClientError::Validation`] carrying the server's
/// `error` field. Any other status fails with [`ClientError::Status`]. If
/// `cancel` fires before the transport settles, the pending send is dropped
/// and [`ClientError::Cancelled`] is returned without consulting the
/// response.
///
/// # Errors
///
/// Returns the [`ClientError`] classification described above; transport
/// failures map to [`ClientError::Transport`] and undecodable bodies to
/// [`ClientError::Decode`].
pub async fn execute<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    cancel: Option<&CancellationToken>,
) -> Result<T, ClientError> {
    let pending = request.send();
    let outcome = match cancel {
        Some(token) => tokio::select! {
            () = token.cancelled() => return Err(ClientError::Cancelled),
            outcome = pending => outcome,
        },
        None => pending.await,
    };
    let response = outcome.map_err(|e| ClientError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()));
    }

    if status == StatusCode::UNPROCESSABLE_ENTITY {
        let body: ValidationBody = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        return Err(ClientError::Validation {
            status: status.as_u16(),
            message: body.error,
        });
    }

    Err(ClientError::Status {
        status: status.as_u16(),
        status_text: status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accessor_exposes_attached_status() {
        let err = ClientError::Validation {
            status: 422,
            message: "bad input".to_string(),
        };
        assert_eq!(err.status(), Some(422));

        let err = ClientError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.status(), Some(500));

        assert_eq!(ClientError::Cancelled.status(), None);
        assert_eq!(ClientError::Transport("refused".to_string()).status(), None);
    }

    #[test]
    fn error_messages_are_stable() {
        let err = ClientError::Validation {
            status: 422,
            message: "Test error".to_string(),
        };
        assert_eq!(err.to_string(), "validation error: Test error");

        assert_eq!(ClientError::Cancelled.to_string(), "request cancelled");
    }
}
