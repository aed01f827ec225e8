//! Shared HTTP plumbing for remote service clients
//!
//! Transport failures are tagged with a [`TransportKind`] here, once, so the
//! failure classifier never inspects message text from reqwest.

use crate::config::TimeoutConfig;
use crate::error::{ServiceError, TransportError, TransportKind};
use reqwest::{Client, Response, StatusCode};
use std::error::Error as StdError;

/// Build an HTTP client with the configured timeouts
pub fn build_client(timeouts: &TimeoutConfig) -> Result<Client, ServiceError> {
    Client::builder()
        .user_agent(farm_common::config::get_user_agent())
        .connect_timeout(timeouts.connect())
        .timeout(timeouts.request())
        .build()
        .map_err(|e| ServiceError::Transport(TransportError::new(TransportKind::Other, e.to_string())))
}

/// Convert a reqwest error into a tagged transport error
pub fn transport_error(err: reqwest::Error) -> ServiceError {
    let kind = transport_kind(&err);
    tracing::debug!(kind = ?kind, error = %err, "HTTP transport failure");
    // reqwest's Display already carries the inner causes
    ServiceError::Transport(TransportError::new(kind, err.to_string()))
}

fn transport_kind(err: &reqwest::Error) -> TransportKind {
    if err.is_timeout() {
        return TransportKind::Timeout;
    }

    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            match io.kind() {
                std::io::ErrorKind::TimedOut => return TransportKind::Timeout,
                std::io::ErrorKind::ConnectionRefused => return TransportKind::ConnectionRefused,
                _ => {}
            }
        }
        // hyper's resolver reports lookup failures through its own error type
        let text = cause.to_string().to_lowercase();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return TransportKind::HostUnresolved;
        }
        source = cause.source();
    }

    TransportKind::Other
}

/// Map non-success statuses to service errors
pub async fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(ServiceError::InvalidApiKey);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::Api {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}

/// Decode a JSON body
pub async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    response
        .json()
        .await
        .map_err(|e| ServiceError::Parse(e.to_string()))
}
