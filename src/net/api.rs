//! REST client for the lab service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable`, since the
//! lab list is only fetched from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Calls return a typed `ApiError` instead of panicking; the view turns every
//! failure into UI state and never lets one escape.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CreateLabInput, Lab};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
#[cfg(feature = "hydrate")]
use super::types::LabList;
use crate::config::ApiConfig;

/// Failure modes of a lab service call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("lab service responded {status}")]
    Status { status: u16, message: Option<String> },
    #[error("lab not found")]
    NotFound,
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message supplied by the service itself, suitable for showing to users.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Map a non-2xx response to an error, keeping the server's message if any.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: Option<ApiErrorBody>) -> ApiError {
    if status == 404 {
        return ApiError::NotFound;
    }
    ApiError::Status { status, message: body.and_then(ApiErrorBody::into_message) }
}

/// Operations the selection view needs from the lab service.
///
/// The browser build uses [`HttpLabService`]; anything implementing this can
/// stand in for it.
#[allow(async_fn_in_trait)]
pub trait LabService {
    /// Fetch every active lab, in server order.
    async fn list_labs(&self) -> Result<Vec<Lab>, ApiError>;

    /// Create a lab and return the stored record.
    async fn create_lab(&self, input: &CreateLabInput) -> Result<Lab, ApiError>;

    /// Fetch a single lab by nickname.
    async fn fetch_lab(&self, nickname: &str) -> Result<Lab, ApiError>;
}

/// `LabService` over HTTP + JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpLabService {
    config: ApiConfig,
}

impl HttpLabService {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
async fn read_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.json::<ApiErrorBody>().await.ok();
    status_error(status, body)
}

impl LabService for HttpLabService {
    async fn list_labs(&self) -> Result<Vec<Lab>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.labs_endpoint())
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            let body: LabList = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.labs)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create_lab(&self, input: &CreateLabInput) -> Result<Lab, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.labs_endpoint())
                .json(input)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            resp.json::<Lab>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_lab(&self, nickname: &str) -> Result<Lab, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.lab_endpoint(nickname))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(read_error(resp).await);
            }
            resp.json::<Lab>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = nickname;
            Err(ApiError::Unavailable)
        }
    }
}
