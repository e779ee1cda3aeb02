//! Session transport: the two remote calls the session store depends on.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with credentials
//! included, so the server's session cookie rides along.
//! Server-side (SSR) and native test builds: stubs that report no session,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified as `TransportError` for logging, then collapsed.
//! `fetch_current_user` only ever reports `NotAuthenticated`; `invalidate_session`
//! reports nothing. The store treats every failure as "signed out".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::UserProfile;
use super::types::{ApiEnvelope, ApiErrorBody};
use crate::config::ApiConfig;

/// The current-user check found no usable session, for whatever reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("not authenticated")]
pub struct NotAuthenticated;

/// Why a transport call failed. Logged, never surfaced past the transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<TransportError> for NotAuthenticated {
    fn from(err: TransportError) -> Self {
        log::debug!("session: current-user check failed: {err}");
        Self
    }
}

/// Remote side of the session.
///
/// Futures are `?Send` because browser fetch futures are bound to the UI
/// thread; implementations themselves must be shareable through context.
#[async_trait(?Send)]
pub trait SessionTransport: Send + Sync {
    /// Read the signed-in user. Safe to call with no session at all.
    async fn fetch_current_user(&self) -> Result<UserProfile, NotAuthenticated>;

    /// Ask the server to drop the session. Best effort; outcome is not reported.
    async fn invalidate_session(&self);
}

/// `SessionTransport` over the JSON session endpoints.
#[derive(Clone, Debug, Default)]
pub struct HttpSessionTransport {
    config: ApiConfig,
}

impl HttpSessionTransport {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[cfg(feature = "hydrate")]
    async fn request_current_user(&self) -> Result<UserProfile, TransportError> {
        let resp = gloo_net::http::Request::get(&self.config.me_url())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
        decode_current_user(resp.ok(), resp.status(), &body)
    }

    #[cfg(feature = "hydrate")]
    async fn request_logout(&self) -> Result<(), TransportError> {
        gloo_net::http::Request::post(&self.config.logout_url())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl SessionTransport for HttpSessionTransport {
    async fn fetch_current_user(&self) -> Result<UserProfile, NotAuthenticated> {
        #[cfg(feature = "hydrate")]
        {
            Ok(self.request_current_user().await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(NotAuthenticated)
        }
    }

    async fn invalidate_session(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = self.request_logout().await {
                log::warn!("session: logout call failed, clearing locally anyway: {e}");
            }
        }
    }
}

/// Map a current-user response to a profile.
///
/// Any non-success status is a failure regardless of body; the optional
/// `{ "error": ... }` message is only carried for logging.
///
/// # Errors
///
/// `Status` for any non-success response, `Decode` for a body that is not a
/// `{ "data": <UserProfile> }` envelope.
pub fn decode_current_user(ok: bool, status: u16, body: &str) -> Result<UserProfile, TransportError> {
    if !ok {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| "no error message".to_owned());
        return Err(TransportError::Status { status, message });
    }
    serde_json::from_str::<ApiEnvelope<UserProfile>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| TransportError::Decode(e.to_string()))
}
