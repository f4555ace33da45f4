//! REST API helpers for the auth and stats endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sending ambient
//! cookies so the upstream session is picked up.
//! Server-side / native: every call returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>` and never panic. Whether a failure is
//! shown to the user is decided by the caller, not here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::auth_gateway::AuthTransport;
#[cfg(any(test, feature = "hydrate"))]
use super::types::MeResponse;
use super::types::{Session, TimeRange, Track};
use crate::state::stats::StatsScope;

/// Failure talking to the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// HTTP is only wired up in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The server explicitly rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn me_endpoint(base: &str) -> String {
    format!("{base}/auth/spotify/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/spotify/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn stats_endpoint(base: &str, scope: &StatsScope, range: TimeRange) -> String {
    match scope {
        StatsScope::Personal { subject_id } => {
            format!("{base}/stats/track-stats/{subject_id}?timeRange={range}")
        }
        StatsScope::Creator => format!("{base}/stats/track-stats/creator?timeRange={range}"),
    }
}

/// Interpret a `/auth/spotify/me` body. An empty body means "no session".
#[cfg(any(test, feature = "hydrate"))]
fn parse_me_body(body: &str) -> Result<Option<Session>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let parsed: MeResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(parsed.user)
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_tracks_body(body: &str) -> Result<Vec<Track>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_for_text(request: gloo_net::http::RequestBuilder) -> Result<String, ApiError> {
    let resp = request
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the current session from `GET /auth/spotify/me`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-OK status, or an
/// unparseable body.
pub async fn fetch_current_session(base: &str) -> Result<Option<Session>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send_for_text(gloo_net::http::Request::get(&me_endpoint(base))).await?;
        parse_me_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}

/// End the upstream session via `POST /auth/spotify/logout`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or a non-OK status.
pub async fn logout(base: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_for_text(gloo_net::http::Request::post(&logout_endpoint(base)))
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the ranked track listing for `scope` over `range`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-OK status, or an
/// unparseable body.
pub async fn fetch_track_stats(base: &str, scope: &StatsScope, range: TimeRange) -> Result<Vec<Track>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = stats_endpoint(base, scope, range);
        let body = send_for_text(gloo_net::http::Request::get(&url)).await?;
        parse_tracks_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, scope, range);
        Err(ApiError::Unavailable)
    }
}

/// [`AuthTransport`] backed by the REST helpers above.
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    pub base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// See [`fetch_track_stats`].
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the underlying request.
    pub async fn track_stats(&self, scope: &StatsScope, range: TimeRange) -> Result<Vec<Track>, ApiError> {
        fetch_track_stats(&self.base_url, scope, range).await
    }
}

impl AuthTransport for HttpApi {
    async fn who_am_i(&self) -> Result<Option<Session>, ApiError> {
        fetch_current_session(&self.base_url).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        logout(&self.base_url).await
    }
}
