//! Auth gateway: resolves, begins and ends the user session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway is the single writer of the session store. It talks to the
//! upstream auth endpoints through [`AuthTransport`] and reports what
//! happened with explicit outcome types; pages decide how much of that to
//! show.
//!
//! Session lifecycle:
//! `Unknown -> {Authenticated, Unauthenticated}` on resolution,
//! `Authenticated -> Unauthenticated` on logout or an empty re-resolution.

#[cfg(test)]
#[path = "auth_gateway_test.rs"]
mod auth_gateway_test;

use super::api::{ApiError, HttpApi};
use super::types::Session;
use crate::config::OAuthConfig;
use crate::state::auth::{SessionPhase, SessionSink, SessionStore};
use crate::util::navigation::{LOGIN_PATH, Navigation};
use crate::util::oauth;

/// Upstream identity operations.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// `Ok(None)` means the server answered but reported no session.
    async fn who_am_i(&self) -> Result<Option<Session>, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Result of one identity resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    Success(Session),
    /// The server answered and there is no valid session.
    AuthFailure,
    /// The server could not be reached or answered unexpectedly.
    NetworkError(ApiError),
}

impl AuthOutcome {
    fn from_reply(reply: Result<Option<Session>, ApiError>) -> Self {
        match reply {
            Ok(Some(session)) => Self::Success(session),
            Ok(None) => Self::AuthFailure,
            Err(e) if e.is_unauthorized() => Self::AuthFailure,
            Err(e) => Self::NetworkError(e),
        }
    }

    /// Store phase for this outcome. Network errors are not distinguished
    /// from "no session" for gating purposes.
    pub fn phase(&self) -> SessionPhase {
        match self {
            Self::Success(session) => SessionPhase::Authenticated(session.clone()),
            Self::AuthFailure | Self::NetworkError(_) => SessionPhase::Unauthenticated,
        }
    }
}

/// What happened on logout. The store is cleared and `navigation` is
/// `/login` regardless of `remote`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionEnd {
    pub remote: Result<(), ApiError>,
    pub navigation: Navigation,
}

#[derive(Clone, Debug)]
pub struct AuthGateway<T, S> {
    transport: T,
    sink: S,
    oauth: OAuthConfig,
}

/// Gateway wired to the real HTTP API and the reactive store.
pub type BrowserGateway = AuthGateway<HttpApi, SessionStore>;

impl<T: AuthTransport, S: SessionSink> AuthGateway<T, S> {
    pub fn new(transport: T, sink: S, oauth: OAuthConfig) -> Self {
        Self { transport, sink, oauth }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Query the identity endpoint once and publish the result.
    pub async fn resolve_session(&self) -> AuthOutcome {
        let outcome = AuthOutcome::from_reply(self.transport.who_am_i().await);
        let error = match &outcome {
            AuthOutcome::Success(session) => {
                leptos::logging::log!("session resolved: subject={}", session.subject_id);
                None
            }
            AuthOutcome::AuthFailure => None,
            AuthOutcome::NetworkError(e) => {
                leptos::logging::warn!("session resolution failed: {e}");
                Some(e.to_string())
            }
        };
        self.sink.publish(outcome.phase(), error);
        outcome
    }

    /// Navigation that starts the external authorization flow.
    ///
    /// # Errors
    ///
    /// Returns the encoder error if the authorize query cannot be built.
    pub fn begin_login(&self) -> Result<Navigation, serde_urlencoded::ser::Error> {
        oauth::authorize_url(&self.oauth).map(Navigation::External)
    }

    /// Call the logout endpoint, then clear the store whatever the outcome.
    pub async fn end_session(&self) -> SessionEnd {
        let remote = self.transport.logout().await;
        if let Err(e) = &remote {
            leptos::logging::warn!("logout request failed: {e}");
        }
        self.sink.publish(SessionPhase::Unauthenticated, None);
        SessionEnd { remote, navigation: Navigation::Route(LOGIN_PATH) }
    }
}
