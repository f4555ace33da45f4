//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages receive a [`SessionStore`] handle as a prop. Reads go through
//! [`SessionStore::is_authenticated`] / [`SessionStore::phase`]; the only
//! writer is the auth gateway, via [`SessionSink`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::Session;

/// Where the session lifecycle currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Identity resolution has not completed yet.
    #[default]
    Unknown,
    Authenticated(Session),
    Unauthenticated,
}

/// Authentication state: current phase plus the last resolution error, if
/// any, kept for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: SessionPhase,
    pub last_error: Option<String>,
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            SessionPhase::Authenticated(session) => Some(session),
            SessionPhase::Unknown | SessionPhase::Unauthenticated => None,
        }
    }

    /// Sole predicate for "logged in".
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// Caption for a session check that failed to reach the server. `None`
    /// when a session is present or the server simply reported none.
    pub fn failure_notice(&self) -> Option<String> {
        match (&self.phase, &self.last_error) {
            (SessionPhase::Unauthenticated, Some(error)) => {
                Some(format!("Could not check your session ({error}). Please try again."))
            }
            _ => None,
        }
    }
}

/// Write side of the store. Implemented by [`SessionStore`] and by test
/// doubles; called only from `net::auth_gateway`.
pub trait SessionSink {
    fn publish(&self, phase: SessionPhase, error: Option<String>);
}

/// Copyable handle to the reactive session store.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<AuthState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Tracked read of the current phase.
    pub fn phase(&self) -> SessionPhase {
        self.state.with(|s| s.phase.clone())
    }

    /// Tracked read of the current session.
    pub fn session(&self) -> Option<Session> {
        self.state.with(|s| s.session().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    /// Tracked read of [`AuthState::failure_notice`].
    pub fn failure_notice(&self) -> Option<String> {
        self.state.with(AuthState::failure_notice)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSink for SessionStore {
    fn publish(&self, phase: SessionPhase, error: Option<String>) {
        self.state.set(AuthState { phase, last_error: error });
    }
}

impl<S: SessionSink + ?Sized> SessionSink for &S {
    fn publish(&self, phase: SessionPhase, error: Option<String>) {
        (**self).publish(phase, error);
    }
}
