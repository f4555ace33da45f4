//! Route-guard decisions shared by protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior, and
//! the decision reads only the session store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::navigation::{LOGIN_PATH, Navigation, perform};
use crate::state::auth::{SessionPhase, SessionStore};

/// What a protected route should show for the current session phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity resolution still running; show a loading indicator.
    Pending,
    Render,
    Redirect(Navigation),
}

pub fn guard_decision(phase: &SessionPhase) -> GuardDecision {
    match phase {
        SessionPhase::Unknown => GuardDecision::Pending,
        SessionPhase::Authenticated(_) => GuardDecision::Render,
        SessionPhase::Unauthenticated => GuardDecision::Redirect(Navigation::Route(LOGIN_PATH)),
    }
}

/// Redirect to `/login` whenever resolution has finished and no session is
/// present.
pub fn install_unauth_redirect<F>(session: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(nav) = guard_decision(&session.phase()) {
            perform(&nav, navigate.clone());
        }
    });
}
