//! OAuth callback screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider redirects here with a transient `code`. No
//! code-for-token exchange happens in the client: after a short simulated
//! processing delay the session is re-resolved and the user lands on
//! `/stats` when a session came back, or on `/login` otherwise.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::auth_gateway::BrowserGateway;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::auth_gateway::AuthOutcome;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::navigation::STATS_PATH;
use crate::util::navigation::{LOGIN_PATH, Navigation, perform};

/// What the callback screen does with the query it was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackPlan {
    /// Code present: wait `after`, refresh the session, then navigate per
    /// `landing_after`.
    Complete { after: Duration },
    /// No usable code: navigate immediately.
    Fail { then: Navigation },
}

pub(crate) fn plan_callback(code: Option<&str>, delay: Duration) -> CallbackPlan {
    match code.map(str::trim) {
        Some(code) if !code.is_empty() => CallbackPlan::Complete { after: delay },
        _ => CallbackPlan::Fail { then: Navigation::Route(LOGIN_PATH) },
    }
}

/// Where the callback goes once the session has been re-resolved.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn landing_after(outcome: &AuthOutcome) -> Navigation {
    match outcome {
        AuthOutcome::Success(_) => Navigation::Route(STATS_PATH),
        AuthOutcome::AuthFailure | AuthOutcome::NetworkError(_) => Navigation::Route(LOGIN_PATH),
    }
}

#[component]
pub fn CallbackPage(gateway: BrowserGateway, delay: Duration) -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let plan = plan_callback(query.get_untracked().get("code").as_deref(), delay);
    let authenticating = matches!(plan, CallbackPlan::Complete { .. });

    match plan {
        CallbackPlan::Fail { then } => {
            leptos::logging::warn!("callback without authorization code");
            Effect::new(move || perform(&then, navigate.clone()));
        }
        CallbackPlan::Complete { after } => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(after).await;
                let outcome = gateway.resolve_session().await;
                if !matches!(outcome, AuthOutcome::Success(_)) {
                    leptos::logging::warn!("no session after callback: {outcome:?}");
                }
                perform(&landing_after(&outcome), navigate);
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (after, gateway, navigate);
            }
        }
    }

    view! {
        <div class="callback-page">
            <div class="callback-card">
                <Show
                    when=move || authenticating
                    fallback=|| view! { <p class="callback-error">"Authentication failed. Redirecting..."</p> }
                >
                    <div class="callback-spinner"></div>
                    <h2>"Authenticating..."</h2>
                    <p class="callback-card__subtitle">"Processing your Spotify credentials"</p>
                    <ul class="callback-steps">
                        <li>"Validating credentials..."</li>
                        <li>"Fetching listening history..."</li>
                        <li>"Preparing dashboard..."</li>
                    </ul>
                </Show>
            </div>
        </div>
    }
}
