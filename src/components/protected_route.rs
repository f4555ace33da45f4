//! Route guard wrapper for views that need a session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionStore;
use crate::util::auth::{GuardDecision, guard_decision, install_unauth_redirect};

/// Renders `children` only while the store holds a session. Shows a loading
/// indicator during resolution and redirects to `/login` otherwise.
#[component]
pub fn ProtectedRoute(session: SessionStore, children: ChildrenFn) -> impl IntoView {
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                view! {
                    <div class="guard-placeholder">
                        <p>
                            {move || match guard_decision(&session.phase()) {
                                GuardDecision::Pending => "Loading...",
                                GuardDecision::Render | GuardDecision::Redirect(_) => "Redirecting to login...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
