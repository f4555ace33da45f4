//! Personal listening stats for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `ProtectedRoute`. The personal fetch waits until the
//! session carries a subject id.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::stats_panel::StatsPanel;
use crate::net::auth_gateway::BrowserGateway;
use crate::state::auth::SessionStore;
use crate::state::stats::StatsScope;
use crate::util::navigation::{CREATOR_PATH, Navigation, perform};

#[component]
pub fn StatsPage(session: SessionStore, gateway: BrowserGateway) -> impl IntoView {
    let navigate = use_navigate();
    let api = gateway.transport().clone();

    let scope = Memo::new(move |_| {
        session
            .session()
            .map(|s| StatsScope::Personal { subject_id: s.subject_id })
    });
    let email = move || session.session().map(|s| s.email).unwrap_or_default();

    let navigate_creator = navigate.clone();
    let on_creator = move |_| perform(&Navigation::Route(CREATOR_PATH), navigate_creator.clone());

    let busy = RwSignal::new(false);
    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let end = gateway.end_session().await;
                busy.set(false);
                perform(&end.navigation, navigate);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&gateway, &navigate);
        }
    };

    view! {
        <div class="stats-page">
            <header class="stats-header">
                <span class="stats-header__brand">"Tunestats"</span>
                <span class="stats-header__user">{email}</span>
                <button class="stats-header__action" on:click=on_creator>
                    "View creator stats"
                </button>
                <button class="stats-header__action stats-header__action--logout" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            </header>
            <h2>"Your Music Stats"</h2>
            <p class="stats-page__subtitle">"Explore your most listened tracks across different time ranges"</p>
            <StatsPanel scope api/>
        </div>
    }
}
