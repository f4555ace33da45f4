//! Public creator stats; reachable without a session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::stats_panel::StatsPanel;
use crate::net::api::HttpApi;
use crate::state::stats::StatsScope;
use crate::util::navigation::{Navigation, STATS_PATH, perform};

#[component]
pub fn CreatorPage(api: HttpApi) -> impl IntoView {
    let navigate = use_navigate();
    let on_back = move |_| perform(&Navigation::Route(STATS_PATH), navigate.clone());
    let scope = Signal::derive(|| Some(StatsScope::Creator));

    view! {
        <div class="stats-page stats-page--creator">
            <header class="stats-header">
                <button class="stats-header__back" on:click=on_back>
                    "Back"
                </button>
                <span class="stats-header__brand">"Creator's Stats"</span>
                <span class="stats-header__badge">"Public View"</span>
            </header>
            <StatsPanel scope api/>
        </div>
    }
}
