//! Time-range tabs plus track list, with the fetches that feed them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the personal and creator pages; only the [`StatsScope`] differs.
//! A fetch is issued when the scope becomes known or changes, and when a tab
//! click passes [`StatsState::choose`]. Re-selecting the current tab issues
//! nothing.

use leptos::prelude::*;

use crate::components::time_range_tabs::TimeRangeTabs;
use crate::components::track_list::TrackList;
use crate::net::api::HttpApi;
use crate::net::types::TimeRange;
use crate::state::stats::{StatsScope, StatsState};

#[component]
pub fn StatsPanel(#[prop(into)] scope: Signal<Option<StatsScope>>, api: HttpApi) -> impl IntoView {
    let stats = RwSignal::new(StatsState::default());
    let selected = Memo::new(move |_| stats.with(|s| s.selected));

    let scope_api = api.clone();
    Effect::new(move || {
        let Some(scope) = scope.get() else {
            return;
        };
        let range = stats.with_untracked(|s| s.selected);
        let ticket = stats.try_update(StatsState::begin_fetch).unwrap_or_default();
        spawn_fetch(&scope_api, stats, scope, range, ticket);
    });

    let on_select = Callback::new(move |range: TimeRange| {
        let mut ticket = None;
        stats.maybe_update(|s| {
            ticket = s.choose(range);
            ticket.is_some()
        });
        if let (Some(ticket), Some(scope)) = (ticket, scope.get_untracked()) {
            spawn_fetch(&api, stats, scope, range, ticket);
        }
    });

    view! {
        <section class="stats-panel">
            <TimeRangeTabs selected=selected on_select/>
            <TrackList stats/>
        </section>
    }
}

fn spawn_fetch(api: &HttpApi, stats: RwSignal<StatsState>, scope: StatsScope, range: TimeRange, ticket: u64) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.track_stats(&scope, range).await;
            if let Err(e) = &result {
                leptos::logging::warn!("track stats fetch failed: range={range} error={e}");
            }
            stats.update(|s| {
                s.finish_fetch(ticket, result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, stats, scope, range, ticket);
    }
}
