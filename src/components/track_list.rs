//! Ranked track listing with loading, error and empty states.

#[cfg(test)]
#[path = "track_list_test.rs"]
mod track_list_test;

use leptos::prelude::*;

use crate::net::types::Track;
use crate::state::stats::StatsState;

/// Placeholder text to show instead of the list, if any.
pub(crate) fn list_status(state: &StatsState) -> Option<&'static str> {
    if state.loading {
        Some("Loading tracks...")
    } else if state.error.is_some() {
        Some("Could not load tracks.")
    } else if state.tracks.is_empty() {
        Some("No tracks for this time range.")
    } else {
        None
    }
}

#[component]
pub fn TrackList(#[prop(into)] stats: Signal<StatsState>) -> impl IntoView {
    move || {
        let state = stats.get();
        if let Some(status) = list_status(&state) {
            return view! { <p class="track-list__status">{status}</p> }.into_any();
        }
        view! {
            <ol class="track-list">
                {state
                    .tracks
                    .into_iter()
                    .enumerate()
                    .map(|(idx, track)| view! { <TrackRow rank={idx + 1} track/> })
                    .collect_view()}
            </ol>
        }
        .into_any()
    }
}

#[component]
fn TrackRow(rank: usize, track: Track) -> impl IntoView {
    view! {
        <li class="track-row">
            <span class="track-row__rank">{format!("#{rank}")}</span>
            <div class="track-row__body">
                <span class="track-row__name">{track.name}</span>
                <span class="track-row__artist">{track.artist}</span>
            </div>
            <span class="track-row__genre">{track.genre}</span>
        </li>
    }
}
