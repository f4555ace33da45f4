//! Tab strip for picking the stats time range.

use leptos::prelude::*;

use crate::net::types::TimeRange;

#[component]
pub fn TimeRangeTabs(#[prop(into)] selected: Signal<TimeRange>, on_select: Callback<TimeRange>) -> impl IntoView {
    view! {
        <div class="range-tabs" role="tablist">
            {TimeRange::ALL
                .into_iter()
                .map(|range| {
                    view! {
                        <button
                            class="range-tab"
                            class:range-tab--active=move || selected.get() == range
                            role="tab"
                            aria-selected=move || (selected.get() == range).to_string()
                            on:click=move |_| on_select.run(range)
                        >
                            {range.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
