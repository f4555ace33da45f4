//! Login page with the Spotify OAuth redirect button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::auth_gateway::BrowserGateway;
use crate::state::auth::SessionStore;
use crate::util::navigation::{CREATOR_PATH, Navigation, perform};

/// Login page. Connecting hands control to the identity provider; the
/// creator listing stays reachable without an account. A session check
/// that could not reach the server is reported under the subtitle.
#[component]
pub fn LoginPage(session: SessionStore, gateway: BrowserGateway) -> impl IntoView {
    let navigate = use_navigate();

    let navigate_connect = navigate.clone();
    let on_connect = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        match gateway.begin_login() {
            Ok(nav) => perform(&nav, navigate_connect.clone()),
            Err(e) => leptos::logging::warn!("could not build authorize URL: {e}"),
        }
    };

    let on_creator = move |_| perform(&Navigation::Route(CREATOR_PATH), navigate.clone());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Tunestats"</h1>
                <p class="login-card__subtitle">"Your listening, by the hour and by the year"</p>
                {move || {
                    session
                        .failure_notice()
                        .map(|notice| view! { <p class="login-card__notice">{notice}</p> })
                }}
                <button class="login-button" on:click=on_connect>
                    "Connect with Spotify"
                </button>
                <div class="login-divider"></div>
                <button class="login-link" on:click=on_creator>
                    "View creator stats"
                </button>
            </div>
        </div>
    }
}
