//! Root application component with routing and session bootstrap.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
#[cfg(feature = "hydrate")]
use crate::net::auth_gateway::AuthOutcome;
use crate::net::auth_gateway::{AuthGateway, BrowserGateway};
use crate::pages::{callback::CallbackPage, creator::CreatorPage, login::LoginPage, stats::StatsPage};
use crate::state::auth::SessionStore;
use crate::util::navigation::LOGIN_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store for the lifetime of the mount, starts identity
/// resolution once, and hands the store and gateway to each route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    let session = SessionStore::new();
    let gateway: BrowserGateway =
        AuthGateway::new(HttpApi::new(config.api_base_url.clone()), session, config.oauth.clone());

    #[cfg(feature = "hydrate")]
    {
        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            let outcome = gateway.resolve_session().await;
            if !matches!(outcome, AuthOutcome::Success(_)) {
                leptos::logging::log!("no session on load: {outcome:?}");
            }
        });
    }

    let login_view = {
        let gateway = gateway.clone();
        move || view! { <LoginPage session gateway=gateway.clone()/> }
    };
    let callback_view = {
        let gateway = gateway.clone();
        let delay = config.callback_delay;
        move || view! { <CallbackPage gateway=gateway.clone() delay/> }
    };
    let stats_view = {
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            view! {
                <ProtectedRoute session>
                    <StatsPage session gateway=gateway.clone()/>
                </ProtectedRoute>
            }
        }
    };
    let creator_view = {
        let api = gateway.transport().clone();
        move || view! { <CreatorPage api=api.clone()/> }
    };

    view! {
        <Title text="Tunestats"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=login_view/>
                <Route path=StaticSegment("callback") view=callback_view/>
                <Route path=StaticSegment("stats") view=stats_view/>
                <Route path=StaticSegment("creator") view=creator_view/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
            </Routes>
        </Router>
    }
}
