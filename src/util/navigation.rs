//! Navigation intents produced by auth flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gateway and callback logic return a [`Navigation`] instead of touching
//! the router or `window.location` directly, so the decision is testable
//! natively and the page performs it.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;

pub const LOGIN_PATH: &str = "/login";
pub const STATS_PATH: &str = "/stats";
pub const CREATOR_PATH: &str = "/creator";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Client-side route change within the app.
    Route(&'static str),
    /// Full page load of an external URL; control leaves the app.
    External(String),
}

/// Carry out `nav` with the router's `navigate` function or, for external
/// targets, a full browser navigation.
pub fn perform<F>(nav: &Navigation, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    match nav {
        Navigation::Route(path) => navigate(*path, NavigateOptions { replace: true, ..NavigateOptions::default() }),
        Navigation::External(url) => {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().set_href(url) {
                        leptos::logging::warn!("external navigation failed: {e:?}");
                    }
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = url;
            }
        }
    }
}
