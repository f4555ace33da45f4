//! Auth-flow helpers used by pages and components.
//!
//! `oauth` builds the Spotify authorize URL, `auth` decides what a protected
//! route shows, and `navigation` turns route or external-URL intents into
//! router calls or full page loads.

pub mod auth;
pub mod navigation;
pub mod oauth;
