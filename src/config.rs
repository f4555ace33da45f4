//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle runs in the browser, so there is no process environment at
//! runtime. Values are captured with `option_env!` when the WASM artifact is
//! built and fall back to the production defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_CLIENT_ID: &str = "787400c8f51d42a28fc8b56fe54e00fb";
pub const DEFAULT_SPOTIFY_REDIRECT_URI: &str = "https://nikolannaumovski.com/";
pub const DEFAULT_CALLBACK_DELAY_MS: u64 = 2000;

/// Errors produced while parsing build-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Third-party identity provider settings used to build the authorize URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    pub authorize_url: String,
    pub client_id: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every REST call. Empty means same-origin.
    pub api_base_url: String,
    pub oauth: OAuthConfig,
    /// Simulated processing time on the OAuth callback screen.
    pub callback_delay: Duration,
}

/// Raw, unparsed configuration inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValues<'a> {
    pub api_base_url: Option<&'a str>,
    pub authorize_url: Option<&'a str>,
    pub client_id: Option<&'a str>,
    pub redirect_uri: Option<&'a str>,
    pub callback_delay_ms: Option<&'a str>,
}

impl ClientConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `TUNESTATS_API_BASE_URL`: default same-origin
    /// - `TUNESTATS_SPOTIFY_AUTHORIZE_URL`: default Spotify accounts endpoint
    /// - `TUNESTATS_SPOTIFY_CLIENT_ID`
    /// - `TUNESTATS_SPOTIFY_REDIRECT_URI`
    /// - `TUNESTATS_CALLBACK_DELAY_MS`: default 2000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric value does not parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(ConfigValues {
            api_base_url: option_env!("TUNESTATS_API_BASE_URL"),
            authorize_url: option_env!("TUNESTATS_SPOTIFY_AUTHORIZE_URL"),
            client_id: option_env!("TUNESTATS_SPOTIFY_CLIENT_ID"),
            redirect_uri: option_env!("TUNESTATS_SPOTIFY_REDIRECT_URI"),
            callback_delay_ms: option_env!("TUNESTATS_CALLBACK_DELAY_MS"),
        })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric value does not parse.
    pub fn from_values(values: ConfigValues<'_>) -> Result<Self, ConfigError> {
        let api_base_url = non_empty(values.api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let oauth = OAuthConfig {
            authorize_url: non_empty(values.authorize_url).unwrap_or(DEFAULT_AUTHORIZE_URL).to_owned(),
            client_id: non_empty(values.client_id).unwrap_or(DEFAULT_SPOTIFY_CLIENT_ID).to_owned(),
            redirect_uri: non_empty(values.redirect_uri).unwrap_or(DEFAULT_SPOTIFY_REDIRECT_URI).to_owned(),
        };
        let callback_delay = Duration::from_millis(parse_u64(
            "TUNESTATS_CALLBACK_DELAY_MS",
            values.callback_delay_ms,
            DEFAULT_CALLBACK_DELAY_MS,
        )?);

        Ok(Self { api_base_url, oauth, callback_delay })
    }

    /// Config resolved from the build environment, or defaults with a
    /// warning when a value is malformed.
    pub fn load() -> Self {
        Self::from_build_env().unwrap_or_else(|e| {
            leptos::logging::warn!("config: {e}; using defaults");
            Self::default()
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            oauth: OAuthConfig {
                authorize_url: DEFAULT_AUTHORIZE_URL.to_owned(),
                client_id: DEFAULT_SPOTIFY_CLIENT_ID.to_owned(),
                redirect_uri: DEFAULT_SPOTIFY_REDIRECT_URI.to_owned(),
            },
            callback_delay: Duration::from_millis(DEFAULT_CALLBACK_DELAY_MS),
        }
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_u64(key: &'static str, raw: Option<&str>, default: u64) -> Result<u64, ConfigError> {
    match non_empty(raw) {
        None => Ok(default),
        Some(v) => v
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue { key, value: v.to_owned() }),
    }
}
