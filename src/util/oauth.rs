//! Authorization redirect descriptor for the third-party identity provider.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use serde::Serialize;

use crate::config::OAuthConfig;

/// Permission scopes requested at login, in request order.
pub const SCOPES: [&str; 4] = [
    "user-top-read",
    "user-read-email",
    "user-read-recently-played",
    "user-read-private",
];

/// Query parameters of the authorize URL. Built on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizeRedirect<'a> {
    pub response_type: &'static str,
    pub client_id: &'a str,
    pub scope: String,
    pub redirect_uri: &'a str,
}

impl<'a> AuthorizeRedirect<'a> {
    pub fn new(config: &'a OAuthConfig) -> Self {
        Self {
            response_type: "code",
            client_id: &config.client_id,
            scope: SCOPES.join(" "),
            redirect_uri: &config.redirect_uri,
        }
    }

    /// Form-encoded query string for the authorize endpoint.
    ///
    /// # Errors
    ///
    /// Returns the encoder error if a field cannot be serialized.
    pub fn query(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

/// Full authorize URL for `config`.
///
/// # Errors
///
/// Returns the encoder error if the query cannot be serialized.
pub fn authorize_url(config: &OAuthConfig) -> Result<String, serde_urlencoded::ser::Error> {
    let query = AuthorizeRedirect::new(config).query()?;
    Ok(format!("{}?{query}", config.authorize_url))
}
