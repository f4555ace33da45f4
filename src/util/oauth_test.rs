use std::collections::HashMap;

use super::*;
use crate::config::ClientConfig;

fn split_url(url: &str) -> (&str, HashMap<String, String>) {
    let (base, query) = url.split_once('?').unwrap();
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap();
    assert_eq!(pairs.len(), 4, "unexpected params: {pairs:?}");
    (base, pairs.into_iter().collect())
}

#[test]
fn authorize_url_targets_identity_provider() {
    let config = ClientConfig::default();
    let url = authorize_url(&config.oauth).unwrap();
    let (base, _) = split_url(&url);
    assert_eq!(base, "https://accounts.spotify.com/authorize");
}

#[test]
fn authorize_url_carries_exactly_the_fixed_params() {
    let config = ClientConfig::default();
    let url = authorize_url(&config.oauth).unwrap();
    let (_, params) = split_url(&url);

    assert_eq!(params["response_type"], "code");
    assert_eq!(params["client_id"], "787400c8f51d42a28fc8b56fe54e00fb");
    assert_eq!(params["redirect_uri"], "https://nikolannaumovski.com/");

    let scopes: Vec<&str> = params["scope"].split(' ').collect();
    assert_eq!(
        scopes,
        ["user-top-read", "user-read-email", "user-read-recently-played", "user-read-private"]
    );
}

#[test]
fn query_encodes_reserved_characters() {
    let config = OAuthConfig {
        authorize_url: "https://idp.test/authorize".to_owned(),
        client_id: "abc".to_owned(),
        redirect_uri: "http://localhost:3000/callback?x=1".to_owned(),
    };
    let query = AuthorizeRedirect::new(&config).query().unwrap();
    assert!(query.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback%3Fx%3D1"));
    assert!(!query.contains(' '));
}
