use super::*;

#[test]
fn auth_endpoints_format_expected_paths() {
    assert_eq!(me_endpoint(""), "/auth/spotify/me");
    assert_eq!(logout_endpoint("https://api.example.test"), "https://api.example.test/auth/spotify/logout");
}

#[test]
fn personal_stats_endpoint_includes_subject_and_range() {
    let scope = StatsScope::Personal { subject_id: "u1".to_owned() };
    assert_eq!(
        stats_endpoint("", &scope, TimeRange::Weekly),
        "/stats/track-stats/u1?timeRange=7day"
    );
}

#[test]
fn creator_stats_endpoint_uses_public_path() {
    assert_eq!(
        stats_endpoint("https://api.example.test", &StatsScope::Creator, TimeRange::Yearly),
        "https://api.example.test/stats/track-stats/creator?timeRange=12month"
    );
}

#[test]
fn parse_me_body_empty_is_no_session() {
    assert_eq!(parse_me_body(""), Ok(None));
    assert_eq!(parse_me_body("  \n"), Ok(None));
    assert_eq!(parse_me_body("{}"), Ok(None));
}

#[test]
fn parse_me_body_reads_user() {
    let body = r#"{"user":{"sub":"u1","email":"a@b.com","spotifyId":"sp","iat":1,"expiresIn":"1h"}}"#;
    let session = parse_me_body(body).unwrap().unwrap();
    assert_eq!(session.subject_id, "u1");
    assert_eq!(session.email, "a@b.com");
}

#[test]
fn parse_me_body_rejects_garbage() {
    assert!(matches!(parse_me_body("<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn parse_tracks_body_handles_empty_and_list() {
    assert_eq!(parse_tracks_body(""), Ok(Vec::new()));
    let tracks = parse_tracks_body(r#"[{"name":"N","artist":"A","genre":"G"}]"#).unwrap();
    assert_eq!(tracks, vec![Track { name: "N".to_owned(), artist: "A".to_owned(), genre: "G".to_owned() }]);
}

#[test]
fn unauthorized_statuses_are_classified() {
    assert!(ApiError::Status(401).is_unauthorized());
    assert!(ApiError::Status(403).is_unauthorized());
    assert!(!ApiError::Status(500).is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(502).to_string(), "unexpected status: 502");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn native_http_calls_are_unavailable() {
    let api = HttpApi::new("");
    assert_eq!(futures::executor::block_on(api.who_am_i()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(api.logout()), Err(ApiError::Unavailable));
    assert_eq!(
        futures::executor::block_on(fetch_track_stats("", &StatsScope::Creator, TimeRange::Hourly)),
        Err(ApiError::Unavailable)
    );
}
