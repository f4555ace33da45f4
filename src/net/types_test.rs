use super::*;

// =============================================================
// Session
// =============================================================

#[test]
fn session_deserializes_upstream_field_names() {
    let session: Session = serde_json::from_value(serde_json::json!({
        "sub": "u1",
        "email": "a@b.com",
        "spotifyId": "sp-9",
        "iat": 1_700_000_000,
        "expiresIn": "1h"
    }))
    .unwrap();
    assert_eq!(session.subject_id, "u1");
    assert_eq!(session.email, "a@b.com");
    assert_eq!(session.external_account_id, "sp-9");
    assert_eq!(session.issued_at, 1_700_000_000);
    assert_eq!(session.expiry, "1h");
}

#[test]
fn me_response_without_user_key_is_empty() {
    let body: MeResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(body.user, None);
}

#[test]
fn me_response_with_null_user_is_empty() {
    let body: MeResponse = serde_json::from_str(r#"{"user":null}"#).unwrap();
    assert_eq!(body.user, None);
}

// =============================================================
// Track
// =============================================================

#[test]
fn track_list_deserializes_in_order() {
    let tracks: Vec<Track> = serde_json::from_str(
        r#"[{"name":"One","artist":"A","genre":"rock"},{"name":"Two","artist":"B","genre":"jazz"}]"#,
    )
    .unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "One");
    assert_eq!(tracks[1].genre, "jazz");
}

// =============================================================
// TimeRange
// =============================================================

#[test]
fn time_range_default_is_hourly() {
    assert_eq!(TimeRange::default(), TimeRange::Hourly);
}

#[test]
fn time_range_query_values_match_api_enum() {
    let values: Vec<&str> = TimeRange::ALL.iter().map(|r| r.as_str()).collect();
    assert_eq!(values, ["1hr", "24hr", "7day", "1month", "6month", "12month"]);
}

#[test]
fn time_range_labels() {
    assert_eq!(TimeRange::Daily.label(), "24 Hours");
    assert_eq!(TimeRange::SixMonths.label(), "6 Months");
}

#[test]
fn time_range_serde_uses_query_values() {
    assert_eq!(serde_json::to_string(&TimeRange::Monthly).unwrap(), r#""1month""#);
    let parsed: TimeRange = serde_json::from_str(r#""24hr""#).unwrap();
    assert_eq!(parsed, TimeRange::Daily);
}
