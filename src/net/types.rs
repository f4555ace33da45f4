//! Wire DTOs for the auth and stats REST endpoints.
//!
//! DESIGN
//! ======
//! Field names on the wire follow the upstream API (`sub`, `spotifyId`,
//! `timeRange`); Rust-side names describe what the value is.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user as reported by `GET /auth/spotify/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Stable subject identifier; keys the personal stats endpoint.
    #[serde(rename = "sub")]
    pub subject_id: String,
    pub email: String,
    /// Account id at the identity provider.
    #[serde(rename = "spotifyId")]
    pub external_account_id: String,
    /// Issue time in unix seconds.
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Opaque expiry descriptor (e.g. `"1h"`).
    #[serde(rename = "expiresIn")]
    pub expiry: String,
}

/// Body of `GET /auth/spotify/me`. The `user` key is absent when there is
/// no session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub user: Option<Session>,
}

/// One entry of a track-stats listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub genre: String,
}

/// Bucket used to parameterize stats queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "1hr")]
    Hourly,
    #[serde(rename = "24hr")]
    Daily,
    #[serde(rename = "7day")]
    Weekly,
    #[serde(rename = "1month")]
    Monthly,
    #[serde(rename = "6month")]
    SixMonths,
    #[serde(rename = "12month")]
    Yearly,
}

impl TimeRange {
    /// Tab order, shortest window first.
    pub const ALL: [Self; 6] = [
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::SixMonths,
        Self::Yearly,
    ];

    /// Query-string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "1hr",
            Self::Daily => "24hr",
            Self::Weekly => "7day",
            Self::Monthly => "1month",
            Self::SixMonths => "6month",
            Self::Yearly => "12month",
        }
    }

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Daily => "24 Hours",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::SixMonths => "6 Months",
            Self::Yearly => "Yearly",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
