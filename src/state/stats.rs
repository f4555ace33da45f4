//! Track-stats view state shared by the personal and creator pages.
//!
//! DESIGN
//! ======
//! Each fetch is issued under a ticket. Only the reply for the newest ticket
//! is applied, so a fast tab switch never shows the previous range's list.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::api::ApiError;
use crate::net::types::{TimeRange, Track};

/// Whose listening stats are shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatsScope {
    /// The signed-in user's stats.
    Personal { subject_id: String },
    /// The public creator listing.
    Creator,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsState {
    pub selected: TimeRange,
    pub tracks: Vec<Track>,
    pub loading: bool,
    pub error: Option<String>,
    ticket: u64,
}

impl Default for StatsState {
    fn default() -> Self {
        Self {
            selected: TimeRange::default(),
            tracks: Vec::new(),
            loading: true,
            error: None,
            ticket: 0,
        }
    }
}

impl StatsState {
    /// Switch the selected range. Returns `false`, touching nothing, when
    /// `range` is already selected.
    pub fn select(&mut self, range: TimeRange) -> bool {
        if range == self.selected {
            return false;
        }
        self.selected = range;
        self.loading = true;
        true
    }

    /// Tab click: switch to `range` and start a fetch for it. Returns the
    /// fetch ticket, or `None` with nothing touched when `range` is already
    /// selected.
    pub fn choose(&mut self, range: TimeRange) -> Option<u64> {
        self.select(range).then(|| self.begin_fetch())
    }

    /// Mark a fetch as in flight and return its ticket.
    pub fn begin_fetch(&mut self) -> u64 {
        self.ticket += 1;
        self.loading = true;
        self.error = None;
        self.ticket
    }

    /// Apply a fetch reply. Replies for superseded tickets are dropped and
    /// `false` is returned. Failures empty the list.
    pub fn finish_fetch(&mut self, ticket: u64, result: Result<Vec<Track>, ApiError>) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.loading = false;
        match result {
            Ok(tracks) => {
                self.tracks = tracks;
                self.error = None;
            }
            Err(e) => {
                self.tracks.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }
}
