//! Live match snapshot types and derived-view helpers
//!
//! A snapshot is replaced wholesale on every push update; nothing here is
//! merged incrementally.

use serde::{Deserialize, Serialize};

/// Milliseconds per displayed match minute
const MS_PER_MINUTE: i64 = 60_000;

/// Full state of an in-progress match, as pushed by the live feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatch {
    pub home_club_id: i64,
    pub away_club_id: i64,
    pub home_score: i64,
    pub away_score: i64,
    #[serde(default)]
    pub home_club_scorers: Vec<String>,
    #[serde(default)]
    pub away_club_scorers: Vec<String>,
    #[serde(default)]
    pub key_events: Vec<KeyEvent>,
    #[serde(default)]
    pub period_states: Vec<PeriodState>,
    /// Display label for the current match time (e.g. "45+2'")
    #[serde(default)]
    pub match_time: String,
}

impl LiveMatch {
    /// Start of the first period, in epoch milliseconds
    pub fn kickoff_timestamp(&self) -> Option<i64> {
        self.period_states.first().map(|p| p.start_timestamp)
    }
}

/// A timestamped match event from the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    #[serde(rename = "type")]
    pub event_type: i64,
    /// Epoch milliseconds
    pub timestamp: i64,
    pub club_id: i64,
}

/// Per-period state; only the start timestamp is consumed here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodState {
    /// Epoch milliseconds
    pub start_timestamp: i64,
}

/// Renderable marker for a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventMarker {
    Goal,
    Card,
    Note,
}

impl EventMarker {
    /// Map the feed's numeric event type to a marker
    pub fn from_event_type(event_type: i64) -> Self {
        match event_type {
            0 => EventMarker::Goal,
            2 => EventMarker::Card,
            _ => EventMarker::Note,
        }
    }
}

/// Whole minutes elapsed between the kickoff timestamp and an event
/// timestamp, floored and clamped at zero.
pub fn elapsed_minutes(event_timestamp: i64, kickoff_timestamp: i64) -> i64 {
    ((event_timestamp - kickoff_timestamp) / MS_PER_MINUTE).max(0)
}
