//! Live match tracking and view derivation
//!
//! Holds the latest snapshot received from the live feed (replaced
//! wholesale on every update) and turns it into a renderable view: club
//! names resolved against the loaded club list, event timeline with
//! elapsed minutes and marker icons.

use dashboard_core::{elapsed_minutes, ClubWithDetails, EventMarker, LiveMatch};
use dashboard_footium::LiveUpdate;

/// Connection and snapshot state for one live match subscription
#[derive(Debug, Default)]
pub struct LiveMatchTracker {
    snapshot: Option<LiveMatch>,
    connected: bool,
    error: Option<String>,
}

impl LiveMatchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one feed update into the tracker
    pub fn apply(&mut self, update: LiveUpdate) {
        match update {
            LiveUpdate::Snapshot(snapshot) => {
                self.snapshot = Some(snapshot);
            }
            LiveUpdate::ConnectionState { connected, error } => {
                self.connected = connected;
                self.error = error;
            }
        }
    }

    pub fn snapshot(&self) -> Option<&LiveMatch> {
        self.snapshot.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// One timeline row of the live view
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub minute: i64,
    pub marker: EventMarker,
    pub club_name: String,
}

/// Renderable state of a live match
#[derive(Debug, Clone, PartialEq)]
pub struct LiveMatchView {
    pub home_name: String,
    pub away_name: String,
    pub home_score: i64,
    pub away_score: i64,
    pub home_scorers: Vec<String>,
    pub away_scorers: Vec<String>,
    pub match_time: String,
    pub events: Vec<TimelineEvent>,
}

/// Resolve a club id against the loaded club list
pub fn club_display_name(clubs: &[ClubWithDetails], club_id: i64) -> String {
    clubs
        .iter()
        .find(|c| c.id() == club_id)
        .map(|c| c.club.name.clone())
        .unwrap_or_else(|| format!("Club #{club_id}"))
}

/// Derive the live view from a snapshot and the loaded club list
pub fn build_live_view(snapshot: &LiveMatch, clubs: &[ClubWithDetails]) -> LiveMatchView {
    let kickoff = snapshot.kickoff_timestamp();
    let events = snapshot
        .key_events
        .iter()
        .map(|event| TimelineEvent {
            minute: kickoff
                .map(|start| elapsed_minutes(event.timestamp, start))
                .unwrap_or(0),
            marker: EventMarker::from_event_type(event.event_type),
            club_name: club_display_name(clubs, event.club_id),
        })
        .collect();

    LiveMatchView {
        home_name: club_display_name(clubs, snapshot.home_club_id),
        away_name: club_display_name(clubs, snapshot.away_club_id),
        home_score: snapshot.home_score,
        away_score: snapshot.away_score,
        home_scorers: snapshot.home_club_scorers.clone(),
        away_scorers: snapshot.away_club_scorers.clone(),
        match_time: snapshot.match_time.clone(),
        events,
    }
}
