//! Core types for the Footium club dashboard
//!
//! This crate defines the shared data structures used across the dashboard:
//! wallet identities, club and tournament records, season statistics, and
//! live match snapshots.

pub mod club;
pub mod error;
pub mod live;
pub mod wallet;

pub use club::{
    current_tournament, Club, ClubDetails, ClubOwnership, ClubStats, ClubTournament,
    ClubWithDetails, StandingsRow, Tournament, TournamentStandings, ACTIVE_SEASON_ID,
};
pub use error::{DashboardError, DashboardResult};
pub use live::{elapsed_minutes, EventMarker, KeyEvent, LiveMatch, PeriodState};
pub use wallet::{default_wallets, is_valid_address, Wallet};
