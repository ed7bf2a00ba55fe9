//! Aggregation and state services for the Footium club dashboard
//!
//! This crate provides the service layer between the Footium API clients
//! and the view layer: the application store, wallet management with
//! durable persistence, club and league aggregation, live match tracking,
//! and the derived view models.

pub mod club_aggregator;
pub mod league_aggregator;
pub mod live_match;
pub mod prefs_storage;
pub mod store;
pub mod views;
pub mod wallet_store;

pub use club_aggregator::{BatchFailure, ClubAggregator, ClubBatch};
pub use league_aggregator::{LeagueAggregator, LeagueEntry, LeagueTable};
pub use live_match::{
    build_live_view, club_display_name, LiveMatchTracker, LiveMatchView, TimelineEvent,
};
pub use prefs_storage::PrefsStorage;
pub use store::{reduce, Action, AppState, AppStore, StateEvent};
pub use views::{
    club_list, dashboard_summary, division_options, merge_club_details, ClubFilter, ClubSort,
    DashboardSummary, DivisionCount,
};
pub use wallet_store::{WalletStore, WALLETS_KEY};
