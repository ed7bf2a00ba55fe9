//! Club aggregator
//!
//! Two-phase fetch across all tracked wallets: concurrent per-wallet
//! ownership queries, then concurrent per-club enrichment queries. Failures
//! are captured per item and degrade that item's data instead of aborting
//! the batch; only a batch that produces nothing raises the shared error.
//! A fetch-generation counter keeps superseded refreshes from committing
//! stale results over newer ones.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use dashboard_core::{
    current_tournament, ClubDetails, ClubWithDetails, DashboardError, DashboardResult,
    ACTIVE_SEASON_ID,
};
use dashboard_footium::FootballApi;

use crate::store::{Action, AppStore};

/// Error surfaced to the view layer when a refresh yields nothing
const FETCH_FAILED_MESSAGE: &str = "Failed to fetch clubs. Please try again.";
const NO_WALLETS_MESSAGE: &str = "No wallets configured. Add wallets in Settings.";

/// One failed item inside a fan-out
#[derive(Debug)]
pub struct BatchFailure {
    /// Wallet label or club id the failure belongs to
    pub label: String,
    pub error: DashboardError,
}

/// Result of one refresh cycle
#[derive(Debug, Default)]
pub struct ClubBatch {
    pub clubs: Vec<ClubWithDetails>,
    pub failures: Vec<BatchFailure>,
}

impl ClubBatch {
    /// Human-readable partial-failure summary, if anything failed
    pub fn failure_summary(&self) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }
        let labels: Vec<&str> = self.failures.iter().map(|f| f.label.as_str()).collect();
        Some(format!(
            "{} lookup(s) degraded: {}",
            self.failures.len(),
            labels.join(", ")
        ))
    }
}

/// Aggregates club ownership and season stats across all tracked wallets
pub struct ClubAggregator {
    api: Arc<dyn FootballApi>,
    store: Arc<AppStore>,
    /// Monotonic fetch generation; stale refreshes never commit
    generation: AtomicU64,
}

impl ClubAggregator {
    pub fn new(api: Arc<dyn FootballApi>, store: Arc<AppStore>) -> Self {
        Self {
            api,
            store,
            generation: AtomicU64::new(0),
        }
    }

    /// Run one full refresh cycle and commit the result to the store
    /// (unless a newer cycle has started in the meantime).
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> DashboardResult<ClubBatch> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let wallets = self.store.state().await.wallets;

        if wallets.is_empty() {
            self.dispatch_if_current(
                generation,
                Action::SetError(Some(NO_WALLETS_MESSAGE.to_string())),
            )
            .await;
            return Ok(ClubBatch::default());
        }

        self.dispatch_if_current(generation, Action::SetLoading(true))
            .await;
        self.dispatch_if_current(generation, Action::SetError(None))
            .await;

        // Phase 1: club ownership per wallet, concurrently
        let ownership_results = join_all(wallets.iter().map(|wallet| async move {
            let result = self.api.clubs_by_owner(&wallet.address).await;
            (wallet, result)
        }))
        .await;

        let mut clubs = Vec::new();
        let mut failures = Vec::new();
        for (wallet, result) in ownership_results {
            match result {
                Ok(ownerships) => {
                    clubs.extend(
                        ownerships
                            .into_iter()
                            .map(|o| ClubWithDetails::from_ownership(o, &wallet.name)),
                    );
                }
                Err(error) => {
                    warn!("Club lookup failed for wallet {}: {}", wallet.name, error);
                    failures.push(BatchFailure {
                        label: wallet.name.clone(),
                        error,
                    });
                }
            }
        }

        // Every wallet failed: raise the one aggregate error and keep the
        // previously loaded club list.
        if failures.len() == wallets.len() {
            self.dispatch_if_current(
                generation,
                Action::SetError(Some(FETCH_FAILED_MESSAGE.to_string())),
            )
            .await;
            self.dispatch_if_current(generation, Action::SetLoading(false))
                .await;
            return Ok(ClubBatch {
                clubs: Vec::new(),
                failures,
            });
        }

        // Phase 2: season stats per club, concurrently. A failed club keeps
        // its ownership-only shape.
        let enriched = join_all(clubs.into_iter().map(|club| async {
            let club_id = club.id();
            match self.api.club_details(club_id).await {
                Ok(details) => (enrich(club, details), None),
                Err(error) => {
                    warn!("Enrichment failed for club {}: {}", club_id, error);
                    (
                        club,
                        Some(BatchFailure {
                            label: format!("club {club_id}"),
                            error,
                        }),
                    )
                }
            }
        }))
        .await;

        let mut batch = ClubBatch {
            clubs: Vec::with_capacity(enriched.len()),
            failures,
        };
        for (club, failure) in enriched {
            batch.clubs.push(club);
            if let Some(failure) = failure {
                batch.failures.push(failure);
            }
        }

        if let Some(summary) = batch.failure_summary() {
            info!("Refresh completed with partial failures: {}", summary);
        }

        // A newer refresh has started; its result wins.
        if !self.is_current(generation) {
            debug!("Discarding stale refresh (generation {})", generation);
            return Ok(batch);
        }

        self.dispatch_if_current(generation, Action::SetClubs(batch.clubs.clone()))
            .await;
        self.dispatch_if_current(generation, Action::SetLoading(false))
            .await;
        Ok(batch)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Write to the store only while `generation` is still the newest
    /// cycle; a superseded refresh must not touch loading or error state.
    async fn dispatch_if_current(&self, generation: u64, action: Action) {
        if self.is_current(generation) {
            self.store.dispatch(action).await;
        }
    }
}

/// Apply enrichment data to an ownership-phase club: stats are attached
/// as-is (each entry carries its season marker), while tournaments and the
/// current tournament narrow to the active season when it is represented.
fn enrich(mut club: ClubWithDetails, details: ClubDetails) -> ClubWithDetails {
    club.stats = details.stats;

    let season_tournaments: Vec<_> = club
        .tournaments
        .iter()
        .filter(|ct| ct.tournament.season_id == ACTIVE_SEASON_ID)
        .cloned()
        .collect();
    if !season_tournaments.is_empty() {
        club.current_tournament = current_tournament(&season_tournaments).cloned();
        club.tournaments = season_tournaments;
    }
    club
}
