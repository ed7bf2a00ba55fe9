//! League aggregator
//!
//! Builds standings tables for every league the user's clubs currently play
//! in. Leagues are fetched sequentially, one fresh query each; a failing
//! league is skipped so the rest still render.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use dashboard_core::{ClubWithDetails, ACTIVE_SEASON_ID};
use dashboard_footium::FootballApi;

/// One row of a rendered league table
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueEntry {
    pub club_id: i64,
    pub club_name: String,
    pub city: String,
    pub position: i64,
    /// Whether the entry is one of the user's clubs
    pub is_owned: bool,
}

/// A league's standings, sorted ascending by position
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueTable {
    pub name: String,
    pub entries: Vec<LeagueEntry>,
}

/// Fetches standings for the leagues referenced by the user's clubs
pub struct LeagueAggregator {
    api: Arc<dyn FootballApi>,
}

impl LeagueAggregator {
    pub fn new(api: Arc<dyn FootballApi>) -> Self {
        Self { api }
    }

    /// Build one table per distinct current league of `clubs`. No clubs
    /// (or no league participation) means no queries and no tables.
    #[instrument(skip_all, fields(clubs = clubs.len()))]
    pub async fn fetch_league_tables(&self, clubs: &[ClubWithDetails]) -> Vec<LeagueTable> {
        if clubs.is_empty() {
            return Vec::new();
        }

        let owned_ids: HashSet<i64> = clubs.iter().map(|c| c.id()).collect();

        // Distinct league names, first-occurrence order
        let mut league_names: Vec<String> = Vec::new();
        for club in clubs {
            if let Some(ct) = &club.current_tournament {
                if !league_names.contains(&ct.tournament.name) {
                    league_names.push(ct.tournament.name.clone());
                }
            }
        }

        let mut tables = Vec::new();
        for name in league_names {
            match self.api.tournaments_by_name(&name).await {
                Ok(standings) => {
                    let Some(active) = standings
                        .into_iter()
                        .find(|s| s.season_id == ACTIVE_SEASON_ID)
                    else {
                        debug!("League {} has no active-season standings", name);
                        continue;
                    };

                    let mut entries: Vec<LeagueEntry> = active
                        .rows
                        .into_iter()
                        .map(|row| LeagueEntry {
                            is_owned: owned_ids.contains(&row.club_id),
                            club_id: row.club_id,
                            club_name: row.club_name,
                            city: row.city,
                            position: row.position,
                        })
                        .collect();
                    entries.sort_by_key(|e| e.position);

                    tables.push(LeagueTable { name, entries });
                }
                Err(e) => {
                    warn!("Skipping league {}: {}", name, e);
                }
            }
        }
        tables
    }
}
