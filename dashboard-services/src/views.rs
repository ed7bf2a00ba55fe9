//! View models derived from the loaded club list
//!
//! Pure derivations for the dashboard summary, the searchable club list,
//! and the club-detail merge. Rendering and routing live outside this
//! workspace; these functions only shape the data.

use std::collections::HashMap;

use dashboard_core::{current_tournament, Club, ClubDetails, ClubWithDetails};

/// Summary figures for the dashboard landing view
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_clubs: usize,
    pub total_wins: i64,
    pub total_goals: i64,
    pub active_wallets: usize,
    /// Club count per division, sorted by division number
    pub divisions: Vec<DivisionCount>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DivisionCount {
    pub division: String,
    pub clubs: usize,
}

/// Compute the dashboard summary over the loaded clubs
pub fn dashboard_summary(clubs: &[ClubWithDetails], wallet_count: usize) -> DashboardSummary {
    let mut division_counts: HashMap<String, usize> = HashMap::new();
    let mut total_wins = 0;
    let mut total_goals = 0;

    for club in clubs {
        if let Some(division) = club.division() {
            *division_counts.entry(division.to_string()).or_default() += 1;
        }
        if let Some(stats) = club.active_season_stats() {
            total_wins += stats.wins;
            total_goals += stats.goals;
        }
    }

    let mut divisions: Vec<DivisionCount> = division_counts
        .into_iter()
        .map(|(division, clubs)| DivisionCount { division, clubs })
        .collect();
    divisions.sort_by_key(|d| division_number(&d.division));

    DashboardSummary {
        total_clubs: clubs.len(),
        total_wins,
        total_goals,
        active_wallets: wallet_count,
        divisions,
    }
}

fn division_number(division: &str) -> i64 {
    division
        .trim_start_matches("Division ")
        .parse()
        .unwrap_or(0)
}

/// Sort orders for the club list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClubSort {
    #[default]
    Name,
    Division,
    Position,
    /// Descending, best first
    Points,
    Wallet,
}

impl std::str::FromStr for ClubSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ClubSort::Name),
            "division" => Ok(ClubSort::Division),
            "position" => Ok(ClubSort::Position),
            "points" => Ok(ClubSort::Points),
            "wallet" => Ok(ClubSort::Wallet),
            _ => Err(format!("Unknown sort order: {s}")),
        }
    }
}

/// Search and filter criteria for the club list
#[derive(Debug, Clone, Default)]
pub struct ClubFilter {
    /// Case-insensitive club-name substring
    pub search: Option<String>,
    /// Exact division label
    pub division: Option<String>,
}

/// Apply search, filter, and sort to the loaded clubs
pub fn club_list(
    clubs: &[ClubWithDetails],
    filter: &ClubFilter,
    sort: ClubSort,
) -> Vec<ClubWithDetails> {
    let search = filter.search.as_ref().map(|s| s.to_lowercase());

    let mut selected: Vec<ClubWithDetails> = clubs
        .iter()
        .filter(|club| {
            if let Some(search) = &search {
                if !club.club.name.to_lowercase().contains(search) {
                    return false;
                }
            }
            if let Some(division) = &filter.division {
                return club.division() == Some(division.as_str());
            }
            true
        })
        .cloned()
        .collect();

    match sort {
        ClubSort::Name => selected.sort_by(|a, b| a.club.name.cmp(&b.club.name)),
        ClubSort::Division => selected.sort_by(|a, b| {
            let div_a = a
                .current_tournament
                .as_ref()
                .map(|ct| ct.tournament.name.as_str())
                .unwrap_or("");
            let div_b = b
                .current_tournament
                .as_ref()
                .map(|ct| ct.tournament.name.as_str())
                .unwrap_or("");
            div_a.cmp(div_b)
        }),
        ClubSort::Position => selected.sort_by_key(|c| {
            c.current_tournament
                .as_ref()
                .map(|ct| ct.position)
                .unwrap_or(i64::MAX)
        }),
        ClubSort::Points => selected.sort_by_key(|c| {
            // Negate for descending order; missing stats sort last
            -c.active_season_stats().map(|s| s.points).unwrap_or(i64::MIN + 1)
        }),
        ClubSort::Wallet => selected.sort_by(|a, b| {
            a.wallet_name
                .as_deref()
                .unwrap_or("")
                .cmp(b.wallet_name.as_deref().unwrap_or(""))
        }),
    }
    selected
}

/// Distinct division labels across the loaded clubs, first-occurrence order
pub fn division_options(clubs: &[ClubWithDetails]) -> Vec<String> {
    let mut divisions = Vec::new();
    for club in clubs {
        if let Some(division) = club.division() {
            if !divisions.iter().any(|d| d == division) {
                divisions.push(division.to_string());
            }
        }
    }
    divisions
}

/// Merge a club-details fetch into the view model for one club.
///
/// A club already loaded in the store keeps every previously fetched field
/// and gains the fresh stats and tournament associations; an unknown club
/// id yields a minimal shape carrying only what the details query returns.
pub fn merge_club_details(
    existing: Option<&ClubWithDetails>,
    details: ClubDetails,
) -> ClubWithDetails {
    match existing {
        Some(loaded) => {
            let mut merged = loaded.clone();
            merged.stats = details.stats;
            if !details.tournaments.is_empty() {
                merged.current_tournament = current_tournament(&details.tournaments).cloned();
                merged.tournaments = details.tournaments;
            }
            merged
        }
        None => {
            let current = current_tournament(&details.tournaments).cloned();
            ClubWithDetails {
                club: Club {
                    id: details.club_id,
                    name: details.name,
                    city: String::new(),
                    owner_id: 0,
                    pattern: String::new(),
                    colours: Vec::new(),
                    is_inactive: false,
                    description: None,
                },
                tournaments: details.tournaments,
                stats: details.stats,
                current_tournament: current,
                wallet_name: None,
            }
        }
    }
}
