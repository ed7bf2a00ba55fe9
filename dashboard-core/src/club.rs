//! Club, tournament, and season-statistics data model
//!
//! Every stats and tournament entry carries an explicit `season_id`; the
//! "current" entry is always selected by matching [`ACTIVE_SEASON_ID`],
//! never by list position.

use serde::{Deserialize, Serialize};

/// The season this dashboard is pinned to
pub const ACTIVE_SEASON_ID: i64 = 8;

/// A club entity as returned by the ownership query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub owner_id: i64,
    pub pattern: String,
    /// Ordered kit colour values
    pub colours: Vec<String>,
    pub is_inactive: bool,
    pub description: Option<String>,
}

/// A league/competition instance scoped to a season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub name: String,
    pub tournament_type: String,
    pub season_id: i64,
}

impl Tournament {
    /// Division label, derived from the tournament name ("Division 3 - Alpha" -> "Division 3")
    pub fn division(&self) -> &str {
        self.name.split(" - ").next().unwrap_or(&self.name)
    }

    /// Numeric division rank for ordering ("Division 3" -> 3; unparseable -> 0)
    pub fn division_number(&self) -> i64 {
        self.division()
            .trim_start_matches("Division ")
            .parse()
            .unwrap_or(0)
    }
}

/// A club's participation record in one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubTournament {
    pub tournament: Tournament,
    pub position: i64,
}

/// Season statistics for one club-tournament pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubStats {
    pub games: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub points: i64,
    pub goals: i64,
    pub goals_against: i64,
    /// Season this entry belongs to, flattened from the nested tournament
    pub season_id: i64,
}

/// A club enriched with tournaments, stats, and its source wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubWithDetails {
    pub club: Club,
    pub tournaments: Vec<ClubTournament>,
    pub stats: Vec<ClubStats>,
    pub current_tournament: Option<ClubTournament>,
    /// Label of the wallet whose ownership query produced this club
    pub wallet_name: Option<String>,
}

impl ClubWithDetails {
    /// Wrap a bare ownership result; stats arrive in the enrichment phase
    pub fn from_ownership(ownership: ClubOwnership, wallet_name: impl Into<String>) -> Self {
        let current_tournament = current_tournament(&ownership.tournaments).cloned();
        Self {
            club: ownership.club,
            tournaments: ownership.tournaments,
            stats: Vec::new(),
            current_tournament,
            wallet_name: Some(wallet_name.into()),
        }
    }

    pub fn id(&self) -> i64 {
        self.club.id
    }

    /// Stats entry for the active season, if any
    pub fn active_season_stats(&self) -> Option<&ClubStats> {
        self.stats
            .iter()
            .find(|s| s.season_id == ACTIVE_SEASON_ID)
    }

    /// Division label of the current tournament
    pub fn division(&self) -> Option<&str> {
        self.current_tournament
            .as_ref()
            .map(|ct| ct.tournament.division())
    }
}

/// Select the current tournament entry: the first association scoped to the
/// active season, falling back to the first entry when the season filter
/// yields nothing.
pub fn current_tournament(tournaments: &[ClubTournament]) -> Option<&ClubTournament> {
    tournaments
        .iter()
        .find(|ct| ct.tournament.season_id == ACTIVE_SEASON_ID)
        .or_else(|| tournaments.first())
}

/// Result of the ownership query: one club plus its tournament associations
#[derive(Debug, Clone, PartialEq)]
pub struct ClubOwnership {
    pub club: Club,
    pub tournaments: Vec<ClubTournament>,
}

/// Result of the per-club enrichment query
#[derive(Debug, Clone, PartialEq)]
pub struct ClubDetails {
    pub club_id: i64,
    pub name: String,
    pub stats: Vec<ClubStats>,
    pub tournaments: Vec<ClubTournament>,
}

/// One row of a tournament standings table
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRow {
    pub club_id: i64,
    pub club_name: String,
    pub city: String,
    pub position: i64,
}

/// Full standings for one tournament, as returned by the league query
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentStandings {
    pub name: String,
    pub season_id: i64,
    pub rows: Vec<StandingsRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tournament(name: &str, season_id: i64) -> ClubTournament {
        ClubTournament {
            tournament: Tournament {
                name: name.to_string(),
                tournament_type: "LEAGUE".to_string(),
                season_id,
            },
            position: 4,
        }
    }

    fn stats(season_id: i64, wins: i64) -> ClubStats {
        ClubStats {
            games: 10,
            wins,
            draws: 2,
            losses: 10 - wins - 2,
            points: wins * 3 + 2,
            goals: 14,
            goals_against: 9,
            season_id,
        }
    }

    fn club(id: i64) -> Club {
        Club {
            id,
            name: format!("Club {id}"),
            city: "Testville".to_string(),
            owner_id: 1,
            pattern: "stripes".to_string(),
            colours: vec!["#293170".to_string(), "#FF7C34".to_string()],
            is_inactive: false,
            description: None,
        }
    }

    #[test]
    fn test_division_split() {
        let t = Tournament {
            name: "Division 3 - Alpha".to_string(),
            tournament_type: "LEAGUE".to_string(),
            season_id: ACTIVE_SEASON_ID,
        };
        assert_eq!(t.division(), "Division 3");
        assert_eq!(t.division_number(), 3);

        let plain = Tournament {
            name: "Cup".to_string(),
            tournament_type: "CUP".to_string(),
            season_id: ACTIVE_SEASON_ID,
        };
        assert_eq!(plain.division(), "Cup");
        assert_eq!(plain.division_number(), 0);
    }

    #[test]
    fn test_current_tournament_prefers_active_season() {
        let ts = vec![
            tournament("Division 2 - Beta", 7),
            tournament("Division 3 - Alpha", ACTIVE_SEASON_ID),
        ];
        let current = current_tournament(&ts).unwrap();
        assert_eq!(current.tournament.name, "Division 3 - Alpha");
    }

    #[test]
    fn test_current_tournament_falls_back_to_first() {
        let ts = vec![
            tournament("Division 2 - Beta", 6),
            tournament("Division 1 - Gamma", 7),
        ];
        let current = current_tournament(&ts).unwrap();
        assert_eq!(current.tournament.name, "Division 2 - Beta");

        assert!(current_tournament(&[]).is_none());
    }

    #[test]
    fn test_active_season_stats_selects_by_season_id() {
        let mut details = ClubWithDetails::from_ownership(
            ClubOwnership {
                club: club(1),
                tournaments: vec![tournament("Division 3 - Alpha", ACTIVE_SEASON_ID)],
            },
            "foot-01",
        );
        details.stats = vec![stats(7, 6), stats(ACTIVE_SEASON_ID, 3)];

        let current = details.active_season_stats().unwrap();
        assert_eq!(current.wins, 3);
        assert_eq!(current.season_id, ACTIVE_SEASON_ID);
    }

    #[test]
    fn test_active_season_stats_empty_when_no_match() {
        let mut details = ClubWithDetails::from_ownership(
            ClubOwnership {
                club: club(1),
                tournaments: Vec::new(),
            },
            "foot-01",
        );
        details.stats = vec![stats(7, 6)];
        assert!(details.active_season_stats().is_none());
    }
}
