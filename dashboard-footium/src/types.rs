//! Footium GraphQL response types
//!
//! These types mirror the API's camelCase wire shape and are converted to
//! dashboard-core types before leaving this crate.

use dashboard_core::{
    Club, ClubDetails, ClubOwnership, ClubStats, ClubTournament, StandingsRow, Tournament,
    TournamentStandings,
};
use serde::Deserialize;

/// GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    // A serde default attribute here would bound T: Default; an absent
    // key already deserializes to None
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Data payload of the clubs-by-owner query
#[derive(Debug, Clone, Deserialize)]
pub struct OwnersData {
    pub owners: Vec<WireOwner>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireOwner {
    pub clubs: Vec<WireClub>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireClub {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner_id: i64,
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub colours: Vec<String>,
    #[serde(default)]
    pub is_inactive: bool,
    #[serde(default)]
    pub club_tournaments: Vec<WireClubTournament>,
}

impl WireClub {
    pub fn into_ownership(self) -> ClubOwnership {
        let tournaments = self
            .club_tournaments
            .into_iter()
            .map(WireClubTournament::into_club_tournament)
            .collect();
        ClubOwnership {
            club: Club {
                id: self.id,
                name: self.name,
                city: self.city,
                owner_id: self.owner_id,
                pattern: self.pattern,
                colours: self.colours,
                is_inactive: self.is_inactive,
                description: self.description,
            },
            tournaments,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireClubTournament {
    pub tournament: WireTournament,
    pub position: i64,
}

impl WireClubTournament {
    pub fn into_club_tournament(self) -> ClubTournament {
        ClubTournament {
            tournament: Tournament {
                name: self.tournament.name,
                tournament_type: self.tournament.tournament_type.unwrap_or_default(),
                season_id: self.tournament.season_id,
            },
            position: self.position,
        }
    }
}

/// Tournament as nested under club queries; the details query omits `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTournament {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    #[serde(default)]
    pub tournament_type: Option<String>,
    pub season_id: i64,
}

/// Data payload of the club-details query
#[derive(Debug, Clone, Deserialize)]
pub struct ClubDetailsData {
    pub club: Option<WireClubDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireClubDetails {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<WireStats>,
    #[serde(default)]
    pub club_tournaments: Vec<WireClubTournament>,
}

impl WireClubDetails {
    pub fn into_details(self) -> ClubDetails {
        ClubDetails {
            club_id: self.id,
            name: self.name,
            stats: self.stats.into_iter().map(WireStats::into_stats).collect(),
            tournaments: self
                .club_tournaments
                .into_iter()
                .map(WireClubTournament::into_club_tournament)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireStats {
    pub games: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub points: i64,
    pub goals: i64,
    pub goals_against: i64,
    #[serde(default)]
    pub club_tournament: Option<WireStatsTournament>,
}

impl WireStats {
    /// Flatten the nested season marker onto the stats entry; entries with
    /// no tournament association get season 0, which never matches the
    /// active season.
    pub fn into_stats(self) -> ClubStats {
        let season_id = self
            .club_tournament
            .as_ref()
            .map(|ct| ct.tournament.season_id)
            .unwrap_or(0);
        ClubStats {
            games: self.games,
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
            points: self.points,
            goals: self.goals,
            goals_against: self.goals_against,
            season_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireStatsTournament {
    pub tournament: WireSeasonRef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSeasonRef {
    pub season_id: i64,
}

/// Data payload of the tournaments-by-name query
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentsData {
    #[serde(default)]
    pub tournaments: Vec<WireTournamentStandings>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTournamentStandings {
    pub name: String,
    pub season_id: i64,
    #[serde(default)]
    pub club_tournaments: Vec<WireStandingsEntry>,
}

impl WireTournamentStandings {
    pub fn into_standings(self) -> TournamentStandings {
        TournamentStandings {
            name: self.name,
            season_id: self.season_id,
            rows: self
                .club_tournaments
                .into_iter()
                .map(|entry| StandingsRow {
                    club_id: entry.club.id,
                    club_name: entry.club.name,
                    city: entry.club.city,
                    position: entry.position,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireStandingsEntry {
    pub position: i64,
    pub club: WireStandingsClub,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireStandingsClub {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::ACTIVE_SEASON_ID;

    #[test]
    fn test_owner_clubs_deserialize_and_convert() {
        // Double-hash delimiters: the colour values contain `"#`
        let raw = r##"{
            "owners": [{
                "clubs": [{
                    "id": 42,
                    "name": "Crimson Athletic",
                    "city": "Redport",
                    "description": null,
                    "ownerId": 7,
                    "pattern": "hoops",
                    "colours": ["#aa0000", "#ffffff"],
                    "isInactive": false,
                    "clubTournaments": [
                        {"tournament": {"name": "Division 4 - Delta", "type": "LEAGUE", "seasonId": 8}, "position": 9}
                    ]
                }]
            }]
        }"##;
        let data: OwnersData = serde_json::from_str(raw).unwrap();
        let ownership = data.owners[0].clubs[0].clone().into_ownership();
        assert_eq!(ownership.club.id, 42);
        assert_eq!(ownership.club.colours.len(), 2);
        assert_eq!(ownership.tournaments[0].tournament.season_id, 8);
        assert_eq!(ownership.tournaments[0].position, 9);
    }

    #[test]
    fn test_details_flatten_season_marker() {
        let raw = r#"{
            "club": {
                "id": 42,
                "name": "Crimson Athletic",
                "stats": [
                    {"games": 12, "wins": 5, "draws": 3, "losses": 4, "points": 18,
                     "goals": 17, "goalsAgainst": 15,
                     "clubTournament": {"tournament": {"seasonId": 8}}},
                    {"games": 20, "wins": 11, "draws": 2, "losses": 7, "points": 35,
                     "goals": 30, "goalsAgainst": 22,
                     "clubTournament": {"tournament": {"seasonId": 7}}}
                ],
                "clubTournaments": [
                    {"position": 3, "tournament": {"name": "Division 4 - Delta", "seasonId": 8}}
                ]
            }
        }"#;
        let data: ClubDetailsData = serde_json::from_str(raw).unwrap();
        let details = data.club.unwrap().into_details();
        assert_eq!(details.stats[0].season_id, ACTIVE_SEASON_ID);
        assert_eq!(details.stats[1].season_id, 7);
        // The details query carries no tournament type
        assert_eq!(details.tournaments[0].tournament.tournament_type, "");
    }

    #[test]
    fn test_stats_without_association_never_match_active_season() {
        let raw = r#"{"games": 1, "wins": 1, "draws": 0, "losses": 0,
                      "points": 3, "goals": 2, "goalsAgainst": 0}"#;
        let stats: WireStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.into_stats().season_id, 0);
    }

    #[test]
    fn test_standings_convert() {
        let raw = r#"{
            "tournaments": [{
                "id": 1,
                "name": "Division 4 - Delta",
                "seasonId": 8,
                "clubTournaments": [
                    {"position": 2, "club": {"id": 10, "name": "Harbour FC", "city": "Dockside"}},
                    {"position": 1, "club": {"id": 11, "name": "Summit United", "city": "Highfield"}}
                ]
            }]
        }"#;
        let data: TournamentsData = serde_json::from_str(raw).unwrap();
        let standings = data.tournaments[0].clone().into_standings();
        assert_eq!(standings.season_id, 8);
        assert_eq!(standings.rows.len(), 2);
        assert_eq!(standings.rows[0].club_name, "Harbour FC");
    }

    #[test]
    fn test_graphql_error_envelope() {
        let raw = r#"{"data": null, "errors": [{"message": "boom"}]}"#;
        let envelope: GraphQlResponse<OwnersData> = serde_json::from_str(raw).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors[0].message, "boom");

        // Some servers omit the data key entirely on errors
        let raw = r#"{"errors": [{"message": "boom"}]}"#;
        let envelope: GraphQlResponse<OwnersData> = serde_json::from_str(raw).unwrap();
        assert!(envelope.data.is_none());
    }
}
