//! GraphQL documents for the Footium API
//!
//! All three operations are read-only queries; the dashboard never issues
//! mutations.

/// Clubs owned by a wallet address (case-insensitive match)
pub const CLUBS_BY_OWNER: &str = r#"
query GetClubsByOwnerAddress($address: String!) {
  owners(where: { address: { equals: $address, mode: insensitive } }) {
    clubs {
      id
      name
      city
      description
      ownerId
      pattern
      colours
      isInactive
      clubTournaments {
        tournament {
          name
          type
          seasonId
        }
        position
      }
    }
  }
}
"#;

/// Stats and tournament associations for a single club
pub const CLUB_DETAILS: &str = r#"
query GetClubDetails($clubId: Int!) {
  club(where: { id: $clubId }) {
    id
    name
    stats {
      games
      wins
      draws
      losses
      points
      goals
      goalsAgainst
      clubTournament {
        tournament {
          seasonId
        }
      }
    }
    clubTournaments {
      position
      tournament {
        name
        seasonId
      }
    }
  }
}
"#;

/// All tournaments with an exact name match, with full standings
pub const TOURNAMENTS_BY_NAME: &str = r#"
query GetClubsByTournament($tournamentName: String!) {
  tournaments(where: { name: { equals: $tournamentName } }) {
    id
    name
    seasonId
    clubTournaments {
      position
      club {
        id
        name
        city
      }
    }
  }
}
"#;
