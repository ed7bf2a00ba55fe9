//! Footium GraphQL client
//!
//! Thin reqwest wrapper over the three read-only queries the dashboard
//! issues. Nothing is cached; every call hits the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, instrument};

use dashboard_core::{ClubDetails, ClubOwnership, DashboardError, DashboardResult, TournamentStandings};

use crate::queries;
use crate::types::{ClubDetailsData, GraphQlResponse, OwnersData, TournamentsData};

/// Base URL for the Footium GraphQL API
const FOOTIUM_GRAPHQL_URL: &str = "https://live.api.footium.club/api/graphql";

/// The three Footium read operations the dashboard depends on.
///
/// Aggregators take this trait instead of the concrete client so they can be
/// exercised against scripted implementations in tests.
#[async_trait]
pub trait FootballApi: Send + Sync {
    /// Clubs owned by a wallet address (case-insensitive server-side match)
    async fn clubs_by_owner(&self, address: &str) -> DashboardResult<Vec<ClubOwnership>>;

    /// Stats and tournament associations for one club
    async fn club_details(&self, club_id: i64) -> DashboardResult<ClubDetails>;

    /// All tournaments with an exact name match, with full standings
    async fn tournaments_by_name(&self, name: &str)
        -> DashboardResult<Vec<TournamentStandings>>;
}

/// Footium API client
#[derive(Clone)]
pub struct FootiumClient {
    client: Client,
    graphql_url: String,
}

impl FootiumClient {
    /// Create a client against the production endpoint
    pub fn new() -> DashboardResult<Self> {
        Self::with_url(FOOTIUM_GRAPHQL_URL)
    }

    /// Create a client against a custom endpoint
    pub fn with_url(graphql_url: impl Into<String>) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DashboardError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            graphql_url: graphql_url.into(),
        })
    }

    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    /// POST one GraphQL query and unwrap the response envelope
    async fn query<T: DeserializeOwned>(
        &self,
        operation: &str,
        document: &str,
        variables: serde_json::Value,
    ) -> DashboardResult<T> {
        debug!("Posting {} to {}", operation, self.graphql_url);

        let response = self
            .client
            .post(&self.graphql_url)
            .json(&json!({ "query": document, "variables": variables }))
            .send()
            .await
            .map_err(|e| DashboardError::network(format!("{operation} request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::api(format!(
                "Footium API error ({status}) on {operation}: {body}"
            )));
        }

        let envelope: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| DashboardError::parse(format!("{operation} response: {e}")))?;

        if !envelope.errors.is_empty() {
            let messages: Vec<&str> = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect();
            return Err(DashboardError::api(format!(
                "{operation} returned errors: {}",
                messages.join("; ")
            )));
        }

        envelope
            .data
            .ok_or_else(|| DashboardError::parse(format!("{operation} response had no data")))
    }
}

#[async_trait]
impl FootballApi for FootiumClient {
    #[instrument(skip(self))]
    async fn clubs_by_owner(&self, address: &str) -> DashboardResult<Vec<ClubOwnership>> {
        let data: OwnersData = self
            .query(
                "GetClubsByOwnerAddress",
                queries::CLUBS_BY_OWNER,
                json!({ "address": address }),
            )
            .await?;

        // The address filter matches at most one owner; no owner means no clubs.
        let clubs = data
            .owners
            .into_iter()
            .next()
            .map(|owner| {
                owner
                    .clubs
                    .into_iter()
                    .map(|club| club.into_ownership())
                    .collect()
            })
            .unwrap_or_default();

        Ok(clubs)
    }

    #[instrument(skip(self))]
    async fn club_details(&self, club_id: i64) -> DashboardResult<ClubDetails> {
        let data: ClubDetailsData = self
            .query(
                "GetClubDetails",
                queries::CLUB_DETAILS,
                json!({ "clubId": club_id }),
            )
            .await?;

        data.club
            .map(|club| club.into_details())
            .ok_or_else(|| DashboardError::not_found(format!("club {club_id}")))
    }

    #[instrument(skip(self))]
    async fn tournaments_by_name(
        &self,
        name: &str,
    ) -> DashboardResult<Vec<TournamentStandings>> {
        let data: TournamentsData = self
            .query(
                "GetClubsByTournament",
                queries::TOURNAMENTS_BY_NAME,
                json!({ "tournamentName": name }),
            )
            .await?;

        Ok(data
            .tournaments
            .into_iter()
            .map(|t| t.into_standings())
            .collect())
    }
}
