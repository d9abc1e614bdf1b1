use anyhow::Result;
use log::{info, warn};
use serde::Deserialize;
use std::future::Future;

use super::fallback;
use super::fetched::Fetched;
use crate::config::RemoteSettings;
use crate::domain::{EloRating, MatchReceipt, NewMatch, NewTeam, Team};
use crate::http::JsonClient;

/// Operations the presentation layer needs from the rating service.
///
/// Implementations never fail: when the service is unavailable they return
/// `Fetched::Fallback` with substitute data.
pub trait RatingService {
    fn get_teams(&self) -> impl Future<Output = Fetched<Vec<Team>>> + Send;

    fn get_elo_ratings(&self) -> impl Future<Output = Fetched<Vec<EloRating>>> + Send;

    fn create_team(&self, team: &NewTeam) -> impl Future<Output = Fetched<Team>> + Send;

    fn create_match(&self, payload: &NewMatch) -> impl Future<Output = Fetched<MatchReceipt>> + Send;
}

// A missing or null list is an empty list
#[derive(Deserialize)]
struct TeamsEnvelope {
    #[serde(default)]
    teams: Option<Vec<Team>>,
}

#[derive(Deserialize)]
struct RatingsEnvelope {
    #[serde(default)]
    elo_ratings: Option<Vec<EloRating>>,
}

/// HTTP client for the rating service
#[derive(Clone)]
pub struct RatingClient {
    base_url: String,
    http: JsonClient,
}

impl RatingClient {
    pub fn new(settings: &RemoteSettings) -> Result<Self> {
        let http = JsonClient::new(settings.user_agent, settings.timeout_secs)?;
        info!("Rating service at {}", settings.base_url);
        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // --- Helper Methods ---

    fn build_url(&self, resource: &str) -> String {
        format!("{}/{}/", self.base_url, resource)
    }

    async fn fetch_teams(&self) -> Result<Vec<Team>> {
        let url = self.build_url("teams");
        let envelope: TeamsEnvelope = self.http.get_json(&url, "team list").await?;
        Ok(envelope.teams.unwrap_or_default())
    }

    async fn fetch_ratings(&self) -> Result<Vec<EloRating>> {
        let url = self.build_url("elo-ratings");
        let envelope: RatingsEnvelope = self.http.get_json(&url, "rating list").await?;
        Ok(envelope.elo_ratings.unwrap_or_default())
    }

    async fn post_team(&self, team: &NewTeam) -> Result<Team> {
        let url = self.build_url("teams");
        self.http.post_json(&url, team, "created team").await
    }

    async fn post_match(&self, payload: &NewMatch) -> Result<MatchReceipt> {
        let url = self.build_url("matches");
        self.http.post_json(&url, payload, "match receipt").await
    }
}

impl RatingService for RatingClient {
    async fn get_teams(&self) -> Fetched<Vec<Team>> {
        match self.fetch_teams().await {
            Ok(teams) => {
                info!("Loaded {} teams", teams.len());
                Fetched::Live(teams)
            }
            Err(e) => {
                warn!("Fetching teams failed, using sample data: {:#}", e);
                Fetched::Fallback(fallback::sample_teams())
            }
        }
    }

    async fn get_elo_ratings(&self) -> Fetched<Vec<EloRating>> {
        match self.fetch_ratings().await {
            Ok(ratings) => {
                info!("Loaded {} rating samples", ratings.len());
                Fetched::Live(ratings)
            }
            Err(e) => {
                warn!("Fetching ratings failed, using sample data: {:#}", e);
                Fetched::Fallback(fallback::sample_ratings())
            }
        }
    }

    async fn create_team(&self, team: &NewTeam) -> Fetched<Team> {
        match self.post_team(team).await {
            Ok(created) => {
                info!("Created team {} ({})", created.name, created.id);
                Fetched::Live(created)
            }
            Err(e) => {
                warn!("Creating team {:?} failed, keeping it locally: {:#}", team.name, e);
                Fetched::Fallback(fallback::synthetic_team(team))
            }
        }
    }

    async fn create_match(&self, payload: &NewMatch) -> Fetched<MatchReceipt> {
        match self.post_match(payload).await {
            Ok(receipt) => {
                info!("Recorded match {}", receipt.id);
                Fetched::Live(receipt)
            }
            Err(e) => {
                warn!("Submitting match failed, keeping it locally: {:#}", e);
                Fetched::Fallback(fallback::synthetic_receipt())
            }
        }
    }
}
