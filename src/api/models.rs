use serde::{Deserialize, Serialize};

use crate::board::{LeaderboardPage, LeagueGroup, TeamDetail};
use crate::domain::Team;
use crate::remote::ConnectionStatus;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub connection: ConnectionStatus,
    pub sort_by: String,
    pub order: String,
    #[serde(flatten)]
    pub page: LeaderboardPage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderEntry {
    pub league: String,
    pub team: Team,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaguesResponse {
    pub connection: ConnectionStatus,
    pub leagues: Vec<LeagueGroup>,
    pub leaders: Vec<LeaderEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetailResponse {
    pub connection: ConnectionStatus,
    #[serde(flatten)]
    pub detail: TeamDetail,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTeamResponse {
    pub live: bool,
    pub team: Team,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedMatchResponse {
    pub live: bool,
    pub id: i64,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Admin match form as posted by a client; every field may be blank
#[derive(Deserialize)]
pub struct MatchSubmission {
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub date: Option<chrono::NaiveDate>,
}

#[derive(Deserialize)]
pub struct TeamSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub league: String,
}
