use serde::Serialize;

use crate::domain::{ChartPoint, EloRating, RatingHistory, Team, TeamId, Trend};

/// Everything shown on a team's page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetail {
    pub team: Team,
    pub history: Vec<ChartPoint>,
    pub trend: Option<Trend>,
}

impl TeamDetail {
    /// `None` when `team_id` is not part of the snapshot
    pub fn build(teams: &[Team], ratings: &[EloRating], team_id: TeamId) -> Option<Self> {
        let team = teams.iter().find(|t| t.id == team_id)?.clone();
        let history = RatingHistory::for_team(ratings, team_id);

        Some(Self {
            team,
            history: history.chart_points(),
            trend: history.trend(),
        })
    }

    /// Lower and upper chart bound, padded by 20 points either side
    pub fn chart_domain(&self) -> Option<(i64, i64)> {
        let min = self.history.iter().map(|p| p.rating).min()?;
        let max = self.history.iter().map(|p| p.rating).max()?;
        Some((min.saturating_sub(20), max.saturating_add(20)))
    }
}
