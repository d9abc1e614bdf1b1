use chrono::NaiveDateTime;
use serde::Serialize;

use super::models::{EloRating, TeamId};

/// Direction of the most recent rating change
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub change: f64,
}

/// A single plotted point of a history chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub rating: i64,
    #[serde(serialize_with = "crate::domain::models::timestamp::serialize")]
    pub date: NaiveDateTime,
}

/// Rating samples of one team, oldest first
#[derive(Debug, Clone, Default)]
pub struct RatingHistory {
    samples: Vec<EloRating>,
}

impl RatingHistory {
    /// Pick the samples of `team_id` and order them by time.
    /// The service does not guarantee any order.
    pub fn for_team(ratings: &[EloRating], team_id: TeamId) -> Self {
        let mut samples: Vec<EloRating> = ratings
            .iter()
            .filter(|r| r.team_id == team_id)
            .cloned()
            .collect();
        samples.sort_by_key(|r| r.date);
        Self { samples }
    }

    pub fn samples(&self) -> &[EloRating] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&EloRating> {
        self.samples.last()
    }

    /// Change between the last two samples
    pub fn trend(&self) -> Option<Trend> {
        let [.., previous, recent] = self.samples.as_slice() else {
            return None;
        };
        let change = recent.rating - previous.rating;
        let direction = if change > 0.0 {
            TrendDirection::Up
        } else if change < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        };
        Some(Trend { direction, change })
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.samples
            .iter()
            .map(|r| ChartPoint {
                label: r.date.format("%Y-%m-%d").to_string(),
                rating: r.rating.round() as i64,
                date: r.date,
            })
            .collect()
    }
}
