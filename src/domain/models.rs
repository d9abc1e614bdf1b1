use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type TeamId = i64;

/// Team as served by the rating service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub league: String,
    #[serde(default)]
    pub elo: Option<f64>,
}

impl Team {
    pub fn new(id: TeamId, name: &str, league: &str, elo: Option<f64>) -> Self {
        Self {
            id,
            name: name.to_string(),
            league: league.to_string(),
            elo,
        }
    }

    /// Rating used for ordering; unrated teams count as 0
    pub fn sort_rating(&self) -> f64 {
        self.elo.unwrap_or(0.0)
    }

    pub fn league_label(&self) -> &str {
        if self.league.trim().is_empty() {
            "Unknown"
        } else {
            &self.league
        }
    }
}

/// One point of a team's rating history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EloRating {
    pub team_id: TeamId,
    pub rating: f64,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
}

/// Body of `POST /teams/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub league: String,
}

/// Body of `POST /matches/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMatch {
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub date: NaiveDate,
}

/// Response of `POST /matches/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReceipt {
    pub id: i64,
}

/// Rating timestamps arrive either as plain dates or as date-times.
pub mod timestamp {
    use super::*;

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid rating date: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_without_elo_is_unrated() {
        let team: Team =
            serde_json::from_str(r#"{"id": 4, "name": "Ajax", "league": "Eredivisie", "elo_ratings": []}"#)
                .unwrap();

        assert_eq!(team.elo, None);
        assert_eq!(team.sort_rating(), 0.0);
    }

    #[test]
    fn test_rating_date_accepts_date_and_datetime() {
        let plain: EloRating =
            serde_json::from_str(r#"{"team_id": 1, "rating": 2000.0, "date": "2024-01-01"}"#).unwrap();
        let full: EloRating =
            serde_json::from_str(r#"{"team_id": 1, "rating": 2000.0, "date": "2024-01-01T12:30:00"}"#)
                .unwrap();

        assert!(plain.date < full.date);
        assert_eq!(plain.date.date(), full.date.date());
    }

    #[test]
    fn test_rating_date_rejects_garbage() {
        let parsed = serde_json::from_str::<EloRating>(r#"{"team_id": 1, "rating": 1.0, "date": "soon"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_match_date_is_plain_calendar_date() {
        let payload = NewMatch {
            home_team_id: 1,
            away_team_id: 2,
            home_score: 3,
            away_score: 0,
            date: NaiveDate::from_ymd_opt(2024, 5, 19).unwrap(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["date"], "2024-05-19");
    }

    #[test]
    fn test_blank_league_is_unknown() {
        let team = Team::new(1, "Nowhere FC", "  ", None);
        assert_eq!(team.league_label(), "Unknown");
    }
}
