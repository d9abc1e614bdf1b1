use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{NewMatch, NewTeam, TeamId};

/// Problems caught locally, before anything is sent to the rating service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select both home and away teams")]
    MissingTeam,
    #[error("Home and away teams must be different")]
    SameTeam,
    #[error("Please enter both scores")]
    MissingScore,
    #[error("Please fill in both team name and league")]
    MissingTeamDetails,
}

/// Match entry form; `None` means the field was left blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchForm {
    pub home_team_id: Option<TeamId>,
    pub away_team_id: Option<TeamId>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub date: NaiveDate,
}

impl MatchForm {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            home_team_id: None,
            away_team_id: None,
            home_score: None,
            away_score: None,
            date: today,
        }
    }

    pub fn validate(&self) -> Result<NewMatch, ValidationError> {
        let (Some(home_team_id), Some(away_team_id)) = (self.home_team_id, self.away_team_id) else {
            return Err(ValidationError::MissingTeam);
        };
        if home_team_id == away_team_id {
            return Err(ValidationError::SameTeam);
        }
        let (Some(home_score), Some(away_score)) = (self.home_score, self.away_score) else {
            return Err(ValidationError::MissingScore);
        };

        Ok(NewMatch {
            home_team_id,
            away_team_id,
            home_score,
            away_score,
            date: self.date,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamForm {
    pub name: String,
    pub league: String,
}

impl TeamForm {
    pub fn new(name: &str, league: &str) -> Self {
        Self {
            name: name.to_string(),
            league: league.to_string(),
        }
    }

    pub fn validate(&self) -> Result<NewTeam, ValidationError> {
        let name = self.name.trim();
        let league = self.league.trim();
        if name.is_empty() || league.is_empty() {
            return Err(ValidationError::MissingTeamDetails);
        }

        Ok(NewTeam {
            name: name.to_string(),
            league: league.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 17).unwrap()
    }

    fn filled(home: TeamId, away: TeamId) -> MatchForm {
        MatchForm {
            home_team_id: Some(home),
            away_team_id: Some(away),
            home_score: Some(1),
            away_score: Some(1),
            date: today(),
        }
    }

    #[test]
    fn test_valid_match_becomes_payload() {
        let payload = filled(3, 4).validate().unwrap();

        assert_eq!(payload.home_team_id, 3);
        assert_eq!(payload.away_team_id, 4);
        assert_eq!(payload.date, today());
    }

    #[test]
    fn test_missing_selector_is_rejected() {
        let mut form = filled(3, 4);
        form.away_team_id = None;

        assert_eq!(form.validate(), Err(ValidationError::MissingTeam));
        assert_eq!(MatchForm::blank(today()).validate(), Err(ValidationError::MissingTeam));
    }

    #[test]
    fn test_same_team_is_rejected() {
        assert_eq!(filled(5, 5).validate(), Err(ValidationError::SameTeam));
    }

    #[test]
    fn test_blank_score_is_rejected() {
        let mut form = filled(1, 2);
        form.home_score = None;

        assert_eq!(form.validate(), Err(ValidationError::MissingScore));
    }

    #[test]
    fn test_team_form_trims_fields() {
        let team = TeamForm::new("  Girona ", " La Liga").validate().unwrap();

        assert_eq!(team.name, "Girona");
        assert_eq!(team.league, "La Liga");
    }

    #[test]
    fn test_blank_team_fields_are_rejected() {
        assert_eq!(
            TeamForm::new("Girona", "   ").validate(),
            Err(ValidationError::MissingTeamDetails)
        );
        assert_eq!(
            TeamForm::default().validate(),
            Err(ValidationError::MissingTeamDetails)
        );
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            ValidationError::SameTeam.to_string(),
            "Home and away teams must be different"
        );
    }
}
