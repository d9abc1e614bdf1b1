//! Built-in sample data served when the rating service is unreachable.

use chrono::{NaiveDate, Utc};

use crate::domain::{EloRating, MatchReceipt, NewTeam, Team};

const FALLBACK_RATING: f64 = 1000.0;

pub fn sample_teams() -> Vec<Team> {
    vec![
        Team::new(1, "Manchester City", "Premier League", Some(2100.0)),
        Team::new(2, "Bayern Munich", "Bundesliga", Some(2080.0)),
        Team::new(3, "Real Madrid", "La Liga", Some(2070.0)),
        Team::new(4, "Barcelona", "La Liga", Some(2050.0)),
        Team::new(5, "Liverpool", "Premier League", Some(2040.0)),
        Team::new(6, "PSG", "Ligue 1", Some(2030.0)),
        Team::new(7, "Chelsea", "Premier League", Some(2020.0)),
        Team::new(8, "Juventus", "Serie A", Some(2010.0)),
        Team::new(9, "Arsenal", "Premier League", Some(2000.0)),
        Team::new(10, "AC Milan", "Serie A", Some(1990.0)),
    ]
}

pub fn sample_ratings() -> Vec<EloRating> {
    let months = [1, 2, 3];
    let series = [(1, [2000.0, 2050.0, 2100.0]), (2, [1980.0, 2030.0, 2080.0])];

    series
        .iter()
        .flat_map(|(team_id, ratings)| {
            months.iter().zip(ratings.iter()).filter_map(move |(month, rating)| {
                let date = NaiveDate::from_ymd_opt(2024, *month, 1)?.and_hms_opt(0, 0, 0)?;
                Some(EloRating {
                    team_id: *team_id,
                    rating: *rating,
                    date,
                })
            })
        })
        .collect()
}

/// Identifier for records the service never confirmed
pub fn local_id() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn synthetic_team(team: &NewTeam) -> Team {
    Team {
        id: local_id(),
        name: team.name.clone(),
        league: team.league.clone(),
        elo: Some(FALLBACK_RATING),
    }
}

pub fn synthetic_receipt() -> MatchReceipt {
    MatchReceipt { id: local_id() }
}
