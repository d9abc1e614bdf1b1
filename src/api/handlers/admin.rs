use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use log::info;
use std::sync::Arc;

use super::AppState;
use crate::admin::{MatchForm, TeamForm, ValidationError};
use crate::api::models::{
    CreatedMatchResponse, CreatedTeamResponse, ErrorResponse, MatchSubmission, TeamSubmission,
};
use crate::remote::RatingService;

fn rejected(error: ValidationError) -> Response {
    info!("Rejected admin submission: {}", error);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub async fn post_match(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<MatchSubmission>,
) -> Response {
    let form = MatchForm {
        home_team_id: submission.home_team_id,
        away_team_id: submission.away_team_id,
        home_score: submission.home_score,
        away_score: submission.away_score,
        date: submission.date.unwrap_or_else(|| Utc::now().date_naive()),
    };

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(e) => return rejected(e),
    };

    let fetched = state.client.create_match(&payload).await;
    let live = fetched.is_live();
    let receipt = fetched.into_inner();

    (
        StatusCode::CREATED,
        Json(CreatedMatchResponse { live, id: receipt.id }),
    )
        .into_response()
}

pub async fn post_team(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<TeamSubmission>,
) -> Response {
    let form = TeamForm::new(&submission.name, &submission.league);

    let new_team = match form.validate() {
        Ok(team) => team,
        Err(e) => return rejected(e),
    };

    let fetched = state.client.create_team(&new_team).await;
    let live = fetched.is_live();
    let team = fetched.into_inner();

    (StatusCode::CREATED, Json(CreatedTeamResponse { live, team })).into_response()
}
