use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, BoardParams, SearchParams};
use crate::api::models::{
    ErrorResponse, LeaderEntry, LeaderboardResponse, LeaguesResponse, TeamDetailResponse,
};
use crate::board::{self, BoardState, SortDirection, SortField, TeamDetail};
use crate::remote::RatingService;

const MAX_PAGE_SIZE: usize = 100;

fn board_state(params: &BoardParams, default_page_size: usize) -> BoardState {
    let sort_by = params
        .sort_by
        .as_deref()
        .and_then(|s| s.parse::<SortField>().ok())
        .unwrap_or(SortField::Elo);

    let order = params
        .order
        .as_deref()
        .and_then(|s| s.parse::<SortDirection>().ok())
        .unwrap_or_else(|| sort_by.natural_direction());

    let page_size = params
        .page_size
        .unwrap_or(default_page_size)
        .clamp(1, MAX_PAGE_SIZE);

    BoardState::new(page_size)
        .with_search(params.search.as_deref().unwrap_or(""))
        .with_sort(sort_by, order)
        .with_page(params.page.unwrap_or(1))
}

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BoardParams>,
) -> impl IntoResponse {
    let view_state = board_state(&params, state.config.board.page_size);

    let fetched = state.client.get_teams().await;
    let connection = fetched.connection();
    let page = board::leaderboard(fetched.data(), &view_state, state.config.board.highlight_top);

    Json(LeaderboardResponse {
        connection,
        sort_by: view_state.sort_field.to_string(),
        order: view_state.sort_direction.to_string(),
        page,
    })
}

pub async fn get_leagues(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let search = params.search.unwrap_or_default();

    let fetched = state.client.get_teams().await;
    let connection = fetched.connection();
    let teams = fetched.into_inner();

    let leagues = board::league_view(&teams, &search);
    let leaders = board::league_leaders(&teams)
        .into_iter()
        .map(|(league, team)| LeaderEntry { league, team })
        .collect();

    Json(LeaguesResponse {
        connection,
        leagues,
        leaders,
    })
}

pub async fn get_team_detail(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<i64>,
) -> impl IntoResponse {
    let (teams, ratings) = tokio::join!(state.client.get_teams(), state.client.get_elo_ratings());
    let connection = teams.connection().combine(ratings.connection());

    match TeamDetail::build(teams.data(), ratings.data(), team_id) {
        Some(detail) => Json(TeamDetailResponse { connection, detail }).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Team {} not found", team_id),
            }),
        )
            .into_response(),
    }
}
