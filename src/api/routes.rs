use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    admin::{post_match, post_team},
    board::{get_leaderboard, get_leagues, get_team_detail},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/leagues", get(get_leagues))
        .route("/api/team/:id", get(get_team_detail))
        .route("/api/admin/teams", post(post_team))
        .route("/api/admin/matches", post(post_match))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::remote::RatingClient;
    use axum::{
        Json,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn spawn_upstream() -> String {
        let upstream = Router::new()
            .route(
                "/api/teams/",
                get(|| async {
                    Json(json!({"teams": [
                        {"id": 21, "name": "Benfica", "league": "Liga Portugal", "elo": 1850.0},
                        {"id": 22, "name": "Porto", "league": "Liga Portugal", "elo": 1870.0},
                        {"id": 23, "name": "Ajax", "league": "Eredivisie", "elo": 1790.0}
                    ]}))
                }),
            )
            .route(
                "/api/elo-ratings/",
                get(|| async {
                    Json(json!({"elo_ratings": [
                        {"team_id": 22, "rating": 1870.0, "date": "2024-02-01"},
                        {"team_id": 22, "rating": 1855.0, "date": "2024-01-01"}
                    ]}))
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    async fn closed_port() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/api", addr)
    }

    fn app(base_url: &str) -> Router {
        let mut config = AppConfig::new();
        config.remote = config.remote.with_base_url(base_url).with_timeout_secs(5);
        let client = RatingClient::new(&config.remote).unwrap();
        create_router(Arc::new(AppState { client, config }))
    }

    async fn call(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_leaderboard_from_live_service() {
        let router = app(&spawn_upstream().await);

        let (status, body) = call(router, get_request("/api/leaderboard?search=liga")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["connection"], "connected");
        assert_eq!(body["total"], 2);
        assert_eq!(body["items"][0]["team"]["name"], "Porto");
        assert_eq!(body["items"][0]["rank"], 1);
        assert_eq!(body["sortBy"], "elo");
    }

    #[tokio::test]
    async fn test_leaderboard_reports_fallback() {
        let router = app(&closed_port().await);

        let (status, body) = call(router, get_request("/api/leaderboard?sort_by=name&page_size=4&page=3")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["connection"], "disconnected");
        assert_eq!(body["total"], 10);
        assert_eq!(body["page"], 3);
        assert_eq!(body["order"], "asc");
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_leagues_route_groups_teams() {
        let router = app(&spawn_upstream().await);

        let (_, body) = call(router, get_request("/api/leagues")).await;

        assert_eq!(body["leagues"][0]["name"], "Liga Portugal");
        assert_eq!(body["leagues"][0]["rows"][1]["globalRank"], 2);
        assert_eq!(body["leaders"][0]["league"], "Eredivisie");
    }

    #[tokio::test]
    async fn test_team_detail_sorts_history() {
        let router = app(&spawn_upstream().await);

        let (status, body) = call(router, get_request("/api/team/22")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["team"]["name"], "Porto");
        assert_eq!(body["history"][0]["rating"], 1855);
        assert_eq!(body["trend"]["direction"], "up");
    }

    #[tokio::test]
    async fn test_unknown_team_is_not_found() {
        let router = app(&spawn_upstream().await);

        let (status, body) = call(router, get_request("/api/team/404")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Team 404 not found");
    }

    #[tokio::test]
    async fn test_same_team_match_is_bad_request() {
        let router = app(&closed_port().await);
        let body = json!({"home_team_id": 3, "away_team_id": 3, "home_score": 1, "away_score": 0});

        let (status, body) = call(router, post_request("/api/admin/matches", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Home and away teams must be different");
    }

    #[tokio::test]
    async fn test_team_created_locally_when_service_is_down() {
        let router = app(&closed_port().await);
        let body = json!({"name": " Sporting ", "league": "Liga Portugal"});

        let (status, body) = call(router, post_request("/api/admin/teams", body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["live"], false);
        assert_eq!(body["team"]["name"], "Sporting");
        assert_eq!(body["team"]["elo"], 1000.0);
    }
}
