use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::remote::RatingClient;

pub mod admin;
pub mod board;

pub struct AppState {
    pub client: RatingClient,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct BoardParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}
