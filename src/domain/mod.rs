mod history;
pub mod models;

pub use history::{ChartPoint, RatingHistory, Trend, TrendDirection};
pub use models::*;
