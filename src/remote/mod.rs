mod client;
pub mod fallback;
mod fetched;

pub use client::{RatingClient, RatingService};
pub use fetched::{ConnectionStatus, Fetched};
