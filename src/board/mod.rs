//! Client-side presentation pipeline: filter, sort, paginate and group a
//! fetched team snapshot. Everything here is pure and synchronous.

mod detail;
mod filter;
mod leaderboard;
mod leagues;
mod ranking;
mod sort;
mod state;

pub use detail::TeamDetail;
pub use filter::filter_teams;
pub use leaderboard::{LeaderboardPage, RankedTeam, arrange, leaderboard};
pub use leagues::{LeagueGroup, LeagueRow, league_leaders, league_view, partition_by_league};
pub use ranking::Ranking;
pub use sort::{compare_text, sort_by_name, sort_by_rating_desc, sort_teams};
pub use state::{BoardState, SortDirection, SortField};
