//! Terminal rendering of the board, league, team and admin screens.

mod admin;
mod leaderboard;
mod leagues;
mod team;

pub use admin::{render_admin_teams, render_outcome, render_validation};
pub use leaderboard::render_leaderboard;
pub use leagues::{render_league_leaders, render_leagues};
pub use team::render_team_detail;

use colored::Colorize;

use crate::pagination::PageLink;
use crate::remote::ConnectionStatus;

/// Rounded rating with thousands separators, or `N/A` when unrated
pub fn format_rating(elo: Option<f64>) -> String {
    let Some(value) = elo else {
        return "N/A".to_string();
    };

    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Advisory line shown above every screen
pub fn connection_banner(status: ConnectionStatus) -> String {
    match status {
        ConnectionStatus::Connected => format!("{}", "● Connected to rating service".green()),
        ConnectionStatus::Disconnected => format!(
            "{}",
            "▲ Unable to reach the rating service. Showing sample data.".yellow()
        ),
    }
}

/// `‹ 1 … 4 [5] 6 … 9 ›`
pub fn render_page_links(links: &[PageLink], current: usize) -> String {
    let parts: Vec<String> = links
        .iter()
        .map(|link| match link {
            PageLink::Page(page) if *page == current => format!("[{page}]"),
            PageLink::Page(page) => page.to_string(),
            PageLink::Gap => "…".to_string(),
        })
        .collect();
    format!("‹ {} ›", parts.join(" "))
}

/// Pad or cut `text` to exactly `width` characters
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    } else {
        format!("{text}{}", " ".repeat(width - count))
    }
}
