use colored::Colorize;
use std::fmt::Write as _;

use super::{fit, format_rating};
use crate::admin::{Outcome, ValidationError};
use crate::domain::Team;
use crate::pagination::PageWindow;

pub fn render_admin_teams(window: &PageWindow, teams: &[Team]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {}  {}  {:>8}", "Id", fit("Team", 28), fit("League", 20), "Elo");
    for team in teams {
        let _ = writeln!(
            out,
            "{:>6}  {}  {}  {:>8}",
            team.id,
            fit(&team.name, 28),
            fit(team.league_label(), 20),
            format_rating(team.elo)
        );
    }
    let _ = writeln!(
        out,
        "Page {} of {} ({} teams)",
        window.page(),
        window.total_pages().max(1),
        window.total_items()
    );
    out
}

pub fn render_outcome(outcome: &Outcome) -> String {
    if outcome.is_live() {
        format!("{} {}", "Success:".green().bold(), outcome.message())
    } else {
        format!("{} {}", "Warning:".yellow().bold(), outcome.message())
    }
}

pub fn render_validation(error: &ValidationError) -> String {
    format!("{} {}", "Error:".red().bold(), error)
}
