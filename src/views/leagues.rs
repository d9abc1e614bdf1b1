use colored::Colorize;
use std::fmt::Write as _;

use super::{fit, format_rating};
use crate::board::LeagueGroup;
use crate::domain::Team;

const TOP_GLOBAL: usize = 10;

fn medal(global_rank: usize) -> &'static str {
    match global_rank {
        1 => "🏆",
        2 => "🥈",
        3 => "🥉",
        _ => "  ",
    }
}

pub fn render_leagues(groups: &[LeagueGroup]) -> String {
    let mut out = String::new();

    if groups.is_empty() {
        out.push_str("No teams found\n");
        return out;
    }

    for group in groups {
        let _ = writeln!(out, "{} ({} teams)", group.name.bold(), group.rows.len());
        let _ = writeln!(out, "{:>6}  {:>8}    {}  {:>6}", "League", "Global", fit("Team", 28), "Elo");

        for row in &group.rows {
            let top = row.global_rank <= TOP_GLOBAL;
            let marker = if top { "Top 10".cyan().to_string() } else { String::new() };
            let _ = writeln!(
                out,
                "{:>6}  {:>6} {}  {}  {:>6}  {}",
                row.league_rank,
                row.global_rank,
                medal(row.global_rank),
                fit(&row.team.name, 28),
                row.team.elo.map_or("N/A".to_string(), |e| e.round().to_string()),
                marker,
            );
        }
        out.push('\n');
    }

    out
}

pub fn render_league_leaders(leaders: &[(String, Team)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "League leaders".bold());
    for (league, team) in leaders {
        let _ = writeln!(
            out,
            "  {}  {}  {:>8}",
            fit(league, 20),
            fit(&team.name, 28),
            format_rating(team.elo)
        );
    }
    out
}
