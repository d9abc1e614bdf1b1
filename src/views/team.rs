use colored::Colorize;
use std::fmt::Write as _;

use super::format_rating;
use crate::board::TeamDetail;
use crate::domain::TrendDirection;

const BAR_WIDTH: i64 = 40;

fn render_trend(detail: &TeamDetail) -> String {
    let Some(trend) = &detail.trend else {
        return String::new();
    };
    let change = trend.change.round() as i64;
    match trend.direction {
        TrendDirection::Up => format!("↑ +{change}").green().to_string(),
        TrendDirection::Down => format!("↓ {change}").red().to_string(),
        TrendDirection::Stable => "→ 0".dimmed().to_string(),
    }
}

fn render_chart(detail: &TeamDetail, out: &mut String) {
    let Some((low, high)) = detail.chart_domain() else {
        out.push_str("No Elo history available\n");
        return;
    };
    let span = high.saturating_sub(low).max(1);

    for point in &detail.history {
        let filled = (point.rating.saturating_sub(low) as i128 * BAR_WIDTH as i128 / span as i128)
            .clamp(0, BAR_WIDTH as i128) as usize;
        let _ = writeln!(out, "{}  {} {}", point.label, "█".repeat(filled), point.rating);
    }
}

pub fn render_team_detail(detail: &TeamDetail) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", detail.team.name.bold());
    let _ = writeln!(out, "League: {}", detail.team.league_label());
    let _ = writeln!(
        out,
        "Current Elo: {}  {}",
        format_rating(detail.team.elo),
        render_trend(detail)
    );
    out.push_str("\nElo history\n");
    render_chart(detail, &mut out);
    out
}
