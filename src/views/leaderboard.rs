use colored::Colorize;
use std::fmt::Write as _;

use super::{fit, format_rating, render_page_links};
use crate::board::{BoardState, LeaderboardPage, SortDirection, SortField};

const NAME_WIDTH: usize = 28;
const LEAGUE_WIDTH: usize = 20;

fn header_label(label: &str, field: SortField, state: &BoardState) -> String {
    if state.sort_field != field {
        return label.to_string();
    }
    match state.sort_direction {
        SortDirection::Asc => format!("{label} ▲"),
        SortDirection::Desc => format!("{label} ▼"),
    }
}

pub fn render_leaderboard(page: &LeaderboardPage, state: &BoardState) -> String {
    let mut out = String::new();

    if page.is_empty() {
        out.push_str("No teams found\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>4}  {}  {}  {:>10}",
        "#",
        fit(&header_label("Team", SortField::Name, state), NAME_WIDTH),
        fit(&header_label("League", SortField::League, state), LEAGUE_WIDTH),
        header_label("Elo", SortField::Elo, state),
    );

    for row in &page.items {
        let rank = if row.highlighted {
            format!("{:>4}", row.rank).bold().yellow().to_string()
        } else {
            format!("{:>4}", row.rank)
        };
        let rating = format!("{:>10}", format_rating(row.team.elo));
        let rating = if row.highlighted {
            rating.bold().to_string()
        } else {
            rating
        };
        let _ = writeln!(
            out,
            "{}  {}  {}  {}",
            rank,
            fit(&row.team.name, NAME_WIDTH),
            fit(row.team.league_label(), LEAGUE_WIDTH),
            rating,
        );
    }

    let _ = writeln!(
        out,
        "\nPage {} of {} ({} teams)  {}",
        page.page,
        page.total_pages,
        page.total,
        render_page_links(&page.links, page.page)
    );
    out
}
