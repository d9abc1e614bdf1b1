use serde::Serialize;

use super::filter::filter_teams;
use super::sort::sort_teams;
use super::state::BoardState;
use crate::domain::Team;
use crate::pagination::{PageLink, PageWindow, page_strip};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTeam {
    pub rank: usize,
    pub highlighted: bool,
    pub team: Team,
}

/// One rendered page of the main table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPage {
    pub items: Vec<RankedTeam>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub links: Vec<PageLink>,
}

impl LeaderboardPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter and sort, without paging
pub fn arrange(teams: &[Team], state: &BoardState) -> Vec<Team> {
    let mut arranged = filter_teams(teams, &state.search);
    sort_teams(&mut arranged, state.sort_field, state.sort_direction);
    arranged
}

/// Filter, sort and cut out the requested page.
///
/// The rank column is the position in the current ordering; rows ranked at or
/// above `highlight_top` are flagged.
pub fn leaderboard(teams: &[Team], state: &BoardState, highlight_top: usize) -> LeaderboardPage {
    let arranged = arrange(teams, state);
    let window = PageWindow::new(state.page, state.page_size, arranged.len());
    let offset = window.offset();

    let items = window
        .slice(&arranged)
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let rank = offset + i + 1;
            RankedTeam {
                rank,
                highlighted: rank <= highlight_top,
                team: team.clone(),
            }
        })
        .collect();

    LeaderboardPage {
        items,
        total: window.total_items(),
        page: window.page(),
        page_size: window.page_size(),
        total_pages: window.total_pages(),
        links: page_strip(window.page(), window.total_pages()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::state::{SortDirection, SortField};
    use crate::remote::fallback::sample_teams;

    fn many_teams(count: i64) -> Vec<Team> {
        (1..=count)
            .map(|id| Team::new(id, &format!("Team {id:03}"), "League", Some(1000.0 + id as f64)))
            .collect()
    }

    #[test]
    fn test_first_page_is_top_rated() {
        let page = leaderboard(&many_teams(45), &BoardState::new(20), 10);

        assert_eq!(page.items.len(), 20);
        assert_eq!(page.items[0].team.id, 45);
        assert_eq!(page.total_pages, 3);
        assert!(page.items[9].highlighted);
        assert!(!page.items[10].highlighted);
    }

    #[test]
    fn test_pages_concatenate_to_arranged_sequence() {
        let teams = many_teams(45);
        let state = BoardState::new(20).with_sort(SortField::Name, SortDirection::Asc);
        let arranged = arrange(&teams, &state);

        let mut collected = Vec::new();
        let mut page = 1;
        loop {
            let view = leaderboard(&teams, &state.clone().with_page(page), 10);
            collected.extend(view.items.into_iter().map(|r| r.team));
            if page >= view.total_pages {
                break;
            }
            page += 1;
        }

        assert_eq!(collected, arranged);
    }

    #[test]
    fn test_ranks_continue_across_pages() {
        let page = leaderboard(&many_teams(45), &BoardState::new(20).with_page(3), 10);

        let ranks: Vec<usize> = page.items.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, (41..=45).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_past_the_end_is_clamped() {
        let page = leaderboard(&sample_teams(), &BoardState::new(20).with_page(7), 10);

        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn test_search_without_match_is_empty_page() {
        let state = BoardState::new(20).with_search("no such club");
        let page = leaderboard(&sample_teams(), &state, 10);

        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.links.is_empty());
    }
}
