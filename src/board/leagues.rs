use serde::Serialize;
use std::collections::HashMap;

use super::filter::filter_teams;
use super::ranking::Ranking;
use super::sort::{compare_text, sort_by_rating_desc};
use crate::domain::Team;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueRow {
    pub league_rank: usize,
    pub global_rank: usize,
    pub team: Team,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueGroup {
    pub name: String,
    pub rows: Vec<LeagueRow>,
}

impl LeagueGroup {
    pub fn top_rating(&self) -> f64 {
        self.rows.first().map_or(0.0, |row| row.team.sort_rating())
    }
}

/// Partition `teams` by league, preserving first-seen league order
pub fn partition_by_league(teams: &[Team]) -> Vec<(String, Vec<Team>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<Team>)> = Vec::new();

    for team in teams {
        let key = team.league_label().to_string();
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(team.clone());
    }

    groups
}

/// League view of the teams matching `search`.
///
/// Each league is ordered by rating, leagues by their best team. Global ranks
/// come from the whole filtered set, not the league.
pub fn league_view(teams: &[Team], search: &str) -> Vec<LeagueGroup> {
    let filtered = filter_teams(teams, search);
    let ranking = Ranking::by_rating(&filtered);

    let mut groups: Vec<LeagueGroup> = partition_by_league(&filtered)
        .into_iter()
        .map(|(name, mut members)| {
            sort_by_rating_desc(&mut members);
            let rows = members
                .into_iter()
                .enumerate()
                .map(|(i, team)| LeagueRow {
                    league_rank: i + 1,
                    global_rank: ranking.rank_of(team.id).unwrap_or(0),
                    team,
                })
                .collect();
            LeagueGroup { name, rows }
        })
        .collect();

    groups.sort_by(|a, b| b.top_rating().total_cmp(&a.top_rating()));
    groups
}

/// Best rated team of each league, leagues in name order. Unrated teams are
/// never leaders; on equal ratings the first listed team wins.
pub fn league_leaders(teams: &[Team]) -> Vec<(String, Team)> {
    let rated: Vec<Team> = teams.iter().filter(|t| t.elo.is_some()).cloned().collect();

    let mut leaders: Vec<(String, Team)> = partition_by_league(&rated)
        .into_iter()
        .filter_map(|(league, members)| {
            let best = members.into_iter().reduce(|best, candidate| {
                if candidate.sort_rating() > best.sort_rating() {
                    candidate
                } else {
                    best
                }
            })?;
            Some((league, best))
        })
        .collect();

    leaders.sort_by(|a, b| compare_text(&a.0, &b.0));
    leaders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::fallback::sample_teams;
    use std::collections::HashSet;

    #[test]
    fn test_leagues_ordered_by_best_team() {
        let groups = league_view(&sample_teams(), "");
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Premier League", "Bundesliga", "La Liga", "Ligue 1", "Serie A"]
        );
    }

    #[test]
    fn test_partitions_cover_filtered_set_once() {
        let teams = sample_teams();
        let filtered = filter_teams(&teams, "l");
        let groups = league_view(&teams, "l");

        let mut seen = HashSet::new();
        for row in groups.iter().flat_map(|g| &g.rows) {
            assert!(seen.insert(row.team.id), "team {} appears twice", row.team.id);
        }

        let expected: HashSet<i64> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_best_team_has_global_rank_one() {
        let groups = league_view(&sample_teams(), "");

        let best = groups
            .iter()
            .flat_map(|g| &g.rows)
            .max_by(|a, b| a.team.sort_rating().total_cmp(&b.team.sort_rating()))
            .unwrap();

        assert_eq!(best.global_rank, 1);
        assert_eq!(best.team.name, "Manchester City");
    }

    #[test]
    fn test_league_and_global_ranks_differ() {
        let groups = league_view(&sample_teams(), "");
        let la_liga = groups.iter().find(|g| g.name == "La Liga").unwrap();

        let ranks: Vec<(usize, usize)> = la_liga.rows.iter().map(|r| (r.league_rank, r.global_rank)).collect();
        assert_eq!(ranks, vec![(1, 3), (2, 4)]);
    }

    #[test]
    fn test_global_rank_follows_filtered_set() {
        let groups = league_view(&sample_teams(), "serie");

        let ranks: Vec<usize> = groups[0].rows.iter().map(|r| r.global_rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn test_blank_league_grouped_as_unknown() {
        let teams = vec![
            Team::new(1, "Drifters", "", Some(1200.0)),
            Team::new(2, "Wanderers", "", Some(1300.0)),
        ];

        let groups = league_view(&teams, "");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Unknown");
        assert_eq!(groups[0].rows[0].team.id, 2);
    }

    #[test]
    fn test_league_leaders_skip_unrated() {
        let mut teams = sample_teams();
        teams.push(Team::new(11, "Ghosts", "Eredivisie", None));

        let leaders = league_leaders(&teams);
        let summary: Vec<(&str, &str)> = leaders.iter().map(|(l, t)| (l.as_str(), t.name.as_str())).collect();

        assert_eq!(
            summary,
            vec![
                ("Bundesliga", "Bayern Munich"),
                ("La Liga", "Real Madrid"),
                ("Ligue 1", "PSG"),
                ("Premier League", "Manchester City"),
                ("Serie A", "Juventus"),
            ]
        );
    }
}
