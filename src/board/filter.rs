use crate::domain::Team;

/// Teams whose name or league contains `search` as typed, ignoring case.
/// An empty search keeps every team.
pub fn filter_teams(teams: &[Team], search: &str) -> Vec<Team> {
    if search.is_empty() {
        return teams.to_vec();
    }

    let needle = search.to_lowercase();
    teams
        .iter()
        .filter(|team| matches(team, &needle))
        .cloned()
        .collect()
}

fn matches(team: &Team, needle: &str) -> bool {
    team.name.to_lowercase().contains(needle) || team.league.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::fallback::sample_teams;

    fn ids(teams: &[Team]) -> Vec<i64> {
        teams.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_name_substring_finds_team() {
        let filtered = filter_teams(&sample_teams(), "ARSE");
        assert_eq!(ids(&filtered), vec![9]);
    }

    #[test]
    fn test_league_substring_matches() {
        let filtered = filter_teams(&sample_teams(), "serie a");
        assert_eq!(ids(&filtered), vec![8, 10]);
    }

    #[test]
    fn test_unknown_substring_is_empty() {
        assert!(filter_teams(&sample_teams(), "eredivisie").is_empty());
    }

    #[test]
    fn test_empty_search_keeps_everything_in_order() {
        let teams = sample_teams();
        assert_eq!(filter_teams(&teams, ""), teams);
    }

    #[test]
    fn test_surrounding_whitespace_is_part_of_the_term() {
        let teams = sample_teams();

        assert!(filter_teams(&teams, "PSG ").is_empty());
        assert!(filter_teams(&teams, "   ").is_empty());
        assert_eq!(ids(&filter_teams(&teams, "Real ")), ids(&filter_teams(&teams, "real m")));
    }

    #[test]
    fn test_every_name_substring_keeps_its_team() {
        let teams = sample_teams();
        for team in &teams {
            let chars: Vec<char> = team.name.chars().collect();
            for start in 0..chars.len() {
                let needle: String = chars[start..(start + 3).min(chars.len())].iter().collect();
                if needle.trim().is_empty() {
                    continue;
                }
                let filtered = filter_teams(&teams, &needle);
                assert!(
                    filtered.iter().any(|t| t.id == team.id),
                    "{:?} lost {}",
                    needle,
                    team.name
                );
            }
        }
    }
}
