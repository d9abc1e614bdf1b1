use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

use super::state::{SortDirection, SortField};
use crate::domain::Team;

/// Stable in-place sort; teams that compare equal keep their relative order.
pub fn sort_teams(teams: &mut [Team], field: SortField, direction: SortDirection) {
    teams.sort_by(|a, b| {
        let ordering = compare_by(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Rating descending; the order behind global ranks
pub fn sort_by_rating_desc(teams: &mut [Team]) {
    sort_teams(teams, SortField::Elo, SortDirection::Desc);
}

pub fn sort_by_name(teams: &mut [Team]) {
    sort_teams(teams, SortField::Name, SortDirection::Asc);
}

fn compare_by(a: &Team, b: &Team, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::League => compare_text(&a.league, &b.league),
        SortField::Elo => a.sort_rating().total_cmp(&b.sort_rating()),
    }
}

thread_local! {
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Human ordering for labels, using root-locale collation: base letters
/// first, then accents, then case (lowercase before uppercase).
pub fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => compare_folded(a, b),
    })
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}
