use std::collections::HashMap;

use super::sort::sort_by_rating_desc;
use crate::domain::{Team, TeamId};

/// Global rank of every team in a snapshot, computed once per data change.
///
/// Rank 1 is the highest rating; equal ratings keep their input order.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    ranks: HashMap<TeamId, usize>,
}

impl Ranking {
    pub fn by_rating(teams: &[Team]) -> Self {
        let mut ordered = teams.to_vec();
        sort_by_rating_desc(&mut ordered);

        let ranks = ordered
            .iter()
            .enumerate()
            .map(|(i, team)| (team.id, i + 1))
            .collect();

        Self { ranks }
    }

    pub fn rank_of(&self, id: TeamId) -> Option<usize> {
        self.ranks.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
