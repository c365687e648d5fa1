//! Judge with a fixed ranking of states.

use super::error::{ContestError, ContestResult};
use super::types::{is_valid_name, Id, RANKING_LEN};

/// A judge and the [`RANKING_LEN`] distinct states they rank, best first.
///
/// The ranking cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Judge {
    id: Id,
    name: String,
    ranking: [Id; RANKING_LEN],
}

impl Judge {
    /// Creates a judge.
    ///
    /// Fails with [`ContestError::InvalidId`] if `ranking` repeats a state
    /// and with [`ContestError::InvalidName`] if `name` is not valid. That the
    /// ranked states exist is checked by the contest, which owns them.
    pub fn new(id: Id, name: &str, ranking: [Id; RANKING_LEN]) -> ContestResult<Self> {
        for (i, state) in ranking.iter().enumerate() {
            if ranking[i + 1..].contains(state) {
                return Err(ContestError::InvalidId(i64::from(*state)));
            }
        }
        if !is_valid_name(name) {
            return Err(ContestError::InvalidName(name.to_string()));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            ranking,
        })
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ranked state ids, most preferred first.
    pub fn ranking(&self) -> &[Id; RANKING_LEN] {
        &self.ranking
    }

    /// Returns `true` if `state` appears in this judge's ranking.
    pub fn voted_for(&self, state: Id) -> bool {
        self.ranking.contains(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANKING: [Id; RANKING_LEN] = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];

    #[test]
    fn test_new() {
        let judge = Judge::new(3, "simon", RANKING).unwrap();
        assert_eq!(judge.id(), 3);
        assert_eq!(judge.name(), "simon");
        assert_eq!(judge.ranking(), &RANKING);
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut ranking = RANKING;
        ranking[9] = 9;
        assert_eq!(Judge::new(1, "simon", ranking), Err(ContestError::InvalidId(9)));
    }

    #[test]
    fn test_duplicates_checked_before_name() {
        let mut ranking = RANKING;
        ranking[4] = 6;
        assert_eq!(Judge::new(1, "Simon", ranking), Err(ContestError::InvalidId(6)));
        assert_eq!(
            Judge::new(1, "Simon", RANKING),
            Err(ContestError::InvalidName("Simon".into()))
        );
    }

    #[test]
    fn test_voted_for() {
        let judge = Judge::new(1, "paula", RANKING).unwrap();
        assert!(judge.voted_for(0));
        assert!(judge.voted_for(9));
        assert!(!judge.voted_for(10));
    }
}
