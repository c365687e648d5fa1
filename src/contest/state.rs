//! Participating state and its citizen vote tally.

use crate::map::OrderedMap;

use super::error::{ContestError, ContestResult};
use super::types::{is_valid_name, Id};

/// A participating state.
///
/// `citizen_votes` records, for every state this state's citizens voted for,
/// how many votes it received. Entries never hold a count of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    id: Id,
    name: String,
    song: String,
    final_score: f64,
    citizen_votes: OrderedMap<Id, u32>,
}

impl State {
    /// Creates a state with no votes and a zero score.
    ///
    /// Both `name` and `song` must pass [`is_valid_name`].
    pub fn new(id: Id, name: &str, song: &str) -> ContestResult<Self> {
        for s in [name, song] {
            if !is_valid_name(s) {
                return Err(ContestError::InvalidName(s.to_string()));
            }
        }
        Ok(Self {
            id,
            name: name.to_string(),
            song: song.to_string(),
            final_score: 0.0,
            citizen_votes: OrderedMap::new(),
        })
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn song(&self) -> &str {
        &self.song
    }

    /// Score computed by the most recent contest run.
    pub fn final_score(&self) -> f64 {
        self.final_score
    }

    pub fn set_score(&mut self, score: f64) {
        self.final_score = score;
    }

    /// Tally of votes cast by this state's citizens, keyed by voted-for state.
    pub fn citizen_votes(&self) -> &OrderedMap<Id, u32> {
        &self.citizen_votes
    }

    /// Number of votes this state's citizens gave `taker` (0 if none).
    pub fn votes_for(&self, taker: Id) -> u32 {
        self.citizen_votes.get(&taker).copied().unwrap_or(0)
    }

    /// Records one more vote for `taker`.
    pub fn add_vote(&mut self, taker: Id) -> ContestResult<()> {
        if let Some(count) = self.citizen_votes.get_mut(&taker) {
            *count += 1;
            return Ok(());
        }
        self.citizen_votes
            .put(taker, 1)
            .map_err(|_| ContestError::OutOfMemory)?;
        Ok(())
    }

    /// Withdraws one vote for `taker` and returns the remaining count.
    ///
    /// The entry is removed when its last vote goes; withdrawing from an
    /// absent entry does nothing.
    pub fn delete_vote(&mut self, taker: Id) -> u32 {
        let remaining = match self.citizen_votes.get_mut(&taker) {
            None => return 0,
            Some(count) => {
                *count = count.saturating_sub(1);
                *count
            }
        };
        if remaining == 0 {
            let _ = self.citizen_votes.remove(&taker);
        }
        remaining
    }

    /// Drops every vote for `taker`. Returns `true` if an entry existed.
    pub fn delete_all_votes_of(&mut self, taker: Id) -> bool {
        self.citizen_votes.remove(&taker).is_ok()
    }
}
