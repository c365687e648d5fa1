//! The contest: registry of states and judges plus the result runs.

use tracing::{debug, trace};

use crate::map::OrderedMap;

use super::config::ScoringConfig;
use super::error::{ContestError, ContestResult};
use super::judge::Judge;
use super::scoring::{self, Blend};
use super::state::State;
use super::types::{Id, Standing, RANKING_LEN};

/// Converts a caller-supplied id, rejecting negative and oversized values.
fn checked_id(raw: i64) -> ContestResult<Id> {
    Id::try_from(raw).map_err(|_| ContestError::InvalidId(raw))
}

/// A song contest.
///
/// Owns every [`State`] and [`Judge`]. Every state id referenced by a judge's
/// ranking or by a vote tally names a state of this contest; removing a state
/// removes the judges that ranked it and every vote for it.
///
/// # Examples
///
/// ```
/// use songvote::contest::Contest;
///
/// let mut contest = Contest::new();
/// contest.add_state(1, "france", "chanson").unwrap();
/// contest.add_state(2, "spain", "cancion").unwrap();
/// for _ in 0..3 {
///     contest.add_vote(1, 2).unwrap();
/// }
///
/// assert_eq!(contest.run_audience_favorite(), vec!["spain", "france"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Contest {
    states: OrderedMap<Id, State>,
    judges: OrderedMap<Id, Judge>,
    config: ScoringConfig,
}

impl Contest {
    /// Creates an empty contest with the default [`ScoringConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty contest that [`run_configured`](Self::run_configured)
    /// scores with `config`.
    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn judge_count(&self) -> usize {
        self.judges.len()
    }

    pub fn contains_state(&self, id: i64) -> bool {
        checked_id(id).is_ok_and(|id| self.states.contains(&id))
    }

    pub fn contains_judge(&self, id: i64) -> bool {
        checked_id(id).is_ok_and(|id| self.judges.contains(&id))
    }

    pub fn state(&self, id: Id) -> Option<&State> {
        self.states.get(&id)
    }

    pub fn judge(&self, id: Id) -> Option<&Judge> {
        self.judges.get(&id)
    }

    /// All states in id order.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.values()
    }

    /// All judges in id order.
    pub fn judges(&self) -> impl Iterator<Item = &Judge> + '_ {
        self.judges.values()
    }

    /// Number of votes the citizens of `giver` cast for `taker`.
    pub fn votes(&self, giver: Id, taker: Id) -> u32 {
        self.states.get(&giver).map_or(0, |state| state.votes_for(taker))
    }

    /// Registers a new state.
    pub fn add_state(&mut self, id: i64, name: &str, song: &str) -> ContestResult<()> {
        let id = checked_id(id)?;
        let state = State::new(id, name, song)?;
        if self.states.contains(&id) {
            return Err(ContestError::StateAlreadyExists(id));
        }
        self.states
            .put(id, state)
            .map_err(|_| ContestError::OutOfMemory)?;
        debug!(state_id = id, state_name = name, "state added");
        Ok(())
    }

    /// Removes a state together with every judge that ranked it and every
    /// vote cast for it.
    pub fn remove_state(&mut self, id: i64) -> ContestResult<()> {
        let id = checked_id(id)?;
        if !self.states.contains(&id) {
            return Err(ContestError::StateNotExist(id));
        }

        // Collect first, then remove: the judge map is not touched while
        // it is being scanned.
        let dependent: Vec<Id> = self
            .judges
            .values()
            .filter(|judge| judge.voted_for(id))
            .map(Judge::id)
            .collect();
        for judge_id in &dependent {
            let _ = self.judges.remove(judge_id);
        }

        let mut purged = 0usize;
        for state in self.states.values_mut() {
            if state.delete_all_votes_of(id) {
                purged += 1;
            }
        }
        let _ = self.states.remove(&id);

        debug!(
            state_id = id,
            judges_removed = dependent.len(),
            tallies_purged = purged,
            "state removed"
        );
        Ok(())
    }

    /// Registers a judge ranking [`RANKING_LEN`] distinct existing states.
    pub fn add_judge(&mut self, id: i64, name: &str, ranking: &[i64; RANKING_LEN]) -> ContestResult<()> {
        let id = checked_id(id)?;
        let mut ids = [0; RANKING_LEN];
        for (slot, &raw) in ids.iter_mut().zip(ranking) {
            *slot = checked_id(raw)?;
        }
        let judge = Judge::new(id, name, ids)?;
        if let Some(&missing) = ids.iter().find(|state| !self.states.contains(state)) {
            return Err(ContestError::StateNotExist(missing));
        }
        if self.judges.contains(&id) {
            return Err(ContestError::JudgeAlreadyExists(id));
        }
        self.judges
            .put(id, judge)
            .map_err(|_| ContestError::OutOfMemory)?;
        debug!(judge_id = id, judge_name = name, "judge added");
        Ok(())
    }

    pub fn remove_judge(&mut self, id: i64) -> ContestResult<()> {
        let id = checked_id(id)?;
        self.judges
            .remove(&id)
            .map_err(|_| ContestError::JudgeNotExist(id))?;
        debug!(judge_id = id, "judge removed");
        Ok(())
    }

    fn vote_pair(&self, giver: i64, taker: i64) -> ContestResult<(Id, Id)> {
        let giver = checked_id(giver)?;
        let taker = checked_id(taker)?;
        for id in [giver, taker] {
            if !self.states.contains(&id) {
                return Err(ContestError::StateNotExist(id));
            }
        }
        if giver == taker {
            return Err(ContestError::SameState(giver));
        }
        Ok((giver, taker))
    }

    /// Records one citizen vote from `giver` for `taker`.
    pub fn add_vote(&mut self, giver: i64, taker: i64) -> ContestResult<()> {
        let (giver, taker) = self.vote_pair(giver, taker)?;
        let state = self
            .states
            .get_mut(&giver)
            .ok_or(ContestError::StateNotExist(giver))?;
        state.add_vote(taker)?;
        trace!(giver, taker, votes = state.votes_for(taker), "vote added");
        Ok(())
    }

    /// Withdraws one citizen vote from `giver` for `taker`. Withdrawing a
    /// vote that was never cast succeeds without effect.
    pub fn remove_vote(&mut self, giver: i64, taker: i64) -> ContestResult<()> {
        let (giver, taker) = self.vote_pair(giver, taker)?;
        let state = self
            .states
            .get_mut(&giver)
            .ok_or(ContestError::StateNotExist(giver))?;
        let remaining = state.delete_vote(taker);
        trace!(giver, taker, votes = remaining, "vote removed");
        Ok(())
    }

    /// Scores every state and stores each final score on its state.
    fn evaluate(&mut self, blend: Blend, zero_threshold: f64) -> Vec<Standing> {
        let rows = scoring::standings(&self.states, &self.judges, blend, zero_threshold);
        for row in &rows {
            if let Some(state) = self.states.get_mut(&row.id) {
                state.set_score(row.score);
            }
        }
        debug!(
            states = self.states.len(),
            judges = self.judges.len(),
            ?blend,
            "contest evaluated"
        );
        rows
    }

    /// Ranked standings blending audience and judges by `config`.
    pub fn standings(&mut self, config: &ScoringConfig) -> ContestResult<Vec<Standing>> {
        config.validate().map_err(ContestError::InvalidConfig)?;
        let blend = Blend::Weighted {
            audience_weight: config.audience_weight(),
        };
        Ok(self.evaluate(blend, config.zero_threshold))
    }

    /// Ranked standings from citizen votes alone.
    pub fn audience_standings(&mut self) -> Vec<Standing> {
        self.evaluate(Blend::AudienceOnly, self.config.zero_threshold)
    }

    /// Runs the contest with `audience_percent` (1–100) of the score coming
    /// from citizens and the rest from judges. Returns state names, winner
    /// first.
    pub fn run_contest(&mut self, audience_percent: i64) -> ContestResult<Vec<String>> {
        let percent = u8::try_from(audience_percent)
            .ok()
            .filter(|p| (1..=100).contains(p))
            .ok_or(ContestError::InvalidPercent(audience_percent))?;
        let config = self.config.clone().with_audience_percent(percent);
        let rows = self.standings(&config)?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }

    /// Runs the contest with the stored configuration.
    pub fn run_configured(&mut self) -> ContestResult<Vec<String>> {
        let config = self.config.clone();
        let rows = self.standings(&config)?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }

    /// Ranks states by citizen votes only. Returns state names, winner first.
    pub fn run_audience_favorite(&mut self) -> Vec<String> {
        self.audience_standings()
            .into_iter()
            .map(|row| row.name)
            .collect()
    }

    /// Pairs of states whose citizens' favorite is each other, rendered as
    /// `"name - name"` in lexical order.
    pub fn run_friendly_states(&self) -> Vec<String> {
        let pairs = scoring::friendly_pairs(&self.states);
        debug!(pairs = pairs.len(), "friendly states computed");
        pairs
    }
}
