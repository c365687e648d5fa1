//! Vote tallying, score blending and friendly-pair detection.
//!
//! All functions here are pure computations over a snapshot of the contest's
//! state and judge maps.
//!
//! # Algorithm
//!
//! 1. Every state ranks the states its citizens voted for by vote count
//!    ([`rank_by_votes`]). Equal counts keep the map's scan order.
//! 2. Rankings are converted to points with [`POINTS`]: `12, 10, 8, 7, ..., 1`
//!    for the first ten places and nothing afterwards. The same table scores
//!    judge rankings.
//! 3. Per state, `audience = audience_points / num_states` and
//!    `judges = judge_points / num_judges` (0 without judges). With audience
//!    weight `p`, `final = audience * p + judges * (1 - p)`; values below the
//!    zero threshold become exactly `0.0`.
//! 4. States are ordered by final score, highest first, ties by ascending id.

use std::collections::BTreeSet;

use tracing::warn;

use crate::map::{KeyOrder, OrderedMap};

use super::judge::Judge;
use super::state::State;
use super::types::{Id, Standing, RANKING_LEN};

/// Points awarded to ranking positions `0..RANKING_LEN`.
pub const POINTS: [u32; RANKING_LEN] = [12, 10, 8, 7, 6, 5, 4, 3, 2, 1];

/// Points for a ranking position; positions past the table score 0.
pub fn points_for(position: usize) -> u32 {
    POINTS.get(position).copied().unwrap_or(0)
}

/// How audience and judge scores are combined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Blend {
    /// `final = audience * weight + judges * (1 - weight)`.
    Weighted {
        /// Audience share in `(0, 1]`.
        audience_weight: f64,
    },
    /// Judges are not consulted at all.
    AudienceOnly,
}

/// Orders the voted-for states of a tally by descending vote count.
///
/// This is the repeated extraction of the first maximum met while scanning
/// the map in its own order, so equal counts come out in scan order, not by
/// numeric id. A stable sort produces the same sequence.
pub fn rank_by_votes<O: KeyOrder<Id>>(votes: &OrderedMap<Id, u32, O>) -> Vec<Id> {
    let mut tally: Vec<(Id, u32)> = votes
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(&id, &count)| (id, count))
        .collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.into_iter().map(|(id, _)| id).collect()
}

/// The single most voted-for state of a tally: the first maximum in scan order.
pub fn favorite<O: KeyOrder<Id>>(votes: &OrderedMap<Id, u32, O>) -> Option<Id> {
    let mut best: Option<(Id, u32)> = None;
    for (&id, &count) in votes {
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((id, count));
        }
    }
    best.map(|(id, _)| id)
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    audience: u32,
    judges: u32,
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Audience,
    Judges,
}

/// Point totals per state, sorted by id for lookup.
struct ScoreSheet {
    rows: Vec<(Id, Totals)>,
}

impl ScoreSheet {
    fn new(ids: impl IntoIterator<Item = Id>) -> Self {
        let mut rows: Vec<(Id, Totals)> = ids
            .into_iter()
            .map(|id| (id, Totals::default()))
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        Self { rows }
    }

    fn totals(&self, id: Id) -> Totals {
        self.rows
            .binary_search_by_key(&id, |(row_id, _)| *row_id)
            .map(|idx| self.rows[idx].1)
            .unwrap_or_default()
    }

    fn award(&mut self, ranking: impl IntoIterator<Item = Id>, source: Source) {
        for (position, id) in ranking.into_iter().enumerate() {
            let points = points_for(position);
            if points == 0 {
                break;
            }
            match self.rows.binary_search_by_key(&id, |(row_id, _)| *row_id) {
                Ok(idx) => {
                    let totals = &mut self.rows[idx].1;
                    match source {
                        Source::Audience => totals.audience += points,
                        Source::Judges => totals.judges += points,
                    }
                }
                Err(_) => warn!(state_id = id, "ranked state is not in the contest"),
            }
        }
    }
}

/// Computes every state's final score and returns them in ranked order.
///
/// Judges are ignored under [`Blend::AudienceOnly`].
pub fn standings(
    states: &OrderedMap<Id, State>,
    judges: &OrderedMap<Id, Judge>,
    blend: Blend,
    zero_threshold: f64,
) -> Vec<Standing> {
    let num_states = states.len();
    if num_states == 0 {
        return Vec::new();
    }

    let mut sheet = ScoreSheet::new(states.keys().copied());
    for state in states.values() {
        sheet.award(rank_by_votes(state.citizen_votes()), Source::Audience);
    }
    if let Blend::Weighted { .. } = blend {
        for judge in judges.values() {
            sheet.award(judge.ranking().iter().copied(), Source::Judges);
        }
    }

    let num_judges = judges.len();
    let mut rows: Vec<Standing> = states
        .values()
        .map(|state| {
            let totals = sheet.totals(state.id());
            let audience = f64::from(totals.audience) / num_states as f64;
            let score = match blend {
                Blend::AudienceOnly => audience,
                Blend::Weighted { audience_weight } => {
                    let judges = if num_judges > 0 {
                        f64::from(totals.judges) / num_judges as f64
                    } else {
                        0.0
                    };
                    audience * audience_weight + judges * (1.0 - audience_weight)
                }
            };
            Standing {
                id: state.id(),
                name: state.name().to_string(),
                score: if score < zero_threshold { 0.0 } else { score },
            }
        })
        .collect();

    sort_standings(&mut rows);
    rows
}

/// Sorts by score descending, then id ascending.
pub fn sort_standings(rows: &mut [Standing]) {
    rows.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.id.cmp(&b.id)));
}

/// Finds states whose favorites are each other.
///
/// Each pair is reported once as `"first - second"` with the two names in
/// lexical order; the returned list is sorted lexically.
pub fn friendly_pairs(states: &OrderedMap<Id, State>) -> Vec<String> {
    let mut seen: BTreeSet<(Id, Id)> = BTreeSet::new();
    let mut pairs = Vec::new();

    for state in states.values() {
        let Some(fav_id) = favorite(state.citizen_votes()) else {
            continue;
        };
        if fav_id == state.id() {
            continue;
        }
        let Some(fav) = states.get(&fav_id) else {
            continue;
        };
        if favorite(fav.citizen_votes()) != Some(state.id()) {
            continue;
        }
        if !seen.insert((state.id().min(fav_id), state.id().max(fav_id))) {
            continue;
        }
        let (first, second) = if state.name() <= fav.name() {
            (state.name(), fav.name())
        } else {
            (fav.name(), state.name())
        };
        pairs.push(format!("{first} - {second}"));
    }

    pairs.sort();
    pairs
}
