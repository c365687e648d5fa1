//! Song contest model.
//!
//! A [`Contest`] holds participating [`State`]s and [`Judge`]s. Citizens of a
//! state vote for other states; judges submit a fixed ranking of ten states.
//! From these the contest produces:
//!
//! - **Contest ranking** ([`Contest::run_contest`]): audience and judge points,
//!   each normalized, blended by an audience percentage.
//! - **Audience favorite** ([`Contest::run_audience_favorite`]): citizen
//!   votes only.
//! - **Friendly states** ([`Contest::run_friendly_states`]): pairs of states
//!   whose citizens' favorite is each other.
//!
//! The point table, tally order and tie-breaking rules are documented in
//! [`scoring`].

mod config;
mod engine;
mod error;
mod judge;
pub mod scoring;
mod state;
mod types;

pub use config::ScoringConfig;
pub use engine::Contest;
pub use error::{ContestError, ContestResult};
pub use judge::Judge;
pub use state::State;
pub use types::{is_valid_name, Id, Standing, RANKING_LEN};
