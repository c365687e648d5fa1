//! In-memory song contest model.
//!
//! - **Ordered map** ([`map`]): a generic sorted key/value container with an
//!   injected key order, owned entries and a resettable iteration cursor.
//! - **Contest** ([`contest`]): states, judges and citizen votes, with
//!   weighted ranking, audience-only ranking and friendly-state pairing
//!   built on the ordered map.
//!
//! # Quick start
//!
//! ```
//! use songvote::contest::Contest;
//!
//! let mut contest = Contest::new();
//! contest.add_state(1, "france", "voila").unwrap();
//! contest.add_state(2, "spain", "eaea").unwrap();
//! contest.add_vote(1, 2).unwrap();
//! contest.add_vote(2, 1).unwrap();
//!
//! assert_eq!(contest.run_contest(75).unwrap(), vec!["france", "spain"]);
//! assert_eq!(contest.run_friendly_states(), vec!["france - spain"]);
//! ```
//!
//! # Logging
//!
//! State, judge and vote changes and contest runs are reported through
//! [`tracing`] events. The crate installs no subscriber.

pub mod contest;
pub mod map;

pub use contest::{Contest, ContestError, ContestResult, ScoringConfig};
pub use map::{KeyOrder, MapError, OrderedMap};
