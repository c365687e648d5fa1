//! Ordered associative container.
//!
//! [`OrderedMap`] keeps its `(key, value)` pairs sorted by an injected total
//! order on keys. The container owns every key and value it stores: entries
//! are moved (or cloned, via [`OrderedMap::put_cloned`]) in on insertion and
//! dropped on removal, replacement, [`clear`](OrderedMap::clear) and
//! destruction.
//!
//! # Iteration
//!
//! Two styles are supported:
//!
//! - **Borrowing iterators** ([`OrderedMap::iter`], [`OrderedMap::keys`],
//!   [`OrderedMap::values`]). The borrow checker rules out mutation while one
//!   is alive.
//! - **Internal cursor** ([`OrderedMap::get_first`], [`OrderedMap::get_next`]).
//!   One cursor per map. Any mutation invalidates it, after which
//!   `get_next` yields `None` until `get_first` restarts it.
//!
//! # Ordering
//!
//! The order is a [`KeyOrder`] implementation. [`NaturalOrder`] uses the
//! key's `Ord`; [`FnOrder`] wraps any comparison closure.

mod ordered_map;
mod types;

pub use ordered_map::{Iter, OrderedMap};
pub use types::{FnOrder, KeyOrder, MapError, NaturalOrder};
