//! Key ordering trait and container error type.

use std::cmp::Ordering;
use std::fmt;

/// A strict total order over map keys.
///
/// Implementations must be consistent: `compare(a, b) == Equal` exactly when
/// the two keys identify the same entry, and the relation must be transitive.
/// An inconsistent order leaves the map sorted by an undefined rule.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use songvote::map::{KeyOrder, OrderedMap};
///
/// struct Descending;
///
/// impl KeyOrder<u32> for Descending {
///     fn compare(&self, a: &u32, b: &u32) -> Ordering {
///         b.cmp(a)
///     }
/// }
///
/// let mut map = OrderedMap::with_order(Descending);
/// map.put(1u32, "one").unwrap();
/// map.put(3u32, "three").unwrap();
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 1]);
/// ```
pub trait KeyOrder<K> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> KeyOrder<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys with a comparison closure.
///
/// ```
/// use songvote::map::{FnOrder, OrderedMap};
///
/// let by_len = FnOrder(|a: &String, b: &String| a.len().cmp(&b.len()).then(a.cmp(b)));
/// let mut map = OrderedMap::with_order(by_len);
/// map.put("ccc".to_string(), 3).unwrap();
/// map.put("a".to_string(), 1).unwrap();
/// assert_eq!(map.get_first().map(String::as_str), Some("a"));
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<K, F> KeyOrder<K> for FnOrder<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder(..)")
    }
}

/// Errors reported by [`OrderedMap`](super::OrderedMap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The requested key is not stored in the map.
    #[error("item does not exist")]
    NotFound,
    /// Storage for a new entry could not be allocated.
    #[error("out of memory")]
    OutOfMemory,
}
