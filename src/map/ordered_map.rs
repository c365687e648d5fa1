//! Sorted-vector map implementation.

use std::fmt;

use super::types::{KeyOrder, MapError, NaturalOrder};

/// A map whose entries are always sorted by `O`.
///
/// Lookups are `O(log n)` binary searches; insertions and removals shift the
/// tail of the backing vector.
///
/// # Examples
///
/// ```
/// use songvote::map::OrderedMap;
///
/// let mut votes: OrderedMap<u32, u32> = OrderedMap::new();
/// votes.put(7, 1).unwrap();
/// votes.put(2, 4).unwrap();
/// assert_eq!(votes.put(7, 2).unwrap(), Some(1)); // replaced in place
///
/// assert_eq!(votes.len(), 2);
/// assert_eq!(votes.keys().copied().collect::<Vec<_>>(), vec![2, 7]);
/// ```
pub struct OrderedMap<K, V, O = NaturalOrder> {
    entries: Vec<(K, V)>,
    order: O,
    cursor: Option<usize>,
}

impl<K: Ord, V> OrderedMap<K, V, NaturalOrder> {
    /// Creates an empty map ordered by `K: Ord`.
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, O: KeyOrder<K>> OrderedMap<K, V, O> {
    /// Creates an empty map ordered by `order`.
    pub fn with_order(order: O) -> Self {
        Self {
            entries: Vec::new(),
            order,
            cursor: None,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the key order in use.
    pub fn order(&self) -> &O {
        &self.order
    }

    fn search(&self, key: &K) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(probe, _)| self.order.compare(probe, key))
    }

    /// Inserts `value` under `key`.
    ///
    /// If the key is already present its value is replaced in place and the
    /// previous value is returned; the size does not change. Otherwise the
    /// entry is inserted at its sorted position.
    ///
    /// Storage is reserved before anything is moved, so an
    /// [`MapError::OutOfMemory`] leaves the map untouched. Either way the
    /// internal cursor is invalidated.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        match self.search(&key) {
            Ok(idx) => {
                self.cursor = None;
                Ok(Some(std::mem::replace(&mut self.entries[idx].1, value)))
            }
            Err(idx) => {
                self.entries
                    .try_reserve(1)
                    .map_err(|_| MapError::OutOfMemory)?;
                self.entries.insert(idx, (key, value));
                self.cursor = None;
                Ok(None)
            }
        }
    }

    /// Stores independent copies of `key` and `value`.
    pub fn put_cloned(&mut self, key: &K, value: &V) -> Result<Option<V>, MapError>
    where
        K: Clone,
        V: Clone,
    {
        self.put(key.clone(), value.clone())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).ok().map(|idx| &self.entries[idx].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// Mutating a value does not move its entry, so the cursor stays valid.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.search(key) {
            Ok(idx) => Some(&mut self.entries[idx].1),
            Err(_) => None,
        }
    }

    /// Returns `true` if `key` is stored in the map.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// A missing key yields [`MapError::NotFound`] and leaves the map,
    /// including its cursor, untouched.
    pub fn remove(&mut self, key: &K) -> Result<V, MapError> {
        let idx = self.search(key).map_err(|_| MapError::NotFound)?;
        self.cursor = None;
        Ok(self.entries.remove(idx).1)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Starts (or restarts) cursor iteration and returns the first key.
    pub fn get_first(&mut self) -> Option<&K> {
        if self.entries.is_empty() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(0);
        Some(&self.entries[0].0)
    }

    /// Advances the cursor and returns the next key.
    ///
    /// Returns `None` at the end, before [`get_first`](Self::get_first) was
    /// called, and after any mutation.
    pub fn get_next(&mut self) -> Option<&K> {
        let next = self.cursor? + 1;
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        Some(&self.entries[next].0)
    }

    /// Key the cursor currently rests on, if any.
    pub fn cursor_key(&self) -> Option<&K> {
        self.cursor.map(|idx| &self.entries[idx].0)
    }

    /// Returns a deep copy of the map.
    ///
    /// If this map's cursor rests on key `k`, the copy's cursor is placed on
    /// the entry with the same key.
    pub fn copy(&self) -> Self
    where
        K: Clone,
        V: Clone,
        O: Clone,
    {
        let mut copy = Self {
            entries: self.entries.clone(),
            order: self.order.clone(),
            cursor: None,
        };
        if let Some(key) = self.cursor_key() {
            copy.cursor = copy.search(key).ok();
        }
        copy
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates over values in key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterates over values mutably, in key order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.entries.iter_mut().map(|(_, v)| v)
    }
}

impl<K: Clone, V: Clone, O: KeyOrder<K> + Clone> Clone for OrderedMap<K, V, O> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, O> fmt::Debug for OrderedMap<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K: PartialEq, V: PartialEq, O> PartialEq for OrderedMap<K, V, O> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a, K, V, O: KeyOrder<K>> IntoIterator for &'a OrderedMap<K, V, O> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over an [`OrderedMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
