//! Insertion-ordered frequency table.
//!
//! A multiset keyed by value that remembers the order in which keys were
//! first seen. Rankings sort by count and break ties by that order, so
//! "top-N" lists are reproducible.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Counts occurrences of keys, preserving first-insertion order.
///
/// # Example
///
/// ```
/// use chatstats::core::FrequencyTable;
///
/// let table: FrequencyTable<&str> = ["b", "a", "b", "c", "a"].into_iter().collect();
/// assert_eq!(table.get("b"), 2);
/// assert_eq!(table.total(), 5);
///
/// // "b" and "a" tie at 2; "b" was seen first
/// let top: Vec<_> = table.top(2).into_iter().map(|(k, _)| *k).collect();
/// assert_eq!(top, vec!["b", "a"]);
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, u64)>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Adds `count` occurrences of `key`.
    pub fn add(&mut self, key: K, count: u64) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += count;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, count));
        }
    }

    /// Count for `key`, zero when absent.
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Returns `true` if `key` has been counted at least once.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Entries ranked by count, descending; ties keep insertion order.
    pub fn ranked(&self) -> Vec<(&K, u64)> {
        let mut ranked: Vec<(&K, u64)> = self.iter().collect();
        // stable sort keeps insertion order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest-ranked entries.
    pub fn top(&self, n: usize) -> Vec<(&K, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// The entry with the highest count; the earliest one on ties.
    pub fn most_common(&self) -> Option<(&K, u64)> {
        self.iter()
            .fold(None, |best: Option<(&K, u64)>, (key, count)| match best {
                Some((_, top)) if top >= count => best,
                _ => Some((key, count)),
            })
    }
}

impl<K> FrequencyTable<K> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates `(key, count)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }
}

/// Tables are equal when they hold the same counts in the same order.
impl<K: Eq + Hash> PartialEq for FrequencyTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash> Eq for FrequencyTable<K> {}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for FrequencyTable<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.increment(key);
        }
    }
}

/// Serializes as a map in insertion order.
impl<K: Serialize> Serialize for FrequencyTable<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
