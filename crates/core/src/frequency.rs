// crates/core/src/frequency.rs
use std::{borrow::Borrow, hash::Hash};

use hashbrown::HashMap;
use serde::{Serialize, Serializer, ser::SerializeMap};
use text_utils_shared_kernel::Occurrences;

/// Occurrence counts keyed by word or character.
///
/// Iteration follows first-seen insertion order, which ranking relies on for
/// tie-breaking. Equality compares entries in order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, Occurrences)>,
    index: HashMap<K, usize>,
}

impl<K> FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }

    /// Build a table from `(key, count)` pairs.
    ///
    /// Repeated keys accumulate into the position of their first appearance.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Occurrences)>,
    {
        let mut table = Self::new();
        for (key, count) in entries {
            table.add(key, count);
        }
        table
    }

    /// Count one more occurrence of `key`.
    pub fn record(&mut self, key: K) {
        self.add(key, Occurrences::one());
    }

    /// Count `count` more occurrences of `key`.
    pub fn add(&mut self, key: K, count: Occurrences) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += count;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, count));
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<Occurrences>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Keep only the entries for which `keep` returns true, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, Occurrences) -> bool,
    {
        self.entries.retain(|(key, count)| keep(key, *count));
        self.reindex();
    }

    /// Drop every entry past the first `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.entries.len() {
            return;
        }
        self.entries.truncate(len);
        self.reindex();
    }

    /// Reorder entries in place with a stable sort.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&(K, Occurrences), &(K, Occurrences)) -> std::cmp::Ordering,
    {
        self.entries.sort_by(compare);
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (slot, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), slot);
        }
    }
}

impl<K> FrequencyTable<K> {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> Occurrences {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, Occurrences)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Entries in table order.
    pub fn as_slice(&self) -> &[(K, Occurrences)] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<(K, Occurrences)> {
        self.entries
    }
}

impl<K> Default for FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq> PartialEq for FrequencyTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq> Eq for FrequencyTable<K> {}

impl<K> FromIterator<K> for FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.record(key);
        }
        table
    }
}

impl<K> Extend<K> for FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.record(key);
        }
    }
}

impl<K> IntoIterator for FrequencyTable<K> {
    type Item = (K, Occurrences);
    type IntoIter = std::vec::IntoIter<(K, Occurrences)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a FrequencyTable<K> {
    type Item = &'a (K, Occurrences);
    type IntoIter = std::slice::Iter<'a, (K, Occurrences)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// 挿入順を保ったまま JSON オブジェクトとして出力する
impl<K: Serialize> Serialize for FrequencyTable<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
