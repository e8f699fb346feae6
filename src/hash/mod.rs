use std::{
    collections::{hash_map::RandomState, HashMap},
    hash::{BuildHasher, Hash},
    slice,
};

use crate::{
    error::LookupError,
    lookup::{EntryLookup, KeyedEntry},
};

/// Lookup through a key to position index built eagerly at construction.
///
/// Keys are expected to be unique. If two entries share a key, the later one
/// in construction order replaces the earlier one in the index (last write
/// wins); the shadowed entry stays in [`HashLookup::entries`] but can no
/// longer be found by key.
///
/// O(n) construction, O(1) expected per query.
#[derive(Debug, Clone)]
pub struct HashLookup<K, E, S = RandomState> {
    entries: Vec<E>,
    index: HashMap<K, usize, S>,
}

impl<K, E> HashLookup<K, E, RandomState>
where
    K: Eq + Hash + Clone,
    E: KeyedEntry<K>,
{
    pub fn new<I: IntoIterator<Item = E>>(entries: I) -> Self {
        Self::with_hasher(entries, RandomState::new())
    }

    pub fn from_slice(entries: &[E]) -> Self
    where
        E: Clone,
    {
        Self::new(entries.iter().cloned())
    }
}

impl<K, E, S> HashLookup<K, E, S>
where
    K: Eq + Hash + Clone,
    E: KeyedEntry<K>,
    S: BuildHasher,
{
    /// Build the index hashing keys with `hasher`.
    pub fn with_hasher<I: IntoIterator<Item = E>>(entries: I, hasher: S) -> Self {
        let entries: Vec<E> = entries.into_iter().collect();
        let mut index = HashMap::with_capacity_and_hasher(entries.len(), hasher);

        for (position, entry) in entries.iter().enumerate() {
            // the last entry with a key owns it
            index.insert(entry.key().clone(), position);
        }

        tracing::debug!(
            entries = entries.len(),
            distinct_keys = index.len(),
            "built hash lookup"
        );

        Self { entries, index }
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.entries.iter()
    }

    /// Number of keys reachable through the index.
    ///
    /// Smaller than `len()` when duplicate keys were shadowed.
    pub fn distinct_keys(&self) -> usize {
        self.index.len()
    }

    pub fn hasher(&self) -> &S {
        self.index.hasher()
    }
}

impl<K, E, S> EntryLookup<K, E> for HashLookup<K, E, S>
where
    K: Eq + Hash + Clone,
    E: KeyedEntry<K>,
    S: BuildHasher,
{
    fn find(&self, key: &K) -> Result<&E, LookupError> {
        match self.index.get(key) {
            Some(&position) => Ok(&self.entries[position]),
            None => {
                tracing::trace!(distinct_keys = self.index.len(), "hash lookup miss");
                Err(LookupError::NotFound)
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, E, S> FromIterator<E> for HashLookup<K, E, S>
where
    K: Eq + Hash + Clone,
    E: KeyedEntry<K>,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::with_hasher(iter, S::default())
    }
}
