use std::{marker::PhantomData, slice};

use crate::{
    error::LookupError,
    lookup::{EntryLookup, KeyedEntry},
};

/// Lookup by unordered scan.
///
/// Needs nothing from the key beyond equality and puts no precondition on
/// the entries: order is arbitrary and keys may repeat. When keys repeat,
/// `find` returns the earliest entry in construction order.
///
/// O(n) per query.
#[derive(Debug, Clone)]
pub struct LinearLookup<K, E> {
    entries: Vec<E>,
    _marker: PhantomData<fn() -> K>,
}

impl<K: Eq, E: KeyedEntry<K>> LinearLookup<K, E> {
    /// Take ownership of `entries`, keeping their order.
    pub fn new<I: IntoIterator<Item = E>>(entries: I) -> Self {
        let entries: Vec<E> = entries.into_iter().collect();
        tracing::debug!(entries = entries.len(), "built linear lookup");

        Self {
            entries,
            _marker: PhantomData,
        }
    }

    /// Copy `entries` so the caller keeps its own slice.
    pub fn from_slice(entries: &[E]) -> Self
    where
        E: Clone,
    {
        Self::new(entries.iter().cloned())
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.entries.iter()
    }

    /// Position of the first entry with `key`.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == key)
    }
}

impl<K: Eq, E: KeyedEntry<K>> EntryLookup<K, E> for LinearLookup<K, E> {
    fn find(&self, key: &K) -> Result<&E, LookupError> {
        match self.position(key) {
            Some(index) => Ok(&self.entries[index]),
            None => {
                tracing::trace!(entries = self.entries.len(), "linear lookup miss");
                Err(LookupError::NotFound)
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Eq, E: KeyedEntry<K>> FromIterator<E> for LinearLookup<K, E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter)
    }
}
