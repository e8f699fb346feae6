use std::{cmp::Ordering, marker::PhantomData, slice};

use crate::{
    error::LookupError,
    lookup::{EntryLookup, KeyedEntry},
};

/// Lookup by binary search over entries sorted ascending by key.
///
/// # Contract
///
/// The entries handed to [`SortedBinaryLookup::new`] must already be sorted
/// ascending by key. Construction neither sorts nor checks: on unsorted input
/// `find` may return a wrong entry or report `NotFound` for a present key.
/// Use [`SortedBinaryLookup::is_sorted`] to check explicitly.
///
/// When keys repeat, `find` returns one of the equal entries, not necessarily
/// the first.
///
/// O(log n) per query.
#[derive(Debug, Clone)]
pub struct SortedBinaryLookup<K, E> {
    entries: Vec<E>,
    _marker: PhantomData<fn() -> K>,
}

/// Counters collected by a single search.
#[cfg(feature = "lookup_stat")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStat {
    /// Number of three-way key comparisons made.
    pub comparisons: usize,
}

impl<K: Ord, E: KeyedEntry<K>> SortedBinaryLookup<K, E> {
    /// Take ownership of `entries` as given. See the type-level contract.
    pub fn new<I: IntoIterator<Item = E>>(entries: I) -> Self {
        let entries: Vec<E> = entries.into_iter().collect();
        tracing::debug!(entries = entries.len(), "built sorted binary lookup");

        Self {
            entries,
            _marker: PhantomData,
        }
    }

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

    /// Whether the owned entries are in non-descending key order.
    ///
    /// Never called by `new` or `find`.
    pub fn is_sorted(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].key() <= pair[1].key())
    }

    #[cfg(feature = "lookup_stat")]
    pub fn find_with_stat(&self, key: &K) -> (Result<&E, LookupError>, SearchStat) {
        let mut stat = SearchStat::default();
        let result = self.search(key, &mut stat.comparisons);

        (result.map(|index| &self.entries[index]), stat)
    }

    /// Classic half-open binary search over `[low, high)`.
    ///
    /// Each step compares the middle entry's key with `key` exactly once, so
    /// at most `floor(log2(n)) + 1` comparisons are made.
    fn search(&self, key: &K, comparisons: &mut usize) -> Result<usize, LookupError> {
        let mut low = 0;
        let mut high = self.entries.len();

        while low < high {
            let mid = low + (high - low) / 2;
            *comparisons += 1;

            match self.entries[mid].key().cmp(key) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Ok(mid),
            }
        }

        tracing::trace!(
            entries = self.entries.len(),
            comparisons = *comparisons,
            "sorted binary lookup miss"
        );
        Err(LookupError::NotFound)
    }
}

impl<K: Ord, E: KeyedEntry<K>> EntryLookup<K, E> for SortedBinaryLookup<K, E> {
    fn find(&self, key: &K) -> Result<&E, LookupError> {
        let mut comparisons = 0;
        let index = self.search(key, &mut comparisons)?;

        Ok(&self.entries[index])
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Ord, E: KeyedEntry<K>> FromIterator<E> for SortedBinaryLookup<K, E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter)
    }
}
