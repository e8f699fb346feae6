use std::{fmt, hash::Hash, str::FromStr};

use crate::{
    error::{LookupError, ParseStrategyError},
    hash::HashLookup,
    linear::LinearLookup,
    lookup::{EntryLookup, KeyedEntry},
    sorted::SortedBinaryLookup,
};

/// Which lookup structure to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Strategy {
    /// [`LinearLookup`]: no precondition, first match on duplicate keys.
    Linear,
    /// [`SortedBinaryLookup`]: input must be sorted ascending by key.
    SortedBinary,
    /// [`HashLookup`]: last write wins on duplicate keys.
    Hash,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Linear, Strategy::SortedBinary, Strategy::Hash];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Linear => "linear",
            Strategy::SortedBinary => "sorted-binary",
            Strategy::Hash => "hash",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Strategy::Linear),
            "sorted-binary" | "sorted_binary" | "binary" => Ok(Strategy::SortedBinary),
            "hash" => Ok(Strategy::Hash),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// A lookup structure whose strategy is picked at runtime.
#[derive(Debug, Clone)]
pub enum AnyLookup<K, E> {
    Linear(LinearLookup<K, E>),
    SortedBinary(SortedBinaryLookup<K, E>),
    Hash(HashLookup<K, E>),
}

impl<K, E> AnyLookup<K, E>
where
    K: Ord + Hash + Clone,
    E: KeyedEntry<K>,
{
    /// Build the structure selected by `strategy`.
    ///
    /// [`Strategy::SortedBinary`] keeps its precondition: `entries` must
    /// already be sorted ascending by key.
    pub fn build<I: IntoIterator<Item = E>>(strategy: Strategy, entries: I) -> Self {
        match strategy {
            Strategy::Linear => AnyLookup::Linear(LinearLookup::new(entries)),
            Strategy::SortedBinary => AnyLookup::SortedBinary(SortedBinaryLookup::new(entries)),
            Strategy::Hash => AnyLookup::Hash(HashLookup::new(entries)),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            AnyLookup::Linear(_) => Strategy::Linear,
            AnyLookup::SortedBinary(_) => Strategy::SortedBinary,
            AnyLookup::Hash(_) => Strategy::Hash,
        }
    }

    pub fn entries(&self) -> &[E] {
        match self {
            AnyLookup::Linear(lookup) => lookup.entries(),
            AnyLookup::SortedBinary(lookup) => lookup.entries(),
            AnyLookup::Hash(lookup) => lookup.entries(),
        }
    }
}

impl<K, E> EntryLookup<K, E> for AnyLookup<K, E>
where
    K: Ord + Hash + Clone,
    E: KeyedEntry<K>,
{
    fn find(&self, key: &K) -> Result<&E, LookupError> {
        match self {
            AnyLookup::Linear(lookup) => lookup.find(key),
            AnyLookup::SortedBinary(lookup) => lookup.find(key),
            AnyLookup::Hash(lookup) => lookup.find(key),
        }
    }

    fn len(&self) -> usize {
        match self {
            AnyLookup::Linear(lookup) => lookup.len(),
            AnyLookup::SortedBinary(lookup) => lookup.len(),
            AnyLookup::Hash(lookup) => lookup.len(),
        }
    }
}
