use std::{rc::Rc, sync::Arc};

use crate::error::LookupError;

/// A value that carries its own lookup key.
///
/// The key must not change while the entry is owned by a lookup structure.
/// Sorted order and hash index are computed once at construction and are
/// never revalidated.
pub trait KeyedEntry<K> {
    fn key(&self) -> &K;
}

impl<K, V> KeyedEntry<K> for (K, V) {
    fn key(&self) -> &K {
        &self.0
    }
}

impl<K, E: KeyedEntry<K> + ?Sized> KeyedEntry<K> for &E {
    fn key(&self) -> &K {
        (**self).key()
    }
}

impl<K, E: KeyedEntry<K> + ?Sized> KeyedEntry<K> for Box<E> {
    fn key(&self) -> &K {
        (**self).key()
    }
}

impl<K, E: KeyedEntry<K> + ?Sized> KeyedEntry<K> for Rc<E> {
    fn key(&self) -> &K {
        (**self).key()
    }
}

impl<K, E: KeyedEntry<K> + ?Sized> KeyedEntry<K> for Arc<E> {
    fn key(&self) -> &K {
        (**self).key()
    }
}

/// Exact-key lookup over a fixed collection of entries.
///
/// Implementations are built once from an entry sequence and are immutable
/// afterwards, so `&self` queries can be shared freely between threads.
pub trait EntryLookup<K, E: KeyedEntry<K>> {
    /// Find the entry whose key equals `key`.
    ///
    /// If success, return the reference of the entry.
    /// If fail, return Err(LookupError::NotFound).
    fn find(&self, key: &K) -> Result<&E, LookupError>;

    /// Number of entries owned by the structure, duplicates included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &K) -> Option<&E> {
        self.find(key).ok()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_ok()
    }
}
