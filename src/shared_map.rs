use parking_lot::RwLock;
use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
    sync::Arc,
};

use crate::{error::Result, ordered_map::OrderedHashMap};

/// An OrderedHashMap that any number of threads can hold a handle to.
/// The map itself assumes a single owner; this serialises access to it with a
/// read/write lock, so lookups can run side by side while mutations take
/// turns.
pub struct SharedMap<K, V, S = RandomState>(
    Arc<RwLock<OrderedHashMap<K, V, S>>>,
);

impl<K, V, S> SharedMap<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    /// Puts a map behind a lock so handles to it can be cloned and sent to
    /// other threads. Values come back out as clones, hence `V: Clone`.
    pub fn with_map(map: OrderedHashMap<K, V, S>) -> Self {
        Self(Arc::new(RwLock::new(map)))
    }

    /// Inserts or updates a key, returning the value it replaced.
    pub fn set(&self, k: K, v: V) -> Option<V> {
        self.0.write().set(k, v)
    }

    /// Get a value from the map. This clones it to minimize the lock time of
    /// the map.
    pub fn get<Q>(&self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.0.read().get(k).cloned()
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.0.read().contains_key(k)
    }

    /// Remove a key from the map, returning the removed value.
    pub fn delete<Q>(&self, k: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.0.write().delete(k)
    }

    /// Clears the map.
    pub fn clear(&self) {
        self.0.write().clear()
    }

    /// The number of entries in the map at present.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Copies every pair out in insertion order, under a single read lock.
    pub fn snapshot(&self) -> Vec<(K, V)>
    where
        K: Clone,
    {
        self.0
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V, S> Clone for SharedMap<K, V, S> {
    fn clone(&self) -> Self {
        SharedMap(self.0.clone())
    }
}
