use super::{IntoIter, Iter, KeyHash, Keys, MapEntry, Values};
use crate::{
    collection::Collection,
    error::{Error, Result},
    linked_list::{LinkedList, NodeHandle},
};
use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    fmt,
    hash::{BuildHasher, Hash, Hasher},
    iter::FromIterator,
    mem,
};

/// Bucket count used by [`OrderedHashMap::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// Load factor used when none is given.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// A hash table which remembers the order its keys were first inserted in.
///
/// Entries live in a flattened doubly linked list (the order list), which
/// owns them. The bucket array is a set of singly linked collision chains
/// threaded through those same entries by handle. Every mutation keeps both
/// structures in step: updating a key's value never moves it, deleting a key
/// unlinks it from its chain and the order list in one go, and growing the
/// bucket array relinks the chains without touching the order list.
///
/// The bucket count is always a power of two, so a key's bucket is its hash
/// masked by `capacity - 1`. Whenever an insertion pushes `len / capacity`
/// past the load factor the bucket count doubles.
pub struct OrderedHashMap<K, V, S = RandomState> {
    hash_builder: S,
    buckets: Vec<Option<NodeHandle>>,
    entries: LinkedList<MapEntry<K, V>>,
    load_factor: f64,
}

impl<K, V> OrderedHashMap<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// An empty map with 8 buckets and a load factor of 0.75.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty map with at least `capacity` buckets, rounded up to the next
    /// power of two.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// An empty map with at least `capacity` buckets which doubles its
    /// bucket count whenever `len / capacity` exceeds `load_factor`.
    ///
    /// # Panics
    ///
    /// If `load_factor` isn't in `(0, 1]`, or if `capacity` rounded up to a
    /// power of two doesn't fit in a usize.
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f64,
    ) -> Self {
        Self::with_capacity_and_load_factor_and_hash_builder(
            capacity,
            load_factor,
            Default::default(),
        )
    }
}

impl<K, V, S> OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// An empty map with at least `capacity` buckets, hashing keys with
    /// `hash_builder`.
    pub fn with_capacity_and_hash_builder(
        capacity: usize,
        hash_builder: S,
    ) -> Self {
        Self::with_capacity_and_load_factor_and_hash_builder(
            capacity,
            DEFAULT_LOAD_FACTOR,
            hash_builder,
        )
    }

    /// The fully spelled out constructor; see
    /// [`with_capacity_and_load_factor`](OrderedHashMap::with_capacity_and_load_factor).
    ///
    /// # Panics
    ///
    /// If `load_factor` isn't in `(0, 1]`, or if `capacity` rounded up to a
    /// power of two doesn't fit in a usize.
    pub fn with_capacity_and_load_factor_and_hash_builder(
        capacity: usize,
        load_factor: f64,
        hash_builder: S,
    ) -> Self {
        assert!(
            load_factor > 0.0 && load_factor <= 1.0,
            "load factor must be in (0, 1], got {}",
            load_factor
        );

        let capacity = capacity
            .max(1)
            .checked_next_power_of_two()
            .unwrap_or_else(|| {
                panic!("bucket capacity {} overflows", capacity)
            });

        Self {
            hash_builder,
            buckets: vec![None; capacity],
            entries: LinkedList::with_capacity(capacity),
            load_factor,
        }
    }

    /// Inserts a key/value pair. A new key goes to the back of the order; a
    /// key already present keeps its place and has its value overwritten,
    /// the old value being handed back.
    pub fn set(&mut self, k: K, v: V) -> Option<V> {
        let hash = self.k_hash(&k);
        let idx = self.bucket_index(hash);

        if let Some(handle) = self.find_in_chain(idx, hash, &k) {
            let entry = self.entries.get_mut(handle);
            return Some(mem::replace(&mut entry.value, v));
        }

        // chain order doesn't matter, so prepend
        let handle = self.entries.push_back(MapEntry {
            key: k,
            value: v,
            hash,
            chain_next: self.buckets[idx],
        });
        self.buckets[idx] = Some(handle);

        while self.exceeds_load_factor() {
            self.rehash();
        }

        #[cfg(test)]
        self.consistency_check();

        None
    }

    /// Looks up the value stored for a key.
    pub fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(k).map(|handle| &self.entries.get(handle).value)
    }

    /// Looks up the value stored for a key, falling back on `default` when
    /// the key is absent.
    pub fn get_or<'a, Q>(&'a self, k: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(k).unwrap_or(default)
    }

    /// Looks up the value stored for a key so it can be changed in place.
    /// The key's position in the order is unaffected.
    pub fn get_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.find(k)?;
        Some(&mut self.entries.get_mut(handle).value)
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(k).is_some()
    }

    /// Removes a key from the map, returning its value. Fails with
    /// [`Error::KeyNotFound`] without touching anything if the key is absent.
    pub fn delete<Q>(&mut self, k: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.k_hash(k);
        let idx = self.bucket_index(hash);

        // walk the chain remembering the previous node, so the match can be
        // spliced out of the singly linked chain
        let mut prev: Option<NodeHandle> = None;
        let mut cursor = self.buckets[idx];

        while let Some(handle) = cursor {
            let entry = self.entries.get(handle);

            if entry.matches(hash, k) {
                let chain_next = entry.chain_next;
                match prev {
                    Some(prev) => {
                        self.entries.get_mut(prev).chain_next = chain_next
                    }
                    None => self.buckets[idx] = chain_next,
                }

                let removed = self.entries.remove_node(handle);

                #[cfg(test)]
                self.consistency_check();

                return Ok(removed.value);
            }

            prev = Some(handle);
            cursor = entry.chain_next;
        }

        Err(Error::KeyNotFound)
    }

    fn k_hash<Q>(&self, k: &Q) -> KeyHash
    where
        Q: ?Sized + Hash,
    {
        let mut h = self.hash_builder.build_hasher();
        k.hash(&mut h);
        h.finish()
    }

    fn find<Q>(&self, k: &Q) -> Option<NodeHandle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.k_hash(k);
        self.find_in_chain(self.bucket_index(hash), hash, k)
    }

    fn find_in_chain<Q>(
        &self,
        idx: usize,
        hash: KeyHash,
        k: &Q,
    ) -> Option<NodeHandle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut cursor = self.buckets[idx];

        while let Some(handle) = cursor {
            let entry = self.entries.get(handle);

            if entry.matches(hash, k) {
                return Some(handle);
            }

            cursor = entry.chain_next;
        }

        None
    }

    /// Doubles the bucket count and relinks every entry into its new chain.
    /// Walks the order list rather than the old chains, since those links
    /// are overwritten as it goes. The order list itself is left alone.
    fn rehash(&mut self) {
        let capacity = self.buckets.len() * 2;
        self.buckets = vec![None; capacity];

        let mut cursor = self.entries.head();

        while let Some(handle) = cursor {
            let idx = self.bucket_index(self.entries.get(handle).hash);
            self.entries.get_mut(handle).chain_next = self.buckets[idx];
            self.buckets[idx] = Some(handle);

            cursor = self.entries.next(handle);
        }
    }

    #[cfg(test)]
    fn consistency_check(&self) {
        assert!(self.buckets.len().is_power_of_two());
        assert!(!self.exceeds_load_factor());
        assert_eq!(self.len() == 0, self.entries.head().is_none());
        assert_eq!(self.len() == 0, self.entries.tail().is_none());

        // walk the order list both ways and make sure each matches the
        // number of elements in the map
        let mut count = 0;
        let mut cursor = self.entries.head();
        while let Some(handle) = cursor {
            count += 1;
            assert!(count <= self.len());

            // every entry sits in the chain its cached hash selects
            let entry = self.entries.get(handle);
            let idx = self.bucket_index(entry.hash);
            let mut chain = self.buckets[idx];
            let mut found = false;
            while let Some(link) = chain {
                found |= link == handle;
                chain = self.entries.get(link).chain_next;
            }
            assert!(found);

            cursor = self.entries.next(handle);
        }
        assert_eq!(self.len(), count);

        count = 0;
        cursor = self.entries.tail();
        while let Some(handle) = cursor {
            count += 1;
            assert!(count <= self.len());
            cursor = self.entries.prev(handle);
        }
        assert_eq!(self.len(), count);

        // with every entry found at least once, the chains holding exactly
        // len nodes means nothing is chained twice
        let mut chained = 0;
        for bucket in &self.buckets {
            let mut chain = *bucket;
            while let Some(link) = chain {
                chained += 1;
                assert!(chained <= self.len());
                chain = self.entries.get(link).chain_next;
            }
        }
        assert_eq!(self.len(), chained);
    }
}

impl<K, V, S> OrderedHashMap<K, V, S> {
    /// The number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of buckets, always a power of two.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Drops every entry. The bucket count stays where it grew to.
    pub fn clear(&mut self) {
        self.entries.clear();
        for bucket in self.buckets.iter_mut() {
            *bucket = None;
        }
    }

    /// Iterates over the pairs in the order their keys were first inserted.
    /// Each call starts over from the oldest key.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            entries: &self.entries,
            front: self.entries.head(),
            back: self.entries.tail(),
            remaining: self.entries.len(),
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    fn bucket_index(&self, hash: KeyHash) -> usize {
        hash as usize & (self.buckets.len() - 1)
    }

    fn exceeds_load_factor(&self) -> bool {
        self.len() as f64 / self.buckets.len() as f64 > self.load_factor
    }
}

impl<K, V, S> Collection for OrderedHashMap<K, V, S> {
    fn len(&self) -> usize {
        OrderedHashMap::len(self)
    }

    fn clear(&mut self) {
        OrderedHashMap::clear(self)
    }
}

impl<K, V, S> Default for OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_capacity_and_hash_builder(DEFAULT_CAPACITY, S::default())
    }
}

impl<K, V, S> fmt::Debug for OrderedHashMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same pairs in the same order.
impl<K, V, S> PartialEq for OrderedHashMap<K, V, S>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for OrderedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            entries: self.entries,
        }
    }
}
