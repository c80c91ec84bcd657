pub mod iter;
pub mod ordered_hash_map;

pub use iter::{IntoIter, Iter, Keys, Values};
pub use ordered_hash_map::OrderedHashMap;

use crate::linked_list::NodeHandle;
use std::borrow::Borrow;

pub type KeyHash = u64;

/// One key/value pair. The order list owns it; the bucket chains only ever
/// refer to it by handle, threading it through `chain_next`.
#[derive(Debug, PartialEq)]
pub(crate) struct MapEntry<K, V> {
    key: K,
    value: V,
    /// Computed once on insertion, reused by every chain walk and rehash.
    hash: KeyHash,
    chain_next: Option<NodeHandle>,
}

impl<K, V> MapEntry<K, V> {
    /// The cached hash rejects most mismatches without an Eq call.
    fn matches<Q>(&self, hash: KeyHash, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.hash == hash && <K as Borrow<Q>>::borrow(&self.key) == k
    }
}
