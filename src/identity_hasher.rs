//! A hasher which just proxies for the integer it's given. Handy for keys
//! which are already well distributed integers, and for tests, where it makes
//! it trivial to reason about which bucket a key lands in.

use std::hash::{BuildHasher, Hasher};

/// Hashes a lone integer to itself. Every write rotates what's already been
/// hashed and xors the new input in, so composite keys (tuples, strings) still
/// depend on all of their parts. Raw bytes are folded in a byte at a time,
/// little-endian. Deterministic, but not much else.
#[derive(Default)]
pub struct IdentityHasher(u64);

impl IdentityHasher {
    fn mix(&mut self, i: u64) {
        // starting from zero the rotation is a no-op, keeping lone integers
        // intact
        self.0 = self.0.rotate_left(29) ^ i;
    }
}

impl Hasher for IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.0 = self.0.rotate_left(8) ^ *byte as u64;
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.mix(i as u64);
    }

    fn write_u16(&mut self, i: u16) {
        self.mix(i as u64);
    }

    fn write_u32(&mut self, i: u32) {
        self.mix(i as u64);
    }

    fn write_u64(&mut self, i: u64) {
        self.mix(i);
    }

    fn write_usize(&mut self, i: usize) {
        self.mix(i as u64);
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Builds new IdentityHashers on demand.
#[derive(Clone, Copy, Default, Debug)]
pub struct BuildIdentityHasher;

impl BuildHasher for BuildIdentityHasher {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher(0)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        hash::{BuildHasher, Hash, Hasher},
    };

    use super::{BuildIdentityHasher, IdentityHasher};
    use crate::ordered_map::OrderedHashMap;

    #[test]
    fn test_hasher() {
        let mut h0 = IdentityHasher(0);
        h0.write_u64(0xc8c8c8c8);
        assert_eq!(0xc8c8c8c8, h0.finish());

        let mut h1 = IdentityHasher(0);
        h1.write(&0xc8c8c8c8c8c8c8c8u64.to_le_bytes());
        assert_eq!(0xc8c8c8c8c8c8c8c8, h1.finish());
    }

    fn hash_of<T: Hash>(t: T) -> u64 {
        let mut h = BuildIdentityHasher.build_hasher();
        t.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_integers_hash_to_themselves() {
        assert_eq!(50, hash_of(50usize));
        assert_eq!(7, hash_of(7u32));
        assert_eq!(199, hash_of(199i32));
        assert_eq!(u64::MAX, hash_of(u64::MAX));
    }

    #[test]
    fn test_composite_keys_use_every_part() {
        assert_ne!(hash_of("uno"), hash_of("dos"));
        assert_ne!(hash_of("uno"), hash_of("tres"));
        assert_ne!(hash_of(String::from("ab")), hash_of(String::from("ba")));

        // tuples differing only in their first field
        assert_ne!(hash_of((1u32, 2u32)), hash_of((9u32, 2u32)));
        assert_ne!(hash_of((1u64, 2u64)), hash_of((2u64, 2u64)));
    }

    #[test]
    fn test_string_keys_spread_over_buckets() {
        let mut map: OrderedHashMap<String, usize, BuildIdentityHasher> =
            OrderedHashMap::with_capacity_and_hash_builder(
                64,
                BuildIdentityHasher,
            );
        for i in 0..32 {
            map.set(format!("key{}", i), i);
        }

        let buckets: HashSet<u64> = map
            .keys()
            .map(|k| hash_of(k.as_str()) & (map.capacity() as u64 - 1))
            .collect();
        assert!(buckets.len() > 1);
        assert_eq!(Some(&17), map.get("key17"));
    }
}
