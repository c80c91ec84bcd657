//! A handful of fundamental collections, the interesting one being
//! [`OrderedHashMap`]: a chained hash table which also threads its entries
//! on a doubly linked list, so it iterates in the order keys were first
//! inserted no matter how often they're updated or how many times the table
//! grows underneath them.
//!
//! [`Stack`] and [`Queue`] round things out, the latter on a ring buffer
//! which doubles when full.
//!
//! ```
//! use ordered_collections::OrderedHashMap;
//!
//! let mut map = OrderedHashMap::new();
//! map.set("uno", 1);
//! map.set("dos", 2);
//! map.set("uno", 11);
//!
//! let pairs: Vec<_> = map.iter().collect();
//! assert_eq!(vec![(&"uno", &11), (&"dos", &2)], pairs);
//! ```

mod collection;
mod error;
mod identity_hasher;
mod linked_list;
pub mod ordered_map;
mod queue;
#[cfg(feature = "shared_map")]
mod shared_map;
mod stack;

pub use collection::Collection;
pub use error::{Error, Result};
pub use identity_hasher::{BuildIdentityHasher, IdentityHasher};
pub use ordered_map::OrderedHashMap;
pub use queue::Queue;
#[cfg(feature = "shared_map")]
pub use shared_map::SharedMap;
pub use stack::Stack;
