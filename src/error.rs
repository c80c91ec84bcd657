//! Errors raised by the collections in this crate.

use thiserror::Error;

/// Result type alias for fallible collection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when poking at a collection. Both kinds are
/// raised before any structural change happens, so a failed call leaves the
/// collection exactly as it found it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Deleting a key which isn't in the map. Lookups never raise this, they
    /// hand back a caller supplied default instead.
    #[error("key not found")]
    KeyNotFound,

    /// Taking or peeking at an element of an empty stack or queue. The
    /// payload names the structure.
    #[error("{0} is empty")]
    EmptyStructure(&'static str),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_messages() {
        assert_eq!("key not found", Error::KeyNotFound.to_string());
        assert_eq!(
            "stack is empty",
            Error::EmptyStructure("stack").to_string()
        );
    }
}
