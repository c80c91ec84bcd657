/// Describes what every collection in this crate can do, regardless of how
/// it orders its contents.
pub trait Collection {
    /// The number of items stored in the collection right now.
    fn len(&self) -> usize;

    /// Whether there is nothing in the collection.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Throws away everything in the collection. Keeps whatever storage it
    /// has already grown into.
    fn clear(&mut self);
}
