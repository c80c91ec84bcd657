//! A FIFO queue on top of a growable ring buffer.

use std::{fmt, iter};

use crate::{
    collection::Collection,
    error::{Error, Result},
};

/// Capacity used by [`Queue::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// First in, first out. Items sit in a ring buffer whose length is a power of
/// two, so wrapping around is a mask rather than a modulo. When the ring is
/// full it doubles, unrolling the live items to the front of the new buffer in
/// queue order.
pub struct Queue<T> {
    /// The ring. Slots outside the live range are always None.
    buf: Vec<Option<T>>,

    /// Index of the front of the queue.
    head: usize,

    /// The number of items in the queue.
    size: usize,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Makes an empty queue with a ring of at least `capacity` slots, rounded
    /// up to the next power of two.
    ///
    /// # Panics
    ///
    /// If that power of two doesn't fit in a usize.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity
            .max(1)
            .checked_next_power_of_two()
            .unwrap_or_else(|| {
                panic!("queue capacity {} overflows", capacity)
            });

        Self {
            buf: iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            size: 0,
        }
    }

    fn mask(&self) -> usize {
        self.buf.len() - 1
    }

    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) & self.mask()
    }

    /// Doubles the ring, moving the live items to its front.
    fn grow(&mut self) {
        let capacity = self.buf.len() * 2;
        let mut buf: Vec<Option<T>> = Vec::with_capacity(capacity);

        for offset in 0..self.size {
            let idx = self.slot(offset);
            buf.push(self.buf[idx].take());
        }
        buf.resize_with(capacity, || None);

        self.buf = buf;
        self.head = 0;
    }

    /// Puts an item at the back of the queue.
    pub fn enqueue(&mut self, t: T) {
        if self.size == self.buf.len() {
            self.grow();
        }

        let tail = self.slot(self.size);
        self.buf[tail] = Some(t);
        self.size += 1;
    }

    /// Takes the item at the front of the queue.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.size == 0 {
            return Err(Error::EmptyStructure("queue"));
        }

        match self.buf[self.head].take() {
            Some(t) => {
                self.head = self.slot(1);
                self.size -= 1;
                Ok(t)
            }
            None => Err(Error::EmptyStructure("queue")),
        }
    }

    /// Looks at the item at the front of the queue without taking it.
    pub fn front(&self) -> Result<&T> {
        if self.size == 0 {
            return Err(Error::EmptyStructure("queue"));
        }

        self.buf[self.head]
            .as_ref()
            .ok_or(Error::EmptyStructure("queue"))
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of slots in the ring.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Empties the queue. The ring keeps its current capacity.
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.size = 0;
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.size)
            .filter_map(move |offset| self.buf[self.slot(offset)].as_ref())
    }

    /// Copies the queue out, front first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for Queue<T> {
    fn len(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        Queue::clear(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
