//! A LIFO stack on top of a Vec.

use std::fmt;

use crate::{
    collection::Collection,
    error::{Error, Result},
};

/// Last in, first out. The top of the stack is the back of the Vec.
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Makes a new stack with room for `capacity` items before it has to
    /// grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Puts an item on top of the stack.
    pub fn push(&mut self, t: T) {
        self.items.push(t);
    }

    /// Takes the top item off the stack.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStructure("stack"))
    }

    /// Looks at the top item without taking it.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyStructure("stack"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Copies the stack out, bottom first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for Stack<T> {
    fn len(&self) -> usize {
        self.size()
    }

    fn clear(&mut self) {
        Stack::clear(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;
    use crate::error::Error;

    #[test]
    fn test_lifo() {
        let mut s = Stack::new();
        assert!(s.is_empty());

        s.push(10);
        s.push(20);
        s.push(30);
        assert_eq!(3, s.size());
        assert_eq!(Ok(&30), s.peek());

        assert_eq!(Ok(30), s.pop());
        assert_eq!(Ok(20), s.pop());
        assert_eq!(1, s.size());
        assert_eq!(Ok(&10), s.peek());

        assert_eq!(Ok(10), s.pop());
        assert!(s.is_empty());
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut s: Stack<u8> = Stack::new();
        assert_eq!(Err(Error::EmptyStructure("stack")), s.pop());
        assert_eq!(Err(Error::EmptyStructure("stack")), s.peek());

        // failing doesn't leave anything behind
        s.push(1);
        assert_eq!(Ok(1), s.pop());
        assert!(s.pop().is_err());
    }

    #[test]
    fn test_clear() {
        let mut s = Stack::with_capacity(5);
        for ch in "ABCDE".chars() {
            s.push(ch);
        }
        assert_eq!(5, s.size());
        assert_eq!(vec!['A', 'B', 'C', 'D', 'E'], s.to_vec());
        assert_eq!(r#"['A', 'B', 'C', 'D', 'E']"#, format!("{:?}", s));

        s.clear();
        assert!(s.is_empty());
        assert!(s.pop().is_err());
    }
}
