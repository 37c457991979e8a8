//! Cursors over fixed, in-memory sequences.
//!
//! A [`Cursor`] holds its backing sequence and a position. The sequence is
//! never modified; `advance` clones the element at the position and moves on.

use std::borrow::Cow;

use crate::{Exhausted, Producer, Step};

/// A position within a fixed sequence.
///
/// Created via [`cursor`], [`from_slice`] or [`chars`].
#[derive(Debug, Clone)]
pub struct Cursor<'a, T>
where
    T: Clone,
{
    items: Cow<'a, [T]>,
    position: usize,
}

impl<T> Cursor<'_, T>
where
    T: Clone,
{
    /// Index of the next element to be produced.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Elements that have not been produced yet.
    pub fn remaining(&self) -> &[T] {
        self.items.get(self.position..).unwrap_or_default()
    }

    /// Returns `true` once every element has been produced.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.items.len()
    }
}

impl<T> Producer for Cursor<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn advance(&mut self) -> Step<Self::Item> {
        match self.items.get(self.position) {
            Some(item) => {
                self.position += 1;
                Step::Yielded(item.clone())
            }
            None => Step::Complete(Exhausted),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining().len();
        (n, Some(n))
    }
}

/// Create a cursor that owns its sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut p = cursor(vec![3, 1]);
/// assert_eq!(p.advance().unwrap_yielded(), 3);
/// assert_eq!(p.advance().unwrap_yielded(), 1);
/// assert!(p.advance().is_complete());
/// ```
pub fn cursor<T>(items: Vec<T>) -> Cursor<'static, T>
where
    T: Clone,
{
    Cursor {
        items: Cow::Owned(items),
        position: 0,
    }
}

/// Create a cursor that borrows its sequence.
pub fn from_slice<T>(items: &[T]) -> Cursor<'_, T>
where
    T: Clone,
{
    Cursor {
        items: Cow::Borrowed(items),
        position: 0,
    }
}

/// Create a cursor over the characters of a string.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut p = chars("hé");
/// assert_eq!(p.advance().unwrap_yielded(), 'h');
/// assert_eq!(p.advance().unwrap_yielded(), 'é');
/// assert!(p.advance().is_complete());
/// ```
pub fn chars(text: &str) -> Cursor<'static, char> {
    cursor(text.chars().collect())
}
