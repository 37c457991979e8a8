//! Iterator adapter for producers.
//!
//! This module bridges a [`Producer`] into the standard [`Iterator`] world so
//! that the usual adapters (`take`, `collect`, `zip`, ...) apply.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = chars("cat").items();
//! let head: Vec<_> = (&mut iter).take(2).collect();
//! assert_eq!(head, vec!['c', 'a']);
//! assert!(!iter.is_exhausted());
//! assert_eq!(iter.next(), Some('t'));
//! assert_eq!(iter.next(), None);
//! assert!(iter.is_exhausted());
//! ```

use std::iter::FusedIterator;

use crate::{Producer, Step};

/// Iterator adapter for a [`Producer`].
///
/// Created via [`Producer::items`]. Both `ProducerIter` and
/// `&mut ProducerIter` implement `Iterator`, so a consumer can take a prefix
/// and keep the remainder.
pub struct ProducerIter<P> {
    producer: P,
    exhausted: bool,
}

impl<P> ProducerIter<P>
where
    P: Producer,
{
    /// Create a new iterator from a producer.
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            exhausted: false,
        }
    }

    /// Check if the underlying producer has reported exhaustion.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Recover the producer, positioned after the last element returned.
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P> Iterator for ProducerIter<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.producer.advance() {
            Step::Yielded(item) => Some(item),
            Step::Complete(_) => {
                self.exhausted = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            self.producer.size_hint()
        }
    }
}

impl<P> FusedIterator for ProducerIter<P> where P: Producer {}
