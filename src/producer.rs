//! The pull-based sequence producer.
//!
//! A [`Producer`] is a stateful cursor: every call to [`Producer::advance`]
//! either hands out the next element or reports [`Exhausted`]. Nothing runs
//! between calls, so a producer behaves like a generator that is paused at
//! its last yield until the consumer asks again.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut letters = chars("ab");
//! assert_eq!(letters.advance(), Step::Yielded('a'));
//! assert_eq!(letters.advance(), Step::Yielded('b'));
//! assert_eq!(letters.advance(), Step::Complete(Exhausted));
//! assert_eq!(letters.advance(), Step::Complete(Exhausted));
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{
    compose::{Chain, MapItem, chain, map_item},
    fuse::Fuse,
    iter::ProducerIter,
    step::{Exhausted, Step},
};

/// A cursor over an ordered sequence that produces one element per request.
///
/// Implementations must never hand out an element twice and must keep
/// returning `Step::Complete(Exhausted)` once they have returned it. Wrap a
/// producer in [`Fuse`] when the second half of that contract cannot be
/// guaranteed by construction.
pub trait Producer {
    /// Type of the elements handed out.
    type Item;

    /// Produce the element at the current position and move past it.
    fn advance(&mut self) -> Step<Self::Item>;

    /// Bounds on the number of elements still to come, with the same meaning
    /// as [`Iterator::size_hint`].
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Transform every element handed out by this producer.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let upper: String = chars("cat").map_item(|c| c.to_ascii_uppercase()).items().collect();
    /// assert_eq!(upper, "CAT");
    /// ```
    fn map_item<U, F>(self, f: F) -> MapItem<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        map_item(self, f)
    }

    /// Produce every element of `self`, then every element of `next`.
    fn chain<P>(self, next: P) -> Chain<Self, P>
    where
        Self: Sized,
        P: Producer<Item = Self::Item>,
    {
        chain(self, next)
    }

    /// Guarantee that exhaustion is permanent.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Erase the concrete type, e.g. to merge producers built in different ways.
    fn boxed<'a>(self) -> Box<dyn Producer<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Borrow the producer so that an adapter does not take ownership of it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// View the producer as an [`Iterator`].
    fn items(self) -> ProducerIter<Self>
    where
        Self: Sized,
    {
        ProducerIter::new(self)
    }
}

impl<P> Producer for &'_ mut P
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

impl<P> Producer for Box<P>
where
    P: Producer + ?Sized,
{
    type Item = P::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

/// `None` behaves as a producer that is already exhausted.
impl<P> Producer for Option<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        match self {
            Some(p) => p.advance(),
            None => Step::Complete(Exhausted),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Some(p) => p.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<L, R> Producer for either::Either<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    type Item = L::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        match self {
            either::Either::Left(l) => l.advance(),
            either::Either::Right(r) => r.advance(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            either::Either::Left(l) => l.size_hint(),
            either::Either::Right(r) => r.size_hint(),
        }
    }
}

/// Shared producers advance the same underlying position.
impl<P> Producer for Rc<RefCell<P>>
where
    P: Producer,
{
    type Item = P::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        self.borrow_mut().advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.borrow().size_hint()
    }
}
