use std::{iter::Fuse, marker::PhantomData};

use crate::{Exhausted, Producer, Step};

/// Produces whatever a closure returns, until it first reports exhaustion.
///
/// The closure is dropped as soon as it returns `Step::Complete`, so it is
/// never called again afterwards.
pub struct FromFn<F>(Option<F>);

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;

    fn advance(&mut self) -> Step<Self::Item> {
        let Some(f) = self.0.as_mut() else {
            return Step::Complete(Exhausted);
        };
        match f() {
            Step::Yielded(t) => Step::Yielded(t),
            Step::Complete(Exhausted) => {
                self.0 = None;
                Step::Complete(Exhausted)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.0 {
            Some(_) => (0, None),
            None => (0, Some(0)),
        }
    }
}

/// Create a producer from a closure.
///
/// The closure is the generator body: it keeps its own state between calls
/// and reports the end of the sequence with `Step::Complete(Exhausted)`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut countdown = from_fn(move || {
///     n += 1;
///     if n <= 2 { Step::Yielded(3 - n) } else { Step::Complete(Exhausted) }
/// });
/// assert_eq!(countdown.advance().unwrap_yielded(), 2);
/// assert_eq!(countdown.advance().unwrap_yielded(), 1);
/// assert!(countdown.advance().is_complete());
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    FromFn(Some(f))
}

/// Adapts an [`Iterator`] into a producer.
pub struct FromIter<I>(Fuse<I>);

impl<I> Producer for FromIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        self.0.next().into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Create a producer that pulls from an iterator.
///
/// The iterator is fused, so an iterator that resumes after returning `None`
/// still yields a permanently exhausted producer.
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter(iter.into_iter().fuse())
}

/// A producer with nothing to produce.
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Producer for Empty<T> {
    type Item = T;

    fn advance(&mut self) -> Step<Self::Item> {
        Step::Complete(Exhausted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

/// Create a producer that is exhausted from the start.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}
