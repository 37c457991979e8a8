//! Transforming produced elements.

use crate::{Producer, step::Step};

/// Transforms elements handed out by the wrapped producer.
///
/// Allows converting or formatting elements without changing the underlying
/// sequence.
pub struct MapItem<P, F> {
    f: F,
    producer: P,
}

/// Create a producer that applies `f` to every element of `producer`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut codes = map_item(chars("AB"), |c| c as u32);
/// assert_eq!(codes.advance().unwrap_yielded(), 65);
/// assert_eq!(codes.advance().unwrap_yielded(), 66);
/// ```
pub fn map_item<P, U, F>(producer: P, f: F) -> MapItem<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    MapItem { f, producer }
}

impl<P, U, F> Producer for MapItem<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Step<Self::Item> {
        self.producer.advance().map_yielded(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.producer.size_hint()
    }
}
