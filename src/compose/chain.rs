use crate::{Producer, step::Step};

/// Produce every element of the first producer, then every element of the second.
///
/// The first producer is dropped once it is exhausted.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let joined: String = chain(chars("do"), chars("g")).items().collect();
/// assert_eq!(joined, "dog");
/// ```
pub fn chain<L, R>(l: L, r: R) -> Chain<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    Chain(Some(l), r)
}

/// Runs two producers back to back.
///
/// Created via [`chain`] or [`Producer::chain`].
pub struct Chain<L, R>(Option<L>, R);

impl<L, R> Producer for Chain<L, R>
where
    L: Producer,
    R: Producer<Item = L::Item>,
{
    type Item = L::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        if let Some(ref mut l) = self.0 {
            match l.advance() {
                Step::Yielded(item) => return Step::Yielded(item),
                Step::Complete(_) => self.0 = None, // we drop the first producer when it's done
            }
        }
        self.1.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (l_low, l_high) = self.0.size_hint();
        let (r_low, r_high) = self.1.size_hint();
        let high = match (l_high, r_high) {
            (Some(l), Some(r)) => l.checked_add(r),
            _ => None,
        };
        (l_low.saturating_add(r_low), high)
    }
}
