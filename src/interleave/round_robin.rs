use log::trace;

use crate::{Exhausted, Producer, Step};

/// Interleaves any number of producers one element at a time.
///
/// In round `r` every input that still has an `r`-th element produces it,
/// in input order. An input that reports exhaustion is dropped and skipped in
/// all later rounds, so longer inputs keep contributing after shorter ones run
/// out. The merged producer is exhausted once every input is.
///
/// Created via [`interleave`].
pub struct RoundRobin<P> {
    inputs: Vec<Option<P>>,
    next_index: usize,
    round: usize,
    live: usize,
}

/// Create a lazy round-robin merge over `inputs`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let merged: String = interleave([chars("abc"), chars("pqrstu")]).items().collect();
/// assert_eq!(merged, "apbqcrstu");
/// ```
pub fn interleave<I, P>(inputs: I) -> RoundRobin<P>
where
    I: IntoIterator<Item = P>,
    P: Producer,
{
    let inputs: Vec<Option<P>> = inputs.into_iter().map(Some).collect();
    let live = inputs.len();
    RoundRobin {
        inputs,
        next_index: 0,
        round: 0,
        live,
    }
}

impl<P> RoundRobin<P> {
    /// Index of the round currently being produced, starting at zero.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Number of inputs that have not reported exhaustion yet.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Total number of inputs, exhausted or not.
    pub fn width(&self) -> usize {
        self.inputs.len()
    }
}

impl<P> Producer for RoundRobin<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        while self.live > 0 {
            if self.next_index >= self.inputs.len() {
                self.next_index = 0;
                self.round += 1;
                trace!("starting round {} with {} live inputs", self.round, self.live);
            }
            let index = self.next_index;
            self.next_index += 1;

            let Some(slot) = self.inputs.get_mut(index) else {
                continue;
            };
            match slot.advance() {
                Step::Yielded(item) => return Step::Yielded(item),
                Step::Complete(Exhausted) => {
                    if slot.take().is_some() {
                        self.live -= 1;
                        trace!("input {index} exhausted in round {}", self.round);
                    }
                }
            }
        }
        Step::Complete(Exhausted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inputs
            .iter()
            .map(|input| input.size_hint())
            .fold((0, Some(0)), |(low, high), (l, h)| {
                let high = match (high, h) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                (low.saturating_add(l), high)
            })
    }
}
