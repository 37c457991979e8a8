//! Consumer loops that pull from a producer.
//!
//! Each request to the producer happens synchronously inside the loop; the
//! producer does no work between requests. [`drive_while`] lets the consumer
//! stop early and resume later from the same position.

use std::ops::ControlFlow;

use crate::{Producer, Step};

/// How a consumer loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    /// The producer ran out after handing `consumed` elements to the consumer.
    Exhausted { consumed: usize },
    /// The consumer asked to stop after `consumed` elements.
    Stopped { consumed: usize },
}

impl Drive {
    /// Number of elements the consumer received in this loop.
    pub fn consumed(&self) -> usize {
        match self {
            Drive::Exhausted { consumed } | Drive::Stopped { consumed } => *consumed,
        }
    }

    /// Returns `true` if the loop ended because the producer ran out.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Drive::Exhausted { .. })
    }
}

/// Pull every element from `producer` and hand it to `consumer`.
///
/// Returns the number of elements consumed.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut out = String::new();
/// let n = drive(chars("dog"), |c| out.push(c));
/// assert_eq!(n, 3);
/// assert_eq!(out, "dog");
/// ```
pub fn drive<P, C>(mut producer: P, mut consumer: C) -> usize
where
    P: Producer,
    C: FnMut(P::Item),
{
    let mut consumed = 0;
    while let Step::Yielded(item) = producer.advance() {
        consumer(item);
        consumed += 1;
    }
    consumed
}

/// Pull from `producer` until it is exhausted or `consumer` breaks.
///
/// The producer is borrowed, so after a [`Drive::Stopped`] the caller can
/// drive it again and pick up exactly where the consumer left off.
///
/// ```rust
/// use std::ops::ControlFlow;
/// use lazyseq::prelude::*;
///
/// let mut p = chars("abcd");
/// let mut first = Vec::new();
/// let outcome = drive_while(&mut p, |c| {
///     first.push(c);
///     if c == 'b' { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
/// });
/// assert_eq!(outcome, Drive::Stopped { consumed: 2 });
/// assert_eq!(p.advance().unwrap_yielded(), 'c');
/// ```
pub fn drive_while<P, C>(producer: &mut P, mut consumer: C) -> Drive
where
    P: Producer + ?Sized,
    C: FnMut(P::Item) -> ControlFlow<()>,
{
    let mut consumed = 0;
    loop {
        match producer.advance() {
            Step::Yielded(item) => {
                consumed += 1;
                if consumer(item).is_break() {
                    return Drive::Stopped { consumed };
                }
            }
            Step::Complete(_) => return Drive::Exhausted { consumed },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{chars, empty};

    #[test]
    fn test_drive_counts_elements() {
        let mut seen = Vec::new();
        assert_eq!(drive(chars("xyz"), |c| seen.push(c)), 3);
        assert_eq!(seen, vec!['x', 'y', 'z']);
    }

    #[test]
    fn test_drive_empty() {
        assert_eq!(drive(empty::<u8>(), |_| panic!("nothing to consume")), 0);
    }

    #[test]
    fn test_drive_while_stop_and_resume() {
        let mut p = chars("abcdef");
        let mut out = String::new();

        let first = drive_while(&mut p, |c| {
            out.push(c);
            if out.len() == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(first, Drive::Stopped { consumed: 2 });
        assert_eq!(first.consumed(), 2);

        let rest = drive_while(&mut p, |c| {
            out.push(c);
            ControlFlow::Continue(())
        });
        assert_eq!(rest, Drive::Exhausted { consumed: 4 });
        assert!(rest.is_exhausted());
        assert_eq!(out, "abcdef");
    }

    #[test]
    fn test_drive_while_on_exhausted_producer() {
        let mut p = chars("");
        let outcome = drive_while(&mut p, |_| ControlFlow::Continue(()));
        assert_eq!(outcome, Drive::Exhausted { consumed: 0 });
    }
}
