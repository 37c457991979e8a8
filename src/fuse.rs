//! Permanent exhaustion for arbitrary producers.

use crate::{Producer, Step};

/// Wraps a producer so that, once it reports exhaustion, it is dropped and
/// every later request reports exhaustion without touching it again.
///
/// Created via [`Producer::fuse`].
pub struct Fuse<P> {
    inner: Option<P>,
}

impl<P> Fuse<P> {
    pub(crate) fn new(inner: P) -> Self {
        Self { inner: Some(inner) }
    }

    /// Returns `true` once the wrapped producer has been exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.inner.is_none()
    }
}

impl<P> Producer for Fuse<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        let step = self.inner.advance();
        if step.is_complete() {
            self.inner = None;
        }
        step
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
