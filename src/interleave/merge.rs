//! Eager entry points for the round-robin merge.
//!
//! Every call builds fresh cursors over the given inputs, so merging the same
//! inputs twice always produces the same output and the inputs themselves are
//! only ever read.

use log::debug;

use super::round_robin::interleave;
use crate::{
    Producer,
    build::{chars, from_slice},
    drive::drive,
};

/// Merge any number of producers into a vector, round by round.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let merged = merge_producers([cursor(vec![1, 2, 3]), cursor(vec![7])]);
/// assert_eq!(merged, vec![1, 7, 2, 3]);
/// ```
pub fn merge_producers<I, P>(inputs: I) -> Vec<P::Item>
where
    I: IntoIterator<Item = P>,
    P: Producer,
{
    let merged = interleave(inputs);
    let width = merged.width();
    let mut out = Vec::with_capacity(merged.size_hint().0);
    let produced = drive(merged, |item| out.push(item));
    debug!("merged {width} inputs into {produced} elements");
    out
}

/// Merge slices of elements, round by round.
///
/// The output length is the sum of the input lengths.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(merge(&[vec![1, 2], vec![], vec![3, 4, 5]]), vec![1, 3, 2, 4, 5]);
/// assert_eq!(merge::<u8, Vec<u8>>(&[]), Vec::<u8>::new());
/// ```
pub fn merge<T, S>(inputs: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    merge_producers(inputs.iter().map(|input| from_slice(input.as_ref())))
}

/// Merge strings character by character, round by round.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(merge_str(&["dog", "cat"]), "dcoagt");
/// assert_eq!(merge_str(&["abc", "pqrstu"]), "apbqcrstu");
/// assert_eq!(merge_str(&["abc", ""]), "abc");
/// ```
pub fn merge_str<S>(inputs: &[S]) -> String
where
    S: AsRef<str>,
{
    merge_producers(inputs.iter().map(|input| chars(input.as_ref())))
        .into_iter()
        .collect()
}
