//! Round-robin merging of several producers
//!
//! This module provides the lazy [`RoundRobin`] producer and eager helpers
//! that drain it into a collection.

mod merge;
mod round_robin;

// Re-export merge operations
pub use merge::{merge, merge_producers, merge_str};
pub use round_robin::{RoundRobin, interleave};
