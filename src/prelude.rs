//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Exhausted, Producer, Step};

// Most common constructors
pub use crate::build::{chars, cursor, empty, from_fn, from_iter, from_slice};

// Composition
pub use crate::compose::{chain, map_item};

// Merging
pub use crate::interleave::{interleave, merge, merge_producers, merge_str};

// Consumption
pub use crate::drive::{Drive, drive, drive_while};
