//! Building producers from scratch
//!
//! This module provides functions and types for creating new producers.

mod cursor;
mod func;

// Re-export building blocks
pub use cursor::{Cursor, chars, cursor, from_slice};
pub use func::{Empty, FromFn, FromIter, empty, from_fn, from_iter};
