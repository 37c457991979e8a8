//! Combining producers together
//!
//! This module provides functions for chaining and transforming producers.

mod chain;
mod map;

// Re-export composition operations
pub use chain::{Chain, chain};
pub use map::{MapItem, map_item};
