//! # lazyseq: pull-based lazy sequences
//!
//! Build sequence producers that hand out one element per request, and merge
//! any number of them round-robin.
//!
//! ## Core Types
//!
//! - **[`Producer`]**: a stateful cursor with a single `advance` operation
//! - **[`Step`]**: the element, or the explicit [`Exhausted`] marker
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! // Lazily: nothing is produced until the consumer asks.
//! let mut merged = interleave([chars("dog"), chars("cat")]);
//! assert_eq!(merged.advance(), Step::Yielded('d'));
//! assert_eq!(merged.advance(), Step::Yielded('c'));
//!
//! // Eagerly.
//! assert_eq!(merge_str(&["abc", "pqrstu"]), "apbqcrstu");
//! ```
//!
//! ## Common Functions
//!
//! **Building Producers:**
//! - [`cursor(vec)`](build::cursor) / [`chars(text)`](build::chars) - Walk a fixed sequence
//! - [`from_fn(f)`](build::from_fn) - Generator body as a closure
//! - [`from_iter(iter)`](build::from_iter) - Adapt an iterator
//!
//! **Merging:**
//! - [`interleave(inputs)`](interleave::interleave) - Lazy round-robin merge
//! - [`merge(slices)`](interleave::merge) / [`merge_str(strs)`](interleave::merge_str) - Eager
//!
//! **Consuming:**
//! - [`drive(producer, consumer)`](drive::drive) - Pull until exhausted
//! - [`drive_while(producer, consumer)`](drive::drive_while) - Pull until exhausted or stopped

pub mod build;
pub mod cli;
pub mod compose;
pub mod config;
pub mod drive;
pub mod error;
pub mod fuse;
pub mod interleave;
pub mod iter;
pub mod prelude;
mod producer;
mod step;
pub mod telemetry;

pub use producer::Producer;
pub use step::{Exhausted, Step};
