//! Core traits and types for instrumented search algorithms.
//!
//! This crate defines the shared abstractions that searches and observers
//! build on:
//!
//! - [`Observer`] — receives search events as they happen
//! - [`SortedSlice`] — a borrowed sequence verified to be finite and sorted
//! - [`ValidationError`] — why an input was rejected before searching

mod observer;
mod validation;

pub use observer::Observer;
pub use validation::{SortedSlice, ValidationError, validate_target};
