//! Instrumented search algorithms for visualization and teaching.
//!
//! Each search computes its conventional result and, through an
//! [`Observer`](halving_core::Observer), reports the internal state behind
//! every decision it makes.
//!
//! # Searches
//!
//! - [`binary_search`] — halving search over a sorted sequence

pub mod binary_search;

pub use halving_core::{Observer, ValidationError};
