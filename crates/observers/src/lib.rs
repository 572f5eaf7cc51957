//! Reusable observers for instrumented searches.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across searches in the workspace.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-search observers
//!   ([`HasSearchRange`], [`IsTerminal`])
//!
//! # Observers
//!
//! - [`LogObserver`] — writes each step as a structured `tracing` record
//!
//! [`Observer`]: halving_core::Observer
//! [`HasSearchRange`]: traits::HasSearchRange
//! [`IsTerminal`]: traits::IsTerminal

pub mod traits;

mod log;

pub use log::LogObserver;
