//! Binary search with step-by-step tracing.
//!
//! # Algorithm
//!
//! Binary search finds a target in a sorted sequence by comparing it against
//! the middle of the candidate range `[left, right]` and discarding the half
//! that cannot contain it. Each comparison halves the range, so a sequence of
//! `n` elements needs at most `ceil(log2(n + 1))` comparisons.
//!
//! # Validation
//!
//! Inputs are checked once, before any step runs: the target and every
//! element must be finite and the sequence must be non-decreasing. A failed
//! check returns a [`ValidationError`] and no events are emitted.
//!
//! # Observer Events
//!
//! The search emits [`Event`]s in this order:
//!
//! - [`Event::Init`] once
//! - for an empty sequence, [`Event::Empty`] and nothing else
//! - per iteration: [`Event::Range`], [`Event::Pointers`], [`Event::Compare`],
//!   then either [`Event::Found`] (which ends the search) or
//!   [`Event::Eliminate`]
//! - [`Event::Exhausted`] if the range empties without a match
//!
//! Observers cannot influence the search. Running with `()` and with a
//! [`Recorder`] yields the same index and comparison count.
//!
//! # Duplicates
//!
//! When the target occurs more than once, any matching index may be
//! returned.

mod complexity;
mod event;
mod fixtures;
mod recorder;
mod search;
mod solution;
mod state;


pub use complexity::{ComplexityInfo, complexity_info};
pub use event::{Comparison, Event, EventKind, Half};
pub use fixtures::{Expected, Fixture, fixtures};
pub use recorder::{Recorder, TraceEvent};
pub use solution::{Outcome, SearchResult};
pub use state::max_comparisons;

use halving_core::{Observer, SortedSlice, ValidationError, validate_target};
use tracing::{debug, trace};

/// Name reported in the `init` event.
pub const ALGORITHM: &str = "binary-search";

/// Searches a sorted sequence, reporting each step to `observer`.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the target or any element is non-finite,
/// or if the sequence is not sorted in non-decreasing order.
pub fn search_observed<Obs>(
    data: &[f64],
    target: f64,
    observer: &mut Obs,
) -> Result<Outcome, ValidationError>
where
    Obs: Observer<Event> + ?Sized,
{
    let sorted = validate(data, target).inspect_err(|err| {
        debug!(len = data.len(), %err, "rejected binary search input");
    })?;

    let outcome = search::search(sorted, target, observer);

    trace!(
        len = data.len(),
        target_value = target,
        index = ?outcome.index,
        comparisons = outcome.comparisons,
        "binary search finished"
    );

    Ok(outcome)
}

/// Searches a sorted sequence without tracing.
///
/// Returns the index of an element equal to `target`, or `None`.
///
/// # Errors
///
/// Returns a [`ValidationError`] under the same conditions as
/// [`search_observed`].
pub fn search(data: &[f64], target: f64) -> Result<Option<usize>, ValidationError> {
    search_observed(data, target, &mut ()).map(|outcome| outcome.index)
}

/// Searches a sorted sequence and records every step.
///
/// # Errors
///
/// Returns a [`ValidationError`] under the same conditions as
/// [`search_observed`].
pub fn search_with_trace(data: &[f64], target: f64) -> Result<SearchResult, ValidationError> {
    let mut recorder = Recorder::for_len(data.len());
    let outcome = search_observed(data, target, &mut recorder)?;
    Ok(SearchResult::assemble(outcome, recorder.into_events()))
}

fn validate(data: &[f64], target: f64) -> Result<SortedSlice<'_>, ValidationError> {
    validate_target(target)?;
    SortedSlice::new(data)
}
