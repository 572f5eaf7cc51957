use std::fmt::Display;

use halving_core::Observer;
use tracing::{debug, trace};

use crate::traits::{HasSearchRange, IsTerminal};

/// Writes every search step as a structured `tracing` record.
///
/// Intermediate steps are logged at `TRACE` and the terminal step at `DEBUG`,
/// each with the step number, the candidate range when known, and the event's
/// description as the message.
///
/// # Example
///
/// ```
/// use halving_observers::LogObserver;
/// use halving_search::binary_search;
///
/// let mut log = LogObserver::new("lookup");
/// let outcome = binary_search::search_observed(&[1.0, 2.0, 3.0], 3.0, &mut log).unwrap();
///
/// assert_eq!(outcome.index, Some(2));
/// assert_eq!(log.steps(), 1 + 4 * outcome.comparisons);
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: &'static str,
    steps: usize,
}

impl LogObserver {
    /// Creates an observer whose records carry `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label, steps: 0 }
    }

    /// Returns the number of steps logged so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<E> Observer<E> for LogObserver
where
    E: HasSearchRange + IsTerminal + Display,
{
    fn observe(&mut self, event: &E) {
        self.steps += 1;
        let range = event.search_range();

        if event.is_terminal() {
            debug!(label = self.label, step = self.steps, ?range, "{event}");
        } else {
            trace!(label = self.label, step = self.steps, ?range, "{event}");
        }
    }
}
