//! Capability traits for cross-search observers.
//!
//! These traits abstract over search-specific event types, so observers such
//! as [`LogObserver`](crate::LogObserver) work with any search that
//! implements them.
//!
//! - [`HasSearchRange`] — events that know the candidate range
//! - [`IsTerminal`] — events that can end a search

use halving_search::binary_search::{self, Event};

/// An event that carries the candidate range it applies to.
pub trait HasSearchRange {
    /// Returns the inclusive `[left, right]` range, if the event has one.
    fn search_range(&self) -> Option<[usize; 2]>;
}

/// An event that may be the last one a search emits.
pub trait IsTerminal {
    /// Returns true if no further events follow this one.
    fn is_terminal(&self) -> bool;
}

// --- binary_search::Event ---

impl HasSearchRange for binary_search::Event {
    fn search_range(&self) -> Option<[usize; 2]> {
        match *self {
            Event::Range { left, right, .. }
            | Event::Pointers { left, right, .. }
            | Event::Compare { left, right, .. }
            | Event::Found { left, right, .. }
            | Event::Eliminate { left, right, .. } => Some([left, right]),
            Event::Init { .. } | Event::Exhausted { .. } | Event::Empty => None,
        }
    }
}

impl IsTerminal for binary_search::Event {
    fn is_terminal(&self) -> bool {
        matches!(
            self,
            Event::Found { .. } | Event::Exhausted { .. } | Event::Empty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_comes_from_iteration_events() {
        let event = Event::Range {
            left: 2,
            right: 6,
            mid: 4,
        };
        assert_eq!(event.search_range(), Some([2, 6]));
        assert_eq!(Event::Empty.search_range(), None);
    }

    #[test]
    fn terminal_events_end_the_search() {
        let found = Event::Found {
            left: 0,
            right: 0,
            mid: 0,
            target: 1.0,
            comparisons: 1,
        };
        assert!(found.is_terminal());
        assert!(Event::Empty.is_terminal());
        assert!(
            !Event::Init {
                target: 1.0,
                len: 3
            }
            .is_terminal()
        );
    }
}
