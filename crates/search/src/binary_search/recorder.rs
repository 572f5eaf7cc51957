use halving_core::Observer;
use serde::Serialize;

use super::{Event, EventKind, state::max_comparisons};

/// One recorded step of a traced search.
///
/// Serializes as `{kind, indices, metadata, description, sequenceNumber}`;
/// see [`Event`] for the metadata keys of each kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceEvent {
    kind: EventKind,
    indices: Vec<usize>,
    metadata: Event,
    description: String,
    sequence_number: usize,
}

impl TraceEvent {
    fn new(event: Event, sequence_number: usize) -> Self {
        Self {
            kind: event.kind(),
            indices: event.indices(),
            description: event.to_string(),
            metadata: event,
            sequence_number,
        }
    }

    /// Returns the step category.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Returns the positions relevant to this step.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the typed event this step was recorded from.
    #[must_use]
    pub fn metadata(&self) -> &Event {
        &self.metadata
    }

    /// Returns the human-readable summary.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the 1-based position of this step in its trace.
    #[must_use]
    pub fn sequence_number(&self) -> usize {
        self.sequence_number
    }

    /// Returns true if this step ends a search that ran out of candidates.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.metadata, Event::Exhausted { .. })
    }
}

/// An observer that keeps every event as an append-only [`TraceEvent`] log.
///
/// Each event is stamped with a sequence number equal to its 1-based
/// position. Recorded steps are never removed or changed.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Vec<TraceEvent>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder with room for the longest trace over `len` elements.
    ///
    /// A search emits `init`, four events per comparison, and one terminal
    /// event.
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        Self {
            events: Vec::with_capacity(2 + 4 * max_comparisons(len)),
        }
    }

    /// Returns the steps recorded so far.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the recorder and returns its steps.
    #[must_use]
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl Observer<Event> for Recorder {
    fn observe(&mut self, event: &Event) {
        let sequence_number = self.events.len() + 1;
        self.events.push(TraceEvent::new(*event, sequence_number));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamps_one_based_positions() {
        let mut recorder = Recorder::new();
        recorder.observe(&Event::Init {
            target: 5.0,
            len: 0,
        });
        recorder.observe(&Event::Empty);

        let numbers: Vec<_> = recorder
            .events()
            .iter()
            .map(TraceEvent::sequence_number)
            .collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn derives_kind_indices_and_description() {
        let mut recorder = Recorder::for_len(5);
        recorder.observe(&Event::Range {
            left: 1,
            right: 3,
            mid: 2,
        });

        let step = &recorder.events()[0];
        assert_eq!(step.kind(), EventKind::Highlight);
        assert_eq!(step.indices(), &[1, 2, 3]);
        assert_eq!(step.description(), "Search range: [1, 3] (3 elements)");
        assert!(!step.is_exhausted());
    }

    #[test]
    fn preallocates_for_longest_trace() {
        let recorder = Recorder::for_len(7);
        assert!(recorder.is_empty());
        assert!(recorder.events.capacity() >= 14);
    }
}
