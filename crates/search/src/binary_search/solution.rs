use serde::{Serialize, Serializer};

use super::TraceEvent;

/// Result of the search core, independent of any observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Index of an element equal to the target, if one exists.
    pub index: Option<usize>,

    /// Number of element-versus-target comparisons performed.
    pub comparisons: usize,
}

impl Outcome {
    pub(super) fn hit(index: usize, comparisons: usize) -> Self {
        Self {
            index: Some(index),
            comparisons,
        }
    }

    pub(super) fn miss(comparisons: usize) -> Self {
        Self {
            index: None,
            comparisons,
        }
    }

    /// Returns true if the target was found.
    #[must_use]
    pub fn found(&self) -> bool {
        self.index.is_some()
    }
}

/// The result of a traced binary search.
///
/// Serializes as `{found, index, trace, comparisonCount}` with `index`
/// written as `-1` when the target is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Whether an element equal to the target was found.
    pub found: bool,

    /// Index of the matching element.
    #[serde(serialize_with = "index_or_sentinel")]
    pub index: Option<usize>,

    /// Every recorded step in order.
    pub trace: Vec<TraceEvent>,

    /// Number of element-versus-target comparisons performed.
    pub comparison_count: usize,
}

impl SearchResult {
    /// Packages a search outcome with its recorded steps.
    #[must_use]
    pub fn assemble(outcome: Outcome, trace: Vec<TraceEvent>) -> Self {
        Self {
            found: outcome.found(),
            index: outcome.index,
            trace,
            comparison_count: outcome.comparisons,
        }
    }
}

#[allow(clippy::ref_option)]
fn index_or_sentinel<S: Serializer>(
    index: &Option<usize>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match *index {
        Some(index) => index.serialize(serializer),
        None => serializer.serialize_i64(-1),
    }
}
