use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

use super::state::signed;

/// Which half of the candidate range an elimination discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    /// `[left, mid]` is discarded because `data[mid] < target`.
    Left,
    /// `[mid, right]` is discarded because `data[mid] > target`.
    Right,
}

/// Qualitative result of comparing the target against `data[mid]`.
///
/// Read as "target is `<comparison>` than the middle element".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Equal,
    Less,
    Greater,
}

impl Comparison {
    /// Compares a target against an element.
    ///
    /// Both values are assumed finite, so exactly one variant applies.
    #[must_use]
    pub fn between(target: f64, element: f64) -> Self {
        if target < element {
            Self::Less
        } else if target > element {
            Self::Greater
        } else {
            Self::Equal
        }
    }

    /// Returns the operator used in step descriptions.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::Less => "<",
            Self::Greater => ">",
        }
    }
}

/// Category of a recorded step, used by front ends to pick a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Init,
    Highlight,
    Compare,
    Eliminate,
    Found,
}

/// Events emitted by the binary search.
///
/// Each variant carries exactly the state needed to describe one step. The
/// kind, highlighted indices, and description are derived on demand, so an
/// observer that ignores events costs nothing beyond the call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The search is about to start.
    Init {
        /// Value being searched for.
        target: f64,
        /// Number of elements in the sequence.
        len: usize,
    },

    /// Start of an iteration: the candidate range `[left, right]`.
    Range { left: usize, right: usize, mid: usize },

    /// Pointer positions and the values under them.
    Pointers {
        left: usize,
        right: usize,
        mid: usize,
        left_value: f64,
        mid_value: f64,
        right_value: f64,
    },

    /// The target was compared against the middle element.
    Compare {
        left: usize,
        right: usize,
        mid: usize,
        target: f64,
        mid_value: f64,
        comparison: Comparison,
        /// Comparisons performed so far, including this one.
        comparisons: usize,
    },

    /// The middle element equals the target.
    Found {
        left: usize,
        right: usize,
        mid: usize,
        target: f64,
        comparisons: usize,
    },

    /// Half of the candidate range was discarded.
    Eliminate {
        left: usize,
        right: usize,
        mid: usize,
        half: Half,
        target: f64,
        mid_value: f64,
    },

    /// The candidate range became empty without a match.
    Exhausted {
        target: f64,
        comparisons: usize,
        final_left: usize,
        /// May be `-1` when the last elimination discarded index 0.
        final_right: isize,
    },

    /// The sequence has no elements, so nothing is compared.
    Empty,
}

impl Event {
    /// Returns the category of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Init { .. } => EventKind::Init,
            Self::Range { .. } | Self::Pointers { .. } => EventKind::Highlight,
            Self::Compare { .. } => EventKind::Compare,
            Self::Found { .. } => EventKind::Found,
            Self::Eliminate { .. } | Self::Exhausted { .. } | Self::Empty => EventKind::Eliminate,
        }
    }

    /// Returns the positions a front end should highlight for this event.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Self::Range { left, right, .. } => (left..=right).collect(),
            Self::Pointers {
                left, mid, right, ..
            } => vec![left, mid, right],
            Self::Compare { mid, .. } | Self::Found { mid, .. } => vec![mid],
            Self::Eliminate { .. } => {
                let [start, end] = self.eliminated_range().unwrap_or([0, 0]);
                (start..=end).collect()
            }
            Self::Init { .. } | Self::Exhausted { .. } | Self::Empty => Vec::new(),
        }
    }

    /// Returns the inclusive range discarded by an [`Event::Eliminate`].
    #[must_use]
    pub fn eliminated_range(&self) -> Option<[usize; 2]> {
        match *self {
            Self::Eliminate {
                left,
                right,
                mid,
                half,
                ..
            } => Some(match half {
                Half::Left => [left, mid],
                Half::Right => [mid, right],
            }),
            _ => None,
        }
    }

    /// Returns the inclusive range still in play after an [`Event::Eliminate`].
    ///
    /// The range may be empty (`start > end`), and its end is `-1` when the
    /// right half is discarded from `mid = 0`.
    #[must_use]
    pub fn remaining_range(&self) -> Option<[isize; 2]> {
        match *self {
            Self::Eliminate {
                left,
                right,
                mid,
                half,
                ..
            } => Some(match half {
                Half::Left => [signed(mid) + 1, signed(right)],
                Half::Right => [signed(left), signed(mid) - 1],
            }),
            _ => None,
        }
    }

    /// Returns the number of candidates left after an [`Event::Eliminate`].
    #[must_use]
    pub fn remaining_size(&self) -> Option<usize> {
        match *self {
            Self::Eliminate {
                left,
                right,
                mid,
                half,
                ..
            } => Some(match half {
                Half::Left => right.saturating_sub(mid),
                Half::Right => mid.saturating_sub(left),
            }),
            _ => None,
        }
    }
}

/// Writes the human-readable step description.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Init { target, len } => write!(
                f,
                "Initialize binary search for target {target} in sorted array of {len} elements"
            ),
            Self::Range { left, right, .. } => write!(
                f,
                "Search range: [{left}, {right}] ({} elements)",
                range_size(left, right)
            ),
            Self::Pointers {
                left,
                right,
                mid,
                left_value,
                mid_value,
                right_value,
            } => write!(
                f,
                "Pointers: left={left}({left_value}), mid={mid}({mid_value}), right={right}({right_value})"
            ),
            Self::Compare {
                target,
                mid_value,
                comparison,
                ..
            } => write!(
                f,
                "Compare: target({target}) {} mid({mid_value})",
                comparison.symbol()
            ),
            Self::Found {
                mid,
                target,
                comparisons,
                ..
            } => write!(
                f,
                "Found target {target} at index {mid} after {}",
                Count(comparisons)
            ),
            Self::Eliminate {
                half,
                target,
                mid_value,
                ..
            } => {
                let [dropped_start, dropped_end] = self.eliminated_range().unwrap_or([0, 0]);
                let [kept_start, kept_end] = self.remaining_range().unwrap_or([0, -1]);
                let reason = Reason {
                    mid_value,
                    half,
                    target,
                };
                let side = match half {
                    Half::Left => "left",
                    Half::Right => "right",
                };
                write!(
                    f,
                    "{reason}: eliminate {side} half \
                     [{dropped_start}, {dropped_end}], search [{kept_start}, {kept_end}]"
                )
            }
            Self::Exhausted {
                target,
                comparisons,
                ..
            } => write!(
                f,
                "Target {target} not found after {} (search space exhausted)",
                Count(comparisons)
            ),
            Self::Empty => f.write_str("Array is empty - target cannot be found"),
        }
    }
}

/// Number of indices in `[left, right]`, zero when `left > right`.
fn range_size(left: usize, right: usize) -> usize {
    right.saturating_add(1).saturating_sub(left)
}

/// Formats a comparison count with the right plural.
struct Count(usize);

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("1 comparison"),
            n => write!(f, "{n} comparisons"),
        }
    }
}

/// The elimination reason, e.g. `"3 < 5"`, serialized as a string.
struct Reason {
    mid_value: f64,
    half: Half,
    target: f64,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.half {
            Half::Left => "<",
            Half::Right => ">",
        };
        write!(f, "{} {symbol} {}", self.mid_value, self.target)
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Serialize)]
struct PointerSet {
    left: usize,
    mid: usize,
    right: usize,
}

/// Serializes the kind-specific metadata map.
///
/// Keys are camelCase and stable; a rendering layer reads them by name:
///
/// | event | keys |
/// |---|---|
/// | init | `target`, `arrayLength`, `algorithm` |
/// | highlight (range) | `left`, `right`, `mid`, `searchRange`, `rangeSize` |
/// | highlight (pointers) | `left`, `right`, `mid`, `pointers`, `leftValue`, `midValue`, `rightValue` |
/// | compare | `left`, `right`, `mid`, `targetValue`, `midValue`, `comparison`, `comparisonCount` |
/// | found | `left`, `right`, `mid`, `found`, `targetValue`, `foundIndex`, `totalComparisons` |
/// | eliminate (half) | `left`, `right`, `mid`, `eliminated`, `eliminatedRange`, `reason`, `remainingRange`, `remainingSize` |
/// | eliminate (exhausted) | `found`, `totalComparisons`, `searchExhausted`, `finalLeft`, `finalRight` |
/// | eliminate (empty) | `found`, `reason` |
impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        match *self {
            Self::Init { target, len } => {
                map.serialize_entry("target", &target)?;
                map.serialize_entry("arrayLength", &len)?;
                map.serialize_entry("algorithm", super::ALGORITHM)?;
            }
            Self::Range { left, right, mid } => {
                map.serialize_entry("left", &left)?;
                map.serialize_entry("right", &right)?;
                map.serialize_entry("mid", &mid)?;
                map.serialize_entry("searchRange", &true)?;
                map.serialize_entry("rangeSize", &range_size(left, right))?;
            }
            Self::Pointers {
                left,
                right,
                mid,
                left_value,
                mid_value,
                right_value,
            } => {
                map.serialize_entry("left", &left)?;
                map.serialize_entry("right", &right)?;
                map.serialize_entry("mid", &mid)?;
                map.serialize_entry("pointers", &PointerSet { left, mid, right })?;
                map.serialize_entry("leftValue", &left_value)?;
                map.serialize_entry("midValue", &mid_value)?;
                map.serialize_entry("rightValue", &right_value)?;
            }
            Self::Compare {
                left,
                right,
                mid,
                target,
                mid_value,
                comparison,
                comparisons,
            } => {
                map.serialize_entry("left", &left)?;
                map.serialize_entry("right", &right)?;
                map.serialize_entry("mid", &mid)?;
                map.serialize_entry("targetValue", &target)?;
                map.serialize_entry("midValue", &mid_value)?;
                map.serialize_entry("comparison", &comparison)?;
                map.serialize_entry("comparisonCount", &comparisons)?;
            }
            Self::Found {
                left,
                right,
                mid,
                target,
                comparisons,
            } => {
                map.serialize_entry("left", &left)?;
                map.serialize_entry("right", &right)?;
                map.serialize_entry("mid", &mid)?;
                map.serialize_entry("found", &true)?;
                map.serialize_entry("targetValue", &target)?;
                map.serialize_entry("foundIndex", &mid)?;
                map.serialize_entry("totalComparisons", &comparisons)?;
            }
            Self::Eliminate {
                left,
                right,
                mid,
                half,
                target,
                mid_value,
            } => {
                map.serialize_entry("left", &left)?;
                map.serialize_entry("right", &right)?;
                map.serialize_entry("mid", &mid)?;
                map.serialize_entry("eliminated", &half)?;
                map.serialize_entry("eliminatedRange", &self.eliminated_range())?;
                map.serialize_entry(
                    "reason",
                    &Reason {
                        mid_value,
                        half,
                        target,
                    },
                )?;
                map.serialize_entry("remainingRange", &self.remaining_range())?;
                map.serialize_entry("remainingSize", &self.remaining_size())?;
            }
            Self::Exhausted {
                comparisons,
                final_left,
                final_right,
                ..
            } => {
                map.serialize_entry("found", &false)?;
                map.serialize_entry("totalComparisons", &comparisons)?;
                map.serialize_entry("searchExhausted", &true)?;
                map.serialize_entry("finalLeft", &final_left)?;
                map.serialize_entry("finalRight", &final_right)?;
            }
            Self::Empty => {
                map.serialize_entry("found", &false)?;
                map.serialize_entry("reason", "empty-array")?;
            }
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_reads_target_against_element() {
        assert_eq!(Comparison::between(5.0, 5.0), Comparison::Equal);
        assert_eq!(Comparison::between(4.0, 5.0), Comparison::Less);
        assert_eq!(Comparison::between(6.0, 5.0), Comparison::Greater);
        assert_eq!(Comparison::Less.symbol(), "<");
    }

    #[test]
    fn kinds_group_variants() {
        let range = Event::Range {
            left: 0,
            right: 4,
            mid: 2,
        };
        assert_eq!(range.kind(), EventKind::Highlight);
        assert_eq!(Event::Empty.kind(), EventKind::Eliminate);
        assert_eq!(
            Event::Init {
                target: 1.0,
                len: 0
            }
            .kind(),
            EventKind::Init
        );
    }

    #[test]
    fn left_elimination_ranges() {
        let event = Event::Eliminate {
            left: 0,
            right: 4,
            mid: 2,
            half: Half::Left,
            target: 7.0,
            mid_value: 5.0,
        };

        assert_eq!(event.eliminated_range(), Some([0, 2]));
        assert_eq!(event.remaining_range(), Some([3, 4]));
        assert_eq!(event.remaining_size(), Some(2));
        assert_eq!(event.indices(), vec![0, 1, 2]);
        assert_eq!(
            event.to_string(),
            "5 < 7: eliminate left half [0, 2], search [3, 4]"
        );
    }

    #[test]
    fn right_elimination_from_zero_leaves_negative_end() {
        let event = Event::Eliminate {
            left: 0,
            right: 0,
            mid: 0,
            half: Half::Right,
            target: 3.0,
            mid_value: 5.0,
        };

        assert_eq!(event.eliminated_range(), Some([0, 0]));
        assert_eq!(event.remaining_range(), Some([0, -1]));
        assert_eq!(event.remaining_size(), Some(0));
    }

    #[test]
    fn descriptions_use_plain_numbers() {
        let found = Event::Found {
            left: 0,
            right: 4,
            mid: 2,
            target: 5.0,
            comparisons: 1,
        };
        assert_eq!(found.to_string(), "Found target 5 at index 2 after 1 comparison");

        let compare = Event::Compare {
            left: 0,
            right: 4,
            mid: 2,
            target: 2.5,
            mid_value: 5.0,
            comparison: Comparison::Less,
            comparisons: 1,
        };
        assert_eq!(compare.to_string(), "Compare: target(2.5) < mid(5)");
    }

    #[test]
    fn inverted_bounds_report_zero_sizes() {
        let range = Event::Range {
            left: 5,
            right: 2,
            mid: 3,
        };
        assert_eq!(range.to_string(), "Search range: [5, 2] (0 elements)");
        assert!(range.indices().is_empty());

        let eliminate = Event::Eliminate {
            left: 4,
            right: 1,
            mid: 2,
            half: Half::Left,
            target: 1.0,
            mid_value: 0.0,
        };
        assert_eq!(eliminate.remaining_size(), Some(0));
        assert_eq!(
            eliminate.to_string(),
            "0 < 1: eliminate left half [4, 2], search [3, 1]"
        );
    }

    #[test]
    fn non_range_events_have_no_ranges() {
        assert_eq!(Event::Empty.eliminated_range(), None);
        assert_eq!(Event::Empty.remaining_size(), None);
        assert!(Event::Empty.indices().is_empty());
    }
}
