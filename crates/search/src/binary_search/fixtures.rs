use serde::Serialize;

/// The outcome a fixture expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Expected {
    /// Found at exactly this index.
    At { index: usize },

    /// Found at any index holding the target.
    ///
    /// Used when the target appears more than once, since binary search does
    /// not promise the first or last occurrence.
    AnyOccurrence,

    /// Not present.
    Absent,
}

/// A seed case: a sorted sequence, a target, and the expected outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    pub name: &'static str,
    pub data: Vec<f64>,
    pub target: f64,
    pub expected: Expected,
}

impl Fixture {
    fn new(name: &'static str, data: &[f64], target: f64, expected: Expected) -> Self {
        Self {
            name,
            data: data.to_vec(),
            target,
            expected,
        }
    }

    /// Returns true if `index` is an acceptable search result for this case.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn accepts(&self, index: Option<usize>) -> bool {
        match self.expected {
            Expected::At { index: expected } => index == Some(expected),
            Expected::AnyOccurrence => {
                index.is_some_and(|i| self.data.get(i).is_some_and(|&v| v == self.target))
            }
            Expected::Absent => index.is_none(),
        }
    }
}

/// Returns the fixed set of seed cases.
#[must_use]
pub fn fixtures() -> Vec<Fixture> {
    let odds = [1.0, 3.0, 5.0, 7.0, 9.0];
    let ten = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

    vec![
        Fixture::new("middle", &odds, 5.0, Expected::At { index: 2 }),
        Fixture::new("first", &odds, 1.0, Expected::At { index: 0 }),
        Fixture::new("last", &odds, 9.0, Expected::At { index: 4 }),
        Fixture::new("between", &odds, 4.0, Expected::Absent),
        Fixture::new("empty", &[], 5.0, Expected::Absent),
        Fixture::new("single-hit", &[5.0], 5.0, Expected::At { index: 0 }),
        Fixture::new("single-miss", &[5.0], 3.0, Expected::Absent),
        Fixture::new("ten-hit", &ten, 7.0, Expected::At { index: 6 }),
        Fixture::new("ten-above", &ten, 11.0, Expected::Absent),
        Fixture::new(
            "duplicates",
            &[1.0, 2.0, 2.0, 2.0, 5.0],
            2.0,
            Expected::AnyOccurrence,
        ),
    ]
}
