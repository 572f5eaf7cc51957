use serde::Serialize;

/// Fixed descriptions of binary search complexity, for display alongside a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityInfo {
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub best_case: &'static str,
    pub worst_case: &'static str,
    pub average_case: &'static str,
    pub description: &'static str,
}

/// Returns the complexity of binary search by case.
#[must_use]
pub const fn complexity_info() -> ComplexityInfo {
    ComplexityInfo {
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        best_case: "O(1)",
        worst_case: "O(log n)",
        average_case: "O(log n)",
        description: "Binary search divides the search space in half with each comparison, \
                      resulting in logarithmic time complexity.",
    }
}
