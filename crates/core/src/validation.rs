use std::ops::Index;

use thiserror::Error;

/// Reasons a search input is rejected before any step runs.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// The target is NaN or infinite.
    #[error("target must be a finite number, got {value}")]
    NonFiniteTarget { value: f64 },

    /// An element of the sequence is NaN or infinite.
    #[error("element at index {index} must be a finite number, got {value}")]
    NonFiniteElement { index: usize, value: f64 },

    /// Two adjacent elements are out of order.
    #[error(
        "sequence must be sorted in non-decreasing order: \
         found {value} at index {index} before {next_value} at index {next_index}"
    )]
    Unsorted {
        index: usize,
        value: f64,
        next_index: usize,
        next_value: f64,
    },
}

/// Checks that a search target is finite.
///
/// # Errors
///
/// Returns [`ValidationError::NonFiniteTarget`] for NaN or ±infinity.
pub fn validate_target(target: f64) -> Result<(), ValidationError> {
    if target.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteTarget { value: target })
    }
}

/// A borrowed sequence known to hold only finite values in non-decreasing order.
///
/// The invariant is verified once by [`SortedSlice::new`], so code holding a
/// `SortedSlice` can compare elements without rechecking them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortedSlice<'a> {
    values: &'a [f64],
}

impl<'a> SortedSlice<'a> {
    /// Validates `values` and wraps them.
    ///
    /// Order is checked before finiteness. Comparisons with NaN are always
    /// false, so a NaN never produces an ordering error, but an infinity that
    /// breaks the order is reported as [`ValidationError::Unsorted`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Unsorted`] for the first adjacent pair where
    /// the later element is smaller, or [`ValidationError::NonFiniteElement`]
    /// for the first NaN or infinite element.
    pub fn new(values: &'a [f64]) -> Result<Self, ValidationError> {
        if let Some(index) = values.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(ValidationError::Unsorted {
                index,
                value: values[index],
                next_index: index + 1,
                next_value: values[index + 1],
            });
        }

        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ValidationError::NonFiniteElement { index, value });
        }

        Ok(Self { values })
    }

    /// Returns the underlying values.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.values
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Index<usize> for SortedSlice<'_> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}
