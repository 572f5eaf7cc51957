/// The candidate range of an in-progress search.
///
/// Holds `left` and an exclusive `end` (`right + 1`) so that discarding the
/// right half from `mid = 0` never underflows. The range is open while
/// `left < end`, which is the `left <= right` loop condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct State {
    left: usize,
    end: usize,
}

/// Pointer positions for one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Pointers {
    pub(super) left: usize,
    pub(super) mid: usize,
    pub(super) right: usize,
}

impl State {
    /// Creates a state spanning `[0, len - 1]`.
    pub(super) fn new(len: usize) -> Self {
        Self { left: 0, end: len }
    }

    /// Returns true while at least one candidate remains.
    pub(super) fn is_open(&self) -> bool {
        self.left < self.end
    }

    /// Returns the current `left`, `mid`, and `right` positions.
    ///
    /// Only meaningful while the range is open. `mid` is
    /// `floor((left + right) / 2)`, computed without overflow.
    pub(super) fn pointers(&self) -> Pointers {
        debug_assert!(self.is_open(), "pointers requested on an empty range");
        let right = self.end - 1;
        Pointers {
            left: self.left,
            mid: self.left + (right - self.left) / 2,
            right,
        }
    }

    /// Discards `[left, mid]`.
    pub(super) fn discard_left(&mut self, mid: usize) {
        self.left = mid + 1;
    }

    /// Discards `[mid, right]`.
    pub(super) fn discard_right(&mut self, mid: usize) {
        self.end = mid;
    }

    /// Returns the final `left` bound.
    pub(super) fn left(&self) -> usize {
        self.left
    }

    /// Returns the final `right` bound, which is `-1` if index 0 was discarded.
    pub(super) fn right(&self) -> isize {
        signed(self.end) - 1
    }
}

/// Converts an index or length into a signed value for reporting.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn signed(index: usize) -> isize {
    // Slice lengths never exceed isize::MAX.
    index as isize
}

/// Returns the most comparisons a search over `len` elements can take.
///
/// This is `ceil(log2(len + 1))`, the bit length of `len`.
#[must_use]
pub fn max_comparisons(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointers_use_floor_midpoint() {
        let state = State::new(5);
        assert_eq!(
            state.pointers(),
            Pointers {
                left: 0,
                mid: 2,
                right: 4
            }
        );

        let state = State::new(4);
        assert_eq!(state.pointers().mid, 1);
    }

    #[test]
    fn discarding_narrows_the_range() {
        let mut state = State::new(10);

        state.discard_left(4);
        let Pointers { left, mid, right } = state.pointers();
        assert_eq!((left, mid, right), (5, 7, 9));

        state.discard_right(7);
        let Pointers { left, mid, right } = state.pointers();
        assert_eq!((left, mid, right), (5, 5, 6));
    }

    #[test]
    fn discarding_index_zero_closes_with_negative_right() {
        let mut state = State::new(1);
        state.discard_right(0);

        assert!(!state.is_open());
        assert_eq!(state.left(), 0);
        assert_eq!(state.right(), -1);
    }

    #[test]
    fn empty_state_is_closed() {
        assert!(!State::new(0).is_open());
    }

    #[test]
    fn max_comparisons_is_bit_length() {
        assert_eq!(max_comparisons(0), 0);
        assert_eq!(max_comparisons(1), 1);
        assert_eq!(max_comparisons(2), 2);
        assert_eq!(max_comparisons(3), 2);
        assert_eq!(max_comparisons(7), 3);
        assert_eq!(max_comparisons(8), 4);
        assert_eq!(max_comparisons(1000), 10);
    }
}
