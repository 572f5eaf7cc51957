use halving_core::{Observer, SortedSlice};

use super::{
    Comparison, Event, Half, Outcome,
    state::{Pointers, State},
};

/// Core binary search over validated input.
///
/// Every event goes through `observer`; nothing else depends on it, so the
/// returned outcome is the same for any observer.
pub(super) fn search<Obs>(data: SortedSlice<'_>, target: f64, observer: &mut Obs) -> Outcome
where
    Obs: Observer<Event> + ?Sized,
{
    observer.observe(&Event::Init {
        target,
        len: data.len(),
    });

    if data.is_empty() {
        observer.observe(&Event::Empty);
        return Outcome::miss(0);
    }

    let mut state = State::new(data.len());
    let mut comparisons = 0;

    while state.is_open() {
        let Pointers { left, mid, right } = state.pointers();
        let mid_value = data[mid];

        observer.observe(&Event::Range { left, right, mid });
        observer.observe(&Event::Pointers {
            left,
            right,
            mid,
            left_value: data[left],
            mid_value,
            right_value: data[right],
        });

        comparisons += 1;
        let comparison = Comparison::between(target, mid_value);

        observer.observe(&Event::Compare {
            left,
            right,
            mid,
            target,
            mid_value,
            comparison,
            comparisons,
        });

        let half = match comparison {
            Comparison::Equal => {
                observer.observe(&Event::Found {
                    left,
                    right,
                    mid,
                    target,
                    comparisons,
                });
                return Outcome::hit(mid, comparisons);
            }
            Comparison::Greater => Half::Left,
            Comparison::Less => Half::Right,
        };

        observer.observe(&Event::Eliminate {
            left,
            right,
            mid,
            half,
            target,
            mid_value,
        });

        match half {
            Half::Left => state.discard_left(mid),
            Half::Right => state.discard_right(mid),
        }
    }

    observer.observe(&Event::Exhausted {
        target,
        comparisons,
        final_left: state.left(),
        final_right: state.right(),
    });

    Outcome::miss(comparisons)
}
