/// Receives events emitted by a search as it runs.
///
/// Observers let callers watch a search without changing its API, enabling
/// step recording, logging, or visualization.
/// Searches call `observe` at well-defined points and never change their
/// control flow based on the observer, so swapping observers cannot change
/// a result.
///
/// Closures automatically implement `Observer`, a built-in impl for `()`
/// provides a no-op observer, and a pair of observers sees every event in
/// order (first, then second).
pub trait Observer<E> {
    /// Observes a single event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer that ignores every event.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

/// Fans each event out to both observers.
impl<E, A, B> Observer<E> for (A, B)
where
    A: Observer<E>,
    B: Observer<E>,
{
    fn observe(&mut self, event: &E) {
        self.0.observe(event);
        self.1.observe(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<O: Observer<u32>>(observer: &mut O, events: &[u32]) {
        for event in events {
            observer.observe(event);
        }
    }

    #[test]
    fn closure_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &u32| seen.push(*event);

        feed(&mut observer, &[3, 1, 4]);

        assert_eq!(seen, vec![3, 1, 4]);
    }

    #[test]
    fn unit_ignores_events() {
        feed(&mut (), &[1, 2, 3]);
    }

    #[test]
    fn pair_forwards_to_both() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        {
            let mut pair = (
                |event: &u32| first.push(*event),
                |event: &u32| second.push(*event * 10),
            );
            feed(&mut pair, &[2, 5]);
        }

        assert_eq!(first, vec![2, 5]);
        assert_eq!(second, vec![20, 50]);
    }
}
