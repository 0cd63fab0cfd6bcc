//! A counting progress sink.
//!
//! [`Progress`] counts finished repetitions (successful or failed) and
//! reports `(done, total)` to a caller-supplied sink after each one. It is
//! a pure notification: it never returns an action and never affects the
//! estimates. Rendering — a terminal bar, a GUI widget — belongs to the
//! sink closure, outside this crate.

use placeline_core::Observer;
use placeline_solvers::{estimator, sweep};

/// Counts completed repetitions and reports `(done, total)`.
///
/// The expected total is supplied up front; for a sweep over
/// `[n_min, n_max]` it is `(n_max - n_min + 1) * repetitions`.
#[derive(Debug)]
pub struct Progress<F> {
    done: usize,
    total: usize,
    sink: F,
}

impl<F: FnMut(usize, usize)> Progress<F> {
    /// Creates a progress counter reporting to `sink`.
    #[must_use]
    pub fn new(total: usize, sink: F) -> Self {
        Self {
            done: 0,
            total,
            sink,
        }
    }

    /// Returns the number of repetitions counted so far.
    #[must_use]
    pub fn done(&self) -> usize {
        self.done
    }

    fn bump(&mut self) {
        self.done += 1;
        (self.sink)(self.done, self.total);
    }
}

impl<A, F: FnMut(usize, usize)> Observer<estimator::Event, A> for Progress<F> {
    fn observe(&mut self, event: &estimator::Event) -> Option<A> {
        match event {
            estimator::Event::RepetitionCompleted { .. }
            | estimator::Event::RepetitionFailed { .. } => self.bump(),
        }
        None
    }
}

impl<A, F: FnMut(usize, usize)> Observer<sweep::Event, A> for Progress<F> {
    fn observe(&mut self, event: &sweep::Event) -> Option<A> {
        match event {
            sweep::Event::RepetitionCompleted { .. }
            | sweep::Event::RepetitionFailed { .. } => self.bump(),
            sweep::Event::PointCountCompleted { .. } => {}
        }
        None
    }
}
