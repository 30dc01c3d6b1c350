//! Scoped release of timers, frames and listeners.
//!
//! A [`Guard`] owns the "undo" half of an acquisition. The release runs exactly
//! once: on the first explicit [`Guard::release`] or when the guard is dropped,
//! whichever comes first.

use std::fmt;

/// Releases a registered callback when dropped.
#[must_use = "dropping a Guard releases the resource immediately"]
pub struct Guard {
    release: Option<Box<dyn FnOnce()>>,
}

impl Guard {
    /// Wrap a release action.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release. Used when registration itself failed.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Run the release action now. Later calls (and the drop) do nothing.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Whether the release action has not run yet.
    pub fn is_armed(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Guard {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("armed", &self.is_armed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_guard() -> (Guard, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        (Guard::new(move || seen.set(seen.get() + 1)), count)
    }

    #[test]
    fn releases_on_drop() {
        let (guard, count) = counting_guard();
        drop(guard);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn explicit_release_then_drop_runs_once() {
        let (mut guard, count) = counting_guard();
        guard.release();
        guard.release();
        assert!(!guard.is_armed());
        drop(guard);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn inert_guard_is_never_armed() {
        let mut guard = Guard::inert();
        assert!(!guard.is_armed());
        guard.release();
    }
}
