//! Auto-advancing selection shared by the feature tabs and the showcase carousel.
//!
//! One index is the single source of truth. The repeating timer and manual
//! navigation both write it and the last write wins; a manual selection never
//! resets or pauses the timer, so auto-advance resumes from wherever the
//! visitor left it on the timer's existing cadence.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::clock::SharedScheduler;
use crate::error::ChoreoError;
use crate::guard::Guard;

/// Index into a fixed, non-empty list with wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    current: usize,
}

impl Rotation {
    /// Start at index 0 of a list of `len` items.
    pub fn new(len: usize) -> Result<Self, ChoreoError> {
        if len == 0 {
            return Err(ChoreoError::EmptyRotation);
        }
        Ok(Self { len, current: 0 })
    }

    /// Number of items rotated through.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Move by `delta` positions, wrapping in both directions.
    pub fn step(&mut self, delta: isize) -> usize {
        let len = self.len as isize;
        self.current = (self.current as isize + delta).rem_euclid(len) as usize;
        self.current
    }

    /// Next item, wrapping to 0 after the last.
    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    /// Previous item, wrapping to the last before 0.
    pub fn prev(&mut self) -> usize {
        self.step(-1)
    }

    /// Jump straight to `index`.
    pub fn select(&mut self, index: usize) -> Result<usize, ChoreoError> {
        if index >= self.len {
            return Err(ChoreoError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(self.current)
    }
}

struct Inner {
    rotation: RefCell<Rotation>,
    on_change: Rc<dyn Fn(usize)>,
    label: &'static str,
}

impl Inner {
    fn apply(&self, change: impl FnOnce(&mut Rotation) -> usize) -> usize {
        let (before, after) = {
            let mut rotation = self.rotation.borrow_mut();
            let before = rotation.current();
            (before, change(&mut *rotation))
        };
        if before != after {
            // No borrow is held here, so the callback may navigate again.
            let on_change = Rc::clone(&self.on_change);
            on_change(after);
        }
        after
    }
}

/// A [`Rotation`] advanced by a repeating timer for as long as it lives.
pub struct AutoRotate {
    inner: Rc<Inner>,
    _ticker: Guard,
}

impl AutoRotate {
    /// Rotate through `len` items, advancing every `period`.
    ///
    /// `on_change` is called with the new index whenever it changes, whether
    /// the timer or a manual call moved it, and may itself call back into the
    /// rotation. `label` only tags log lines.
    pub fn start(
        scheduler: SharedScheduler,
        len: usize,
        period: Duration,
        label: &'static str,
        on_change: impl Fn(usize) + 'static,
    ) -> Result<Self, ChoreoError> {
        if period.is_zero() {
            return Err(ChoreoError::ZeroDuration { what: label });
        }
        let inner = Rc::new(Inner {
            rotation: RefCell::new(Rotation::new(len)?),
            on_change: Rc::new(on_change),
            label,
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let ticker = scheduler.every(
            period,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let index = inner.apply(Rotation::next);
                    tracing::trace!(rotation = inner.label, index, "auto-advanced");
                }
            }),
        );

        tracing::debug!(
            rotation = label,
            len,
            period_ms = period.as_millis() as u64,
            "auto-rotate started"
        );
        Ok(Self {
            inner,
            _ticker: ticker,
        })
    }

    /// Current index.
    pub fn current(&self) -> usize {
        self.inner.rotation.borrow().current()
    }

    /// Manual jump (tab button, carousel dot). Out-of-range indices are
    /// ignored and logged; the current index is returned either way.
    pub fn select(&self, index: usize) -> usize {
        let label = self.inner.label;
        self.inner.apply(|rotation| match rotation.select(index) {
            Ok(current) => current,
            Err(err) => {
                tracing::warn!(rotation = label, %err, "ignoring selection");
                rotation.current()
            }
        })
    }

    /// Manual "next" arrow.
    pub fn next(&self) -> usize {
        self.inner.apply(Rotation::next)
    }

    /// Manual "previous" arrow.
    pub fn prev(&self) -> usize {
        self.inner.apply(Rotation::prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn start_rotation(
        clock: &ManualClock,
        len: usize,
        period_ms: u64,
    ) -> (AutoRotate, Rc<RefCell<Vec<usize>>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = changes.clone();
        let rotate = AutoRotate::start(
            Rc::new(clock.clone()),
            len,
            Duration::from_millis(period_ms),
            "test",
            move |index| log.borrow_mut().push(index),
        )
        .unwrap();
        (rotate, changes)
    }

    #[test]
    fn prev_wraps_into_range() {
        let mut rotation = Rotation::new(4).unwrap();
        assert_eq!(rotation.prev(), 3);
        assert_eq!(rotation.prev(), 2);
        assert_eq!(rotation.step(-9), 1);
        assert_eq!(rotation.step(7), 0);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut rotation = Rotation::new(4).unwrap();
        assert_eq!(
            rotation.select(4),
            Err(ChoreoError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(rotation.current(), 0);
    }

    #[test]
    fn empty_rotation_is_rejected() {
        assert_eq!(Rotation::new(0), Err(ChoreoError::EmptyRotation));
    }

    #[test]
    fn after_k_periods_index_is_k_mod_n() {
        let clock = ManualClock::new();
        let (rotate, _) = start_rotation(&clock, 4, 4000);
        for k in 1..=9u64 {
            clock.advance(Duration::from_millis(4000));
            assert_eq!(rotate.current() as u64, k % 4, "after {k} periods");
        }
    }

    #[test]
    fn manual_selection_wins_immediately_without_resetting_the_timer() {
        let clock = ManualClock::new();
        let (rotate, changes) = start_rotation(&clock, 4, 4000);

        clock.advance(Duration::from_millis(2000));
        assert_eq!(rotate.select(1), 1);
        assert_eq!(rotate.current(), 1);

        // The timer keeps its cadence: next advance at t=4000.
        clock.advance(Duration::from_millis(2000));
        assert_eq!(rotate.current(), 2);
        clock.advance(Duration::from_millis(2000));
        assert_eq!(rotate.current(), 2);
        assert_eq!(*changes.borrow(), vec![1, 2]);
    }

    #[test]
    fn carousel_arrows_wrap() {
        let clock = ManualClock::new();
        let (rotate, _) = start_rotation(&clock, 4, 6000);
        assert_eq!(rotate.prev(), 3);
        assert_eq!(rotate.next(), 0);
        assert_eq!(rotate.next(), 1);
    }

    #[test]
    fn reselecting_the_current_index_is_silent() {
        let clock = ManualClock::new();
        let (rotate, changes) = start_rotation(&clock, 4, 6000);
        rotate.select(0);
        rotate.select(17);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn dropping_stops_the_timer() {
        let clock = ManualClock::new();
        let fired = Rc::new(Cell::new(0));
        let seen = fired.clone();
        let rotate = AutoRotate::start(
            Rc::new(clock.clone()),
            4,
            Duration::from_millis(100),
            "test",
            move |_| seen.set(seen.get() + 1),
        )
        .unwrap();
        clock.advance(Duration::from_millis(250));
        drop(rotate);
        clock.advance(Duration::from_secs(1));
        assert_eq!(fired.get(), 2);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn zero_period_is_rejected() {
        let result =
            AutoRotate::start(Rc::new(ManualClock::new()), 4, Duration::ZERO, "tabs", |_| {});
        assert!(matches!(result, Err(ChoreoError::ZeroDuration { what: "tabs" })));
    }

    #[test]
    fn change_handler_can_navigate_the_same_rotation() {
        let clock = ManualClock::new();
        let slot: Rc<RefCell<Option<AutoRotate>>> = Rc::new(RefCell::new(None));
        let changes = Rc::new(RefCell::new(Vec::new()));

        let handle = slot.clone();
        let log = changes.clone();
        let rotate = AutoRotate::start(
            Rc::new(clock.clone()),
            4,
            Duration::from_millis(100),
            "test",
            move |index| {
                log.borrow_mut().push(index);
                if index == 1 {
                    if let Some(rotate) = handle.borrow().as_ref() {
                        rotate.select(3);
                    }
                }
            },
        )
        .unwrap();
        *slot.borrow_mut() = Some(rotate);

        clock.advance(Duration::from_millis(100));
        assert_eq!(*changes.borrow(), vec![1, 3]);

        let current = slot.borrow().as_ref().map(AutoRotate::current);
        assert_eq!(current, Some(3));

        clock.advance(Duration::from_millis(100));
        assert_eq!(*changes.borrow(), vec![1, 3, 0]);

        slot.borrow_mut().take();
        assert_eq!(clock.pending(), 0);
    }
}
