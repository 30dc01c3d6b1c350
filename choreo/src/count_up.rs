//! Elapsed-time count-up for the stats counters.
//!
//! The displayed value is `floor(min(elapsed / duration, 1) * target)`, so
//! the animation takes the same wall time at any frame rate, never overshoots
//! and lands exactly on the target.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::clock::SharedScheduler;
use crate::error::ChoreoError;
use crate::guard::Guard;
use crate::viewport::{EntryGate, GateAction, ReplayPolicy, VisibilitySource};

/// Counting curve from 0 to `target` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    duration: Duration,
}

impl CountUp {
    /// A count to `target` taking `duration`.
    pub fn new(target: u64, duration: Duration) -> Result<Self, ChoreoError> {
        if duration.is_zero() {
            return Err(ChoreoError::ZeroDuration {
                what: "count-up duration",
            });
        }
        Ok(Self { target, duration })
    }

    /// Final value.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value to show `elapsed` after the first frame.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let progress = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        let value = (progress * self.target as f64).floor() as u64;
        value.min(self.target)
    }

    /// Whether `elapsed` has reached the end of the curve.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

struct RunInner {
    count_up: CountUp,
    scheduler: SharedScheduler,
    started_at: Cell<Option<f64>>,
    frame: RefCell<Option<Guard>>,
    on_value: Rc<dyn Fn(u64)>,
}

/// One self-scheduling frame loop. Stops by itself at the target; dropping
/// it cancels the pending frame.
pub struct CountUpRun {
    inner: Rc<RunInner>,
}

impl CountUpRun {
    /// Report 0 now, then a value on every frame until the target is reached.
    pub fn start(
        scheduler: SharedScheduler,
        count_up: CountUp,
        on_value: impl Fn(u64) + 'static,
    ) -> Self {
        Self::start_shared(scheduler, count_up, Rc::new(on_value))
    }

    fn start_shared(
        scheduler: SharedScheduler,
        count_up: CountUp,
        on_value: Rc<dyn Fn(u64)>,
    ) -> Self {
        on_value(0);
        let inner = Rc::new(RunInner {
            count_up,
            scheduler,
            started_at: Cell::new(None),
            frame: RefCell::new(None),
            on_value,
        });
        request_frame(&inner);
        Self { inner }
    }

    /// Whether a frame is still scheduled.
    pub fn is_running(&self) -> bool {
        self.inner
            .frame
            .borrow()
            .as_ref()
            .is_some_and(Guard::is_armed)
    }
}

fn request_frame(inner: &Rc<RunInner>) {
    let weak = Rc::downgrade(inner);
    let guard = inner
        .scheduler
        .frame(Box::new(move |at| on_frame(&weak, at)));
    let previous = inner.frame.replace(Some(guard));
    drop(previous);
}

fn on_frame(weak: &Weak<RunInner>, at: f64) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let start = match inner.started_at.get() {
        Some(start) => start,
        None => {
            inner.started_at.set(Some(at));
            at
        }
    };
    let elapsed = Duration::from_secs_f64((at - start).max(0.0) / 1000.0);
    let value = inner.count_up.value_at(elapsed);
    let on_value = Rc::clone(&inner.on_value);
    on_value(value);

    if inner.count_up.is_finished(elapsed) {
        let done = inner.frame.replace(None);
        drop(done);
        tracing::trace!(target_value = inner.count_up.target(), "count-up finished");
    } else {
        request_frame(&inner);
    }
}

struct CounterInner {
    gate: RefCell<EntryGate>,
    run: RefCell<Option<CountUpRun>>,
    count_up: CountUp,
    scheduler: SharedScheduler,
    on_value: Rc<dyn Fn(u64)>,
}

/// A count-up that plays when its anchor enters the viewport, following a
/// [`ReplayPolicy`].
#[derive(Clone)]
pub struct ViewportCountUp {
    inner: Rc<CounterInner>,
}

impl ViewportCountUp {
    /// Idle counter showing 0 until the first entry.
    pub fn new(
        scheduler: SharedScheduler,
        count_up: CountUp,
        policy: ReplayPolicy,
        on_value: impl Fn(u64) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(CounterInner {
                gate: RefCell::new(EntryGate::new(policy)),
                run: RefCell::new(None),
                count_up,
                scheduler,
                on_value: Rc::new(on_value),
            }),
        }
    }

    /// Feed a visibility report from the host.
    pub fn visibility_changed(&self, visible: bool) {
        let action = self.inner.gate.borrow_mut().observe(visible);
        match action {
            Some(GateAction::Play) => {
                let run = CountUpRun::start_shared(
                    self.inner.scheduler.clone(),
                    self.inner.count_up,
                    Rc::clone(&self.inner.on_value),
                );
                let previous = self.inner.run.replace(Some(run));
                drop(previous);
            }
            Some(GateAction::Reset) => {
                let previous = self.inner.run.replace(None);
                drop(previous);
                let on_value = Rc::clone(&self.inner.on_value);
                on_value(0);
            }
            None => {}
        }
    }

    /// Subscribe to `source`; the counter reacts until the guard is released.
    pub fn watch(&self, source: &dyn VisibilitySource) -> Guard {
        let weak = Rc::downgrade(&self.inner);
        source.watch(Box::new(move |visible| {
            if let Some(inner) = weak.upgrade() {
                ViewportCountUp { inner }.visibility_changed(visible);
            }
        }))
    }

    /// Whether a frame loop is currently active.
    pub fn is_animating(&self) -> bool {
        self.inner
            .run
            .borrow()
            .as_ref()
            .is_some_and(CountUpRun::is_running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use pretty_assertions::assert_eq;

    fn samples(
        clock: &ManualClock,
        target: u64,
        duration_ms: u64,
    ) -> (CountUpRun, Rc<RefCell<Vec<u64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let run = CountUpRun::start(
            Rc::new(clock.clone()),
            CountUp::new(target, Duration::from_millis(duration_ms)).unwrap(),
            move |value| log.borrow_mut().push(value),
        );
        (run, seen)
    }

    #[test]
    fn value_curve_hits_bounds_exactly() {
        let count_up = CountUp::new(15_632, Duration::from_secs(2)).unwrap();
        assert_eq!(count_up.value_at(Duration::ZERO), 0);
        assert_eq!(count_up.value_at(Duration::from_secs(1)), 7816);
        assert_eq!(count_up.value_at(Duration::from_secs(2)), 15_632);
        assert_eq!(count_up.value_at(Duration::from_secs(30)), 15_632);
    }

    #[test]
    fn frame_loop_is_monotonic_bounded_and_stops() {
        let clock = ManualClock::new();
        let (run, seen) = samples(&clock, 2847, 2000);

        clock.advance(Duration::from_secs(3));

        let values = seen.borrow();
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&2847));
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(values.iter().all(|value| *value <= 2847));
        assert!(!run.is_running());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn small_targets_still_land_on_target() {
        let clock = ManualClock::new();
        let (_run, seen) = samples(&clock, 94, 2000);
        clock.advance(Duration::from_secs(5));
        assert_eq!(seen.borrow().last(), Some(&94));
    }

    #[test]
    fn dropping_a_run_cancels_its_frame() {
        let clock = ManualClock::new();
        let (run, seen) = samples(&clock, 1000, 2000);
        clock.advance(Duration::from_millis(500));
        drop(run);
        assert_eq!(clock.pending(), 0);
        let frozen = seen.borrow().len();
        clock.advance(Duration::from_secs(5));
        assert_eq!(seen.borrow().len(), frozen);
    }

    struct Switch {
        listener: Rc<RefCell<Option<Box<dyn FnMut(bool)>>>>,
    }

    impl VisibilitySource for Switch {
        fn watch(&self, on_change: Box<dyn FnMut(bool)>) -> Guard {
            *self.listener.borrow_mut() = Some(on_change);
            let listener = self.listener.clone();
            Guard::new(move || {
                listener.borrow_mut().take();
            })
        }
    }

    impl Switch {
        fn set(&self, visible: bool) {
            if let Some(listener) = self.listener.borrow_mut().as_mut() {
                listener(visible);
            }
        }
    }

    fn viewport_counter(
        clock: &ManualClock,
        policy: ReplayPolicy,
    ) -> (ViewportCountUp, Rc<Cell<u64>>) {
        let shown = Rc::new(Cell::new(u64::MAX));
        let sink = shown.clone();
        let counter = ViewportCountUp::new(
            Rc::new(clock.clone()),
            CountUp::new(500, Duration::from_millis(1000)).unwrap(),
            policy,
            move |value| sink.set(value),
        );
        (counter, shown)
    }

    #[test]
    fn once_policy_counts_on_first_entry_only() {
        let clock = ManualClock::new();
        let switch = Switch {
            listener: Rc::new(RefCell::new(None)),
        };
        let (counter, shown) = viewport_counter(&clock, ReplayPolicy::Once);
        let _watch = counter.watch(&switch);

        clock.advance(Duration::from_secs(1));
        assert_eq!(shown.get(), u64::MAX, "nothing shown before entry");

        switch.set(true);
        assert_eq!(shown.get(), 0);
        clock.advance(Duration::from_secs(2));
        assert_eq!(shown.get(), 500);

        switch.set(false);
        switch.set(true);
        assert_eq!(shown.get(), 500, "no replay under Once");
        assert!(!counter.is_animating());
    }

    #[test]
    fn every_entry_policy_restarts_and_resets() {
        let clock = ManualClock::new();
        let (counter, shown) = viewport_counter(&clock, ReplayPolicy::EveryEntry);

        counter.visibility_changed(true);
        clock.advance(Duration::from_millis(400));
        assert!(counter.is_animating());

        counter.visibility_changed(false);
        assert_eq!(shown.get(), 0);
        assert!(!counter.is_animating());
        assert_eq!(clock.pending(), 0);

        counter.visibility_changed(true);
        clock.advance(Duration::from_secs(2));
        assert_eq!(shown.get(), 500);
    }

    #[test]
    fn released_watch_stops_reacting() {
        let clock = ManualClock::new();
        let switch = Switch {
            listener: Rc::new(RefCell::new(None)),
        };
        let (counter, shown) = viewport_counter(&clock, ReplayPolicy::Once);
        let watch = counter.watch(&switch);
        drop(watch);
        switch.set(true);
        assert_eq!(shown.get(), u64::MAX);
    }

    #[test]
    fn value_handler_can_reset_its_own_counter() {
        let clock = ManualClock::new();
        let slot: Rc<RefCell<Option<ViewportCountUp>>> = Rc::new(RefCell::new(None));
        let shown = Rc::new(RefCell::new(Vec::new()));

        let handle = slot.clone();
        let log = shown.clone();
        let counter = ViewportCountUp::new(
            Rc::new(clock.clone()),
            CountUp::new(500, Duration::from_millis(1000)).unwrap(),
            ReplayPolicy::EveryEntry,
            move |value| {
                log.borrow_mut().push(value);
                // Scrolled away as soon as the count passes halfway.
                if value >= 250 {
                    if let Some(counter) = handle.borrow().as_ref() {
                        counter.visibility_changed(false);
                    }
                }
            },
        );
        *slot.borrow_mut() = Some(counter.clone());

        counter.visibility_changed(true);
        clock.advance(Duration::from_secs(2));

        let shown = shown.borrow();
        assert_eq!(shown.last(), Some(&0));
        assert!(shown.iter().all(|value| *value < 500));
        assert!(!counter.is_animating());
        assert_eq!(clock.pending(), 0);

        slot.borrow_mut().take();
    }
}
