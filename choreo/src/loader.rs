//! Splash loader: `Running(0..100) -> Completing -> Hidden`.
//!
//! [`LoaderMachine`] is the pure transition table. [`LoaderSession`] binds it
//! to a [`Scheduler`](crate::Scheduler): a repeating tick until progress
//! reaches 100, then a one-shot hold, then the completion callback - exactly
//! once, and never if the session is dropped first.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::clock::SharedScheduler;
use crate::error::ChoreoError;
use crate::guard::Guard;
use crate::timing::LoaderTiming;

/// Where the loader is in its one-shot run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Progress bar filling up.
    Running {
        /// Percentage shown, `0..100`.
        progress: u8,
    },
    /// Full bar, completion mark spinning in, waiting out the hold.
    Completing,
    /// Completion signalled, exit wipe playing.
    Hidden,
}

impl LoaderPhase {
    /// Percentage to display for this phase.
    pub fn progress(self) -> u8 {
        match self {
            LoaderPhase::Running { progress } => progress,
            LoaderPhase::Completing | LoaderPhase::Hidden => 100,
        }
    }

    /// Whether the overlay still covers the page.
    pub fn is_covering(self) -> bool {
        !matches!(self, LoaderPhase::Hidden)
    }
}

/// Pure loader transitions.
#[derive(Debug, Clone)]
pub struct LoaderMachine {
    phase: LoaderPhase,
    step: u8,
}

impl LoaderMachine {
    /// Start at 0% advancing `step` points per tick.
    pub fn new(step: u8) -> Self {
        Self {
            phase: LoaderPhase::Running { progress: 0 },
            step: step.max(1),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    /// Advance one tick. Progress saturates at 100, which moves the machine to
    /// [`LoaderPhase::Completing`]. Ticks outside `Running` change nothing.
    pub fn tick(&mut self) -> LoaderPhase {
        if let LoaderPhase::Running { progress } = self.phase {
            let next = progress.saturating_add(self.step).min(100);
            self.phase = if next == 100 {
                LoaderPhase::Completing
            } else {
                LoaderPhase::Running { progress: next }
            };
        }
        self.phase
    }

    /// Leave `Completing` for `Hidden`. Returns `true` only for the call that
    /// performed the transition.
    pub fn finish(&mut self) -> bool {
        if self.phase == LoaderPhase::Completing {
            self.phase = LoaderPhase::Hidden;
            true
        } else {
            false
        }
    }
}

#[derive(Default)]
struct Timers {
    ticker: Option<Guard>,
    hold: Option<Guard>,
}

struct Inner {
    machine: RefCell<LoaderMachine>,
    timers: RefCell<Timers>,
    on_phase: Rc<dyn Fn(LoaderPhase)>,
    on_complete: Cell<Option<Box<dyn FnOnce()>>>,
    scheduler: SharedScheduler,
    hold: Duration,
}

/// A mounted loader run. Dropping it cancels whatever is still scheduled.
pub struct LoaderSession {
    inner: Rc<Inner>,
}

impl LoaderSession {
    /// Start ticking immediately.
    ///
    /// `on_phase` sees every phase change in order; `on_complete` runs once,
    /// right after the `Hidden` notification.
    pub fn start(
        scheduler: SharedScheduler,
        timing: &LoaderTiming,
        on_phase: impl Fn(LoaderPhase) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> Result<Self, ChoreoError> {
        timing.validate()?;

        let inner = Rc::new(Inner {
            machine: RefCell::new(LoaderMachine::new(timing.step)),
            timers: RefCell::new(Timers::default()),
            on_phase: Rc::new(on_phase),
            on_complete: Cell::new(Some(Box::new(on_complete))),
            scheduler,
            hold: timing.hold(),
        });

        let weak = Rc::downgrade(&inner);
        let ticker = inner
            .scheduler
            .every(timing.tick(), Box::new(move || on_tick(&weak)));
        inner.timers.borrow_mut().ticker = Some(ticker);

        tracing::debug!(
            tick_ms = timing.tick_ms,
            step = timing.step,
            hold_ms = timing.hold_ms,
            "loader started"
        );
        Ok(Self { inner })
    }

    /// Current phase.
    pub fn phase(&self) -> LoaderPhase {
        self.inner.machine.borrow().phase()
    }
}

impl Drop for LoaderSession {
    fn drop(&mut self) {
        if self.phase().is_covering() {
            tracing::debug!(phase = ?self.phase(), "loader torn down before completion");
        }
    }
}

fn on_tick(weak: &Weak<Inner>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let phase = inner.machine.borrow_mut().tick();
    notify(&inner, phase);

    if phase != LoaderPhase::Completing {
        return;
    }

    // Full: stop ticking, wait out the hold.
    let ticker = inner.timers.borrow_mut().ticker.take();
    drop(ticker);

    let hold_weak = weak.clone();
    let hold = inner
        .scheduler
        .after(inner.hold, Box::new(move || on_hold_elapsed(&hold_weak)));
    inner.timers.borrow_mut().hold = Some(hold);
}

fn notify(inner: &Inner, phase: LoaderPhase) {
    let on_phase = Rc::clone(&inner.on_phase);
    on_phase(phase);
}

fn on_hold_elapsed(weak: &Weak<Inner>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    if !inner.machine.borrow_mut().finish() {
        return;
    }
    notify(&inner, LoaderPhase::Hidden);
    if let Some(done) = inner.on_complete.take() {
        tracing::info!("loader complete, revealing page");
        done();
    }
}
