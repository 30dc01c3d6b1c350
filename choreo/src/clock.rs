//! The scheduling seam between the choreography and its host.
//!
//! In the browser the [`Scheduler`] is backed by `setInterval`, `setTimeout`
//! and `requestAnimationFrame`. Everywhere else (tests, headless hosts) the
//! [`ManualClock`] advances virtual time on demand, firing callbacks in due
//! order, so timelines like "50 ticks of 30 ms then an 800 ms hold" can be
//! asserted to the millisecond.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::guard::Guard;

/// Spacing of animation frames on the [`ManualClock`] (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Registers callbacks against a host clock.
///
/// Every registration returns a [`Guard`]; dropping it unregisters the
/// callback. Implementations must tolerate the guard being released from
/// inside the callback it guards.
pub trait Scheduler {
    /// Call `tick` every `period` until the guard is released.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Guard;

    /// Call `fire` once after `delay`.
    fn after(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Guard;

    /// Call `fire` on the next animation frame with a monotonic timestamp in
    /// milliseconds.
    fn frame(&self, fire: Box<dyn FnOnce(f64)>) -> Guard;
}

/// Schedulers are shared between a session and the callbacks it registers.
pub type SharedScheduler = Rc<dyn Scheduler>;

enum Task {
    Repeat {
        period: u64,
        tick: Box<dyn FnMut()>,
    },
    Once(Box<dyn FnOnce()>),
    Frame(Box<dyn FnOnce(f64)>),
    /// Placeholder for a repeating task whose tick is currently executing.
    Running { period: u64 },
}

struct Entry {
    due: u64,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: u64,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
}

/// Deterministic virtual-time scheduler.
///
/// Cloning is cheap; all clones share one timeline.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

enum Fired {
    Repeat(u64, Box<dyn FnMut()>),
    Once(Box<dyn FnOnce()>),
    Frame(Box<dyn FnOnce(f64)>, u64),
}

impl ManualClock {
    /// A clock at virtual time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the clock was created.
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.state.borrow().now)
    }

    /// Number of registrations that have not fired (one-shots) or not been
    /// released (repeating). Zero after teardown means nothing leaked.
    pub fn pending(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Move virtual time forward, firing every callback that falls due on the
    /// way, in due order (ties resolved by registration order).
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + as_millis(by);
        while self.fire_next(target) {}
        self.state.borrow_mut().now = target;
    }

    fn fire_next(&self, target: u64) -> bool {
        let fired = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            let next = state
                .entries
                .iter()
                .filter(|(_, entry)| {
                    entry.due <= target && !matches!(entry.task, Task::Running { .. })
                })
                .min_by_key(|(id, entry)| (entry.due, **id))
                .map(|(id, _)| *id);
            let Some(id) = next else {
                return false;
            };
            let Some(entry) = state.entries.remove(&id) else {
                return false;
            };
            state.now = entry.due;
            match entry.task {
                Task::Repeat { period, tick } => {
                    state.entries.insert(
                        id,
                        Entry {
                            due: entry.due,
                            task: Task::Running { period },
                        },
                    );
                    Fired::Repeat(id, tick)
                }
                Task::Once(fire) => Fired::Once(fire),
                Task::Frame(fire) => Fired::Frame(fire, entry.due),
                running @ Task::Running { .. } => {
                    state.entries.insert(id, Entry { due: entry.due, task: running });
                    return false;
                }
            }
        };

        match fired {
            Fired::Repeat(id, mut tick) => {
                tick();
                let mut state = self.state.borrow_mut();
                // A missing entry means the tick released its own guard.
                if let Some(entry) = state.entries.get_mut(&id) {
                    if let Task::Running { period } = entry.task {
                        entry.due += period;
                        entry.task = Task::Repeat { period, tick };
                    }
                }
            }
            Fired::Once(fire) => fire(),
            Fired::Frame(fire, at) => fire(at as f64),
        }
        true
    }

    fn schedule(&self, due_in: u64, task: Task) -> Guard {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + due_in;
            state.entries.insert(id, Entry { due, task });
            id
        };
        let state = Rc::downgrade(&self.state);
        Guard::new(move || {
            if let Some(state) = state.upgrade() {
                // Drop the task outside the borrow: its captures may own guards.
                let removed = state.borrow_mut().entries.remove(&id);
                drop(removed);
            }
        })
    }
}

impl Scheduler for ManualClock {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Guard {
        let period = as_millis(period).max(1);
        self.schedule(period, Task::Repeat { period, tick })
    }

    fn after(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Guard {
        self.schedule(as_millis(delay), Task::Once(fire))
    }

    fn frame(&self, fire: Box<dyn FnOnce(f64)>) -> Guard {
        self.schedule(as_millis(FRAME_INTERVAL), Task::Frame(fire))
    }
}

fn as_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
