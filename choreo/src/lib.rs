//! # zephyr-choreo
//!
//! Timing and motion core for the Tech Zephyr landing page.
//!
//! Every stateful piece of the page lives here, free of any browser API, so it
//! can be driven by real timers in the browser or by a [`ManualClock`] in tests:
//!
//! - [`loader`] - the splash progress state machine and its timed session
//! - [`rotation`] - auto-advancing index shared by the feature tabs and the carousel
//! - [`count_up`] - elapsed-time count-up animation driven by animation frames
//! - [`viewport`] - entry gate deciding when a viewport-triggered animation (re)plays
//! - [`scroll`] - scroll progress and linear range mapping for parallax
//! - [`clock`] - the [`Scheduler`] seam plus the deterministic [`ManualClock`]
//! - [`guard`] - scoped release of timers and listeners
//! - [`timing`] - serde-friendly timing configuration with the page defaults
//!
//! Nothing here is thread-safe on purpose: the page runs on a single UI thread
//! and all shared state is `Rc<RefCell<_>>`.
//!
//! Developed by The Tech Zephyr Web Team (c)2026

#![warn(missing_docs)]

pub mod clock;
pub mod count_up;
pub mod error;
pub mod guard;
pub mod loader;
pub mod rotation;
pub mod scroll;
pub mod timing;
pub mod viewport;

pub use clock::{ManualClock, Scheduler, SharedScheduler};
pub use error::ChoreoError;
pub use guard::Guard;
