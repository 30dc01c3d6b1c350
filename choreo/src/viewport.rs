//! Viewport-entry gating for entrance animations.
//!
//! The gate only decides *when* to play; the animation itself lives elsewhere
//! ([`count_up`](crate::count_up) for counters, CSS transitions for bars). The
//! host supplies visibility through a [`VisibilitySource`].

use serde::{Deserialize, Serialize};

use crate::guard::Guard;

/// Whether an entrance animation replays when its target re-enters view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplayPolicy {
    /// Play on the first entry of the mounted lifetime, never again.
    #[default]
    Once,
    /// Replay from the start on every entry, reset on every exit.
    EveryEntry,
}

/// What the host should do after a visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// Start (or restart) the entrance animation.
    Play,
    /// Stop the animation and return to its initial state.
    Reset,
}

/// Tracks visibility and the "already played" flag for one target.
#[derive(Debug, Clone)]
pub struct EntryGate {
    policy: ReplayPolicy,
    visible: bool,
    played: bool,
}

impl EntryGate {
    /// A gate for a target that starts out of view.
    pub fn new(policy: ReplayPolicy) -> Self {
        Self {
            policy,
            visible: false,
            played: false,
        }
    }

    /// Feed one visibility report. Repeated reports of the same state are
    /// ignored, so hosts may forward every observer callback as-is.
    pub fn observe(&mut self, visible: bool) -> Option<GateAction> {
        if visible == self.visible {
            return None;
        }
        self.visible = visible;

        match (visible, self.policy) {
            (true, ReplayPolicy::Once) if self.played => None,
            (true, _) => {
                self.played = true;
                Some(GateAction::Play)
            }
            (false, ReplayPolicy::EveryEntry) => Some(GateAction::Reset),
            (false, ReplayPolicy::Once) => None,
        }
    }

    /// Whether the animation has been started at least once.
    pub fn has_played(&self) -> bool {
        self.played
    }

    /// Last reported visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Capability: notify when a target enters or leaves the viewport.
pub trait VisibilitySource {
    /// Call `on_change(true)` on entry and `on_change(false)` on exit until the
    /// returned guard is released.
    fn watch(&self, on_change: Box<dyn FnMut(bool)>) -> Guard;
}
