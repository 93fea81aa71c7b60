//! Controllers that turn the shared open/closed intent into motion.
//!
//! Each controller owns its own [`SpringValue`](crate::spring::SpringValue)
//! and never reads another controller's progress. They stay in step only
//! because they observe the same intent.

mod item;
mod menu;
mod overlay;

pub use item::{ItemController, ItemPhase, ItemRole, ItemStyle, NavItem, nav_items};
pub use menu::{BUBBLE_ID, CLOSE_ID, CONTAINER_ID, LIST_ID, MenuController, MenuMetrics, MenuPhase};
pub use overlay::{OVERLAY_ID, OverlayController, OverlayPhase};

/// Receives the authoritative open/closed intent whenever its owner updates it.
pub trait IntentObserver {
    fn on_intent_changed(&mut self, open: bool);
}

/// Direction of an intent flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Opened,
    Closed,
}

/// Remembers the last observed intent and reports only real flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentEdge {
    previous: bool,
}

impl IntentEdge {
    pub fn new(initial: bool) -> Self {
        Self { previous: initial }
    }

    /// The intent as last observed.
    pub fn current(&self) -> bool {
        self.previous
    }

    /// Record `open`; returns the flip if it differs from the previous value.
    pub fn observe(&mut self, open: bool) -> Option<Edge> {
        if open == self.previous {
            return None;
        }
        self.previous = open;
        Some(if open { Edge::Opened } else { Edge::Closed })
    }
}
