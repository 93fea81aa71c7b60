use std::time::Duration;

use crate::animation::Animate;
use crate::config::MenuConfig;
use crate::interpolate::Keyframes;
use crate::node::{NodeKind, Position, VisualNode};
use crate::spring::SpringValue;
use crate::types::Color;

pub const OVERLAY_ID: &str = "overlay";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Appearing,
    Shown,
}

/// Modal backdrop shown while the menu is open.
///
/// Fades in once when created and has no way back: closing the menu drops
/// the controller, and the next open creates a fresh one starting from
/// transparent.
#[derive(Debug, Clone)]
pub struct OverlayController {
    spring: SpringValue,
    background: Keyframes<Color>,
}

impl OverlayController {
    pub fn new(config: &MenuConfig) -> Self {
        let mut spring = SpringValue::new(0.0, config.spring);
        spring.animate_to(1.0);
        log::debug!("{OVERLAY_ID}: mounted, fading in");

        Self {
            spring,
            background: Keyframes::new(config.overlay.with_alpha(0.0), config.overlay),
        }
    }

    pub fn progress(&self) -> f32 {
        self.spring.get()
    }

    pub fn phase(&self) -> OverlayPhase {
        if self.spring.is_animating() {
            OverlayPhase::Appearing
        } else {
            OverlayPhase::Shown
        }
    }

    pub fn background(&self) -> Color {
        self.background.at(self.spring.get())
    }

    pub fn render(&self) -> VisualNode {
        VisualNode::new(NodeKind::Overlay, OVERLAY_ID)
            .position(Position::Fill)
            .z_index(2)
            .background(self.background())
    }
}

impl Animate for OverlayController {
    fn tick(&mut self, dt: Duration) -> bool {
        self.spring.tick(dt)
    }

    fn is_animating(&self) -> bool {
        self.spring.is_animating()
    }
}
