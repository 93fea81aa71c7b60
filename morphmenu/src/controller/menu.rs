use std::fmt;
use std::time::Duration;

use super::{IntentEdge, IntentObserver, ItemController, NavItem};
use crate::animation::Animate;
use crate::config::MenuConfig;
use crate::interpolate::Keyframes;
use crate::node::{NodeKind, Position, TapAction, VisualNode};
use crate::spring::{SpringValue, target_for};
use crate::types::{Edges, Offset};

pub const CONTAINER_ID: &str = "menu";
pub const BUBBLE_ID: &str = "menu-bubble";
pub const CLOSE_ID: &str = "menu-close";
pub const LIST_ID: &str = "menu-list";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Container geometry at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuMetrics {
    pub width: f32,
    pub height: f32,
    pub list_offset: Offset,
}

/// The menu container: a bubble when closed, a list when open.
///
/// Owns its own progress, separate from its items', so the container shape
/// and the item layout can use different keyframes. The menu never changes
/// the intent itself; taps are reported through `on_toggle` and the owner
/// decides.
pub struct MenuController {
    config: MenuConfig,
    intent: IntentEdge,
    spring: SpringValue,
    items: Vec<ItemController>,
    width: Keyframes<f32>,
    height: Keyframes<f32>,
    list_offset: Keyframes<Offset>,
    on_toggle: Box<dyn FnMut()>,
}

impl fmt::Debug for MenuController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuController")
            .field("intent", &self.intent)
            .field("spring", &self.spring)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl MenuController {
    pub fn new(
        config: MenuConfig,
        items: Vec<NavItem>,
        open: bool,
        on_toggle: impl FnMut() + 'static,
    ) -> Self {
        let bubble = config.bubble_size();
        let items: Vec<_> = items
            .into_iter()
            .map(|item| ItemController::new(item, open, &config))
            .collect();

        Self {
            width: Keyframes::new(bubble, config.expanded_width),
            height: Keyframes::new(bubble, config.expanded_height(items.len())),
            list_offset: Keyframes::new(Offset::ZERO, Offset::splat(config.stagger_offset)),
            intent: IntentEdge::new(open),
            spring: SpringValue::from_intent(open, config.spring),
            items,
            config,
            on_toggle: Box::new(on_toggle),
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The intent as last delivered by the owner.
    pub fn is_open(&self) -> bool {
        self.intent.current()
    }

    pub fn progress(&self) -> f32 {
        self.spring.get()
    }

    pub fn items(&self) -> &[ItemController] {
        &self.items
    }

    pub fn phase(&self) -> MenuPhase {
        match (self.intent.current(), self.spring.is_animating()) {
            (true, true) => MenuPhase::Opening,
            (true, false) => MenuPhase::Open,
            (false, true) => MenuPhase::Closing,
            (false, false) => MenuPhase::Closed,
        }
    }

    pub fn metrics(&self) -> MenuMetrics {
        self.metrics_at(self.spring.get())
    }

    /// Geometry for an arbitrary progress value. Pure.
    pub fn metrics_at(&self, progress: f32) -> MenuMetrics {
        MenuMetrics {
            width: self.width.at(progress),
            height: self.height.at(progress),
            list_offset: self.list_offset.at(progress),
        }
    }

    /// Id of the node that currently accepts a tap.
    pub fn active_tap_target(&self) -> &'static str {
        if self.is_open() { CLOSE_ID } else { BUBBLE_ID }
    }

    /// Handle a tap on `node_id`. Invokes `on_toggle` once and returns true
    /// only if the node is the active target.
    pub fn tap(&mut self, node_id: &str) -> bool {
        if node_id != self.active_tap_target() {
            log::warn!("tap on '{node_id}' ignored, active target is '{}'", self.active_tap_target());
            return false;
        }
        log::debug!("menu tapped '{node_id}', requesting toggle");
        (self.on_toggle)();
        true
    }

    pub fn render(&self) -> VisualNode {
        let metrics = self.metrics();
        let open = self.is_open();

        let list = VisualNode::new(NodeKind::List, LIST_ID)
            .margin(self.config.list_margin)
            .translate(metrics.list_offset)
            .children(self.items.iter().map(ItemController::render));

        let container = VisualNode::new(NodeKind::Container, CONTAINER_ID)
            .size(metrics.width, metrics.height)
            .z_index(3);

        if open {
            container.child(self.render_close_icon()).child(list)
        } else {
            container.child(
                VisualNode::new(NodeKind::TapRegion, BUBBLE_ID)
                    .position(Position::Fill)
                    .on_tap(TapAction::Open)
                    .child(list),
            )
        }
    }

    /// Two crossed bars forming an "X".
    fn render_close_icon(&self) -> VisualNode {
        let size = self.config.icon_size;
        let thickness = self.config.icon_thickness;
        let bar = |suffix: &str, degrees: f32, shift: f32| {
            VisualNode::new(NodeKind::CloseBar, format!("{CLOSE_ID}-{suffix}"))
                .size(size, thickness)
                .background(self.config.accent)
                .rotate(degrees)
                .translate(Offset::new(0.0, shift))
        };

        VisualNode::new(NodeKind::CloseIcon, CLOSE_ID)
            .size(size, size)
            .margin(Edges::all(self.config.bubble_margin))
            .position(Position::Absolute)
            .z_index(1)
            .on_tap(TapAction::Close)
            .child(bar("a", 45.0, thickness / 2.0))
            .child(bar("b", -45.0, -thickness / 2.0))
    }
}

impl IntentObserver for MenuController {
    fn on_intent_changed(&mut self, open: bool) {
        for item in &mut self.items {
            item.on_intent_changed(open);
        }

        if self.intent.observe(open).is_none() {
            log::trace!("menu: intent unchanged ({open})");
            return;
        }
        let target = target_for(open);
        log::debug!("menu: spring {:.3} -> {target}", self.spring.get());
        self.spring.animate_to(target);
    }
}

impl Animate for MenuController {
    fn tick(&mut self, dt: Duration) -> bool {
        let mut moving = self.spring.tick(dt);
        for item in &mut self.items {
            moving |= item.tick(dt);
        }
        moving
    }

    fn is_animating(&self) -> bool {
        self.spring.is_animating() || self.items.iter().any(|item| item.is_animating())
    }
}
