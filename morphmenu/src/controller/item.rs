use std::time::Duration;

use super::{IntentEdge, IntentObserver};
use crate::animation::Animate;
use crate::config::MenuConfig;
use crate::interpolate::Keyframes;
use crate::node::{NodeKind, VisualNode};
use crate::spring::{SpringValue, target_for};
use crate::types::Color;

/// Whether an entry's opacity follows the menu's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRole {
    /// Always fully opaque; only size and color morph.
    Primary,
    /// Fades in and out with expansion.
    Secondary,
}

impl ItemRole {
    pub fn for_index(index: usize, primary_count: usize) -> Self {
        if index < primary_count {
            ItemRole::Primary
        } else {
            ItemRole::Secondary
        }
    }
}

/// Descriptor for one navigation entry, built top-down by the menu's owner.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub index: usize,
    pub role: ItemRole,
    pub label: String,
}

impl NavItem {
    pub fn new(index: usize, label: impl Into<String>, primary_count: usize) -> Self {
        Self {
            index,
            role: ItemRole::for_index(index, primary_count),
            label: label.into(),
        }
    }
}

/// Number labels in order and assign roles.
pub fn nav_items<I, S>(labels: I, primary_count: usize) -> Vec<NavItem>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| NavItem::new(index, label, primary_count))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

/// Visual properties of one item at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub height: f32,
    pub scale_y: f32,
    pub background: Color,
    pub text_color: Color,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy)]
struct ItemKeyframes {
    height: Keyframes<f32>,
    scale_y: Keyframes<f32>,
    background: Keyframes<Color>,
    text_color: Keyframes<Color>,
    opacity: Keyframes<f32>,
}

impl ItemKeyframes {
    fn new(config: &MenuConfig) -> Self {
        let accent = config.accent;
        Self {
            height: Keyframes::new(config.item_collapsed_height, config.item_expanded_height),
            scale_y: Keyframes::new(config.item_collapsed_scale, 1.0),
            background: Keyframes::new(accent, accent.with_alpha(0.0)),
            text_color: Keyframes::new(accent.with_alpha(0.0), accent),
            opacity: Keyframes::new(0.0, 1.0),
        }
    }
}

/// One navigation entry. Morphs from a short accent bar into a text row.
#[derive(Debug, Clone)]
pub struct ItemController {
    item: NavItem,
    intent: IntentEdge,
    spring: SpringValue,
    keyframes: ItemKeyframes,
}

impl ItemController {
    pub fn new(item: NavItem, open: bool, config: &MenuConfig) -> Self {
        Self {
            item,
            intent: IntentEdge::new(open),
            spring: SpringValue::from_intent(open, config.spring),
            keyframes: ItemKeyframes::new(config),
        }
    }

    pub fn id(&self) -> String {
        format!("menu-item-{}", self.item.index)
    }

    pub fn item(&self) -> &NavItem {
        &self.item
    }

    pub fn progress(&self) -> f32 {
        self.spring.get()
    }

    pub fn phase(&self) -> ItemPhase {
        match (self.intent.current(), self.spring.is_animating()) {
            (true, true) => ItemPhase::Expanding,
            (true, false) => ItemPhase::Expanded,
            (false, true) => ItemPhase::Collapsing,
            (false, false) => ItemPhase::Collapsed,
        }
    }

    pub fn style(&self) -> ItemStyle {
        self.style_at(self.spring.get())
    }

    /// Style for an arbitrary progress value. Pure.
    pub fn style_at(&self, progress: f32) -> ItemStyle {
        let k = &self.keyframes;
        let opacity = match self.item.role {
            ItemRole::Primary => 1.0,
            ItemRole::Secondary => k.opacity.at(progress),
        };

        ItemStyle {
            height: k.height.at(progress),
            scale_y: k.scale_y.at(progress),
            background: k.background.at(progress),
            text_color: k.text_color.at(progress),
            opacity,
        }
    }

    pub fn render(&self) -> VisualNode {
        let style = self.style();
        let id = self.id();

        VisualNode::new(NodeKind::Item, id.clone())
            .height(style.height)
            .background(style.background)
            .opacity(style.opacity)
            .scale_y(style.scale_y)
            .child(
                VisualNode::text(NodeKind::Label, format!("{id}-label"), &self.item.label)
                    .height(style.height)
                    .foreground(style.text_color),
            )
    }
}

impl IntentObserver for ItemController {
    fn on_intent_changed(&mut self, open: bool) {
        if self.intent.observe(open).is_none() {
            return;
        }
        let target = target_for(open);
        log::debug!(
            "{}: spring {:.3} -> {target}",
            self.id(),
            self.spring.get()
        );
        self.spring.animate_to(target);
    }
}

impl Animate for ItemController {
    fn tick(&mut self, dt: Duration) -> bool {
        self.spring.tick(dt)
    }

    fn is_animating(&self) -> bool {
        self.spring.is_animating()
    }
}
