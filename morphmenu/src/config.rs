//! Menu configuration.
//!
//! Every size, color and spring constant the controllers use lives here so it
//! can be tuned without touching controller code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::spring::SpringConfig;
use crate::types::{Color, ColorError, Edges};

/// Errors produced while loading or validating a [`MenuConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid color: {0}")]
    Color(#[from] ColorError),

    #[error("'{field}' must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("'{field}' must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("expanded width {expanded} is smaller than the closed bubble {bubble}")]
    WidthBelowBubble { expanded: f32, bubble: f32 },

    #[error("collapsed item height {collapsed} exceeds expanded height {expanded}")]
    ItemHeightInverted { collapsed: f32, expanded: f32 },
}

/// Tunable sizes (layout units), colors and spring constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Margin around the close icon inside the closed bubble.
    pub bubble_margin: f32,
    /// Side length of the close icon.
    pub icon_size: f32,
    /// Thickness of each close icon bar.
    pub icon_thickness: f32,
    /// Container width when fully open.
    pub expanded_width: f32,
    /// Item block height at progress 0.
    pub item_collapsed_height: f32,
    /// Item block height at progress 1.
    pub item_expanded_height: f32,
    /// Item vertical scale at progress 0.
    pub item_collapsed_scale: f32,
    /// Container height added below the list when open.
    pub list_bottom_margin: f32,
    /// Margins of the list node inside the container.
    pub list_margin: Edges,
    /// List translation (both axes) at progress 1.
    pub stagger_offset: f32,
    /// Leading items that stay fully opaque.
    pub primary_count: usize,
    pub accent: Color,
    /// Overlay color at progress 1.
    pub overlay: Color,
    pub spring: SpringConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            bubble_margin: 25.0,
            icon_size: 20.0,
            icon_thickness: 2.0,
            expanded_width: 300.0,
            item_collapsed_height: 7.0,
            item_expanded_height: 40.0,
            item_collapsed_scale: 0.2,
            list_bottom_margin: 25.0,
            list_margin: Edges::new(25.0, 25.0, 20.0, 25.0),
            stagger_offset: 50.0,
            primary_count: 3,
            accent: Color::rgb8(0xEC, 0x72, 0x63),
            overlay: Color::BLACK.with_alpha(0.3),
            spring: SpringConfig::default(),
        }
    }
}

impl MenuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse JSON (missing fields take defaults) and validate.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Side length of the closed bubble: margin, icon, margin.
    pub fn bubble_size(&self) -> f32 {
        self.bubble_margin + self.icon_size + self.bubble_margin
    }

    /// Container height when open with `item_count` items.
    pub fn expanded_height(&self, item_count: usize) -> f32 {
        self.bubble_size()
            + item_count as f32 * self.item_expanded_height
            + self.list_bottom_margin
    }

    pub fn expanded_width(mut self, width: f32) -> Self {
        self.expanded_width = width;
        self
    }

    pub fn item_heights(mut self, collapsed: f32, expanded: f32) -> Self {
        self.item_collapsed_height = collapsed;
        self.item_expanded_height = expanded;
        self
    }

    pub fn stagger_offset(mut self, offset: f32) -> Self {
        self.stagger_offset = offset;
        self
    }

    pub fn primary_count(mut self, count: usize) -> Self {
        self.primary_count = count;
        self
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn overlay(mut self, color: Color) -> Self {
        self.overlay = color;
        self
    }

    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("icon_size", self.icon_size),
            ("icon_thickness", self.icon_thickness),
            ("expanded_width", self.expanded_width),
            ("item_expanded_height", self.item_expanded_height),
            ("spring.stiffness", self.spring.stiffness),
            ("spring.damping", self.spring.damping),
            ("spring.mass", self.spring.mass),
            // Zero thresholds never settle under f32 rounding.
            ("spring.rest_displacement", self.spring.rest_displacement),
            ("spring.rest_speed", self.spring.rest_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("bubble_margin", self.bubble_margin),
            ("item_collapsed_height", self.item_collapsed_height),
            ("item_collapsed_scale", self.item_collapsed_scale),
            ("list_bottom_margin", self.list_bottom_margin),
            ("stagger_offset", self.stagger_offset),
        ] {
            // NaN fails both comparisons, so check it explicitly.
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.expanded_width < self.bubble_size() {
            return Err(ConfigError::WidthBelowBubble {
                expanded: self.expanded_width,
                bubble: self.bubble_size(),
            });
        }

        if self.item_collapsed_height > self.item_expanded_height {
            return Err(ConfigError::ItemHeightInverted {
                collapsed: self.item_collapsed_height,
                expanded: self.item_expanded_height,
            });
        }

        Ok(())
    }
}
