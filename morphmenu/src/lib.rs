pub mod animation;
pub mod config;
pub mod controller;
pub mod interpolate;
pub mod node;
pub mod root;
pub mod spring;
pub mod types;

pub use animation::{Animate, FrameClock};
pub use config::{ConfigError, MenuConfig};
pub use controller::{
    IntentObserver, ItemController, ItemPhase, ItemRole, MenuController, MenuPhase,
    OverlayController, OverlayPhase, nav_items,
};
pub use interpolate::{Interpolate, Keyframes, clamp_progress};
pub use node::{NodeKind, TapAction, VisualNode, find_node, tap_targets};
pub use root::MenuRoot;
pub use spring::{ProgressValue, SpringConfig, SpringDriver, SpringValue};
pub use types::*;
