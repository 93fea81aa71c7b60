//! Progress values and the spring driver that moves them.
//!
//! A [`ProgressValue`] is a plain scalar (plus velocity) owned by exactly one
//! controller. A [`SpringDriver`] holds the spring constants and the current
//! target, and integrates the value toward it whenever the frame clock ticks.
//! Retargeting only swaps the target: position and velocity carry over, so a
//! reversed transition continues smoothly from wherever the value was.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Animate;

/// Largest integration step. Longer frames are split into sub-steps.
const MAX_STEP: f32 = 1.0 / 240.0;

/// Floor for the rest thresholds. Below this, f32 rounding near 1.0 can
/// freeze the value short of the target while velocity never decays.
const MIN_REST: f32 = 1e-5;

/// Spring constants.
///
/// The defaults match a tension/friction spring of 40/7, which converts to
/// stiffness 230.2 and damping 22 with unit mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Settled once the distance to the target is at most this...
    pub rest_displacement: f32,
    /// ...and the speed is at most this.
    pub rest_speed: f32,
    /// Settle as soon as the target is crossed instead of oscillating around it.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 230.2,
            damping: 22.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            ..Default::default()
        }
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn rest_thresholds(mut self, displacement: f32, speed: f32) -> Self {
        self.rest_displacement = displacement;
        self.rest_speed = speed;
        self
    }

    pub fn overshoot_clamping(mut self, enabled: bool) -> Self {
        self.overshoot_clamping = enabled;
        self
    }
}

/// How far a visual subtree is toward "open": 0.0 closed, 1.0 open.
///
/// The raw value may leave 0.0..=1.0 briefly while a spring overshoots;
/// consumers clamp when mapping it to visual properties.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressValue {
    value: f32,
    velocity: f32,
}

impl ProgressValue {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
        }
    }

    /// Start at rest at the value matching the intent, so the first frame is
    /// never mid-transition.
    pub fn from_intent(open: bool) -> Self {
        Self::new(target_for(open))
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}

/// Target progress for an intent.
pub fn target_for(open: bool) -> f32 {
    if open { 1.0 } else { 0.0 }
}

/// Drives one [`ProgressValue`] toward a target with damped spring dynamics.
#[derive(Debug, Clone, Default)]
pub struct SpringDriver {
    config: SpringConfig,
    target: Option<f32>,
}

impl SpringDriver {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            target: None,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Target of the in-flight transition, if any.
    pub fn target(&self) -> Option<f32> {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.target.is_some()
    }

    /// Start a transition, superseding any in-flight one.
    pub fn animate_to(&mut self, target: f32) {
        self.target = Some(target);
    }

    /// Jump straight to the target and stop.
    pub fn finish(&mut self, progress: &mut ProgressValue) {
        if let Some(target) = self.target.take() {
            progress.value = target;
            progress.velocity = 0.0;
        }
    }

    /// Integrate `dt` worth of motion. Returns true while still moving.
    pub fn step(&mut self, progress: &mut ProgressValue, dt: Duration) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_displacement,
            rest_speed,
            overshoot_clamping,
        } = self.config;
        let rest_displacement = rest_displacement.max(MIN_REST);
        let rest_speed = rest_speed.max(MIN_REST);

        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            remaining -= h;

            let before = progress.value - target;
            let acceleration = (-stiffness * before - damping * progress.velocity) / mass;
            progress.velocity += acceleration * h;
            progress.value += progress.velocity * h;
            let after = progress.value - target;

            let crossed = before != 0.0 && after.signum() != before.signum();
            let at_rest = after.abs() <= rest_displacement && progress.velocity.abs() <= rest_speed;
            if at_rest || (overshoot_clamping && crossed) {
                self.finish(progress);
                log::trace!("spring settled at {target}");
                return false;
            }
        }

        true
    }
}

/// A progress value paired with the driver that owns its motion.
#[derive(Debug, Clone)]
pub struct SpringValue {
    progress: ProgressValue,
    driver: SpringDriver,
}

impl SpringValue {
    pub fn new(initial: f32, config: SpringConfig) -> Self {
        Self {
            progress: ProgressValue::new(initial),
            driver: SpringDriver::new(config),
        }
    }

    pub fn from_intent(open: bool, config: SpringConfig) -> Self {
        Self::new(target_for(open), config)
    }

    /// Current raw value (may transiently overshoot).
    pub fn get(&self) -> f32 {
        self.progress.get()
    }

    pub fn progress(&self) -> ProgressValue {
        self.progress
    }

    pub fn target(&self) -> Option<f32> {
        self.driver.target()
    }

    /// Retargets from the current position and velocity; never resets.
    pub fn animate_to(&mut self, target: f32) {
        self.driver.animate_to(target);
    }

    pub fn finish(&mut self) {
        self.driver.finish(&mut self.progress);
    }
}

impl Animate for SpringValue {
    fn tick(&mut self, dt: Duration) -> bool {
        self.driver.step(&mut self.progress, dt)
    }

    fn is_animating(&self) -> bool {
        self.driver.is_running()
    }
}
