//! Health state machine for the playable actor.
//!
//! Damage and heal transactions are applied as they arrive; `tick` runs once
//! per frame afterwards, advances the two timed processes and then evaluates
//! the low-health, death and maximum transitions. Outbound side effects are
//! pushed onto a caller-supplied buffer.

use rand::{Rng, RngCore};

use super::effect::{MAX_HEALTH_WARNING, VitalityEffect};
use super::handle::{HandleGenerator, ProcessHandle};
use super::pain::PainSignal;
use super::regen::{RegenStep, RegenerationProcess};
use crate::config::VitalityConfig;
use crate::model::{LocomotionSpeeds, Rgb, VitalityState};

/// Pain added by a hit that leaves the actor above the low-health threshold.
pub const PAIN_INCREMENT: f32 = 0.1;

#[derive(Debug)]
pub struct VitalityController {
    config: VitalityConfig,
    state: VitalityState,
    pain: PainSignal,
    regeneration: Option<RegenerationProcess>,
    handles: HandleGenerator,
    /// Speeds captured at construction, restored when low-health mode ends.
    normal_locomotion: Option<LocomotionSpeeds>,
    display_color: Rgb,
    /// Still blending back toward the normal color after leaving low-health mode.
    color_recovering: bool,
}

impl VitalityController {
    /// `locomotion` is the movement collaborator's current speeds, or `None`
    /// if the actor has no movement component.
    ///
    /// `config` is taken as given; run [`VitalityConfig::validate`] on
    /// configs that did not come from `from_json_*` or `build_vitality_app`.
    pub fn new(config: VitalityConfig, locomotion: Option<LocomotionSpeeds>) -> Self {
        if config.damage_clips.is_empty() {
            tracing::warn!("no damage clips configured; damage audio disabled");
        }
        Self {
            state: VitalityState::from_config(&config),
            pain: PainSignal::new(config.max_pain_amount),
            regeneration: None,
            handles: HandleGenerator::new(),
            normal_locomotion: locomotion,
            display_color: config.normal_color,
            color_recovering: false,
            config,
        }
    }

    pub fn config(&self) -> &VitalityConfig {
        &self.config
    }

    pub fn state(&self) -> &VitalityState {
        &self.state
    }

    pub fn health(&self) -> f32 {
        self.state.health
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_dead
    }

    pub fn is_at_maximum(&self) -> bool {
        self.state.is_at_maximum
    }

    pub fn is_low_health_mode(&self) -> bool {
        self.state.is_low_health_mode
    }

    pub fn pain(&self) -> &PainSignal {
        &self.pain
    }

    pub fn pain_intensity(&self) -> f32 {
        self.pain.intensity()
    }

    pub fn regeneration(&self) -> Option<&RegenerationProcess> {
        self.regeneration.as_ref()
    }

    pub fn pain_decay_handle(&self) -> Option<ProcessHandle> {
        self.pain.decay().map(|decay| decay.handle())
    }

    pub fn regeneration_handle(&self) -> Option<ProcessHandle> {
        self.regeneration.as_ref().map(RegenerationProcess::handle)
    }

    pub fn display_color(&self) -> Rgb {
        self.display_color
    }

    pub fn normal_locomotion(&self) -> Option<LocomotionSpeeds> {
        self.normal_locomotion
    }

    /// Subtract `amount` from health and react: damage audio, regeneration
    /// restart, and either low-health saturation or a pain bump with a fresh
    /// decay. Ignored once dead.
    pub fn apply_damage(
        &mut self,
        amount: f32,
        rng: &mut dyn RngCore,
        effects: &mut Vec<VitalityEffect>,
    ) {
        if self.state.is_dead {
            return;
        }
        let amount = amount.max(0.0);
        self.state.health -= amount;
        tracing::debug!(amount, health = self.state.health, "damage applied");

        if !self.config.damage_clips.is_empty() {
            let clip = rng.random_range(0..self.config.damage_clips.len());
            effects.push(VitalityEffect::PlayDamageClip {
                clip,
                volume: self.config.damage_volume,
            });
        }

        if self.config.regeneration_enabled {
            self.restart_regeneration();
        }

        if self.state.is_below_threshold() {
            self.pain.cancel_decay();
            self.pain.saturate();
            self.apply_locomotion_penalty(effects);
            if !self.state.is_low_health_mode {
                tracing::debug!(health = self.state.health, "entered low-health mode");
            }
            self.state.is_low_health_mode = true;
        } else {
            self.pain.raise(PAIN_INCREMENT);
            self.start_pain_decay();
        }
    }

    /// Add `amount` to health unless dead or already at maximum. At maximum a
    /// warning goes out instead and health is untouched.
    pub fn apply_heal(&mut self, amount: f32, effects: &mut Vec<VitalityEffect>) {
        if self.state.health <= 0.0 {
            return;
        }
        if self.state.is_at_maximum {
            effects.push(VitalityEffect::Warning(MAX_HEALTH_WARNING.to_string()));
            return;
        }
        self.state.health += amount.max(0.0);
        tracing::debug!(amount, health = self.state.health, "heal applied");
    }

    /// Per-frame update. `dt` is the frame delta and `elapsed` the total
    /// simulation time, both in seconds.
    ///
    /// After this returns, `0 <= health <= maximum_health` holds.
    pub fn tick(&mut self, dt: f32, elapsed: f64, effects: &mut Vec<VitalityEffect>) {
        if self.state.is_dead {
            return;
        }

        self.advance_processes(dt);
        self.blend_display_color(elapsed);

        if self.state.is_below_threshold() {
            if !self.state.is_low_health_mode {
                self.cancel_all_processes();
                self.pain.saturate();
                self.apply_locomotion_penalty(effects);
                self.state.is_low_health_mode = true;
                tracing::debug!(health = self.state.health, "entered low-health mode");
            }
        } else if self.state.is_low_health_mode {
            self.cancel_all_processes();
            self.start_pain_decay();
            self.restore_locomotion(effects);
            self.state.is_low_health_mode = false;
            self.color_recovering = true;
            tracing::debug!(health = self.state.health, "left low-health mode");
        }

        if self.state.is_fatal() {
            self.state.health = 0.0;
            self.state.is_dead = true;
            self.cancel_all_processes();
            effects.push(VitalityEffect::ShowDeathPanel);
            tracing::info!("actor died");
        }

        if self.state.health >= self.state.maximum_health {
            self.state.health = self.state.maximum_health;
            self.state.is_at_maximum = true;
        } else {
            self.state.is_at_maximum = false;
        }

        effects.push(VitalityEffect::Display {
            health: self.state.health.round_ties_even() as i32,
            color: self.display_color,
        });
    }

    fn advance_processes(&mut self, dt: f32) {
        self.pain.advance(dt);

        let Some(regen) = self.regeneration.as_mut() else {
            return;
        };
        let step = regen.advance(
            dt,
            &mut self.state.health,
            self.config.regeneration_rate,
            self.state.regeneration_ceiling,
        );
        if step == RegenStep::Finished {
            tracing::debug!(handle = %regen.handle(), health = self.state.health, "regeneration finished");
            self.regeneration = None;
        }
    }

    fn blend_display_color(&mut self, elapsed: f64) {
        let factor = self.config.pulse.factor(elapsed);
        if self.state.is_below_threshold() {
            self.display_color = self.display_color.lerp(self.config.low_health_color, factor);
            self.color_recovering = false;
        } else if self.state.is_low_health_mode || self.color_recovering {
            let normal = self.config.normal_color;
            self.display_color = self.display_color.lerp(normal, factor);
            if self.display_color.approx_eq(normal) {
                self.display_color = normal;
                self.color_recovering = false;
            }
        }
    }

    fn restart_regeneration(&mut self) {
        if let Some(previous) = self.regeneration.take() {
            tracing::debug!(handle = %previous.handle(), "regeneration canceled");
        }
        let handle = self.handles.next_handle();
        tracing::debug!(%handle, quiet_period = self.config.regeneration_delay, "regeneration started");
        self.regeneration = Some(RegenerationProcess::start(
            handle,
            self.config.regeneration_delay,
        ));
    }

    fn start_pain_decay(&mut self) {
        let handle = self.handles.next_handle();
        self.pain.start_decay(
            handle,
            self.config.pain_settle_delay,
            self.config.pain_fade_duration(),
        );
    }

    fn cancel_all_processes(&mut self) {
        self.pain.cancel_decay();
        if let Some(regen) = self.regeneration.take() {
            tracing::debug!(handle = %regen.handle(), "regeneration canceled");
        }
    }

    fn apply_locomotion_penalty(&self, effects: &mut Vec<VitalityEffect>) {
        if self.config.low_health_locomotion_enabled && self.normal_locomotion.is_some() {
            effects.push(VitalityEffect::SetLocomotion(self.config.low_health_locomotion));
        }
    }

    fn restore_locomotion(&self, effects: &mut Vec<VitalityEffect>) {
        if !self.config.low_health_locomotion_enabled {
            return;
        }
        if let Some(normal) = self.normal_locomotion {
            effects.push(VitalityEffect::SetLocomotion(normal));
        }
    }
}
