use crate::config::VitalityConfig;

/// Health at or below which the actor counts as dead.
///
/// Anything under one displayed point of health is treated as zero.
pub const DEATH_THRESHOLD: f32 = 0.9;

/// Health record of the single playable actor.
///
/// Pure data: all transitions are driven by
/// [`VitalityController`](crate::vitality::VitalityController), which is the
/// only writer.
#[derive(Debug, Clone, PartialEq)]
pub struct VitalityState {
    pub health: f32,
    pub maximum_health: f32,
    pub low_health_threshold: f32,
    pub regeneration_ceiling: f32,
    /// Terminal once set.
    pub is_dead: bool,
    /// Recomputed every tick: `health >= maximum_health`.
    pub is_at_maximum: bool,
    /// Latched on entering low health, cleared once health rises above the threshold.
    pub is_low_health_mode: bool,
}

impl VitalityState {
    pub fn from_config(config: &VitalityConfig) -> Self {
        Self {
            health: config.initial_health,
            maximum_health: config.maximum_health,
            low_health_threshold: config.low_health_threshold,
            regeneration_ceiling: config.regeneration_ceiling,
            is_dead: false,
            is_at_maximum: false,
            is_low_health_mode: false,
        }
    }

    pub fn is_below_threshold(&self) -> bool {
        self.health <= self.low_health_threshold
    }

    /// `health <= 0` is subsumed by the `DEATH_THRESHOLD` check.
    pub fn is_fatal(&self) -> bool {
        self.health <= DEATH_THRESHOLD
    }
}
