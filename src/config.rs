use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{DEATH_THRESHOLD, LocomotionSpeeds, Rgb};

/// Effects kept by the ECS `EffectLog` unless configured otherwise: about
/// ten seconds at 60 Hz with a few extra effects per frame.
pub const DEFAULT_EFFECT_LOG_CAPACITY: usize = 1024;

/// Oscillation driving the low-health display pulse.
///
/// Blend factor per tick is `cos(elapsed * rate) * amplitude * gain + bias`,
/// clamped to `[0, 1]`. `elapsed` stays `f64` through the cosine so long
/// sessions keep a smooth pulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub rate: f32,
    pub amplitude: f32,
    pub gain: f32,
    pub bias: f32,
}

impl PulseConfig {
    pub fn factor(&self, elapsed: f64) -> f32 {
        let wave = (elapsed * f64::from(self.rate)).cos() as f32;
        (wave * self.amplitude * self.gain + self.bias).clamp(0.0, 1.0)
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            rate: 6.0,
            amplitude: 0.1,
            gain: 5.0,
            bias: 0.5,
        }
    }
}

/// Load-time constants for the vitality subsystem.
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalityConfig {
    /// Health at spawn.
    pub initial_health: f32,
    pub maximum_health: f32,
    /// Health at or below which low-health mode latches.
    pub low_health_threshold: f32,
    /// Regeneration stops contributing once health exceeds this.
    pub regeneration_ceiling: f32,

    pub regeneration_enabled: bool,
    /// Health per second while regenerating.
    pub regeneration_rate: f32,
    /// Quiet period in seconds between the last damage and the start of regeneration.
    pub regeneration_delay: f32,

    /// Seconds to hold pain before the fade starts.
    pub pain_settle_delay: f32,
    /// Fade duration is `pain_fade_time * pain_fade_scale` seconds.
    pub pain_fade_time: f32,
    pub pain_fade_scale: f32,
    pub max_pain_amount: f32,

    /// Overwrite walk/run speeds while in low-health mode.
    pub low_health_locomotion_enabled: bool,
    pub low_health_locomotion: LocomotionSpeeds,

    /// Damage clip identifiers; one is picked uniformly per hit. Empty disables audio.
    pub damage_clips: Vec<String>,
    pub damage_volume: f32,

    pub normal_color: Rgb,
    pub low_health_color: Rgb,
    pub pulse: PulseConfig,

    /// Seed for damage clip selection.
    pub seed: u64,
    /// Fixed frame step in seconds used by the ECS frame clock.
    pub frame_delta: f32,
    /// Most recent effects kept in the ECS `EffectLog`.
    pub effect_log_capacity: usize,
}

impl Default for VitalityConfig {
    fn default() -> Self {
        Self {
            initial_health: 100.0,
            maximum_health: 200.0,
            low_health_threshold: 15.0,
            regeneration_ceiling: 100.0,
            regeneration_enabled: false,
            regeneration_rate: 0.0,
            regeneration_delay: 0.0,
            pain_settle_delay: 2.0,
            pain_fade_time: 0.1,
            pain_fade_scale: 10.0,
            max_pain_amount: 1.0,
            low_health_locomotion_enabled: false,
            low_health_locomotion: LocomotionSpeeds::default(),
            damage_clips: Vec::new(),
            damage_volume: 1.0,
            normal_color: Rgb::WHITE,
            low_health_color: Rgb::new(0.9, 0.0, 0.0),
            pulse: PulseConfig::default(),
            seed: 42,
            frame_delta: 1.0 / 60.0,
            effect_log_capacity: DEFAULT_EFFECT_LOG_CAPACITY,
        }
    }
}

impl VitalityConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Seconds the pain fade takes from its starting value down to zero.
    pub fn pain_fade_duration(&self) -> f32 {
        self.pain_fade_time * self.pain_fade_scale
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // A lower cap would clamp a live actor into the fatal range.
        if !(self.maximum_health.is_finite() && self.maximum_health > DEATH_THRESHOLD) {
            return Err(ConfigError::invalid(
                "maximum_health",
                format!("must be greater than {DEATH_THRESHOLD}"),
            ));
        }
        if !(0.0..=self.maximum_health).contains(&self.initial_health) {
            return Err(ConfigError::invalid(
                "initial_health",
                format!("must lie in [0, {}]", self.maximum_health),
            ));
        }

        let non_negative = [
            ("low_health_threshold", self.low_health_threshold),
            ("regeneration_ceiling", self.regeneration_ceiling),
            ("regeneration_rate", self.regeneration_rate),
            ("regeneration_delay", self.regeneration_delay),
            ("pain_settle_delay", self.pain_settle_delay),
            ("pain_fade_time", self.pain_fade_time),
            ("pain_fade_scale", self.pain_fade_scale),
            ("max_pain_amount", self.max_pain_amount),
            ("low_health_locomotion.walk_speed", self.low_health_locomotion.walk_speed),
            ("low_health_locomotion.run_speed", self.low_health_locomotion.run_speed),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(field, "must be finite and non-negative"));
            }
        }

        if !(0.0..=1.0).contains(&self.damage_volume) {
            return Err(ConfigError::invalid("damage_volume", "must lie in [0, 1]"));
        }
        if !(self.frame_delta.is_finite() && self.frame_delta > 0.0) {
            return Err(ConfigError::invalid("frame_delta", "must be positive"));
        }
        if self.effect_log_capacity == 0 {
            return Err(ConfigError::invalid("effect_log_capacity", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(VitalityConfig::default().validate().is_ok());
    }

    #[test]
    fn default_fade_lasts_one_second() {
        let config = VitalityConfig::default();
        assert!((config.pain_fade_duration() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = VitalityConfig::from_json_str(
            r#"{ "maximum_health": 100.0, "regeneration_enabled": true, "regeneration_rate": 10.0 }"#,
        )
        .unwrap();
        assert_eq!(config.maximum_health, 100.0);
        assert!(config.regeneration_enabled);
        assert_eq!(config.regeneration_rate, 10.0);
        assert_eq!(config.low_health_threshold, 15.0);
        assert_eq!(config.pulse, PulseConfig::default());
    }

    #[test]
    fn nested_values_parse() {
        let config = VitalityConfig::from_json_str(
            r#"{
                "low_health_locomotion_enabled": true,
                "low_health_locomotion": { "walk_speed": 1.5, "run_speed": 2.5 },
                "damage_clips": ["hit_a", "hit_b"],
                "low_health_color": { "r": 1.0, "g": 0.2, "b": 0.2 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.low_health_locomotion, LocomotionSpeeds::new(1.5, 2.5));
        assert_eq!(config.damage_clips.len(), 2);
        assert_eq!(config.low_health_color, Rgb::new(1.0, 0.2, 0.2));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = VitalityConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn rejects_non_positive_maximum() {
        let config = VitalityConfig {
            maximum_health: 0.0,
            ..VitalityConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { field: "maximum_health", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn rejects_initial_health_above_maximum() {
        let err = VitalityConfig::from_json_str(r#"{ "initial_health": 500.0 }"#).unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { field: "initial_health", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn rejects_negative_rate() {
        let config = VitalityConfig {
            regeneration_rate: -1.0,
            ..VitalityConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "regeneration_rate", .. })
        ));
    }

    #[test]
    fn rejects_volume_out_of_range() {
        let config = VitalityConfig {
            damage_volume: 1.5,
            ..VitalityConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "damage_volume", .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "low_health_threshold": 20.0, "seed": 7 }}"#).unwrap();
        let config = VitalityConfig::from_json_path(file.path()).unwrap();
        assert_eq!(config.low_health_threshold, 20.0);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = VitalityConfig::from_json_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn pulse_factor_stays_in_unit_range() {
        let pulse = PulseConfig::default();
        for i in 0..200 {
            let f = pulse.factor(i as f64 * 0.05);
            assert!((0.0..=1.0).contains(&f), "factor {f} out of range");
        }
        // cos(0) = 1 -> 1 * 0.1 * 5 + 0.5
        assert!((pulse.factor(0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pulse_factor_rises_and_falls() {
        let pulse = PulseConfig::default();
        let samples: Vec<f32> = (0..40).map(|i| pulse.factor(i as f64 * 0.1)).collect();
        let rising = samples.windows(2).filter(|w| w[1] > w[0]).count();
        let falling = samples.windows(2).filter(|w| w[1] < w[0]).count();
        assert!(rising > 0 && falling > 0, "factor is monotonic: {samples:?}");
        // Trough of the wave: cos(pi) * 0.5 + 0.5.
        let trough = pulse.factor(std::f64::consts::PI / 6.0);
        assert!(trough.abs() < 1e-6, "got {trough}");
    }

    #[test]
    fn pulse_stays_smooth_late_in_a_session() {
        let pulse = PulseConfig::default();
        // Ten hours in, adjacent frames still differ by a small smooth step.
        let start = 36_000.0;
        let step = 1.0 / 60.0;
        let a = pulse.factor(start);
        let b = pulse.factor(start + step);
        let expected = |t: f64| ((t * 6.0).cos() * 0.5 + 0.5) as f32;
        assert!((a - expected(start)).abs() < 1e-5);
        assert!((b - expected(start + step)).abs() < 1e-5);
    }

    #[test]
    fn maximum_at_or_below_death_threshold_rejected() {
        for maximum_health in [0.5, DEATH_THRESHOLD] {
            let config = VitalityConfig {
                maximum_health,
                initial_health: 0.0,
                ..VitalityConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { field: "maximum_health", .. }),
                "got {err:?}"
            );
        }
        let config = VitalityConfig {
            maximum_health: 1.0,
            initial_health: 1.0,
            ..VitalityConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_effect_log_capacity_rejected() {
        let config = VitalityConfig {
            effect_log_capacity: 0,
            ..VitalityConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "effect_log_capacity", .. })
        ));
    }
}
