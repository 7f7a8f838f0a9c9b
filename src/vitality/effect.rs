use bevy_ecs::message::Message;

use crate::model::{LocomotionSpeeds, Rgb};

/// Literal payload of the heal-at-maximum warning.
pub const MAX_HEALTH_WARNING: &str = "You have maximum health";

/// Side effect requested from an external collaborator.
///
/// The controller never performs these itself. Collaborators that are absent
/// simply never consume the corresponding variant.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum VitalityEffect {
    /// Health readout for the display, once per live tick.
    Display { health: i32, color: Rgb },
    /// Play clip `clip` from the configured damage pool.
    PlayDamageClip { clip: usize, volume: f32 },
    /// Overwrite the movement collaborator's walk/run speeds.
    SetLocomotion(LocomotionSpeeds),
    /// Emitted exactly once, on the death transition.
    ShowDeathPanel,
    Warning(String),
}

impl VitalityEffect {
    pub fn is_display(&self) -> bool {
        matches!(self, Self::Display { .. })
    }
}
