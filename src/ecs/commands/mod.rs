pub mod applicator;

use bevy_ecs::message::Message;

pub use applicator::apply_vitality_commands;

/// An inbound health transaction for the player.
///
/// Gameplay code writes these via `MessageWriter<VitalityCommand>` (or straight
/// into `Messages<VitalityCommand>` from outside the schedule). The applicator
/// in `VitalityPhase::Input` drains them in arrival order before the frame's
/// controller tick.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum VitalityCommand {
    Damage { amount: f32 },
    Heal { amount: f32 },
}

impl VitalityCommand {
    pub fn damage(amount: f32) -> Self {
        Self::Damage { amount }
    }

    pub fn heal(amount: f32) -> Self {
        Self::Heal { amount }
    }
}
