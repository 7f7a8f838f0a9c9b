use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, ResMut};

use crate::ecs::components::{Player, Vitality};
use crate::ecs::resources::VitalityRng;
use crate::vitality::VitalityEffect;

use super::VitalityCommand;

/// Drains all pending `VitalityCommand` messages into the player's controller
/// and forwards the resulting side effects as `VitalityEffect` messages.
///
/// Runs in `VitalityPhase::Input`.
pub fn apply_vitality_commands(
    mut commands: MessageReader<VitalityCommand>,
    mut players: Query<&mut Vitality, With<Player>>,
    mut rng: ResMut<VitalityRng>,
    mut effects: MessageWriter<VitalityEffect>,
) {
    let Ok(mut vitality) = players.single_mut() else {
        let dropped = commands.read().count();
        if dropped > 0 {
            tracing::warn!(dropped, "vitality commands sent without a single player");
        }
        return;
    };

    let mut pending = Vec::new();
    for command in commands.read() {
        match *command {
            VitalityCommand::Damage { amount } => {
                vitality.0.apply_damage(amount, &mut rng.0, &mut pending);
            }
            VitalityCommand::Heal { amount } => {
                vitality.0.apply_heal(amount, &mut pending);
            }
        }
    }

    for effect in pending {
        effects.write(effect);
    }
}
