use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::config::VitalityConfig;
use crate::ecs::components::{Locomotion, PainOverlay, Player, Vitality};
use crate::ecs::resources::EcsVitalityConfig;
use crate::model::LocomotionSpeeds;
use crate::vitality::VitalityController;

/// Spawn the player with a fresh controller built from the app's
/// `EcsVitalityConfig` (or the defaults when the resource is missing).
///
/// `locomotion` is the movement component's starting speeds; they are
/// snapshotted as the normal values before anything can overwrite them.
/// Pass `None` for an actor without a movement component.
pub fn spawn_player(world: &mut World, locomotion: Option<LocomotionSpeeds>) -> Entity {
    let config = world
        .get_resource::<EcsVitalityConfig>()
        .map(|res| res.0.clone())
        .unwrap_or_else(VitalityConfig::default);

    let controller = VitalityController::new(config, locomotion);
    let mut player = world.spawn((
        Player,
        Vitality(controller),
        PainOverlay { pain_amount: 0.0 },
    ));
    if let Some(speeds) = locomotion {
        player.insert(Locomotion(speeds));
    }
    let entity = player.id();
    tracing::debug!(?entity, "player spawned");
    entity
}
