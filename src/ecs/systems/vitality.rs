//! Vitality systems.
//!
//! One system in `VitalityPhase::Update`:
//! 1. `tick_vitality` — advance pain decay and regeneration, evaluate transitions
//!
//! Two collaborator syncs in `VitalityPhase::Sync`:
//! 2. `sync_pain_overlay` — copy pain intensity into the `PainOverlay` actuator
//! 3. `apply_locomotion_effects` — overwrite `Locomotion` on `SetLocomotion`
//!
//! One audit system in `VitalityPhase::Last`:
//! 4. `record_effects` — append every effect of the frame to `EffectLog`

use bevy_app::{App, Plugin};
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::ecs::clock::{FrameClock, advance_clock};
use crate::ecs::components::{Locomotion, PainOverlay, Player, Vitality};
use crate::ecs::resources::EffectLog;
use crate::ecs::schedule::{VitalityPhase, VitalityTick};
use crate::vitality::VitalityEffect;

pub struct VitalityPlugin;

impl Plugin for VitalityPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(VitalityTick, tick_vitality.in_set(VitalityPhase::Update));
        app.add_systems(
            VitalityTick,
            (sync_pain_overlay, apply_locomotion_effects).in_set(VitalityPhase::Sync),
        );
        app.add_systems(
            VitalityTick,
            record_effects
                .in_set(VitalityPhase::Last)
                .before(advance_clock),
        );
    }
}

fn tick_vitality(
    clock: Res<FrameClock>,
    mut players: Query<&mut Vitality, With<Player>>,
    mut effects: MessageWriter<VitalityEffect>,
) {
    let Ok(mut vitality) = players.single_mut() else {
        return;
    };
    if vitality.0.is_dead() {
        return;
    }

    let mut pending = Vec::new();
    vitality.0.tick(clock.delta, clock.elapsed, &mut pending);
    for effect in pending {
        effects.write(effect);
    }
}

fn sync_pain_overlay(mut players: Query<(&Vitality, &mut PainOverlay), With<Player>>) {
    for (vitality, mut overlay) in players.iter_mut() {
        let pain = vitality.0.pain_intensity();
        if overlay.pain_amount != pain {
            overlay.pain_amount = pain;
        }
    }
}

fn apply_locomotion_effects(
    mut effects: MessageReader<VitalityEffect>,
    mut movers: Query<&mut Locomotion, With<Player>>,
) {
    for effect in effects.read() {
        let VitalityEffect::SetLocomotion(speeds) = effect else {
            continue;
        };
        for mut locomotion in movers.iter_mut() {
            locomotion.0 = *speeds;
        }
    }
}

fn record_effects(
    mut effects: MessageReader<VitalityEffect>,
    clock: Res<FrameClock>,
    mut log: ResMut<EffectLog>,
) {
    for effect in effects.read() {
        if *effect == VitalityEffect::ShowDeathPanel {
            tracing::info!(frame = clock.frame_count, "death panel requested");
        }
        log.record(clock.frame_count, effect.clone());
    }
}
