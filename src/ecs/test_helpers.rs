use bevy_app::App;
use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;

use crate::ecs::clock::FrameClock;
use crate::ecs::commands::VitalityCommand;
use crate::ecs::components::Vitality;
use crate::ecs::schedule::VitalityTick;
use crate::vitality::VitalityController;

/// Run `n` frames.
pub fn tick_frames(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(VitalityTick);
    }
}

/// Run as many frames as it takes to cover `seconds` at the clock's current step.
pub fn tick_seconds(app: &mut App, seconds: f32) {
    let delta = app.world().resource::<FrameClock>().delta;
    let frames = (seconds / delta).round() as u32;
    tick_frames(app, frames);
}

/// Queue a command for the next frame.
pub fn send_command(app: &mut App, command: VitalityCommand) {
    app.world_mut()
        .resource_mut::<Messages<VitalityCommand>>()
        .write(command);
}

/// The controller attached to `entity`.
pub fn player(app: &App, entity: Entity) -> &VitalityController {
    &app.world()
        .get::<Vitality>(entity)
        .expect("entity has no Vitality component")
        .0
}
