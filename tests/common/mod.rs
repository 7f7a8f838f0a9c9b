#![allow(dead_code)]

use bevy_app::App;
use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use vitality::ecs::{
    FrameClock, Vitality, VitalityCommand, VitalityPlugin, VitalityTick, build_vitality_app,
    spawn_player,
};
use vitality::{LocomotionSpeeds, VitalityConfig, VitalityController, VitalityEffect};

pub const DT: f32 = 0.1;

/// A controller plus the buffers its operations need.
pub struct Harness {
    pub controller: VitalityController,
    pub rng: SmallRng,
    pub effects: Vec<VitalityEffect>,
    pub elapsed: f64,
}

impl Harness {
    pub fn new(config: VitalityConfig) -> Self {
        Self {
            controller: VitalityController::new(config, Some(LocomotionSpeeds::new(4.0, 8.0))),
            rng: SmallRng::seed_from_u64(42),
            effects: Vec::new(),
            elapsed: 0.0,
        }
    }

    pub fn damage(&mut self, amount: f32) {
        self.controller
            .apply_damage(amount, &mut self.rng, &mut self.effects);
    }

    pub fn heal(&mut self, amount: f32) {
        self.controller.apply_heal(amount, &mut self.effects);
    }

    pub fn tick(&mut self) {
        self.controller.tick(DT, self.elapsed, &mut self.effects);
        self.elapsed += f64::from(DT);
    }

    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    pub fn count(&self, wanted: &VitalityEffect) -> usize {
        self.effects.iter().filter(|e| *e == wanted).count()
    }
}

pub fn build_app(config: VitalityConfig, locomotion: Option<LocomotionSpeeds>) -> (App, Entity) {
    let mut app = build_vitality_app(config).unwrap();
    app.add_plugins(VitalityPlugin);
    let entity = spawn_player(app.world_mut(), locomotion);
    (app, entity)
}

pub fn send(app: &mut App, command: VitalityCommand) {
    app.world_mut()
        .resource_mut::<Messages<VitalityCommand>>()
        .write(command);
}

pub fn frames(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(VitalityTick);
    }
}

pub fn seconds(app: &mut App, seconds: f32) {
    let delta = app.world().resource::<FrameClock>().delta;
    frames(app, (seconds / delta).round() as u32);
}

pub fn controller(app: &App, entity: Entity) -> &VitalityController {
    &app.world().get::<Vitality>(entity).unwrap().0
}
