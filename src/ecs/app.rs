use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::FrameClock;
use super::commands::{VitalityCommand, apply_vitality_commands};
use super::resources::{EcsVitalityConfig, EffectLog, VitalityRng};
use super::schedule::{VitalityPhase, configure_vitality_schedule};
use crate::config::VitalityConfig;
use crate::error::ConfigError;
use crate::vitality::VitalityEffect;

/// Build a headless Bevy app with the frame clock, core resources, message
/// types, and the command applicator.
///
/// The config is validated first; the player spawned later is built from it.
///
/// Manual frame control:
/// ```no_run
/// # use vitality::config::VitalityConfig;
/// # use vitality::ecs::{build_vitality_app, VitalityPlugin, VitalityTick};
/// let mut app = build_vitality_app(VitalityConfig::default())?;
/// app.add_plugins(VitalityPlugin);
/// for _ in 0..60 {  // one second at the default 60 Hz step
///     app.world_mut().run_schedule(VitalityTick);
/// }
/// # Ok::<(), vitality::ConfigError>(())
/// ```
pub fn build_vitality_app(config: VitalityConfig) -> Result<App, ConfigError> {
    build_vitality_app_with_executor(config, ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with a specific executor kind.
pub fn build_vitality_app_with_executor(
    config: VitalityConfig,
    executor: ExecutorKind,
) -> Result<App, ConfigError> {
    config.validate()?;
    let mut app = App::empty();

    // Core resources
    app.insert_resource(FrameClock::new(config.frame_delta));
    app.insert_resource(VitalityRng::seeded(config.seed));
    app.insert_resource(EffectLog::with_capacity(config.effect_log_capacity));
    app.insert_resource(EcsVitalityConfig(config));

    // Register message types
    MessageRegistry::register_message::<VitalityCommand>(app.world_mut());
    MessageRegistry::register_message::<VitalityEffect>(app.world_mut());

    // Build schedule with message rotation + command applicator
    let mut schedule = configure_vitality_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(VitalityPhase::PreUpdate));
    schedule.add_systems(apply_vitality_commands.in_set(VitalityPhase::Input));
    app.add_schedule(schedule);
    Ok(app)
}
