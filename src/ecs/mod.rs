pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use app::{build_vitality_app, build_vitality_app_with_executor};
pub use clock::FrameClock;
pub use commands::{VitalityCommand, apply_vitality_commands};
pub use components::{Locomotion, PainOverlay, Player, Vitality};
pub use resources::{EcsVitalityConfig, EffectLog, LoggedEffect, VitalityRng};
pub use schedule::{VitalityPhase, VitalityTick, configure_vitality_schedule};
pub use spawn::spawn_player;
pub use systems::VitalityPlugin;
