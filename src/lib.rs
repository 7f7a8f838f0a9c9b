pub mod config;
pub mod ecs;
pub mod error;
pub mod model;
pub mod vitality;

pub use config::{DEFAULT_EFFECT_LOG_CAPACITY, PulseConfig, VitalityConfig};
pub use error::ConfigError;
pub use model::{LocomotionSpeeds, Rgb, VitalityState};
pub use vitality::{
    PainSignal, ProcessHandle, RegenerationProcess, VitalityController, VitalityEffect,
};
