pub mod effect_log;
pub mod vitality_resources;

pub use effect_log::{EffectLog, LoggedEffect};
pub use vitality_resources::{EcsVitalityConfig, VitalityRng};
