pub mod controller;
pub mod effect;
pub mod handle;
pub mod pain;
pub mod regen;

pub use controller::{PAIN_INCREMENT, VitalityController};
pub use effect::{MAX_HEALTH_WARNING, VitalityEffect};
pub use handle::{HandleGenerator, ProcessHandle};
pub use pain::{PainDecay, PainSignal};
pub use regen::{RegenStep, RegenerationProcess};

/// Slack for accumulated frame deltas when deciding a timer has elapsed.
pub(crate) const TIMER_EPSILON: f32 = 1e-5;
