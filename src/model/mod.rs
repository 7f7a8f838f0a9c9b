pub mod color;
pub mod locomotion;
pub mod state;

pub use color::Rgb;
pub use locomotion::LocomotionSpeeds;
pub use state::{DEATH_THRESHOLD, VitalityState};
