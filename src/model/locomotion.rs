use serde::{Deserialize, Serialize};

/// Walk/run speed pair owned by the movement collaborator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocomotionSpeeds {
    pub walk_speed: f32,
    pub run_speed: f32,
}

impl LocomotionSpeeds {
    pub const fn new(walk_speed: f32, run_speed: f32) -> Self {
        Self {
            walk_speed,
            run_speed,
        }
    }
}
