use bevy_ecs::resource::Resource;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::VitalityConfig;

/// Load-time configuration the app was built with.
#[derive(Resource, Debug, Clone)]
pub struct EcsVitalityConfig(pub VitalityConfig);

/// Deterministic RNG for damage clip selection.
#[derive(Resource)]
pub struct VitalityRng(pub SmallRng);

impl VitalityRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}
