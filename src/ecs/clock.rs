use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Frame clock resource tracking elapsed simulation time and frame count.
///
/// Fixed-step by default. A driver with real frame timing can call
/// [`FrameClock::set_delta`] before running the next frame. The
/// `advance_clock` system moves the clock forward at the end of each frame
/// (in `VitalityPhase::Last`), so systems see the current time before it
/// advances.
#[derive(Resource, Debug, Clone)]
pub struct FrameClock {
    /// Seconds since the session started.
    pub elapsed: f64,
    /// Length of the current frame in seconds.
    pub delta: f32,
    pub frame_count: u64,
}

impl FrameClock {
    pub fn new(delta: f32) -> Self {
        Self {
            elapsed: 0.0,
            delta,
            frame_count: 0,
        }
    }

    pub fn set_delta(&mut self, delta: f32) {
        self.delta = delta.max(0.0);
    }

    /// Advance the clock by one frame.
    pub fn advance(&mut self) {
        self.elapsed += f64::from(self.delta);
        self.frame_count += 1;
    }
}

/// Bevy system that advances the frame clock by one frame.
/// Registered in `VitalityPhase::Last` so all other systems see the current
/// time before it advances.
pub fn advance_clock(mut clock: ResMut<FrameClock>) {
    clock.advance();
}
