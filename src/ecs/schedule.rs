use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for one simulation frame.
/// Run manually each frame via `app.world_mut().run_schedule(VitalityTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct VitalityTick;

/// Ordered phases within each frame.
///
/// Phases run in declaration order: PreUpdate < Input < Update < Sync < Last.
/// Every damage/heal command of a frame is applied in `Input`, so the
/// controller tick in `Update` always sees post-event health.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum VitalityPhase {
    /// Message buffer rotation.
    PreUpdate,
    /// Damage and heal transactions, in arrival order.
    Input,
    /// Timed processes and transition evaluation.
    Update,
    /// Push controller output into collaborator components.
    Sync,
    /// Audit and clock advance.
    Last,
}

/// Build a configured `VitalityTick` schedule with phase ordering.
pub fn configure_vitality_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(VitalityTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            VitalityPhase::PreUpdate,
            VitalityPhase::Input,
            VitalityPhase::Update,
            VitalityPhase::Sync,
            VitalityPhase::Last,
        )
            .chain(),
    );
    schedule.add_systems(advance_clock.in_set(VitalityPhase::Last));
    schedule
}
