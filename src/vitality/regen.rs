//! Delayed auto-regeneration: `Idle -> Waiting -> Regenerating -> Idle`.
//!
//! The process only holds its timer. The controller owns it in an `Option`,
//! so `Idle` is the absence of a process and canceling is dropping it.

use super::TIMER_EPSILON;
use super::handle::ProcessHandle;

#[derive(Debug, Clone, Copy, PartialEq)]
enum RegenPhase {
    Waiting { remaining: f32 },
    Regenerating,
}

/// Outcome of advancing a regeneration process by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegenStep {
    /// Still inside the quiet period; health untouched.
    Waiting,
    /// Health was raised by `dt * rate`.
    Regenerated,
    /// Health is above the ceiling; the process is done and should be dropped.
    Finished,
}

/// One regeneration instance, timed from the damage event that started it.
#[derive(Debug, Clone, PartialEq)]
pub struct RegenerationProcess {
    handle: ProcessHandle,
    phase: RegenPhase,
}

impl RegenerationProcess {
    pub fn start(handle: ProcessHandle, quiet_period: f32) -> Self {
        Self {
            handle,
            phase: RegenPhase::Waiting {
                remaining: quiet_period.max(0.0),
            },
        }
    }

    pub fn handle(&self) -> ProcessHandle {
        self.handle
    }

    pub fn is_regenerating(&self) -> bool {
        self.phase == RegenPhase::Regenerating
    }

    /// Seconds left in the quiet period; zero once regenerating.
    pub fn quiet_period_remaining(&self) -> f32 {
        match self.phase {
            RegenPhase::Waiting { remaining } => remaining.max(0.0),
            RegenPhase::Regenerating => 0.0,
        }
    }

    /// Advance by `dt` seconds, raising `health` by `dt * rate` while it is at
    /// or below `ceiling`.
    ///
    /// Overshoot past the ceiling is left in place; clamping to maximum
    /// health is the controller's job. The step on which the quiet period
    /// elapses already regenerates.
    pub fn advance(&mut self, dt: f32, health: &mut f32, rate: f32, ceiling: f32) -> RegenStep {
        if let RegenPhase::Waiting { remaining } = &mut self.phase {
            *remaining -= dt;
            if *remaining > TIMER_EPSILON {
                return RegenStep::Waiting;
            }
            self.phase = RegenPhase::Regenerating;
        }

        if *health > ceiling {
            return RegenStep::Finished;
        }
        *health += dt * rate;
        if *health > ceiling {
            RegenStep::Finished
        } else {
            RegenStep::Regenerated
        }
    }
}
