//! Pain intensity and its decay process.
//!
//! The decay is an explicit state machine advanced by the frame delta:
//! `Idle -> Settling -> Fading -> Idle`. It only starts on request and is
//! replaced wholesale by every restart.

use super::TIMER_EPSILON;
use super::handle::ProcessHandle;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DecayPhase {
    /// Holding the current intensity before the fade.
    Settling { remaining: f32 },
    /// Interpolating from `from` toward zero; `progress` runs 0 -> 1.
    Fading { from: f32, progress: f32 },
}

/// One running decay instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PainDecay {
    handle: ProcessHandle,
    phase: DecayPhase,
    fade_duration: f32,
}

impl PainDecay {
    pub fn handle(&self) -> ProcessHandle {
        self.handle
    }

    pub fn is_fading(&self) -> bool {
        matches!(self.phase, DecayPhase::Fading { .. })
    }
}

/// Bounded pain intensity in `[0, max_amount]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PainSignal {
    intensity: f32,
    max_amount: f32,
    decay: Option<PainDecay>,
}

impl PainSignal {
    pub fn new(max_amount: f32) -> Self {
        Self {
            intensity: 0.0,
            max_amount: max_amount.max(0.0),
            decay: None,
        }
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn max_amount(&self) -> f32 {
        self.max_amount
    }

    pub fn decay(&self) -> Option<&PainDecay> {
        self.decay.as_ref()
    }

    pub fn is_decaying(&self) -> bool {
        self.decay.is_some()
    }

    /// Raise intensity by `increment`, clamped to `max_amount`. Returns the new value.
    pub fn raise(&mut self, increment: f32) -> f32 {
        self.intensity = (self.intensity + increment).clamp(0.0, self.max_amount);
        self.intensity
    }

    /// Jump straight to `max_amount`.
    pub fn saturate(&mut self) {
        self.intensity = self.max_amount;
    }

    /// Start a new decay, dropping any running one.
    pub fn start_decay(&mut self, handle: ProcessHandle, settle_delay: f32, fade_duration: f32) {
        if let Some(previous) = self.decay.take() {
            tracing::debug!(replaced = %previous.handle, "pain decay replaced");
        }
        tracing::debug!(%handle, settle_delay, fade_duration, "pain decay started");
        self.decay = Some(PainDecay {
            handle,
            phase: DecayPhase::Settling {
                remaining: settle_delay.max(0.0),
            },
            fade_duration,
        });
    }

    /// Abort the running decay, leaving intensity where it is.
    pub fn cancel_decay(&mut self) -> Option<ProcessHandle> {
        let handle = self.decay.take()?.handle;
        tracing::debug!(%handle, intensity = self.intensity, "pain decay canceled");
        Some(handle)
    }

    /// Advance the running decay by `dt` seconds.
    ///
    /// The step on which the settle delay elapses also performs the first
    /// fade step. Returns the handle of a decay that completed on this step.
    pub fn advance(&mut self, dt: f32) -> Option<ProcessHandle> {
        let decay = self.decay.as_mut()?;

        if let DecayPhase::Settling { remaining } = &mut decay.phase {
            *remaining -= dt;
            if *remaining > TIMER_EPSILON {
                return None;
            }
            decay.phase = DecayPhase::Fading {
                from: self.intensity,
                progress: 0.0,
            };
        }

        let DecayPhase::Fading { from, progress } = &mut decay.phase else {
            return None;
        };
        *progress = if decay.fade_duration > 0.0 {
            *progress + dt / decay.fade_duration
        } else {
            1.0
        };
        if *progress < 1.0 - TIMER_EPSILON {
            self.intensity = (*from * (1.0 - *progress)).clamp(0.0, self.max_amount);
            return None;
        }

        let handle = decay.handle;
        self.intensity = 0.0;
        self.decay = None;
        tracing::debug!(%handle, "pain decay finished");
        Some(handle)
    }
}
