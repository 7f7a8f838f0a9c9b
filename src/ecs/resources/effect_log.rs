use std::collections::VecDeque;

use bevy_ecs::resource::Resource;

use crate::config::DEFAULT_EFFECT_LOG_CAPACITY;
use crate::vitality::VitalityEffect;

/// A side effect together with the frame that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEffect {
    pub frame: u64,
    pub effect: VitalityEffect,
}

/// Recent `VitalityEffect`s, oldest first.
///
/// Bounded ring: once `capacity` entries are held, recording a new one
/// evicts the oldest.
#[derive(Resource, Debug, Clone)]
pub struct EffectLog {
    entries: VecDeque<LoggedEffect>,
    capacity: usize,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record(&mut self, frame: u64, effect: VitalityEffect) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedEffect { frame, effect });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LoggedEffect> {
        self.entries.iter()
    }

    pub fn effects(&self) -> impl DoubleEndedIterator<Item = &VitalityEffect> {
        self.entries.iter().map(|entry| &entry.effect)
    }

    pub fn count(&self, predicate: impl Fn(&VitalityEffect) -> bool) -> usize {
        self.effects().filter(|effect| predicate(effect)).count()
    }

    /// Most recent display readout still held, if any.
    pub fn last_display(&self) -> Option<&VitalityEffect> {
        self.effects().rev().find(|effect| effect.is_display())
    }
}

impl Default for EffectLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EFFECT_LOG_CAPACITY)
    }
}
