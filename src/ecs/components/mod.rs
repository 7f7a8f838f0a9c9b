use bevy_ecs::component::Component;

use crate::model::LocomotionSpeeds;
use crate::vitality::VitalityController;

/// Marker for the single playable actor.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Health state machine of the actor. Only vitality systems mutate it.
#[derive(Component, Debug)]
pub struct Vitality(pub VitalityController);

/// Movement collaborator. Its speeds are overwritten while in low-health mode.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Locomotion(pub LocomotionSpeeds);

/// Visual-pain actuator; `pain_amount` mirrors the controller's pain intensity.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PainOverlay {
    pub pain_amount: f32,
}
