use glam::Vec3;

use crate::controller::roll::RollAnimator;
use crate::model::light::Color;

/// The single player body.
///
/// Position and velocity are owned here but only ever changed through the
/// per-frame update, which keeps them in step with the camera (see
/// [`crate::model::PlayerRig`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub(crate) position: Vec3,
    pub(crate) velocity: Vec3,
    pub radius: f32,
    pub color: Color,
    pub movement_speed: f32,
    pub jump_velocity: f32,
    pub(crate) facing_angle: f32,
    pub(crate) roll_frame: f64,
    pub(crate) roll: RollAnimator,
    pub(crate) on_ground: bool,
}

impl Player {
    pub fn new(radius: f32, position: Vec3, color: Color) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            radius,
            color,
            movement_speed: crate::config::MOVEMENT_SPEED,
            jump_velocity: crate::config::JUMP_VELOCITY,
            facing_angle: 0.0,
            roll_frame: 0.0,
            roll: RollAnimator::new(),
            on_ground: false,
        }
    }

    pub fn with_roll(mut self, roll: RollAnimator) -> Self {
        self.roll = roll;
        self
    }

    pub fn with_speeds(mut self, movement_speed: f32, jump_velocity: f32) -> Self {
        self.movement_speed = movement_speed;
        self.jump_velocity = jump_velocity;
        self
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Heading derived from the camera on the last update
    #[inline]
    pub fn facing_angle(&self) -> f32 {
        self.facing_angle
    }

    #[inline]
    pub fn roll_frame(&self) -> f64 {
        self.roll_frame
    }

    #[inline]
    pub fn roll(&self) -> &RollAnimator {
        &self.roll
    }

    #[inline]
    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Current sideways lean fed to the camera up vector
    pub fn lean(&self) -> f32 {
        self.roll.lean(self.roll_frame) as f32
    }
}
