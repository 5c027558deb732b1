use glam::Vec3;

use crate::config::{FLOOR_HEIGHT, GRAVITY};
use crate::model::PlayerRig;

/// Handles player physics (gravity, floor clamp, jumping)
pub struct PhysicsSystem {
    pub gravity: f32,
    /// Lowest height of the player position
    pub floor_height: f32,
}

impl PhysicsSystem {
    pub fn new() -> Self {
        Self {
            gravity: GRAVITY,
            floor_height: FLOOR_HEIGHT,
        }
    }

    /// Integrate vertical motion for one frame.
    ///
    /// The vertical displacement is applied to the whole rig, so the camera
    /// rises and falls with the player. Horizontal motion is not integrated
    /// here; movement keys translate the rig directly.
    pub fn update(&self, rig: &mut PlayerRig, jump: bool, dt: f32) {
        let player = &mut rig.player;
        let start_y = player.position.y;

        // Apply gravity
        player.velocity.y -= self.gravity * dt;
        let mut new_y = start_y + player.velocity.y * dt;

        // Floor clamp; resting exactly on the floor (e.g. a zero-length frame) counts as grounded
        if new_y <= self.floor_height {
            new_y = self.floor_height;
            player.velocity.y = 0.0;
            if !player.on_ground {
                tracing::debug!(y = new_y, "player landed");
            }
            player.on_ground = true;
        } else {
            player.on_ground = false;
        }

        // Jump handling
        if jump && player.on_ground {
            player.velocity.y += player.jump_velocity * dt;
            player.on_ground = false;
            tracing::debug!(vel_y = player.velocity.y, "jump");
        }

        // Assign the player height directly so the clamp lands exactly on the floor
        player.position.y = new_y;
        rig.camera.translate(Vec3::new(0.0, new_y - start_y, 0.0));
    }
}

impl Default for PhysicsSystem {
    fn default() -> Self {
        Self::new()
    }
}
