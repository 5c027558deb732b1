use glam::Vec3;

use crate::config::MOUSE_SENSITIVITY;
use crate::controller::input::{FrameInput, Key};
use crate::model::{Camera, PlayerRig};

/// Handles camera orientation and movement of the player rig
pub struct CameraController {
    pub mouse_sensitivity: f32,
    /// Stop pitch short of straight up/down instead of letting the view flip over
    pub lock_pitch: bool,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            mouse_sensitivity: MOUSE_SENSITIVITY,
            lock_pitch: false,
        }
    }

    /// Apply mouse look delta to camera; ignored while the cursor is free
    pub fn apply_look(&self, camera: &mut Camera, dx: f32, dy: f32, cursor_locked: bool) {
        if !cursor_locked || (dx == 0.0 && dy == 0.0) {
            return;
        }
        camera.yaw(-dx * self.mouse_sensitivity);
        camera.pitch(-dy * self.mouse_sensitivity, self.lock_pitch);
    }

    /// Movement speed for this frame's modifiers; sprint wins over slow
    pub fn movement_speed(&self, base: f32, sprint: bool, slow: bool) -> f32 {
        if sprint {
            base * 2.0
        } else if slow {
            base / 2.0
        } else {
            base
        }
    }

    /// Translate the rig for every held direction key.
    ///
    /// Each key moves player and camera as one step, along the horizontal
    /// forward/right basis taken before any of this frame's steps.
    pub fn update_movement(&self, rig: &mut PlayerRig, input: &FrameInput) {
        let speed = self.movement_speed(
            rig.player.movement_speed,
            input.is_held(Key::Sprint),
            input.is_held(Key::Slow),
        );
        let distance = speed * input.dt;
        let forward = rig.camera.horizontal_forward();
        let right = rig.camera.horizontal_right();

        let steps: [(Key, Vec3); 4] = [
            (Key::Forward, forward),
            (Key::Left, -right),
            (Key::Back, -forward),
            (Key::Right, right),
        ];
        for (key, dir) in steps {
            if input.is_held(key) {
                rig.translate(dir * distance);
            }
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}
