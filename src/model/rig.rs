use glam::Vec3;

use super::{Camera, Player};

/// Player and camera moved as one unit.
///
/// Every translation goes through [`PlayerRig::translate`], so the offset
/// `camera.target - player.position` only ever changes when the view turns.
#[derive(Debug, Clone)]
pub struct PlayerRig {
    pub player: Player,
    pub camera: Camera,
}

impl PlayerRig {
    pub fn new(player: Player, camera: Camera) -> Self {
        Self { player, camera }
    }

    /// Move player position, camera position and camera target by the same delta
    pub fn translate(&mut self, delta: Vec3) {
        self.player.position += delta;
        self.camera.translate(delta);
    }

    /// Look-at point relative to the player
    pub fn offset(&self) -> Vec3 {
        self.camera.target - self.player.position
    }

    /// Refresh the values derived from the camera: heading and roll lean
    pub(crate) fn finalize(&mut self) {
        self.player.facing_angle = self.camera.facing_angle();
        self.camera.set_roll(self.player.lean());
    }
}
