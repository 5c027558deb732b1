use glam::Vec3;

use crate::model::PlayerRig;

fn vec3(v: Vec3) -> String {
    format!("[{:.2}, {:.2}, {:.2}]", v.x, v.y, v.z)
}

/// Debug text for the overlay, one line per entry
pub fn debug_lines(rig: &PlayerRig) -> Vec<String> {
    let cam = &rig.camera;
    let player = &rig.player;
    vec![
        format!("camera position: {}", vec3(cam.position)),
        format!("player pos: {}", vec3(player.position())),
        format!("camera target: {}", vec3(cam.target)),
        format!("player vel: {}", vec3(player.velocity())),
        format!(
            "angle: {:.1}°  roll: {:.2}  on ground: {}",
            player.facing_angle().to_degrees(),
            player.roll_frame(),
            player.on_ground()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Camera, Color, Player};

    #[test]
    fn test_debug_lines() {
        let pos = Vec3::new(1.0, 2.0, 3.0);
        let rig = PlayerRig::new(
            Player::new(1.0, pos, Color::YELLOW),
            Camera::new(pos, pos + Vec3::Z, 800, 600),
        );
        let lines = debug_lines(&rig);
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("player pos: [1.00, 2.00, 3.00]"), "{}", lines[1]);
        assert!(lines[4].contains("on ground: false"));
    }
}
