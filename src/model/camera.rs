use glam::{Mat4, Quat, Vec3};

/// Smallest angle kept between the view direction and the poles when pitch is locked
const PITCH_POLE_MARGIN: f32 = 0.001;

/// Perspective camera defined by an eye point, a look-at point and an up vector.
///
/// `target` is a point in world space, not a direction: moving the camera
/// without turning it means translating `position` and `target` together.
/// `up` is not kept normalized; its `z` component carries the roll lean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, width: u32, height: u32) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov_y: crate::config::CAMERA_FOV_Y_DEGREES.to_radians(),
            aspect: width as f32 / height.max(1) as f32,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    /// Unit view direction
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Unit right vector of the view, relative to world up
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or_zero()
    }

    /// View direction flattened onto the floor plane
    pub fn horizontal_forward(&self) -> Vec3 {
        let f = self.forward();
        Vec3::new(f.x, 0.0, f.z).normalize_or_zero()
    }

    /// Right vector flattened onto the floor plane
    pub fn horizontal_right(&self) -> Vec3 {
        let r = self.right();
        Vec3::new(r.x, 0.0, r.z).normalize_or_zero()
    }

    /// Heading on the XZ plane, in radians
    pub fn facing_angle(&self) -> f32 {
        (self.target.z - self.position.z).atan2(self.target.x - self.position.x)
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }

    /// Turn the view around world up, keeping the eye fixed
    pub fn yaw(&mut self, angle: f32) {
        let offset = self.target - self.position;
        self.target = self.position + Quat::from_axis_angle(Vec3::Y, angle) * offset;
    }

    /// Tilt the view around its local right axis, keeping the eye fixed.
    ///
    /// With `lock` set the angle is limited so the view never passes straight
    /// up or down.
    pub fn pitch(&mut self, angle: f32, lock: bool) {
        let offset = self.target - self.position;
        let Some(axis) = offset.cross(Vec3::Y).try_normalize() else {
            // looking straight along the up axis, no defined right vector
            return;
        };

        let mut angle = angle;
        if lock {
            let max_up = offset.angle_between(Vec3::Y) - PITCH_POLE_MARGIN;
            let max_down = -(offset.angle_between(Vec3::NEG_Y) - PITCH_POLE_MARGIN);
            angle = angle.clamp(max_down.min(0.0), max_up.max(0.0));
        }

        self.target = self.position + Quat::from_axis_angle(axis, angle) * offset;
    }

    /// Lean the up vector sideways; `y` stays 1 and the vector is left unnormalized
    pub fn set_roll(&mut self, lean: f32) {
        self.up = Vec3::new(0.0, 1.0, lean);
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far);
        proj * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 2.0, 10.0), 1280, 720)
    }

    #[test]
    fn test_horizontal_basis_is_flat_and_unit() {
        let mut cam = camera();
        cam.target = Vec3::new(3.0, 9.0, 4.0);

        let f = cam.horizontal_forward();
        let r = cam.horizontal_right();
        assert_eq!(f.y, 0.0);
        assert_eq!(r.y, 0.0);
        assert!((f.length() - 1.0).abs() < EPS);
        assert!((r.length() - 1.0).abs() < EPS);
        assert!(f.dot(r).abs() < EPS, "forward and right should be perpendicular");
    }

    #[test]
    fn test_right_of_plus_z_is_minus_x() {
        let cam = camera();
        assert!((cam.horizontal_right() - Vec3::NEG_X).length() < EPS);
    }

    #[test]
    fn test_facing_angle() {
        let mut cam = camera();
        assert!((cam.facing_angle() - std::f32::consts::FRAC_PI_2).abs() < EPS);

        cam.target = cam.position + Vec3::X;
        assert!(cam.facing_angle().abs() < EPS);
    }

    #[test]
    fn test_yaw_keeps_eye_and_distance() {
        let mut cam = camera();
        let dist = (cam.target - cam.position).length();
        cam.yaw(std::f32::consts::FRAC_PI_2);

        assert_eq!(cam.position, Vec3::new(0.0, 2.0, 0.0));
        assert!(((cam.target - cam.position).length() - dist).abs() < 1e-4);
        // +Z turned a quarter around +Y lands on +X
        assert!((cam.forward() - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_pitch_unlocked_can_pass_the_pole() {
        let mut cam = camera();
        cam.pitch(std::f32::consts::PI * 0.75, false);
        // past vertical the view points backwards
        assert!(cam.forward().z < 0.0);
    }

    #[test]
    fn test_pitch_locked_stops_before_the_pole() {
        let mut cam = camera();
        cam.pitch(std::f32::consts::PI * 0.75, true);
        let f = cam.forward();
        assert!(f.z > 0.0, "locked pitch must not flip the view");
        assert!(f.y > 0.99);
    }

    #[test]
    fn test_roll_leaves_up_unnormalized() {
        let mut cam = camera();
        cam.set_roll(0.1);
        assert_eq!(cam.up, Vec3::new(0.0, 1.0, 0.1));
        assert!(cam.up.length() > 1.0);
    }

    #[test]
    fn test_translate_moves_eye_and_target() {
        let mut cam = camera();
        let before = cam.target - cam.position;
        cam.translate(Vec3::new(1.0, -0.5, 3.0));
        assert_eq!(cam.target - cam.position, before);
        assert_eq!(cam.position, Vec3::new(1.0, 1.5, 3.0));
    }
}
