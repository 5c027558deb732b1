use glam::Vec3;

/// Downward acceleration applied to the player every frame
pub const GRAVITY: f32 = 9.81;
/// Lowest height of the player position; the camera eye sits `EYE_OFFSET` above it
pub const FLOOR_HEIGHT: f32 = 2.0;
pub const MOVEMENT_SPEED: f32 = 10.0;
pub const JUMP_VELOCITY: f32 = 350.0;
pub const MOUSE_SENSITIVITY: f32 = 0.0035;

pub const ROLL_STEP: f64 = 0.2;
pub const ROLL_AMPLITUDE: f64 = 1.0 / 8.0;
pub const ROLL_PERIOD: f64 = 2.0 * std::f64::consts::PI;
pub const SIDE_ROLL_LIMIT: f64 = 4.0;

/// Size of the `lights[]` array declared by the lighting shader
pub const MAX_LIGHTS: usize = 4;

/// Upper bound on a single frame step, so a stalled frame doesn't tunnel the player
pub const MAX_FRAME_DT: f32 = 0.1;

pub const PLAYER_RADIUS: f32 = 1.0;
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 20.0, 0.0);
/// Camera eye relative to the player position
pub const EYE_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 0.0);
/// Initial look point relative to the camera eye
pub const SPAWN_LOOK_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const CAMERA_FOV_Y_DEGREES: f32 = 100.0;

pub const DEFAULT_AMBIENT: [f32; 4] = [0.1, 0.1, 0.1, 1.0];

/// Everything needed to build a [`crate::controller::FrameLoopContext`]
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub spawn_position: Vec3,
    pub eye_offset: Vec3,
    pub look_offset: Vec3,
    pub player_radius: f32,
    pub gravity: f32,
    pub floor_height: f32,
    pub movement_speed: f32,
    pub jump_velocity: f32,
    pub mouse_sensitivity: f32,
    pub lock_pitch: bool,
    pub roll_step: f64,
    pub roll_amplitude: f64,
    pub roll_period: f64,
    pub side_roll_limit: f64,
    pub ambient: [f32; 4],
    pub viewport: (u32, u32),
}

impl SimConfig {
    pub fn new() -> Self {
        Self {
            spawn_position: SPAWN_POSITION,
            eye_offset: EYE_OFFSET,
            look_offset: SPAWN_LOOK_OFFSET,
            player_radius: PLAYER_RADIUS,
            gravity: GRAVITY,
            floor_height: FLOOR_HEIGHT,
            movement_speed: MOVEMENT_SPEED,
            jump_velocity: JUMP_VELOCITY,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            lock_pitch: false,
            roll_step: ROLL_STEP,
            roll_amplitude: ROLL_AMPLITUDE,
            roll_period: ROLL_PERIOD,
            side_roll_limit: SIDE_ROLL_LIMIT,
            ambient: DEFAULT_AMBIENT,
            viewport: (1280, 720),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
