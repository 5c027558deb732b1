use glam::Vec3;

use crate::config::{SimConfig, MAX_FRAME_DT, MAX_LIGHTS};
use crate::controller::camera_controller::CameraController;
use crate::controller::input::{FrameInput, Key};
use crate::controller::light_rig::{LightId, LightRig};
use crate::controller::physics::PhysicsSystem;
use crate::controller::roll::{RollAnimator, RollInput};
use crate::model::{Camera, Color, LightType, Player, PlayerRig};
use crate::view::shader::{SceneUniforms, ShaderProgram};

/// Simulation state and per-frame update order
pub struct FrameLoopContext {
    pub rig: PlayerRig,
    pub camera_controller: CameraController,
    pub physics_system: PhysicsSystem,
    pub lights: LightRig,
    pub scene_uniforms: SceneUniforms,
    /// Light carried along with the camera, flashlight style
    pub camera_light: Option<LightId>,
    pub ambient: [f32; 4],
    frame: u64,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view_pos: [f32; 3],
    pub _pad: f32,
}

/// One `lights[i]` entry, laid out for a std140 uniform buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuLight {
    pub position: [f32; 3],
    pub enabled: i32,
    pub target: [f32; 3],
    pub kind: i32,
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub lights: [GpuLight; MAX_LIGHTS],
    pub ambient: [f32; 4],
    pub view_pos: [f32; 3],
    pub count: i32,
}

impl FrameLoopContext {
    /// Build the player, camera and scene uniforms and push the ambient term
    pub fn new<S: ShaderProgram>(config: &SimConfig, shader: &mut S) -> Self {
        let roll = RollAnimator {
            step: config.roll_step,
            amplitude: config.roll_amplitude,
            period: config.roll_period,
            side_limit: config.side_roll_limit,
        };
        let player = Player::new(config.player_radius, config.spawn_position, Color::YELLOW)
            .with_roll(roll)
            .with_speeds(config.movement_speed, config.jump_velocity);
        let (width, height) = config.viewport;
        let eye = config.spawn_position + config.eye_offset;
        let camera = Camera::new(
            eye,
            eye + config.look_offset,
            width,
            height,
        );

        let scene_uniforms = SceneUniforms::resolve(shader);
        scene_uniforms.push_ambient(shader, config.ambient);

        tracing::info!(spawn = ?config.spawn_position, "simulation initialized");

        Self {
            rig: PlayerRig::new(player, camera),
            camera_controller: CameraController {
                mouse_sensitivity: config.mouse_sensitivity,
                lock_pitch: config.lock_pitch,
            },
            physics_system: PhysicsSystem {
                gravity: config.gravity,
                floor_height: config.floor_height,
            },
            lights: LightRig::new(),
            scene_uniforms,
            camera_light: None,
            ambient: config.ambient,
            frame: 0,
        }
    }

    /// Register a light in the rig
    pub fn add_light<S: ShaderProgram>(
        &mut self,
        kind: LightType,
        position: Vec3,
        target: Vec3,
        color: Color,
        shader: &mut S,
    ) -> LightId {
        self.lights.register(kind, position, target, color, shader)
    }

    /// Register a light that tracks the camera every frame
    pub fn add_camera_light<S: ShaderProgram>(&mut self, color: Color, shader: &mut S) -> LightId {
        let camera = &self.rig.camera;
        let id = self
            .lights
            .register(LightType::Point, camera.position, camera.target, color, shader);
        self.camera_light = Some(id);
        id
    }

    /// Advance one frame.
    ///
    /// Order: look, movement, physics, roll, derived camera state, light
    /// follow, uniform push. Drawing happens after this returns.
    pub fn update<S: ShaderProgram>(&mut self, input: &FrameInput, shader: &mut S) {
        let dt = input.dt.clamp(0.0, MAX_FRAME_DT);
        let input = FrameInput { dt, ..input.clone() };

        // Mouse look
        let (dx, dy) = input.look_delta;
        self.camera_controller
            .apply_look(&mut self.rig.camera, dx, dy, input.cursor_locked);

        // Movement keys
        self.camera_controller.update_movement(&mut self.rig, &input);

        // Gravity, floor, jump
        self.physics_system
            .update(&mut self.rig, input.is_held(Key::Jump), dt);

        // Roll animation
        let player = &mut self.rig.player;
        player.roll_frame = player.roll.advance(
            player.roll_frame,
            RollInput {
                forward: input.is_held(Key::Forward),
                left: input.is_held(Key::Left),
                right: input.is_held(Key::Right),
            },
        );

        self.rig.finalize();

        if let Some(id) = self.camera_light {
            self.lights.follow_camera(id, &self.rig.camera);
        }

        self.lights.sync_to_shader(shader);
        self.scene_uniforms.push_view_pos(shader, self.rig.camera.position);

        self.frame += 1;
        tracing::trace!(
            frame = self.frame,
            pos = ?self.rig.player.position(),
            vel = ?self.rig.player.velocity(),
            roll = self.rig.player.roll_frame(),
            on_ground = self.rig.player.on_ground(),
            "frame updated"
        );
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn camera_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.rig.camera.view_proj().to_cols_array_2d(),
            view_pos: self.rig.camera.position.to_array(),
            _pad: 0.0,
        }
    }

    /// Light state packed for backends that upload one uniform buffer instead
    /// of setting named uniforms
    pub fn lights_uniform(&self) -> LightsUniform {
        let mut block = LightsUniform {
            lights: [bytemuck::Zeroable::zeroed(); MAX_LIGHTS],
            ambient: self.ambient,
            view_pos: self.rig.camera.position.to_array(),
            count: self.lights.live_count() as i32,
        };
        for light in self.lights.lights() {
            if let Some(slot) = light.slot() {
                block.lights[slot] = GpuLight {
                    position: light.position.to_array(),
                    enabled: light.enabled as i32,
                    target: light.target.to_array(),
                    kind: light.kind.as_uniform(),
                    color: light.color.normalized(),
                };
            }
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::shader::{RecordingShader, UniformValue};

    const DT: f32 = 1.0 / 60.0;

    fn setup() -> (FrameLoopContext, RecordingShader) {
        let mut shader = RecordingShader::with_lights(MAX_LIGHTS);
        let ctx = FrameLoopContext::new(&SimConfig::new(), &mut shader);
        (ctx, shader)
    }

    #[test]
    fn test_new_pushes_ambient() {
        let (ctx, shader) = setup();
        assert_eq!(shader.value_of("ambient"), Some(UniformValue::Vec4(ctx.ambient)));
        assert_eq!(ctx.rig.player.position(), crate::config::SPAWN_POSITION);
    }

    #[test]
    fn test_fall_then_walk_keeps_invariants() {
        let (mut ctx, mut shader) = setup();
        let offset = ctx.rig.offset();

        for frame in 0..300 {
            let input = if frame < 150 {
                FrameInput::new(DT)
            } else {
                FrameInput::new(DT).with_keys(&[Key::Forward, Key::Left])
            };
            ctx.update(&input, &mut shader);

            let p = &ctx.rig.player;
            assert!(p.position().y >= 2.0);
            if p.position().y == 2.0 {
                assert_eq!(p.velocity().y, 0.0);
                assert!(p.on_ground());
            }
            assert!((ctx.rig.offset() - offset).length() < 1e-3, "frame {frame}: camera drifted from player");
        }
        assert!(ctx.rig.player.on_ground());
        assert_eq!(ctx.frame(), 300);
    }

    #[test]
    fn test_look_turns_camera_and_heading() {
        let (mut ctx, mut shader) = setup();
        let before = ctx.rig.player.facing_angle();
        ctx.update(&FrameInput::new(DT).with_look(200.0, 0.0), &mut shader);
        assert!((ctx.rig.player.facing_angle() - before).abs() > 0.1);
    }

    #[test]
    fn test_roll_drives_camera_up() {
        let (mut ctx, mut shader) = setup();
        for _ in 0..8 {
            ctx.update(&FrameInput::new(DT).with_keys(&[Key::Left]), &mut shader);
        }
        let roll = ctx.rig.player.roll_frame();
        assert!((roll - 1.6).abs() < 1e-9);
        let expected = (0.125 * roll.sin()) as f32;
        assert!((ctx.rig.camera.up.z - expected).abs() < 1e-6);
        assert_eq!(ctx.rig.camera.up.y, 1.0);
    }

    #[test]
    fn test_camera_light_follows_and_is_pushed() {
        let (mut ctx, mut shader) = setup();
        let id = ctx.add_camera_light(Color::WHITE, &mut shader);
        for _ in 0..10 {
            ctx.update(&FrameInput::new(DT).with_keys(&[Key::Forward]), &mut shader);
        }
        let cam = ctx.rig.camera;
        assert_eq!(ctx.lights.get(id).unwrap().position, cam.position);
        assert_eq!(shader.value_of("lights[0].position"), Some(UniformValue::Vec3(cam.position.to_array())));
        assert_eq!(shader.value_of("lights[0].target"), Some(UniformValue::Vec3(cam.target.to_array())));
        assert_eq!(shader.value_of("viewPos"), Some(UniformValue::Vec3(cam.position.to_array())));
    }

    #[test]
    fn test_camera_light_past_capacity_stays_inert() {
        let (mut ctx, mut shader) = setup();
        for i in 0..MAX_LIGHTS {
            ctx.add_light(LightType::Point, Vec3::new(i as f32, 1.0, 0.0), Vec3::ZERO, Color::RED, &mut shader);
        }
        let id = ctx.add_camera_light(Color::WHITE, &mut shader);
        ctx.update(&FrameInput::new(DT), &mut shader);

        assert_eq!(*ctx.lights.get(id).unwrap(), crate::model::Light::inert());
        assert_eq!(ctx.lights.enabled_count(), MAX_LIGHTS);
    }

    #[test]
    fn test_camera_starts_at_eye_height() {
        let (ctx, _) = setup();
        let eye = crate::config::SPAWN_POSITION + crate::config::EYE_OFFSET;
        assert_eq!(ctx.rig.camera.position, eye);
        assert_eq!(ctx.rig.camera.target, eye + crate::config::SPAWN_LOOK_OFFSET);
        assert_eq!(ctx.rig.offset(), crate::config::EYE_OFFSET + crate::config::SPAWN_LOOK_OFFSET);
    }

    #[test]
    fn test_uniform_push_count_per_frame() {
        let (mut ctx, mut shader) = setup();
        for i in 0..5 {
            ctx.add_light(LightType::Point, Vec3::new(i as f32, 1.0, 0.0), Vec3::ZERO, Color::RED, &mut shader);
        }
        shader.clear_writes();
        ctx.update(&FrameInput::new(DT), &mut shader);
        // 5 per light plus viewPos
        assert_eq!(shader.writes.len(), 5 * 5 + 1);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let (mut ctx, mut shader) = setup();
        ctx.update(&FrameInput::new(5.0), &mut shader);
        let expected_vel = -crate::config::GRAVITY * MAX_FRAME_DT;
        assert!((ctx.rig.player.velocity().y - expected_vel).abs() < 1e-5);
    }

    #[test]
    fn test_lights_uniform_block() {
        let (mut ctx, mut shader) = setup();
        ctx.add_light(LightType::Directional, Vec3::Y, Vec3::ZERO, Color::WHITE, &mut shader);
        for _ in 0..5 {
            ctx.add_light(LightType::Point, Vec3::X, Vec3::ZERO, Color::GREEN, &mut shader);
        }
        let block = ctx.lights_uniform();
        assert_eq!(std::mem::size_of::<GpuLight>(), 48);
        assert_eq!(block.count, 4);
        assert_eq!(block.lights[0].kind, 0);
        assert_eq!(block.lights[0].color, [1.0; 4]);
        assert_eq!(block.lights[3].kind, 1);
        assert_eq!(block.lights[3].enabled, 1);
        assert_eq!(bytemuck::bytes_of(&block).len(), std::mem::size_of::<LightsUniform>());
    }
}
