use glam::Vec3;
use winit::keyboard::KeyCode;

use freight::config::{SimConfig, MAX_LIGHTS};
use freight::controller::{FrameLoopContext, InputEvent, InputState};
use freight::logging;
use freight::model::{Color, LightType};
use freight::view::{hud, light_markers, RecordingShader};

const TARGET_FPS: u32 = 60;
const RUN_SECONDS: u32 = 8;

/// Scripted input, as (frame, event)
fn script() -> Vec<(u64, InputEvent)> {
    vec![
        // fall from spawn, then lock the cursor and walk
        (150, InputEvent::KeyDown(KeyCode::Tab)),
        (151, InputEvent::KeyUp(KeyCode::Tab)),
        (160, InputEvent::KeyDown(KeyCode::KeyW)),
        (200, InputEvent::MouseMove { dx: 120.0, dy: 0.0 }),
        (240, InputEvent::KeyDown(KeyCode::ShiftLeft)),
        (280, InputEvent::KeyUp(KeyCode::ShiftLeft)),
        (280, InputEvent::KeyUp(KeyCode::KeyW)),
        (290, InputEvent::KeyDown(KeyCode::KeyA)),
        (330, InputEvent::KeyUp(KeyCode::KeyA)),
        (340, InputEvent::KeyDown(KeyCode::Space)),
        (342, InputEvent::KeyUp(KeyCode::Space)),
        (360, InputEvent::KeyDown(KeyCode::KeyD)),
        (380, InputEvent::KeyDown(KeyCode::KeyC)),
        (420, InputEvent::KeyUp(KeyCode::KeyC)),
        (420, InputEvent::KeyUp(KeyCode::KeyD)),
        (430, InputEvent::MouseMove { dx: 0.0, dy: -80.0 }),
    ]
}

struct App {
    sim: FrameLoopContext,
    shader: RecordingShader,
    input: InputState,
    script: Vec<(u64, InputEvent)>,
    max_frames: u64,
}

impl App {
    fn new() -> Self {
        let mut shader = RecordingShader::with_lights(MAX_LIGHTS);
        let mut sim = FrameLoopContext::new(&SimConfig::new(), &mut shader);

        sim.add_camera_light(Color::WHITE, &mut shader);
        let lights = [
            (Vec3::new(-20.0, 5.0, -20.0), Color::YELLOW),
            (Vec3::new(20.0, 5.0, 20.0), Color::RED),
            (Vec3::new(-20.0, 5.0, 20.0), Color::GREEN),
            // over budget, stays inert
            (Vec3::new(20.0, 5.0, -20.0), Color::BLUE),
        ];
        for (position, color) in lights {
            sim.add_light(LightType::Point, position, Vec3::ZERO, color, &mut shader);
        }
        tracing::info!(
            registered = sim.lights.len(),
            live = sim.lights.live_count(),
            "lights registered"
        );

        Self {
            sim,
            shader,
            input: InputState::default(),
            script: script(),
            max_frames: (TARGET_FPS * RUN_SECONDS) as u64,
        }
    }

    fn should_close(&self) -> bool {
        self.sim.frame() >= self.max_frames
    }

    fn update(&mut self, dt: f32) {
        let frame = self.sim.frame();
        for (_, event) in self.script.iter().filter(|(at, _)| *at == frame) {
            self.input.process_event(event);
        }

        let frame_input = self.input.frame(dt);
        self.sim.update(&frame_input, &mut self.shader);

        if self.sim.frame() % TARGET_FPS as u64 == 0 {
            for line in hud::debug_lines(&self.sim.rig) {
                tracing::info!("{line}");
            }
            let markers = light_markers(&self.sim.lights);
            tracing::info!(markers = markers.len(), writes = self.shader.writes.len(), "uniforms pushed");
            self.shader.clear_writes();
        }
    }
}

fn main() {
    logging::init();

    let mut app = App::new();
    let dt = 1.0 / TARGET_FPS as f32;
    while !app.should_close() {
        app.update(dt);
    }

    tracing::info!(frames = app.sim.frame(), "done");
}
