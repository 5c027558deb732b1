// CONTROLLER: Input, per-frame game logic and the update loop
pub mod camera_controller;
pub mod frame_loop;
pub mod input;
pub mod light_rig;
pub mod physics;
pub mod roll;

pub use camera_controller::CameraController;
pub use frame_loop::{CameraUniform, FrameLoopContext, GpuLight, LightsUniform};
pub use input::{FrameInput, InputEvent, InputState, Key, KeyBindings};
pub use light_rig::{LightId, LightRig};
pub use physics::PhysicsSystem;
pub use roll::{RollAnimator, RollInput};
