// Re-export all public modules so they can be used from main.rs
pub mod config;
pub mod logging;

// MVC Architecture
pub mod controller;
pub mod model;
pub mod view;

pub use config::SimConfig;
pub use controller::{FrameInput, FrameLoopContext, Key, LightId, LightRig};
pub use model::{Camera, Color, Light, LightType, Player, PlayerRig};
pub use view::{ShaderProgram, UniformLocation, UniformValue};
