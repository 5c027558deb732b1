// VIEW: What the rendering collaborator consumes
pub mod hud;
pub mod markers;
pub mod shader;

pub use markers::{light_markers, LightMarker, MarkerStyle};
pub use shader::{RecordingShader, SceneUniforms, ShaderProgram, UniformKind, UniformLocation, UniformValue};
