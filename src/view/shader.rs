use std::collections::HashMap;

/// Handle to a named uniform slot in a shader program.
///
/// Names the program doesn't declare resolve to [`UniformLocation::INVALID`];
/// writes to it are ignored by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub i32);

impl UniformLocation {
    pub const INVALID: UniformLocation = UniformLocation(-1);

    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

impl Default for UniformLocation {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Semantic tag of a uniform write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    Int,
    Vec3,
    Vec4,
}

/// A typed uniform value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
}

impl UniformValue {
    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Int(_) => UniformKind::Int,
            UniformValue::Vec3(_) => UniformKind::Vec3,
            UniformValue::Vec4(_) => UniformKind::Vec4,
        }
    }

    /// Raw bytes as a GL-style `set_uniform(loc, ptr, kind)` call expects them
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            UniformValue::Int(v) => bytemuck::bytes_of(v),
            UniformValue::Vec3(v) => bytemuck::cast_slice(v),
            UniformValue::Vec4(v) => bytemuck::cast_slice(v),
        }
    }
}

/// The rendering collaborator's view of a linked shader program
pub trait ShaderProgram {
    /// Resolve a uniform by its dotted name, e.g. `lights[0].color`
    fn uniform_location(&self, name: &str) -> UniformLocation;

    /// Write a value; must be a no-op for invalid locations
    fn set_uniform(&mut self, location: UniformLocation, value: UniformValue);
}

/// Locations of the per-scene uniforms the lighting shader reads besides `lights[]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneUniforms {
    pub view_pos: UniformLocation,
    pub ambient: UniformLocation,
}

impl SceneUniforms {
    pub fn resolve<S: ShaderProgram>(shader: &S) -> Self {
        let uniforms = Self {
            view_pos: shader.uniform_location("viewPos"),
            ambient: shader.uniform_location("ambient"),
        };
        if !uniforms.view_pos.is_valid() {
            tracing::warn!("shader has no viewPos uniform, specular highlights will be off");
        }
        uniforms
    }

    pub fn push_view_pos<S: ShaderProgram>(&self, shader: &mut S, view_pos: glam::Vec3) {
        shader.set_uniform(self.view_pos, UniformValue::Vec3(view_pos.to_array()));
    }

    pub fn push_ambient<S: ShaderProgram>(&self, shader: &mut S, ambient: [f32; 4]) {
        shader.set_uniform(self.ambient, UniformValue::Vec4(ambient));
    }
}

/// In-memory shader program that records every uniform write.
///
/// Used by the headless driver and by tests in place of a GPU program.
#[derive(Debug, Default)]
pub struct RecordingShader {
    locations: HashMap<String, UniformLocation>,
    values: HashMap<UniformLocation, UniformValue>,
    /// Every `set_uniform` call in order, including ones to invalid locations
    pub writes: Vec<(UniformLocation, UniformValue)>,
}

impl RecordingShader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A program declaring `viewPos`, `ambient` and `light_count` entries of `lights[]`
    pub fn with_lights(light_count: usize) -> Self {
        let mut shader = Self::new();
        shader.declare("viewPos");
        shader.declare("ambient");
        for i in 0..light_count {
            for field in ["enabled", "type", "position", "target", "color"] {
                shader.declare(&format!("lights[{i}].{field}"));
            }
        }
        shader
    }

    /// Declare a uniform name, returning its location
    pub fn declare(&mut self, name: &str) -> UniformLocation {
        let next = UniformLocation(self.locations.len() as i32);
        *self.locations.entry(name.to_string()).or_insert(next)
    }

    /// Last value written to a location
    pub fn value(&self, location: UniformLocation) -> Option<UniformValue> {
        self.values.get(&location).copied()
    }

    /// Last value written to a named uniform
    pub fn value_of(&self, name: &str) -> Option<UniformValue> {
        self.value(self.uniform_location(name))
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl ShaderProgram for RecordingShader {
    fn uniform_location(&self, name: &str) -> UniformLocation {
        self.locations.get(name).copied().unwrap_or(UniformLocation::INVALID)
    }

    fn set_uniform(&mut self, location: UniformLocation, value: UniformValue) {
        self.writes.push((location, value));
        if location.is_valid() {
            self.values.insert(location, value);
        }
    }
}
