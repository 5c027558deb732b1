use glam::Vec3;

use crate::view::shader::{ShaderProgram, UniformLocation, UniformValue};

/// Light kinds understood by the lighting shader.
///
/// The discriminants are what the shader compares `lights[i].type` against.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightType {
    #[default]
    Directional = 0,
    Point = 1,
}

impl LightType {
    pub fn as_uniform(self) -> i32 {
        self as i32
    }
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLANK: Color = Color::new(0, 0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const YELLOW: Color = Color::new(253, 249, 0, 255);
    pub const RED: Color = Color::new(230, 41, 55, 255);
    pub const GREEN: Color = Color::new(0, 228, 48, 255);
    pub const BLUE: Color = Color::new(0, 121, 241, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels scaled from 0..=255 to 0.0..=1.0
    pub fn normalized(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Same color with its alpha scaled by `factor`
    pub fn faded(&self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..*self }
    }
}

/// Uniform slots of one `lights[i]` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightLocations {
    pub enabled: UniformLocation,
    pub kind: UniformLocation,
    pub position: UniformLocation,
    pub target: UniformLocation,
    pub color: UniformLocation,
}

impl LightLocations {
    pub fn resolve<S: ShaderProgram>(shader: &S, slot: usize) -> Self {
        let loc = |field: &str| shader.uniform_location(&format!("lights[{slot}].{field}"));
        Self {
            enabled: loc("enabled"),
            kind: loc("type"),
            position: loc("position"),
            target: loc("target"),
            color: loc("color"),
        }
    }

    pub fn all_valid(&self) -> bool {
        [self.enabled, self.kind, self.position, self.target, self.color]
            .iter()
            .all(UniformLocation::is_valid)
    }

    pub fn any_valid(&self) -> bool {
        [self.enabled, self.kind, self.position, self.target, self.color]
            .iter()
            .any(UniformLocation::is_valid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Light {
    pub kind: LightType,
    pub position: Vec3,
    pub target: Vec3,
    pub color: Color,
    pub enabled: bool,
    /// Index into the shader's `lights[]` array, `None` for lights over capacity
    pub(crate) slot: Option<usize>,
    pub(crate) locations: LightLocations,
}

impl Light {
    /// Disabled light with no shader slot; what registration returns past capacity
    pub fn inert() -> Self {
        Self::default()
    }

    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    pub fn locations(&self) -> &LightLocations {
        &self.locations
    }

    /// Write all five fields to the shader, whether or not they changed
    pub fn update_values<S: ShaderProgram>(&self, shader: &mut S) {
        shader.set_uniform(self.locations.enabled, UniformValue::Int(self.enabled as i32));
        shader.set_uniform(self.locations.kind, UniformValue::Int(self.kind.as_uniform()));
        shader.set_uniform(self.locations.position, UniformValue::Vec3(self.position.to_array()));
        shader.set_uniform(self.locations.target, UniformValue::Vec3(self.target.to_array()));
        shader.set_uniform(self.locations.color, UniformValue::Vec4(self.color.normalized()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::shader::RecordingShader;

    #[test]
    fn test_light_type_encoding() {
        assert_eq!(LightType::Directional.as_uniform(), 0);
        assert_eq!(LightType::Point.as_uniform(), 1);
    }

    #[test]
    fn test_color_normalization() {
        assert_eq!(Color::WHITE.normalized(), [1.0; 4]);
        assert_eq!(Color::BLANK.normalized(), [0.0; 4]);
        let c = Color::new(51, 0, 255, 255).normalized();
        assert!((c[0] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_inert_light_is_zeroed() {
        let light = Light::inert();
        assert!(!light.enabled);
        assert_eq!(light.kind, LightType::Directional);
        assert_eq!(light.position, Vec3::ZERO);
        assert_eq!(light.color, Color::BLANK);
        assert_eq!(light.slot(), None);
        assert!(!light.locations().any_valid());
    }

    #[test]
    fn test_update_values_writes_five_fields() {
        let mut shader = RecordingShader::with_lights(1);
        let light = Light {
            kind: LightType::Point,
            position: Vec3::new(1.0, 2.0, 3.0),
            target: Vec3::ZERO,
            color: Color::RED,
            enabled: true,
            slot: Some(0),
            locations: LightLocations::resolve(&shader, 0),
        };
        light.update_values(&mut shader);

        assert_eq!(shader.writes.len(), 5);
        assert_eq!(shader.value_of("lights[0].enabled"), Some(UniformValue::Int(1)));
        assert_eq!(shader.value_of("lights[0].type"), Some(UniformValue::Int(1)));
        assert_eq!(shader.value_of("lights[0].position"), Some(UniformValue::Vec3([1.0, 2.0, 3.0])));
        assert_eq!(shader.value_of("lights[0].color"), Some(UniformValue::Vec4(Color::RED.normalized())));
    }
}
