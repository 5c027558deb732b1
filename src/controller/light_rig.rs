use glam::Vec3;

use crate::config::MAX_LIGHTS;
use crate::model::{Camera, Color, Light, LightLocations, LightType};
use crate::view::shader::ShaderProgram;

/// Index of a registered light in its [`LightRig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId(usize);

impl LightId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Registry of the lights bound to one lighting shader.
///
/// The shader declares a fixed `lights[MAX_LIGHTS]` array, mirrored here by
/// `slots`. The first `MAX_LIGHTS` registrations claim those slots in order;
/// later ones still get a [`LightId`] but resolve to a single shared inert
/// light with no uniform locations, and only bump the overflow tally.
/// The live count is never decremented.
#[derive(Debug, Default)]
pub struct LightRig {
    slots: [Light; MAX_LIGHTS],
    live_count: usize,
    overflow: usize,
    inert: Light,
}

impl LightRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a light and push its initial state to the shader
    pub fn register<S: ShaderProgram>(
        &mut self,
        kind: LightType,
        position: Vec3,
        target: Vec3,
        color: Color,
        shader: &mut S,
    ) -> LightId {
        let id = LightId(self.len());

        if self.live_count >= MAX_LIGHTS {
            self.overflow += 1;
            tracing::warn!(
                requested = self.len(),
                max = MAX_LIGHTS,
                "light budget exhausted, registering an inert light"
            );
            return id;
        }

        let slot = self.live_count;
        let locations = LightLocations::resolve(shader, slot);
        if !locations.all_valid() {
            tracing::warn!(slot, "shader is missing some lights[{slot}] uniforms");
        }

        let light = Light {
            kind,
            position,
            target,
            color,
            enabled: true,
            slot: Some(slot),
            locations,
        };
        light.update_values(shader);
        self.slots[slot] = light;
        self.live_count += 1;

        tracing::debug!(slot, ?kind, ?position, "registered light");
        id
    }

    /// Write every registered light's five fields to the shader.
    ///
    /// Inert registrations write to invalid locations, which backends drop.
    pub fn sync_to_shader<S: ShaderProgram>(&self, shader: &mut S) {
        for light in self.lights() {
            light.update_values(shader);
        }
        for _ in 0..self.overflow {
            self.inert.update_values(shader);
        }
    }

    pub fn get(&self, id: LightId) -> Option<&Light> {
        if id.0 < self.live_count {
            Some(&self.slots[id.0])
        } else if id.0 < self.len() {
            Some(&self.inert)
        } else {
            None
        }
    }

    /// Mutable access for moving or recoloring a light; changes reach the
    /// shader on the next [`LightRig::sync_to_shader`]. Inert lights are
    /// read-only and yield `None`.
    pub fn get_mut(&mut self, id: LightId) -> Option<&mut Light> {
        self.slots[..self.live_count].get_mut(id.0)
    }

    /// Flip a light on or off. Inert lights stay off.
    pub fn toggle(&mut self, id: LightId) -> bool {
        match self.get_mut(id) {
            Some(light) => {
                light.enabled = !light.enabled;
                tracing::debug!(light = id.0, enabled = light.enabled, "light toggled");
                light.enabled
            }
            None => false,
        }
    }

    /// Put a light at the camera eye, aimed at the camera target.
    /// Inert lights are left untouched.
    pub fn follow_camera(&mut self, id: LightId, camera: &Camera) {
        if let Some(light) = self.get_mut(id) {
            light.position = camera.position;
            light.target = camera.target;
        }
    }

    /// Lights holding a shader slot, in slot order
    pub fn lights(&self) -> &[Light] {
        &self.slots[..self.live_count]
    }

    /// Lights holding a shader slot, whether currently switched on or not
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Registrations past capacity
    pub fn overflow_count(&self) -> usize {
        self.overflow
    }

    pub fn enabled_count(&self) -> usize {
        self.lights().iter().filter(|l| l.enabled).count()
    }

    /// Every registration, inert ones included
    pub fn len(&self) -> usize {
        self.live_count + self.overflow
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
