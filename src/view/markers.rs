use glam::Vec3;

use crate::controller::LightRig;
use crate::model::Color;

/// Alpha factor for markers of switched-off lights
const DISABLED_MARKER_FADE: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    Filled,
    Wireframe,
}

/// What the renderer draws at a light's position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightMarker {
    pub position: Vec3,
    pub color: Color,
    pub style: MarkerStyle,
}

/// Markers for every light holding a shader slot.
///
/// Inert over-capacity lights are excluded: they hold no shader slot and no
/// position of their own, so there is nothing to draw.
pub fn light_markers(rig: &LightRig) -> Vec<LightMarker> {
    rig.lights()
        .iter()
        .filter(|light| light.slot().is_some())
        .map(|light| {
            if light.enabled {
                LightMarker { position: light.position, color: light.color, style: MarkerStyle::Filled }
            } else {
                LightMarker {
                    position: light.position,
                    color: light.color.faded(DISABLED_MARKER_FADE),
                    style: MarkerStyle::Wireframe,
                }
            }
        })
        .collect()
}
