//! Visualization configuration

use bevy::prelude::*;

/// Rendering options for the bodies in the scene
#[derive(Resource, Clone, Debug)]
pub struct RenderConfig {
    pub sphere_sectors: u32,
    pub sphere_stacks: u32,
    pub show_rings: bool,
    pub show_starfield: bool,
    pub show_axes: bool,
    pub axes_length: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sphere_sectors: 32,
            sphere_stacks: 32,
            show_rings: true,
            show_starfield: true,
            show_axes: false,
            axes_length: 1.0,
        }
    }
}

/// Light setup around the sun
#[derive(Resource, Clone, Debug)]
pub struct LightingConfig {
    /// 0xRRGGBB
    pub ambient_color: u32,
    pub ambient_brightness: f32,
    /// Lumens.
    pub sun_intensity: f32,
    pub sun_range: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: 0x333333,
            ambient_brightness: 400.0,
            sun_intensity: 4_000_000.0,
            sun_range: 100.0,
        }
    }
}
