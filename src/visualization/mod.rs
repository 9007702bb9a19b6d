//! Visualization module
//!
//! This module handles lighting, render options and debug gizmos.

use bevy::prelude::*;

pub mod axes;
pub mod config;
pub mod lighting;

pub use axes::{draw_pivot_axes, toggle_axes};
pub use config::{LightingConfig, RenderConfig};
pub use lighting::setup_lighting;

/// Plugin for visualization systems
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RenderConfig>()
            .init_resource::<LightingConfig>()
            .add_systems(Startup, setup_lighting)
            .add_systems(Update, (toggle_axes, draw_pivot_axes).chain());
    }
}
