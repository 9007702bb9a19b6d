//! Camera and viewport plumbing.

use bevy::prelude::*;

pub mod camera;
pub mod viewport;

pub use camera::{CameraPlugin, CameraSettings, MainCamera};
pub use viewport::{ViewportSize, sync_viewport_on_resize};

/// Plugin that keeps the projection matched to the window
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportSize>()
            .add_systems(Update, sync_viewport_on_resize);
    }
}
