use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod core;
mod orbital;
mod visualization;

use bodies::BodiesPlugin;
use crate::core::{CameraPlugin, ViewportPlugin};
use orbital::OrbitalPlugin;
use visualization::VisualizationPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Solar System".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            // Textures are sampled with linear min/mag filtering.
            .set(ImagePlugin::default_linear()),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(CameraPlugin);
    app.add_plugins(ViewportPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(BodiesPlugin);

    app.run();
}
