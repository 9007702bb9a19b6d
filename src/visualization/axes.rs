//! Axes visualization systems

use bevy::prelude::*;

use crate::bodies::components::Pivot;
use crate::visualization::config::RenderConfig;

/// Draw axes at every pivot so orbital phase is visible.
pub fn draw_pivot_axes(
    mut gizmos: Gizmos,
    query: Query<&GlobalTransform, With<Pivot>>,
    config: Res<RenderConfig>,
) {
    if !config.show_axes {
        return;
    }
    for &transform in &query {
        gizmos.axes(transform, config.axes_length);
    }
}

/// X toggles the pivot axes.
pub fn toggle_axes(input: Res<ButtonInput<KeyCode>>, mut config: ResMut<RenderConfig>) {
    if input.just_pressed(KeyCode::KeyX) {
        config.show_axes = !config.show_axes;
        info!("Pivot axes {}", if config.show_axes { "on" } else { "off" });
    }
}
