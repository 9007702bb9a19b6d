//! Keeps the camera projection in step with the window size.

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::core::camera::MainCamera;

/// Last size the drawing surface was resized to, in logical pixels.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
    /// Resize messages applied so far.
    pub resizes: u32,
}

/// `None` for a degenerate (e.g. minimised) window.
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    (width > 0.0 && height > 0.0).then(|| width / height)
}

/// Apply one resize to the projection and tracked size.
///
/// Only the projection changes; the camera transform is left alone.
pub fn apply_resize(
    projection: &mut Projection,
    viewport: &mut ViewportSize,
    width: f32,
    height: f32,
) -> bool {
    let Some(aspect) = aspect_ratio(width, height) else {
        return false;
    };
    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = aspect;
    }
    viewport.width = width;
    viewport.height = height;
    viewport.resizes += 1;
    true
}

pub fn sync_viewport_on_resize(
    mut resized: MessageReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut cameras: Query<&mut Projection, With<MainCamera>>,
) {
    for message in resized.read() {
        let Ok(mut projection) = cameras.single_mut() else {
            continue;
        };
        if apply_resize(&mut projection, &mut viewport, message.width, message.height) {
            debug!("Viewport resized to {}x{}", message.width, message.height);
        }
    }
}
