//! Celestial bodies module
//!
//! This module holds the static body registry and the systems that turn
//! loaded textures into sun, starfield and planet entities.

use bevy::prelude::*;

pub mod components;
pub mod registry;
pub mod resources;
pub mod systems;

pub use components::{SelfSpin, YawAngle};
pub use resources::{ActiveBodies, OrbitingBody, TextureRequests};
pub use systems::{
    attach_resolved_textures, report_registry_problems, request_textures, setup_world_root,
};

use crate::orbital::FrameSet;

/// Plugin for body registry, texture requests and scene assembly
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveBodies>()
            .init_resource::<TextureRequests>()
            .add_systems(
                Startup,
                (report_registry_problems, setup_world_root, request_textures),
            )
            .add_systems(Update, attach_resolved_textures.in_set(FrameSet::Assemble));
    }
}
