//! Components for the bodies in the scene graph

use bevy::prelude::*;

/// Accumulated rotation about the Y axis, in radians.
///
/// Never wrapped: the value grows by a fixed step every tick and the
/// transform is rebuilt from it, so trigonometry takes care of wraparound.
#[derive(Component, Copy, Clone, Debug, Default, PartialEq, Deref, DerefMut)]
pub struct YawAngle(pub f32);

impl YawAngle {
    /// The angle reduced into `[0, 2π)`.
    #[allow(dead_code)]
    pub fn normalized(&self) -> f32 {
        self.0.rem_euclid(std::f32::consts::TAU)
    }
}

/// Invisible anchor that carries a planet around the origin.
#[derive(Component)]
pub struct Pivot;

/// Visible planet mesh, child of a [`Pivot`].
#[derive(Component)]
pub struct Planet {
    #[allow(dead_code)]
    pub registry_index: usize,
}

/// Ring mesh, child of a [`Pivot`].
#[derive(Component)]
pub struct Ring;

/// Marker for the sun mesh.
#[derive(Component)]
pub struct Sun;

/// Radians per tick the sun turns about its own axis.
#[derive(Component, Copy, Clone, Debug)]
pub struct SelfSpin(pub f32);

/// Marker for the starfield sphere.
#[derive(Component)]
pub struct Starfield;

/// Marker for the entity every pivot hangs off.
#[derive(Component)]
pub struct SolarSystemRoot;
