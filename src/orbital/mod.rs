//! Frame loop module
//!
//! Advances every body's angles once per frame while the animation loop is
//! running.

use bevy::prelude::*;

pub mod animation;

pub use animation::{
    AnimationLoop, LoopState, advance_orbits, animation_running, spin_sun, start_animation_loop,
    toggle_animation_loop,
};

/// Per-frame ordering.
///
/// Animation runs before assembly so a body attached during a frame is first
/// advanced on the following one.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FrameSet {
    Animate,
    Assemble,
}

/// Plugin for the frame update loop
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationLoop>()
            .configure_sets(Update, (FrameSet::Animate, FrameSet::Assemble).chain())
            .add_systems(Startup, start_animation_loop)
            .add_systems(
                Update,
                (
                    toggle_animation_loop.before(FrameSet::Animate),
                    (advance_orbits, spin_sun)
                        .in_set(FrameSet::Animate)
                        .run_if(animation_running),
                ),
            );
    }
}
