//! The frame update loop and its scheduler state

use bevy::prelude::*;

use crate::bodies::{ActiveBodies, SelfSpin, YawAngle};

/// A planet turns about its own axis this many times faster than it orbits.
pub const SELF_ROTATION_RATIO: f32 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    /// No frame requested yet.
    #[default]
    Idle,
    Running,
    /// Stopped by the user; only reachable through [`AnimationLoop::pause`].
    Paused,
}

/// Scheduler state for the frame loop
#[derive(Resource, Default, Debug)]
pub struct AnimationLoop {
    pub state: LoopState,
    /// Frames advanced since the loop first started.
    pub ticks: u64,
}

impl AnimationLoop {
    /// Returns `true` if the loop was not already running.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    /// Returns `true` if the loop was running.
    pub fn pause(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.state = LoopState::Paused;
        true
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }
}

/// Run condition for per-frame animation systems
pub fn animation_running(animation: Res<AnimationLoop>) -> bool {
    animation.is_running()
}

pub fn start_animation_loop(mut animation: ResMut<AnimationLoop>) {
    if animation.start() {
        info!("Animation loop running");
    }
}

/// Space pauses and resumes the loop.
pub fn toggle_animation_loop(
    input: Res<ButtonInput<KeyCode>>,
    mut animation: ResMut<AnimationLoop>,
) {
    if !input.just_pressed(KeyCode::Space) {
        return;
    }
    if animation.pause() {
        info!("Animation paused at tick {}", animation.ticks);
    } else if animation.start() {
        info!("Animation resumed at tick {}", animation.ticks);
    }
}

fn turn(transform: &mut Transform, angle: &mut YawAngle, step: f32) {
    angle.0 += step;
    transform.rotation = Quat::from_rotation_y(angle.0);
}

/// Advance every attached planet by one tick.
///
/// The pivot turns by the body's angular speed, carrying the planet around
/// the origin; the planet itself turns [`SELF_ROTATION_RATIO`] times as far.
pub fn advance_orbits(
    mut animation: ResMut<AnimationLoop>,
    active: Res<ActiveBodies>,
    mut nodes: Query<(&mut Transform, &mut YawAngle)>,
) {
    animation.ticks += 1;
    if active.is_empty() {
        return;
    }

    for body in active.iter() {
        if let Ok((mut transform, mut angle)) = nodes.get_mut(body.pivot) {
            turn(&mut transform, &mut angle, body.angular_speed);
        }
        if let Ok((mut transform, mut angle)) = nodes.get_mut(body.body) {
            turn(
                &mut transform,
                &mut angle,
                SELF_ROTATION_RATIO * body.angular_speed,
            );
        }
    }
}

/// Turn anything with a fixed spin (the sun) by one tick.
pub fn spin_sun(mut spinners: Query<(&mut Transform, &mut YawAngle, &SelfSpin)>) {
    for (mut transform, mut angle, spin) in &mut spinners {
        turn(&mut transform, &mut angle, spin.0);
    }
}
