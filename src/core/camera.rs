//! Main camera and the `bevy_panorbit_camera` controller that drives it.
//!
//! Panning is disabled so the controller's focus stays on the origin; zoom
//! limits then bound the distance to the sun directly. A clamp after the
//! controller runs keeps that bound even if the transform is written
//! elsewhere.

use bevy::prelude::*;
use bevy::transform::TransformSystems;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraSystemSet};

/// Marker for the camera the scene is rendered through.
#[derive(Component)]
pub struct MainCamera;

/// Camera configuration resource
#[derive(Resource, Clone, Debug)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub start_position: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of the remaining motion applied each frame.
    pub damping_factor: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            start_position: Vec3::new(0.0, 15.0, 20.0),
            min_distance: 5.0,
            max_distance: 32.0,
            damping_factor: 0.05,
        }
    }
}

impl CameraSettings {
    /// Controller configured to start at `start_position` looking at the origin.
    pub fn pan_orbit(&self) -> PanOrbitCamera {
        let radius = self
            .start_position
            .length()
            .clamp(self.min_distance, self.max_distance);
        let yaw = self.start_position.x.atan2(self.start_position.z);
        let pitch = (self.start_position.y / self.start_position.length().max(f32::EPSILON))
            .clamp(-1.0, 1.0)
            .asin();
        let smoothness = (1.0 - self.damping_factor).clamp(0.0, 1.0);

        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(radius),
            yaw: Some(yaw),
            pitch: Some(pitch),
            zoom_lower_limit: self.min_distance,
            zoom_upper_limit: Some(self.max_distance),
            orbit_smoothness: smoothness,
            zoom_smoothness: smoothness,
            pan_sensitivity: 0.0,
            force_update: true,
            ..default()
        }
    }
}

/// Pull a camera position back into the `[min, max]` shell around the origin.
pub fn clamp_to_distance(translation: Vec3, min: f32, max: f32) -> Vec3 {
    let distance = translation.length();
    if distance <= f32::EPSILON {
        return Vec3::Z * min;
    }
    translation * (distance.clamp(min, max) / distance)
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Startup, spawn_main_camera)
            .add_systems(
                PostUpdate,
                clamp_camera_distance
                    .after(PanOrbitCameraSystemSet)
                    .before(bevy::camera::CameraUpdateSystems)
                    .before(TransformSystems::Propagate),
            );
    }
}

pub fn spawn_main_camera(mut commands: Commands, settings: Res<CameraSettings>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        settings.pan_orbit(),
        MainCamera,
        Transform::from_translation(settings.start_position).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Main Camera"),
    ));
}

fn clamp_camera_distance(
    settings: Res<CameraSettings>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    for mut transform in &mut cameras {
        let clamped = clamp_to_distance(
            transform.translation,
            settings.min_distance,
            settings.max_distance,
        );
        if clamped.distance_squared(transform.translation) > 1e-8 {
            debug!(
                "Camera distance {:.2} clamped to {:.2}",
                transform.translation.length(),
                clamped.length()
            );
            transform.translation = clamped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_clamp_to_distance() {
        let near = clamp_to_distance(Vec3::new(0.0, 0.0, 1.0), 5.0, 32.0);
        assert!((near.length() - 5.0).abs() < 1e-5);
        assert!(near.normalize().abs_diff_eq(Vec3::Z, 1e-6));

        let far = clamp_to_distance(Vec3::new(30.0, 30.0, 0.0), 5.0, 32.0);
        assert!((far.length() - 32.0).abs() < 1e-4);

        let inside = Vec3::new(0.0, 15.0, 20.0);
        assert_eq!(clamp_to_distance(inside, 5.0, 32.0), inside);

        let origin = clamp_to_distance(Vec3::ZERO, 5.0, 32.0);
        assert!((origin.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_pan_orbit_matches_start_position() {
        let settings = CameraSettings::default();
        let cam = settings.pan_orbit();
        assert_eq!(cam.radius, Some(25.0));
        assert_eq!(cam.zoom_lower_limit, 5.0);
        assert_eq!(cam.zoom_upper_limit, Some(32.0));
        assert_eq!(cam.pan_sensitivity, 0.0);
        assert!((cam.orbit_smoothness - 0.95).abs() < 1e-6);

        // Rebuild the position the controller will produce from yaw/pitch/radius.
        let rotation = Quat::from_rotation_y(cam.yaw.unwrap())
            * Quat::from_rotation_x(-cam.pitch.unwrap());
        let position = rotation * Vec3::new(0.0, 0.0, cam.radius.unwrap());
        assert!(position.abs_diff_eq(settings.start_position, 1e-4));
    }

    #[test]
    fn test_clamp_system_keeps_camera_in_range() {
        let mut world = World::new();
        world.init_resource::<CameraSettings>();
        let too_far = world
            .spawn((Transform::from_xyz(0.0, 40.0, 40.0), MainCamera))
            .id();
        let other = world.spawn(Transform::from_xyz(0.0, 40.0, 40.0)).id();

        world.run_system_once(clamp_camera_distance).unwrap();

        let camera = world.get::<Transform>(too_far).unwrap();
        assert!((camera.translation.length() - 32.0).abs() < 1e-4);
        assert!(camera.translation.normalize().abs_diff_eq(Vec3::new(0.0, 1.0, 1.0).normalize(), 1e-5));
        let untouched = world.get::<Transform>(other).unwrap();
        assert_eq!(untouched.translation, Vec3::new(0.0, 40.0, 40.0));
    }
}
