//! Lighting setup

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::bodies::registry::hex_color;
use crate::visualization::config::LightingConfig;

/// Marker component for the point light inside the sun
#[derive(Component)]
pub struct SunLight;

/// Point light at the origin plus a dim ambient term so night sides stay visible.
pub fn setup_lighting(mut commands: Commands, config: Res<LightingConfig>) {
    commands.insert_resource(GlobalAmbientLight {
        color: hex_color(config.ambient_color),
        brightness: config.ambient_brightness,
        ..default()
    });

    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: config.sun_intensity,
            range: config.sun_range,
            shadows_enabled: false,
            ..default()
        },
        SunLight,
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("Sun Light"),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_sun_light_sits_at_origin() {
        let mut world = World::new();
        world.init_resource::<LightingConfig>();
        world.run_system_once(setup_lighting).unwrap();

        let ambient = world.resource::<GlobalAmbientLight>();
        assert_eq!(ambient.color, hex_color(0x333333));

        let mut lights = world.query_filtered::<(&PointLight, &Transform), With<SunLight>>();
        let (light, transform) = lights.single(&world).unwrap();
        assert_eq!(transform.translation, Vec3::ZERO);
        assert_eq!(light.range, 100.0);
        assert!(!light.shadows_enabled);
    }
}
