//! Static table of the bodies that make up the scene.
//!
//! Distances and radii share one world unit; the camera distance limits in
//! [`crate::core::camera::CameraSettings`] are expressed in the same unit.

use std::f32::consts::PI;

use bevy::prelude::*;

/// Flat ring drawn around a planet. Radii are multiples of the planet radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingConfig {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// 0xRRGGBB
    pub color: u32,
    /// Extra tilt about X on top of laying the ring into the orbital plane.
    pub extra_tilt: f32,
}

impl RingConfig {
    pub fn color(&self) -> Color {
        hex_color(self.color)
    }
}

/// Immutable description of one orbiting body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialBodyConfig {
    pub name: &'static str,
    pub radius: f32,
    pub orbit_radius: f32,
    /// Radians the pivot advances per tick.
    pub angular_speed: f32,
    pub texture: &'static str,
    pub ring: Option<RingConfig>,
}

/// The star at the centre. Spins in place, never orbits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunConfig {
    pub radius: f32,
    pub spin_speed: f32,
    pub texture: &'static str,
}

/// Inside-out sphere that carries the star texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropConfig {
    pub radius: f32,
    pub texture: &'static str,
}

pub const SUN: SunConfig = SunConfig {
    radius: 1.5,
    spin_speed: 0.002,
    texture: "textures/sun.jpg",
};

pub const STARFIELD: BackdropConfig = BackdropConfig {
    radius: 30.0,
    texture: "textures/starfield.jpg",
};

pub const PLANETS: [CelestialBodyConfig; 8] = [
    CelestialBodyConfig {
        name: "mercury",
        radius: 0.2,
        orbit_radius: 3.0,
        angular_speed: 0.015,
        texture: "textures/mercury.jpg",
        ring: None,
    },
    CelestialBodyConfig {
        name: "venus",
        radius: 0.3,
        orbit_radius: 4.5,
        angular_speed: 0.01,
        texture: "textures/venus.jpg",
        ring: None,
    },
    CelestialBodyConfig {
        name: "earth",
        radius: 0.35,
        orbit_radius: 6.0,
        angular_speed: 0.008,
        texture: "textures/earth.jpg",
        ring: None,
    },
    CelestialBodyConfig {
        name: "mars",
        radius: 0.25,
        orbit_radius: 7.5,
        angular_speed: 0.006,
        texture: "textures/mars.jpg",
        ring: None,
    },
    CelestialBodyConfig {
        name: "jupiter",
        radius: 0.8,
        orbit_radius: 10.0,
        angular_speed: 0.004,
        texture: "textures/jupiter.jpg",
        ring: Some(RingConfig {
            inner_radius: 0.9,
            outer_radius: 1.1,
            color: 0x665544,
            extra_tilt: 0.0,
        }),
    },
    CelestialBodyConfig {
        name: "saturn",
        radius: 0.6,
        orbit_radius: 12.0,
        angular_speed: 0.003,
        texture: "textures/saturn.jpg",
        ring: Some(RingConfig {
            inner_radius: 0.9,
            outer_radius: 1.8,
            color: 0x555555,
            extra_tilt: 0.0,
        }),
    },
    CelestialBodyConfig {
        name: "uranus",
        radius: 0.5,
        orbit_radius: 14.0,
        angular_speed: 0.002,
        texture: "textures/uranus.jpg",
        ring: Some(RingConfig {
            inner_radius: 0.7,
            outer_radius: 1.1,
            color: 0xAAAAAA,
            // Uranus is tipped over much further than the others
            extra_tilt: PI / 5.0,
        }),
    },
    CelestialBodyConfig {
        name: "neptune",
        radius: 0.5,
        orbit_radius: 16.0,
        angular_speed: 0.001,
        texture: "textures/neptune.jpg",
        ring: Some(RingConfig {
            inner_radius: 0.7,
            outer_radius: 0.9,
            color: 0x445566,
            extra_tilt: 0.0,
        }),
    },
];

/// Convert a packed 0xRRGGBB value into an sRGB color.
pub fn hex_color(hex: u32) -> Color {
    Color::srgb_u8(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

/// Check a single registry entry against the invariants the scene relies on.
pub fn validate_body(config: &CelestialBodyConfig) -> anyhow::Result<()> {
    if !(config.radius > 0.0) {
        anyhow::bail!("{}: radius must be positive, got {}", config.name, config.radius);
    }
    if !(config.orbit_radius >= 0.0) {
        anyhow::bail!(
            "{}: orbit radius must be non-negative, got {}",
            config.name,
            config.orbit_radius
        );
    }
    if !config.angular_speed.is_finite() {
        anyhow::bail!("{}: angular speed is not finite", config.name);
    }
    if config.texture.is_empty() {
        anyhow::bail!("{}: missing texture path", config.name);
    }
    if let Some(ring) = &config.ring
        && !(ring.inner_radius > 0.0 && ring.inner_radius < ring.outer_radius)
    {
        anyhow::bail!(
            "{}: ring radii must satisfy 0 < inner < outer, got {}..{}",
            config.name,
            ring.inner_radius,
            ring.outer_radius
        );
    }
    Ok(())
}

/// Validate every entry, reporting the first offender.
pub fn validate_registry(bodies: &[CelestialBodyConfig]) -> anyhow::Result<()> {
    for body in bodies {
        validate_body(body)?;
    }
    Ok(())
}

pub fn validate_sun(config: &SunConfig) -> anyhow::Result<()> {
    if !(config.radius > 0.0) {
        anyhow::bail!("sun: radius must be positive, got {}", config.radius);
    }
    if !config.spin_speed.is_finite() {
        anyhow::bail!("sun: spin speed is not finite");
    }
    if config.texture.is_empty() {
        anyhow::bail!("sun: missing texture path");
    }
    Ok(())
}

pub fn validate_backdrop(config: &BackdropConfig) -> anyhow::Result<()> {
    if !(config.radius > 0.0) {
        anyhow::bail!("starfield: radius must be positive, got {}", config.radius);
    }
    if config.texture.is_empty() {
        anyhow::bail!("starfield: missing texture path");
    }
    Ok(())
}

/// Validate the sun, the starfield and every planet.
pub fn validate_scene(
    sun: &SunConfig,
    backdrop: &BackdropConfig,
    planets: &[CelestialBodyConfig],
) -> anyhow::Result<()> {
    validate_sun(sun)?;
    validate_backdrop(backdrop)?;
    validate_registry(planets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_valid() {
        assert!(validate_registry(&PLANETS).is_ok());
        assert_eq!(PLANETS.len(), 8);
        assert_eq!(PLANETS[0].name, "mercury");
        assert_eq!(PLANETS[7].name, "neptune");
    }

    #[test]
    fn test_orbits_increase_outward() {
        for pair in PLANETS.windows(2) {
            assert!(
                pair[0].orbit_radius < pair[1].orbit_radius,
                "{} should orbit inside {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn test_outermost_orbit_fits_inside_starfield() {
        let outer = PLANETS.iter().map(|p| p.orbit_radius).fold(0.0, f32::max);
        assert!(outer < STARFIELD.radius);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let bad = CelestialBodyConfig {
            radius: 0.0,
            ..PLANETS[2]
        };
        let err = validate_body(&bad).unwrap_err();
        assert!(err.to_string().contains("earth"));
    }

    #[test]
    fn test_rejects_inverted_ring() {
        let bad = CelestialBodyConfig {
            ring: Some(RingConfig {
                inner_radius: 2.0,
                outer_radius: 1.0,
                color: 0,
                extra_tilt: 0.0,
            }),
            ..PLANETS[5]
        };
        assert!(validate_registry(&[PLANETS[0], bad]).is_err());
    }

    #[test]
    fn test_builtin_scene_is_valid() {
        assert!(validate_scene(&SUN, &STARFIELD, &PLANETS).is_ok());
    }

    #[test]
    fn test_rejects_bad_sun_and_starfield() {
        let sun = SunConfig {
            radius: -1.0,
            ..SUN
        };
        let err = validate_scene(&sun, &STARFIELD, &PLANETS).unwrap_err();
        assert!(err.to_string().contains("sun"));

        let backdrop = BackdropConfig {
            texture: "",
            ..STARFIELD
        };
        let err = validate_scene(&SUN, &backdrop, &PLANETS).unwrap_err();
        assert!(err.to_string().contains("starfield"));

        let sun = SunConfig {
            spin_speed: f32::NAN,
            ..SUN
        };
        assert!(validate_sun(&sun).is_err());
    }

    #[test]
    fn test_hex_color_channels() {
        let c = hex_color(0x665544).to_srgba();
        assert!((c.red - 0x66 as f32 / 255.0).abs() < 1e-6);
        assert!((c.green - 0x55 as f32 / 255.0).abs() < 1e-6);
        assert!((c.blue - 0x44 as f32 / 255.0).abs() < 1e-6);
    }
}
