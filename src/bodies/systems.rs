//! Systems that request textures and assemble bodies once they arrive

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::render::render_resource::Face;
use rand::Rng;

use crate::bodies::components::{
    Pivot, Planet, Ring, SelfSpin, SolarSystemRoot, Starfield, Sun, YawAngle,
};
use crate::bodies::registry::{
    BackdropConfig, CelestialBodyConfig, PLANETS, STARFIELD, SUN, SunConfig, validate_scene,
};
use crate::bodies::resources::{
    ActiveBodies, OrbitingBody, RequestStatus, TextureRequests, TextureTarget, WorldRoot,
};
use crate::visualization::RenderConfig;

/// Everything needed to turn a resolved texture into scene entities.
pub struct SceneBuilder<'a> {
    pub root: Entity,
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<StandardMaterial>,
    pub render: &'a RenderConfig,
}

impl SceneBuilder<'_> {
    fn sphere(&mut self, radius: f32) -> Handle<Mesh> {
        self.meshes.add(
            Sphere::new(radius)
                .mesh()
                .uv(self.render.sphere_sectors, self.render.sphere_stacks),
        )
    }
}

/// Spawn the entity every pivot, the sun and the starfield hang off.
pub fn setup_world_root(mut commands: Commands) {
    let root = commands
        .spawn((
            Transform::IDENTITY,
            Visibility::default(),
            SolarSystemRoot,
            Name::new("Solar System"),
        ))
        .id();
    commands.insert_resource(WorldRoot(root));
}

/// Log sun, starfield or planet entries that break the invariants the scene
/// relies on.
///
/// Nothing is skipped; a bad entry still gets spawned.
pub fn report_registry_problems() {
    if let Err(err) = validate_scene(&SUN, &STARFIELD, &PLANETS) {
        error!("Invalid body registry: {err:#}");
    }
}

/// Kick off one texture load per body.
pub fn request_textures(
    asset_server: Res<AssetServer>,
    render: Res<RenderConfig>,
    mut requests: ResMut<TextureRequests>,
) {
    if render.show_starfield {
        requests.push(TextureTarget::Starfield, asset_server.load(STARFIELD.texture));
    }
    requests.push(TextureTarget::Sun, asset_server.load(SUN.texture));
    for (index, planet) in PLANETS.iter().enumerate() {
        requests.push(TextureTarget::Planet(index), asset_server.load(planet.texture));
    }
    debug!("Requested {} textures", requests.len());
}

/// Assemble bodies whose textures finished loading since the last frame.
///
/// Load order is whatever the asset server delivers, so planets join
/// [`ActiveBodies`] in resolution order rather than registry order.
pub fn attach_resolved_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    root: Res<WorldRoot>,
    render: Res<RenderConfig>,
    mut requests: ResMut<TextureRequests>,
    mut active: ResMut<ActiveBodies>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if requests.pending_count() == 0 {
        return;
    }

    let mut scene = SceneBuilder {
        root: root.0,
        meshes: &mut meshes,
        materials: &mut materials,
        render: &render,
    };
    let mut rng = rand::thread_rng();

    for index in 0..requests.len() {
        let request = &requests.requests[index];
        if request.status != RequestStatus::Pending {
            continue;
        }
        let target = request.target;
        let texture = request.handle.clone();

        match asset_server.get_load_state(texture.id()) {
            Some(LoadState::Loaded) => {
                if !requests.resolve(index) {
                    continue;
                }
                match target {
                    TextureTarget::Starfield => {
                        attach_starfield(&mut commands, &mut scene, &STARFIELD, texture);
                        info!("Starfield attached");
                    }
                    TextureTarget::Sun => {
                        attach_sun(&mut commands, &mut scene, &SUN, texture);
                        info!("Sun attached");
                    }
                    TextureTarget::Planet(registry_index) => {
                        let Some(config) = PLANETS.get(registry_index) else {
                            warn!("No registry entry for planet {}", registry_index);
                            continue;
                        };
                        if active.contains(registry_index) {
                            warn!("{} is already in the scene", config.name);
                            continue;
                        }
                        let phase = rng.gen_range(0.0..TAU);
                        attach_body(
                            &mut commands,
                            &mut scene,
                            &mut active,
                            registry_index,
                            config,
                            texture,
                            phase,
                        );
                        info!(
                            "Attached {} ({} of {})",
                            config.name,
                            active.len(),
                            PLANETS.len()
                        );
                    }
                }
            }
            Some(LoadState::Failed(err)) => {
                if requests.fail(index) {
                    warn!("Texture for {:?} failed to load: {}", target, err);
                }
            }
            _ => {}
        }
    }
}

/// Build the pivot/body pair for one registry entry and register it.
///
/// The pivot starts at `initial_phase` so planets do not line up. The body
/// sits `orbit_radius` along the pivot's local X axis.
pub fn attach_body(
    commands: &mut Commands,
    scene: &mut SceneBuilder,
    active: &mut ActiveBodies,
    registry_index: usize,
    config: &CelestialBodyConfig,
    texture: Handle<Image>,
    initial_phase: f32,
) -> OrbitingBody {
    let pivot = commands
        .spawn((
            Transform::from_rotation(Quat::from_rotation_y(initial_phase)),
            Visibility::default(),
            YawAngle(initial_phase),
            Pivot,
            Name::new(format!("{} pivot", config.name)),
            ChildOf(scene.root),
        ))
        .id();

    let mesh = scene.sphere(config.radius);
    let material = scene.materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        perceptual_roughness: 1.0,
        ..default()
    });
    let body = commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_xyz(config.orbit_radius, 0.0, 0.0),
            YawAngle(0.0),
            Planet { registry_index },
            Name::new(config.name),
            ChildOf(pivot),
        ))
        .id();

    if scene.render.show_rings
        && let Some(ring) = &config.ring
    {
        let mesh = scene.meshes.add(Annulus::new(
            config.radius * ring.inner_radius,
            config.radius * ring.outer_radius,
        ));
        let material = scene.materials.add(StandardMaterial {
            base_color: ring.color(),
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        // Annulus meshes face +Z; tip them into the orbital plane.
        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_xyz(config.orbit_radius, 0.0, 0.0)
                .with_rotation(Quat::from_rotation_x(FRAC_PI_2 + ring.extra_tilt)),
            Ring,
            Name::new(format!("{} ring", config.name)),
            ChildOf(pivot),
        ));
    }

    let orbiting = OrbitingBody {
        registry_index,
        pivot,
        body,
        angular_speed: config.angular_speed,
    };
    active.bodies.push(orbiting);
    orbiting
}

pub fn attach_sun(
    commands: &mut Commands,
    scene: &mut SceneBuilder,
    config: &SunConfig,
    texture: Handle<Image>,
) -> Entity {
    let mesh = scene.sphere(config.radius);
    let material = scene.materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        unlit: true,
        ..default()
    });
    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::IDENTITY,
            YawAngle(0.0),
            SelfSpin(config.spin_speed),
            Sun,
            Name::new("Sun"),
            ChildOf(scene.root),
        ))
        .id()
}

/// The starfield is seen from inside, so its front faces are culled.
pub fn attach_starfield(
    commands: &mut Commands,
    scene: &mut SceneBuilder,
    config: &BackdropConfig,
    texture: Handle<Image>,
) -> Entity {
    let mesh = scene.sphere(config.radius);
    let material = scene.materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        unlit: true,
        cull_mode: Some(Face::Front),
        ..default()
    });
    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::IDENTITY,
            Starfield,
            Name::new("Starfield"),
            ChildOf(scene.root),
        ))
        .id()
}
