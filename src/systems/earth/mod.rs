use bevy::prelude::*;

pub mod materials;

use materials::{AtmosphereMaterial, EarthMaterial, GlobeUniform, ShellUniform};

use crate::config::{
    ATMOSPHERE_SCALE, EARTH_CLOUDS_TEXTURE, EARTH_DAY_TEXTURE, EARTH_NIGHT_TEXTURE, EARTH_RADIUS,
    EARTH_ROTATION_SPEED, SPHERE_SECTORS, SPHERE_STACKS, SUN_MARKER_DISTANCE, SUN_MARKER_RADIUS,
};
use crate::shading::{ShadingConfig, SkyParams};

pub struct EarthPlugin;

impl Plugin for EarthPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<EarthMaterial>::default())
            .add_plugins(MaterialPlugin::<AtmosphereMaterial>::default())
            .init_resource::<SkyParams>()
            .init_resource::<ShadingConfig>()
            .add_systems(Startup, start)
            .add_systems(Update, (update_shaders, rotate));
    }
}

// surface tag
#[derive(Component)]
pub struct Earth;

// shell tag
#[derive(Component)]
pub struct Atmosphere;

// debug marker tag
#[derive(Component)]
pub struct SunMarker;

fn start(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut earth_materials: ResMut<Assets<EarthMaterial>>,
    mut atmosphere_materials: ResMut<Assets<AtmosphereMaterial>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    params: Res<SkyParams>,
    config: Res<ShadingConfig>,
    asset_server: Res<AssetServer>,
) {
    let day_texture = asset_server.load(EARTH_DAY_TEXTURE);
    let night_texture = asset_server.load(EARTH_NIGHT_TEXTURE);
    let clouds_texture = asset_server.load(EARTH_CLOUDS_TEXTURE);

    info!("spawning globe, radius {EARTH_RADIUS}");

    // earth surface
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(EARTH_RADIUS).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS))),
        MeshMaterial3d(earth_materials.add(EarthMaterial {
            day_texture,
            night_texture,
            clouds_texture,
            globe_uniform: GlobeUniform::from_params(&params, &config),
        })),
        Transform::default(),
        Earth,
    ));

    // atmosphere shell, slightly oversized copy of the surface sphere
    commands.spawn((
        Mesh3d(meshes.add(
            Sphere::new(EARTH_RADIUS * ATMOSPHERE_SCALE)
                .mesh()
                .uv(SPHERE_SECTORS, SPHERE_STACKS),
        )),
        MeshMaterial3d(atmosphere_materials.add(AtmosphereMaterial {
            shell_uniform: ShellUniform::from_params(&params, &config),
        })),
        Transform::default(),
        Atmosphere,
    ));

    // debug sun marker
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_MARKER_RADIUS).mesh().ico(2).unwrap())),
        MeshMaterial3d(standard_materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(params.sun.direction() * SUN_MARKER_DISTANCE),
        SunMarker,
    ));
}

// push the latest parameter state into both materials and the marker.
// one system writes all three consumers, so the surface and the shell can
// never show different atmosphere colors on the same frame, and a sun angle
// change lands in the very next rendered frame.
fn update_shaders(
    params: Res<SkyParams>,
    config: Res<ShadingConfig>,
    earth_query: Query<&MeshMaterial3d<EarthMaterial>, With<Earth>>,
    atmosphere_query: Query<&MeshMaterial3d<AtmosphereMaterial>, With<Atmosphere>>,
    mut marker_query: Query<&mut Transform, With<SunMarker>>,
    mut earth_materials: ResMut<Assets<EarthMaterial>>,
    mut atmosphere_materials: ResMut<Assets<AtmosphereMaterial>>,
) {
    if !params.is_changed() && !config.is_changed() {
        return;
    }

    if let Ok(earth_material_handle) = earth_query.single() {
        if let Some(earth_material) = earth_materials.get_mut(&earth_material_handle.0) {
            earth_material.globe_uniform = GlobeUniform::from_params(&params, &config);
        }
    }

    if let Ok(atmosphere_material_handle) = atmosphere_query.single() {
        if let Some(atmosphere_material) =
            atmosphere_materials.get_mut(&atmosphere_material_handle.0)
        {
            atmosphere_material.shell_uniform = ShellUniform::from_params(&params, &config);
        }
    }

    if let Ok(mut marker_transform) = marker_query.single_mut() {
        marker_transform.translation = params.sun.direction() * SUN_MARKER_DISTANCE;
    }
}

// rotate the earth, the shell stays put
fn rotate(time: Res<Time>, mut earth_query: Query<&mut Transform, With<Earth>>) {
    let delta_rotation = Quat::from_rotation_y(EARTH_ROTATION_SPEED * time.delta_secs());

    if let Ok(mut transform) = earth_query.single_mut() {
        transform.rotation = transform.rotation * delta_rotation;
    }
}
