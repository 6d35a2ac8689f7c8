use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod config;
mod shading;
mod systems;

use config::{CAMERA_MAX_RADIUS, CAMERA_RADIUS, CAMERA_SPEED, EARTH_RADIUS};
use systems::camera::{OrbitCamPlugin, OrbitCamera};
use systems::earth::EarthPlugin;
use systems::ui::UIPlugin;

fn main() -> bevy::app::AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "globelight".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(OrbitCamPlugin)
        .add_plugins(EarthPlugin)
        .add_plugins(UIPlugin)
        .insert_resource(ClearColor(Color::srgb_u8(0, 0, 17)))
        .add_systems(Startup, setup)
        .run()
}

// scene setup here
fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(12.0, 5.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::new(CAMERA_RADIUS, CAMERA_SPEED)
            .with_target(Vec3::ZERO)
            .with_zoom_limits(EARTH_RADIUS + 1.0, CAMERA_MAX_RADIUS),
    ));
}
