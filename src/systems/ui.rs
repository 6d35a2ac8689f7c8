//! ui.rs
//!
//! Live parameter panel. This is the only place SkyParams and ShadingConfig
//! are ever written; edits are compared against the current state so change
//! detection only fires when a slider actually moved.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiContextPass, egui};
use std::f32::consts::PI;

use crate::shading::atmosphere::shade_atmosphere;
use crate::shading::surface::{SurfacePoint, shade_surface};
use crate::shading::{ShadingConfig, SkyParams};

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiContextPass, parameter_panel);
    }
}

fn parameter_panel(
    mut contexts: EguiContexts,
    mut params: ResMut<SkyParams>,
    mut config: ResMut<ShadingConfig>,
) -> Result {
    let ctx = contexts.ctx_mut();

    // edit copies, write back only on real changes
    let mut next_params = params.clone();
    let mut next_config = *config;

    egui::Window::new("Parameters")
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Sun");
            ui.add(egui::Slider::new(&mut next_params.sun.polar, 0.0..=PI).text("polar"));
            ui.add(egui::Slider::new(&mut next_params.sun.azimuth, -PI..=PI).text("azimuth"));
            let direction = next_params.sun.direction();
            ui.label(format!(
                "direction: [{:.2}, {:.2}, {:.2}]",
                direction.x, direction.y, direction.z
            ));

            ui.separator();
            ui.heading("Clouds");
            ui.add(egui::Slider::new(&mut next_params.clouds_intensity, 0.0..=1.0).text("intensity"));

            ui.heading("Specular");
            ui.add(
                egui::Slider::new(&mut next_params.specular_intensity, 0.0..=1.0).text("intensity"),
            );

            ui.separator();
            ui.heading("Atmosphere");
            color_edit(ui, &mut next_params.colors.day, "day color");
            color_edit(ui, &mut next_params.colors.twilight, "twilight color");

            // CPU preview of the blend right on the terminator, handy while
            // tuning the twilight color without hunting for the edge in 3d
            let sun = next_params.sun.direction();
            let rim_normal = sun.any_orthonormal_vector();
            let rim_view = sun.cross(rim_normal);
            let probe = SurfacePoint {
                normal: rim_normal,
                view_direction: rim_view,
                day_color: Vec3::splat(0.5),
                night_color: Vec3::splat(0.02),
                clouds: 0.0,
                specular_mask: 1.0,
            };
            let surface_tint = shade_surface(
                &probe,
                sun,
                next_params.clouds_intensity,
                next_params.specular_intensity,
                &next_config,
                &next_params.colors,
            );
            let (rim_tint, _) = shade_atmosphere(
                rim_normal,
                rim_view,
                sun,
                &next_config,
                &next_params.colors,
            );
            ui.horizontal(|ui| {
                swatch(ui, surface_tint);
                ui.label("terminator surface");
                swatch(ui, rim_tint);
                ui.label("rim glow");
            });

            ui.collapsing("Tuning", |ui| {
                edge_sliders(ui, &mut next_config.day_night_edges, "terminator band", -1.0, 1.0);
                edge_sliders(ui, &mut next_config.twilight_edges, "twilight band", -1.0, 1.0);
                edge_sliders(ui, &mut next_config.cloud_edges, "cloud coverage band", 0.0, 1.0);
                ui.add(
                    egui::Slider::new(&mut next_config.specular_exponent, 1.0..=128.0)
                        .logarithmic(true)
                        .text("specular exponent"),
                );
                ui.add(
                    egui::Slider::new(&mut next_config.fresnel_exponent, 0.5..=8.0)
                        .text("fresnel exponent"),
                );
                ui.add(
                    egui::Slider::new(&mut next_config.rim_falloff, 0.5..=8.0)
                        .text("shell rim falloff"),
                );
                edge_sliders(ui, &mut next_config.shell_lit_edges, "shell night fade", -1.0, 1.0);
            });
        });

    if next_params != *params {
        *params = next_params;
    }
    if next_config != *config {
        *config = next_config;
    }

    Ok(())
}

fn color_edit(ui: &mut egui::Ui, color: &mut Vec3, label: &str) {
    let mut rgb = [color.x, color.y, color.z];
    ui.horizontal(|ui| {
        ui.color_edit_button_rgb(&mut rgb);
        ui.label(label);
    });
    *color = Vec3::from_array(rgb);
}

fn swatch(ui: &mut egui::Ui, color: Vec3) {
    let c = color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
    egui::color_picker::show_color(
        ui,
        egui::Color32::from_rgb(c.x as u8, c.y as u8, c.z as u8),
        egui::vec2(18.0, 18.0),
    );
}

fn edge_sliders(ui: &mut egui::Ui, edges: &mut Vec2, label: &str, min: f32, max: f32) {
    ui.label(label);
    ui.add(egui::Slider::new(&mut edges.x, min..=max).text("start"));
    ui.add(egui::Slider::new(&mut edges.y, min..=max).text("end"));
}
