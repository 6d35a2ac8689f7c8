//! Atmosphere shell shading model.
//!
//! The shell is an oversized copy of the globe drawn back-face only; its
//! color is the same day/twilight blend the surface uses and its opacity is
//! a fresnel-style rim term that peaks at the silhouette.

use bevy::prelude::*;

use super::{AtmosphereColors, ShadingConfig, smoothstep};

/// CPU reference of assets/shaders/atmosphere.wgsl. Returns (rgb, alpha).
pub fn shade_atmosphere(
    normal: Vec3,
    view_direction: Vec3,
    sun_direction: Vec3,
    config: &ShadingConfig,
    colors: &AtmosphereColors,
) -> (Vec3, f32) {
    let sun_facing = normal.dot(sun_direction);

    let twilight_mix = smoothstep(config.twilight_edges.x, config.twilight_edges.y, sun_facing);
    let color = colors.twilight.lerp(colors.day, twilight_mix);

    // opacity peaks at the silhouette and vanishes looking straight down the normal
    let rim = (1.0 - view_direction.dot(normal).abs())
        .max(0.0)
        .powf(config.rim_falloff);
    let lit = smoothstep(config.shell_lit_edges.x, config.shell_lit_edges.y, sun_facing);

    (color, rim * lit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::surface::{SurfacePoint, shade_surface};

    #[test]
    fn rim_opacity_grows_toward_the_silhouette() {
        let config = ShadingConfig::default();
        let colors = AtmosphereColors::default();
        let normal = Vec3::Z;
        let sun = Vec3::Z; // fully lit, so the night fade stays at 1

        let mut last = -1.0;
        for degrees in 0..=90 {
            let angle = (degrees as f32).to_radians();
            // view tilted away from the inward normal by `angle`
            let view = Vec3::new(angle.sin(), 0.0, -angle.cos());
            let (_, alpha) = shade_atmosphere(normal, view, sun, &config, &colors);
            assert!(alpha >= last, "alpha dipped at {degrees} degrees");
            last = alpha;
        }
    }

    #[test]
    fn opacity_is_zero_at_the_disk_center() {
        let config = ShadingConfig::default();
        let colors = AtmosphereColors::default();
        let (_, alpha) = shade_atmosphere(Vec3::Z, Vec3::NEG_Z, Vec3::Z, &config, &colors);
        assert_eq!(alpha, 0.0);
    }

    #[test]
    fn shell_fades_out_on_the_night_side() {
        let config = ShadingConfig::default();
        let colors = AtmosphereColors::default();
        let silhouette_view = Vec3::X;
        let (_, lit) = shade_atmosphere(Vec3::Z, silhouette_view, Vec3::Z, &config, &colors);
        let (_, dark) = shade_atmosphere(Vec3::Z, silhouette_view, Vec3::NEG_Z, &config, &colors);
        assert!(lit > 0.0);
        assert_eq!(dark, 0.0);
    }

    #[test]
    fn both_consumers_read_the_same_palette() {
        // geometry chosen so the surface output collapses to the pure
        // atmosphere tint: black textures, perpendicular view (fresnel = 1),
        // sun along the normal (twilight_mix = 1)
        let config = ShadingConfig::default();
        let colors = AtmosphereColors {
            day: Vec3::new(0.1, 0.7, 0.9),
            twilight: Vec3::new(0.9, 0.3, 0.1),
        };
        let normal = Vec3::Z;
        let sun = Vec3::Z;
        let view = Vec3::X;

        let point = SurfacePoint {
            normal,
            view_direction: view,
            day_color: Vec3::ZERO,
            night_color: Vec3::ZERO,
            clouds: 0.0,
            specular_mask: 0.0,
        };
        let surface = shade_surface(&point, sun, 0.0, 0.0, &config, &colors);
        let (shell, _) = shade_atmosphere(normal, view, sun, &config, &colors);

        assert!(surface.abs_diff_eq(shell, 1e-6), "{surface} vs {shell}");
        assert!(shell.abs_diff_eq(colors.day, 1e-6));
    }
}
