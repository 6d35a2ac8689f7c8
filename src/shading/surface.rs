//! Surface shading model: day/night blend, clouds, ocean specular and the
//! twilight rim tint, composited in that order.

use bevy::prelude::*;

use super::{AtmosphereColors, ShadingConfig, smoothstep};

/// Everything the surface model needs at one shaded point.
/// `view_direction` points from the camera toward the surface.
#[derive(Clone, Copy, Debug)]
pub struct SurfacePoint {
    pub normal: Vec3,
    pub view_direction: Vec3,
    pub day_color: Vec3,
    pub night_color: Vec3,
    /// cloud coverage, G channel of the specular/clouds mask
    pub clouds: f32,
    /// specular permission, R channel (ocean 1, land 0)
    pub specular_mask: f32,
}

/// CPU reference of assets/shaders/earth.wgsl. Deterministic, no failure
/// modes; out-of-range texture addressing is the sampler's business.
pub fn shade_surface(
    point: &SurfacePoint,
    sun_direction: Vec3,
    clouds_intensity: f32,
    specular_intensity: f32,
    config: &ShadingConfig,
    colors: &AtmosphereColors,
) -> Vec3 {
    let sun_facing = point.normal.dot(sun_direction);

    // day/night terminator
    let day_mix = smoothstep(config.day_night_edges.x, config.day_night_edges.y, sun_facing);
    let mut color = point.night_color.lerp(point.day_color, day_mix);

    // clouds, day side only
    let cloud_mix = smoothstep(config.cloud_edges.x, config.cloud_edges.y, point.clouds)
        * clouds_intensity
        * day_mix;
    color = color.lerp(Vec3::ONE, cloud_mix);

    // twilight tint creeping in at grazing view angles
    let twilight_mix = smoothstep(config.twilight_edges.x, config.twilight_edges.y, sun_facing);
    let atmosphere_color = colors.twilight.lerp(colors.day, twilight_mix);
    let fresnel = (point.view_direction.dot(point.normal) + 1.0)
        .max(0.0)
        .powf(config.fresnel_exponent);
    color = color.lerp(atmosphere_color, fresnel * twilight_mix);

    // ocean highlight, masked to the lit side
    let reflection = (-sun_direction).reflect(point.normal);
    let specular = (-reflection.dot(point.view_direction))
        .max(0.0)
        .powf(config.specular_exponent)
        * point.specular_mask
        * specular_intensity
        * day_mix;
    let specular_color = Vec3::ONE.lerp(atmosphere_color, fresnel);

    color + specular_color * specular
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Vec3 = Vec3::new(0.8, 0.6, 0.3);
    const NIGHT: Vec3 = Vec3::new(0.05, 0.05, 0.2);

    fn point(normal: Vec3, view_direction: Vec3) -> SurfacePoint {
        SurfacePoint {
            normal,
            view_direction,
            day_color: DAY,
            night_color: NIGHT,
            clouds: 0.0,
            specular_mask: 0.0,
        }
    }

    #[test]
    fn noon_point_resolves_to_the_day_sample() {
        // facing the sun head on, viewed straight down the normal
        let config = ShadingConfig::default();
        let colors = AtmosphereColors::default();
        let color = shade_surface(&point(Vec3::Z, Vec3::NEG_Z), Vec3::Z, 1.0, 1.0, &config, &colors);
        assert!(color.abs_diff_eq(DAY, 1e-6), "{color}");
    }

    #[test]
    fn midnight_point_resolves_to_the_night_sample() {
        let config = ShadingConfig::default();
        let colors = AtmosphereColors::default();
        let color = shade_surface(&point(Vec3::Z, Vec3::NEG_Z), Vec3::NEG_Z, 1.0, 1.0, &config, &colors);
        assert!(color.abs_diff_eq(NIGHT, 1e-6), "{color}");
    }

    #[test]
    fn clouds_never_brighten_the_night_side() {
        let config = ShadingConfig::default();
        let colors = AtmosphereColors::default();
        let mut overcast = point(Vec3::Z, Vec3::NEG_Z);
        overcast.clouds = 1.0;
        let color = shade_surface(&overcast, Vec3::NEG_Z, 1.0, 1.0, &config, &colors);
        assert!(color.abs_diff_eq(NIGHT, 1e-6), "{color}");
    }

    #[test]
    fn clouds_whiten_the_lit_side() {
        let config = ShadingConfig::default();
        let colors = AtmosphereColors::default();
        let clear = shade_surface(&point(Vec3::Z, Vec3::NEG_Z), Vec3::Z, 1.0, 0.0, &config, &colors);
        let mut overcast = point(Vec3::Z, Vec3::NEG_Z);
        overcast.clouds = 1.0;
        let cloudy = shade_surface(&overcast, Vec3::Z, 1.0, 0.0, &config, &colors);
        assert!(cloudy.min_element() > clear.min_element());
        assert!(cloudy.abs_diff_eq(Vec3::ONE, 1e-6));
    }

    #[test]
    fn ocean_gets_a_highlight_where_land_does_not() {
        let config = ShadingConfig::default();
        let colors = AtmosphereColors::default();
        // sun behind the viewer, mirror geometry: reflection lines up with -view
        let land = shade_surface(&point(Vec3::Z, Vec3::NEG_Z), Vec3::Z, 1.0, 1.0, &config, &colors);
        let mut sea = point(Vec3::Z, Vec3::NEG_Z);
        sea.specular_mask = 1.0;
        let ocean = shade_surface(&sea, Vec3::Z, 1.0, 1.0, &config, &colors);
        assert!(ocean.abs_diff_eq(land + Vec3::ONE, 1e-5), "{ocean} vs {land}");
    }

    #[test]
    fn specular_is_confined_to_the_lit_side() {
        let config = ShadingConfig::default();
        let colors = AtmosphereColors::default();
        let mut sea = point(Vec3::Z, Vec3::NEG_Z);
        sea.specular_mask = 1.0;
        let color = shade_surface(&sea, Vec3::NEG_Z, 1.0, 1.0, &config, &colors);
        assert!(color.abs_diff_eq(NIGHT, 1e-6), "{color}");
    }

    #[test]
    fn specular_intensity_scales_the_highlight() {
        let config = ShadingConfig::default();
        let colors = AtmosphereColors::default();
        let mut sea = point(Vec3::Z, Vec3::NEG_Z);
        sea.specular_mask = 1.0;
        let full = shade_surface(&sea, Vec3::Z, 1.0, 1.0, &config, &colors);
        let half = shade_surface(&sea, Vec3::Z, 1.0, 0.5, &config, &colors);
        let off = shade_surface(&sea, Vec3::Z, 1.0, 0.0, &config, &colors);
        assert!(half.abs_diff_eq(off.lerp(full, 0.5), 1e-5));
    }
}
