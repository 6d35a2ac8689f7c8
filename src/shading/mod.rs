//! shading/
//!
//! Pure lighting math for the globe: sun direction, surface color, and the
//! atmosphere shell. Nothing in here touches the render loop or the GPU, so
//! every piece can be exercised on the CPU; the WGSL shaders under
//! assets/shaders mirror these functions term for term.

pub mod atmosphere;
pub mod sun;
pub mod surface;

use bevy::prelude::*;

use sun::SunParameters;

/// Matches the GLSL/WGSL builtin, clamped hermite interpolation
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Atmosphere tint endpoints. Owned once (inside [`SkyParams`]) and read by
/// both the surface and shell shading paths so the two can never drift apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereColors {
    pub day: Vec3,
    pub twilight: Vec3,
}

impl Default for AtmosphereColors {
    fn default() -> Self {
        Self {
            day: Vec3::new(0.0, 0.6, 1.0),
            twilight: Vec3::new(1.0, 0.25, 0.0),
        }
    }
}

/// Live user-tweakable state. Single writer (the parameter panel), single
/// reader (the material sync system in systems::earth).
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SkyParams {
    pub sun: SunParameters,
    pub clouds_intensity: f32,
    pub specular_intensity: f32,
    pub colors: AtmosphereColors,
}

impl Default for SkyParams {
    fn default() -> Self {
        Self {
            sun: SunParameters::default(),
            clouds_intensity: 0.2,
            specular_intensity: 1.0,
            colors: AtmosphereColors::default(),
        }
    }
}

/// Aesthetic tuning constants, named here instead of buried as shader
/// literals. Each band is a smoothstep (start, end) pair.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ShadingConfig {
    /// day/night terminator band over sun_facing
    pub day_night_edges: Vec2,
    /// day/twilight tint band over sun_facing
    pub twilight_edges: Vec2,
    /// cloud coverage band over the mask's G channel
    pub cloud_edges: Vec2,
    /// exponent of the reflected-sun ocean highlight
    pub specular_exponent: f32,
    /// exponent of the surface rim (fresnel) falloff
    pub fresnel_exponent: f32,
    /// exponent of the shell rim opacity falloff
    pub rim_falloff: f32,
    /// night-side fade band of the shell over sun_facing
    pub shell_lit_edges: Vec2,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            day_night_edges: Vec2::new(-0.25, 0.5),
            twilight_edges: Vec2::new(-0.5, 1.0),
            cloud_edges: Vec2::new(0.3, 1.0),
            specular_exponent: 32.0,
            fresnel_exponent: 2.0,
            rim_falloff: 3.0,
            shell_lit_edges: Vec2::new(-0.5, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_clamps_outside_the_band() {
        assert_eq!(smoothstep(-0.25, 0.5, -1.0), 0.0);
        assert_eq!(smoothstep(-0.25, 0.5, 1.0), 1.0);
    }

    #[test]
    fn smoothstep_is_half_at_band_center() {
        let mid = smoothstep(-0.5, 0.5, 0.0);
        assert!((mid - 0.5).abs() < 1e-6);
    }
}
