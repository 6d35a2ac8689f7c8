//! Spherical sun parameterization.
//!
//! Axis convention (shared with the WGSL shaders and the debug marker):
//! Y-up, polar angle 0 points at the +Y pole, azimuth 0 points at +Z and
//! sweeps toward +X. Radius is fixed at unit length.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// The two user-adjustable sun angles. The panel's slider bounds are the
/// only clamping; the conversion itself accepts any real input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunParameters {
    /// [0, PI], 0 = +Y pole
    pub polar: f32,
    /// [-PI, PI], 0 = +Z
    pub azimuth: f32,
}

impl Default for SunParameters {
    fn default() -> Self {
        Self {
            polar: FRAC_PI_2,
            azimuth: 0.5,
        }
    }
}

impl SunParameters {
    pub fn direction(&self) -> Vec3 {
        compute_sun_direction(self.polar, self.azimuth)
    }
}

/// Spherical to cartesian conversion. Pure, no range checks, no hidden state.
pub fn compute_sun_direction(polar: f32, azimuth: f32) -> Vec3 {
    let (sin_polar, cos_polar) = polar.sin_cos();
    Vec3::new(
        sin_polar * azimuth.sin(),
        cos_polar,
        sin_polar * azimuth.cos(),
    )
}
