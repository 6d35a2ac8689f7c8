use bevy::asset::Asset;
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::render_resource::*;

use crate::shading::{ShadingConfig, SkyParams};

// uniform blocks for the two globe shaders
// fields are ordered into 16-byte rows to satisfy WGSL uniform layout rules
// https://www.w3.org/TR/WGSL/#address-space-layout-constraints
#[derive(ShaderType, Clone, Copy, Debug)]
#[repr(C)]
pub struct GlobeUniform {
    pub sun_direction: Vec3,
    pub clouds_intensity: f32,
    pub atmosphere_day_color: Vec3,
    pub specular_intensity: f32,
    pub atmosphere_twilight_color: Vec3,
    pub fresnel_exponent: f32,
    pub day_night_edges: Vec2,
    pub twilight_edges: Vec2,
    pub cloud_edges: Vec2,
    pub specular_exponent: f32,
    pub _padding: f32,
}

impl GlobeUniform {
    pub fn from_params(params: &SkyParams, config: &ShadingConfig) -> Self {
        Self {
            sun_direction: params.sun.direction(),
            clouds_intensity: params.clouds_intensity,
            atmosphere_day_color: params.colors.day,
            specular_intensity: params.specular_intensity,
            atmosphere_twilight_color: params.colors.twilight,
            fresnel_exponent: config.fresnel_exponent,
            day_night_edges: config.day_night_edges,
            twilight_edges: config.twilight_edges,
            cloud_edges: config.cloud_edges,
            specular_exponent: config.specular_exponent,
            _padding: 0.0,
        }
    }
}

#[derive(ShaderType, Clone, Copy, Debug)]
#[repr(C)]
pub struct ShellUniform {
    pub sun_direction: Vec3,
    pub rim_falloff: f32,
    pub atmosphere_day_color: Vec3,
    pub _padding0: f32,
    pub atmosphere_twilight_color: Vec3,
    pub _padding1: f32,
    pub twilight_edges: Vec2,
    pub shell_lit_edges: Vec2,
}

impl ShellUniform {
    pub fn from_params(params: &SkyParams, config: &ShadingConfig) -> Self {
        Self {
            sun_direction: params.sun.direction(),
            rim_falloff: config.rim_falloff,
            atmosphere_day_color: params.colors.day,
            _padding0: 0.0,
            atmosphere_twilight_color: params.colors.twilight,
            _padding1: 0.0,
            twilight_edges: config.twilight_edges,
            shell_lit_edges: config.shell_lit_edges,
        }
    }
}

// earth surface material
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct EarthMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub day_texture: Handle<Image>,
    #[texture(2)]
    #[sampler(3)]
    pub night_texture: Handle<Image>,
    #[texture(4)]
    #[sampler(5)]
    pub clouds_texture: Handle<Image>,
    #[uniform(6)]
    pub globe_uniform: GlobeUniform,
}

impl Material for EarthMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/earth.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Opaque
    }
}

// atmosphere shell material
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct AtmosphereMaterial {
    #[uniform(0)]
    pub shell_uniform: ShellUniform,
}

impl Material for AtmosphereMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/atmosphere.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &bevy::pbr::MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &bevy::render::mesh::MeshVertexBufferLayoutRef,
        _key: bevy::pbr::MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // back faces only, the viewer sees the far rim through the shell
        descriptor.primitive.cull_mode = Some(Face::Front);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_uniform_blocks_come_from_the_same_source() {
        let mut params = SkyParams::default();
        params.colors.day = Vec3::new(0.2, 0.5, 0.8);
        params.colors.twilight = Vec3::new(0.8, 0.2, 0.1);
        let config = ShadingConfig::default();

        let globe = GlobeUniform::from_params(&params, &config);
        let shell = ShellUniform::from_params(&params, &config);

        assert_eq!(globe.sun_direction, shell.sun_direction);
        assert_eq!(globe.atmosphere_day_color, shell.atmosphere_day_color);
        assert_eq!(
            globe.atmosphere_twilight_color,
            shell.atmosphere_twilight_color
        );
        assert_eq!(globe.twilight_edges, shell.twilight_edges);
    }
}
