//! Open ocean surface material.
//!
//! Extends Bevy's `StandardMaterial` with a fragment shader that perturbs the
//! surface normal with four scrolling samples of a tiling normal map and adds
//! a specular glint towards the sun. The time uniform advances every frame.

use bevy::{
    asset::embedded_asset,
    pbr::{ExtendedMaterial, MaterialExtension},
    prelude::*,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
};
use shared::environment::{hex_to_rgb, WaterSettings};

/// Plugin that registers the ocean material and its embedded shader.
pub struct OceanWaterPlugin;

impl Plugin for OceanWaterPlugin {
    fn build(&self, app: &mut App) {
        embedded_asset!(app, "ocean_water.wgsl");

        app.add_plugins(MaterialPlugin::<OceanWaterMaterial>::default())
            .add_systems(Update, advance_water_time);
    }
}

/// Uniform block read by `ocean_water.wgsl`.
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct OceanWaterUniform {
    pub sun_direction: Vec3,
    /// Seconds of animation, drives the normal map scroll
    pub time: f32,
    pub sun_color: LinearRgba,
    pub water_color: LinearRgba,
    pub distortion_scale: f32,
}

#[derive(Asset, AsBindGroup, TypePath, Debug, Clone)]
pub struct OceanWaterExtension {
    #[uniform(100)]
    pub uniform: OceanWaterUniform,
    #[texture(101)]
    #[sampler(102)]
    pub normals: Handle<Image>,
}

impl MaterialExtension for OceanWaterExtension {
    fn fragment_shader() -> ShaderRef {
        "embedded://ocean_cleanup/shaders/ocean_water.wgsl".into()
    }

    fn deferred_fragment_shader() -> ShaderRef {
        "embedded://ocean_cleanup/shaders/ocean_water.wgsl".into()
    }
}

pub type OceanWaterMaterial = ExtendedMaterial<StandardMaterial, OceanWaterExtension>;

fn srgb_hex(hex: u32) -> Color {
    let [r, g, b] = hex_to_rgb(hex);
    Color::srgb(r, g, b)
}

pub fn create_ocean_material(
    settings: &WaterSettings,
    sun_direction: Vec3,
    normals: Handle<Image>,
) -> OceanWaterMaterial {
    let water_color = srgb_hex(settings.water_color);

    ExtendedMaterial {
        base: StandardMaterial {
            base_color: water_color,
            perceptual_roughness: 0.08,
            reflectance: 0.6,
            ..default()
        },
        extension: OceanWaterExtension {
            uniform: OceanWaterUniform {
                sun_direction: sun_direction.normalize_or_zero(),
                time: 0.0,
                sun_color: srgb_hex(settings.sun_color).to_linear(),
                water_color: water_color.to_linear(),
                distortion_scale: settings.distortion_scale,
            },
            normals,
        },
    }
}

/// Marks the entity carrying the ocean mesh.
#[derive(Component)]
pub struct OceanSurface;

fn advance_water_time(
    time: Res<Time>,
    surfaces: Query<&MeshMaterial3d<OceanWaterMaterial>, With<OceanSurface>>,
    mut materials: ResMut<Assets<OceanWaterMaterial>>,
) {
    for handle in &surfaces {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.extension.uniform.time += time.delta_secs();
        }
    }
}
