use bevy::prelude::*;

use super::EnvironmentSettings;
use crate::assets::GameAssets;
use crate::shaders::{create_ocean_material, OceanSurface, OceanWaterMaterial};

pub fn spawn_ocean(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<OceanWaterMaterial>>,
    settings: Res<EnvironmentSettings>,
    game_assets: Res<GameAssets>,
) {
    let size = settings.water.size;
    let material = create_ocean_material(
        &settings.water,
        settings.sun.direction(),
        game_assets.water_normals.clone(),
    );

    commands.spawn((
        Name::new("Ocean"),
        OceanSurface,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(size, size))),
        MeshMaterial3d(materials.add(material)),
        Transform::default(),
    ));
    info!("Ocean surface spawned ({}x{})", size, size);
}
