mod ocean;
mod sky;

use bevy::prelude::*;
use bevy_atmosphere::prelude::AtmospherePlugin;
use shared::environment::{SkySettings, SunSettings, WaterSettings};

pub use ocean::*;
pub use sky::*;

use crate::assets;

/// Fixed environment parameters, shared by the sky, the sun light and the
/// water shader.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct EnvironmentSettings {
    pub sun: SunSettings,
    pub sky: SkySettings,
    pub water: WaterSettings,
}

pub fn environment_plugin(app: &mut App) {
    let settings = EnvironmentSettings::default();

    app.add_plugins(AtmospherePlugin)
        .insert_resource(atmosphere_model(&settings.sky, settings.sun.direction()))
        .insert_resource(settings)
        .add_systems(
            Startup,
            (
                spawn_sun,
                spawn_ocean.after(assets::request_game_assets),
            ),
        );
}
