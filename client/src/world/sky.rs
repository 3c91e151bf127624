use bevy::{pbr::light_consts, prelude::*};
use bevy_atmosphere::prelude::{AtmosphereModel, Nishita};
use shared::environment::SkySettings;

use super::EnvironmentSettings;

/// Haze of the reference sky: turbidity 10 with a 0.005 mie coefficient maps
/// onto the scattering model's default mie coefficient.
const REFERENCE_HAZE: f32 = 10.0 * 0.005;

pub fn atmosphere_model(sky: &SkySettings, sun_direction: Vec3) -> AtmosphereModel {
    let defaults = Nishita::default();
    AtmosphereModel::new(Nishita {
        sun_position: sun_direction,
        rayleigh_coefficient: defaults.rayleigh_coefficient * sky.rayleigh,
        mie_coefficient: defaults.mie_coefficient * sky.turbidity * sky.mie_coefficient
            / REFERENCE_HAZE,
        mie_direction: sky.mie_directional_g,
        ..defaults
    })
}

/// Directional light shining from the sun towards the origin.
pub fn spawn_sun(mut commands: Commands, settings: Res<EnvironmentSettings>) {
    let sun = settings.sun.direction();
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: light_consts::lux::AMBIENT_DAYLIGHT,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(sun).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    debug!(
        "Sun at elevation {} azimuth {} -> {:?}",
        settings.sun.elevation_deg, settings.sun.azimuth_deg, sun
    );
}
