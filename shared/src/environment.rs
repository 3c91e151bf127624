//! Fixed ocean, sky and camera parameters.

use bevy::math::Vec3;

/// Unit vector pointing at the sun.
///
/// Elevation is measured up from the horizon and azimuth around the vertical
/// axis, both in degrees; azimuth 0 looks down +Z.
pub fn sun_direction(elevation_deg: f32, azimuth_deg: f32) -> Vec3 {
    let phi = (90.0 - elevation_deg).to_radians();
    let theta = azimuth_deg.to_radians();
    Vec3::new(
        phi.sin() * theta.sin(),
        phi.cos(),
        phi.sin() * theta.cos(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunSettings {
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
}

impl Default for SunSettings {
    fn default() -> Self {
        Self {
            elevation_deg: 2.0,
            azimuth_deg: 180.0,
        }
    }
}

impl SunSettings {
    pub fn direction(&self) -> Vec3 {
        sun_direction(self.elevation_deg, self.azimuth_deg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkySettings {
    pub turbidity: f32,
    /// Multiplier on the atmosphere's default rayleigh coefficient
    pub rayleigh: f32,
    pub mie_coefficient: f32,
    pub mie_directional_g: f32,
}

impl Default for SkySettings {
    fn default() -> Self {
        Self {
            turbidity: 10.0,
            rayleigh: 2.0,
            mie_coefficient: 0.005,
            mie_directional_g: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterSettings {
    pub size: f32,
    /// 0xRRGGBB
    pub water_color: u32,
    pub sun_color: u32,
    pub distortion_scale: f32,
}

impl Default for WaterSettings {
    fn default() -> Self {
        Self {
            size: 10_000.0,
            water_color: 0x001e0f,
            sun_color: 0xffffff,
            distortion_scale: 3.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub start_position: Vec3,
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Largest angle from straight up the camera may reach, in radians.
    pub max_polar_angle: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_deg: 55.0,
            near: 1.0,
            far: 20_000.0,
            start_position: Vec3::new(30.0, 30.0, 100.0),
            target: Vec3::new(0.0, 10.0, 0.0),
            min_distance: 40.0,
            max_distance: 200.0,
            max_polar_angle: std::f32::consts::PI * 0.495,
        }
    }
}

/// Splits a 0xRRGGBB value into linear-agnostic `[r, g, b]` in 0..=1.
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sun_sits_low_behind_negative_z() {
        let sun = SunSettings::default().direction();
        assert!((sun.length() - 1.0).abs() < 1e-5);
        assert!(sun.z < -0.99);
        assert!(sun.y > 0.03 && sun.y < 0.04);
        assert!(sun.x.abs() < 1e-5);
    }

    #[test]
    fn test_zenith_sun() {
        let sun = sun_direction(90.0, 42.0);
        assert!((sun - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb(0xffffff), [1.0, 1.0, 1.0]);
        let [r, g, b] = hex_to_rgb(0x001e0f);
        assert_eq!(r, 0.0);
        assert!((g - 30.0 / 255.0).abs() < 1e-6);
        assert!((b - 15.0 / 255.0).abs() < 1e-6);
    }
}
