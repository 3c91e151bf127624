//! Orbit camera around a fixed point above the water.

use bevy::{
    core_pipeline::tonemapping::Tonemapping,
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit},
    prelude::*,
    window::WindowResized,
};
use bevy_atmosphere::prelude::AtmosphereCamera;
use shared::environment::CameraSettings;

/// Radians of rotation per pixel of mouse drag.
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Fraction of the distance removed per wheel line.
const ZOOM_STEP: f32 = 0.05;
const PIXELS_PER_LINE: f32 = 100.0;
/// Keeps the camera off the pole, where the orbit would flip.
const MIN_POLAR_ANGLE: f32 = 0.01;

/// Spherical coordinates of the camera around `target`. The polar angle is
/// measured from straight up and the azimuth around +Y from +Z.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
    min_radius: f32,
    max_radius: f32,
    max_polar: f32,
}

impl OrbitCamera {
    pub fn from_settings(settings: &CameraSettings) -> Self {
        let offset = settings.start_position - settings.target;
        let radius = offset.length().max(f32::EPSILON);
        let mut orbit = Self {
            target: settings.target,
            radius,
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: offset.x.atan2(offset.z),
            min_radius: settings.min_distance,
            max_radius: settings.max_distance,
            max_polar: settings.max_polar_angle,
        };
        orbit.clamp();
        orbit
    }

    fn clamp(&mut self) {
        self.radius = self.radius.clamp(self.min_radius, self.max_radius);
        self.polar = self.polar.clamp(MIN_POLAR_ANGLE, self.max_polar);
    }

    pub fn translation(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.target
            + self.radius * Vec3::new(sin_polar * sin_azimuth, cos_polar, sin_polar * cos_azimuth)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).looking_at(self.target, Vec3::Y)
    }

    /// Dragging right swings the camera left around the target, dragging
    /// down raises it.
    pub fn rotate(&mut self, drag: Vec2) {
        self.azimuth -= drag.x * ORBIT_SENSITIVITY;
        self.polar -= drag.y * ORBIT_SENSITIVITY;
        self.clamp();
    }

    /// Positive `lines` move closer.
    pub fn zoom(&mut self, lines: f32) {
        self.radius *= (1.0 - ZOOM_STEP).powf(lines);
        self.clamp();
    }
}

fn spawn_camera(mut commands: Commands) {
    let settings = CameraSettings::default();
    let orbit = OrbitCamera::from_settings(&settings);

    commands.spawn((
        Name::new("Camera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.fov_deg.to_radians(),
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        Tonemapping::AcesFitted,
        AtmosphereCamera::default(),
        orbit.transform(),
        orbit,
    ));
}

fn orbit_camera_system(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let drag = if mouse_buttons.pressed(MouseButton::Left) {
        mouse_motion.delta
    } else {
        Vec2::ZERO
    };
    let lines = match mouse_scroll.unit {
        MouseScrollUnit::Line => mouse_scroll.delta.y,
        MouseScrollUnit::Pixel => mouse_scroll.delta.y / PIXELS_PER_LINE,
    };

    if drag == Vec2::ZERO && lines == 0.0 {
        return;
    }

    for (mut orbit, mut transform) in &mut cameras {
        orbit.rotate(drag);
        orbit.zoom(lines);
        *transform = orbit.transform();
    }
}

fn log_window_resize(mut resize_events: EventReader<WindowResized>) {
    // The engine keeps the projection aspect ratio in sync on its own.
    for event in resize_events.read() {
        debug!("Window resized to {}x{}", event.width, event.height);
    }
}

pub fn camera_plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera)
        .add_systems(Update, (orbit_camera_system, log_window_resize));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_start_position_round_trips() {
        let settings = CameraSettings::default();
        let orbit = OrbitCamera::from_settings(&settings);
        assert!((orbit.translation() - settings.start_position).length() < 1e-3);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::from_settings(&CameraSettings::default());
        orbit.zoom(1000.0);
        assert_eq!(orbit.radius, 40.0);
        orbit.zoom(-1000.0);
        assert_eq!(orbit.radius, 200.0);
    }

    #[test]
    fn test_camera_cannot_go_below_horizon() {
        let mut orbit = OrbitCamera::from_settings(&CameraSettings::default());
        orbit.rotate(Vec2::new(0.0, -100_000.0));
        assert!((orbit.polar - PI * 0.495).abs() < 1e-6);
        assert!(orbit.translation().y > orbit.target.y);
    }

    #[test]
    fn test_camera_looks_at_target() {
        let orbit = OrbitCamera::from_settings(&CameraSettings::default());
        let transform = orbit.transform();
        let to_target = (orbit.target - transform.translation).normalize();
        assert!((transform.forward().as_vec3() - to_target).length() < 1e-4);
    }
}
