use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::config::AppConfig;
use crate::geo::MapProjection;

/// Closest zoom allowed (slippy-map level)
const MAX_ZOOM_LEVEL: u8 = 20;

/// Farthest zoom allowed (slippy-map level)
const MIN_ZOOM_LEVEL: u8 = 1;

/// Scale factor applied per wheel line
const ZOOM_STEP: f32 = 1.2;

#[derive(Component)]
pub struct EditorCamera;

/// World units per pixel
#[derive(Component)]
pub struct CameraZoom {
    pub scale: f32,
}

impl CameraZoom {
    /// Levels outside the supported range are clamped
    pub fn for_zoom_level(level: u8) -> Self {
        Self {
            scale: MapProjection::scale_for_zoom(level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)),
        }
    }

    /// Apply `steps` wheel lines (positive zooms in), staying within the zoom range
    pub fn apply_steps(&mut self, steps: f32) {
        let min = MapProjection::scale_for_zoom(MAX_ZOOM_LEVEL);
        let max = MapProjection::scale_for_zoom(MIN_ZOOM_LEVEL);
        self.scale = (self.scale * ZOOM_STEP.powf(-steps)).clamp(min, max);
    }
}

pub fn spawn_camera(mut commands: Commands, config: Res<AppConfig>) {
    let zoom = CameraZoom::for_zoom_level(config.data.map.zoom);
    commands.spawn((
        Camera2d,
        EditorCamera,
        Projection::Orthographic(OrthographicProjection {
            scale: zoom.scale,
            ..OrthographicProjection::default_2d()
        }),
        zoom,
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}

pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<bevy::input::mouse::MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<EditorCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    for event in mouse_motion.read() {
        let delta = event.delta * zoom.scale;
        transform.translation.x -= delta.x;
        transform.translation.y += delta.y;
    }
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraZoom, With<EditorCamera>>,
) {
    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let steps = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 40.0,
        };

        zoom.apply_steps(steps);
    }
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CameraZoom, &mut Projection), (With<EditorCamera>, Changed<CameraZoom>)>,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale;
        }
    }
}
