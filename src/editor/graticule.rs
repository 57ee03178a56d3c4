use bevy::prelude::*;

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::geo::{MapProjection, Point};
use crate::theme;

use super::camera::{CameraZoom, EditorCamera};
use super::params::CameraParams;

/// Candidate spacings in degrees, smallest first
const STEPS_DEG: [f64; 16] = [
    0.0001, 0.0002, 0.0005, 0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0,
    10.0,
];

/// Upper bound on lines drawn along each axis
const MAX_LINES: f64 = 24.0;

/// Smallest candidate spacing that keeps `span_deg` under the line cap
pub fn graticule_step(span_deg: f64) -> f64 {
    STEPS_DEG
        .iter()
        .copied()
        .find(|step| span_deg / step <= MAX_LINES)
        .unwrap_or(STEPS_DEG[STEPS_DEG.len() - 1])
}

/// Multiples of `step` covering `min..=max`
fn graticule_lines(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let start = (min / step).floor() as i64;
    let end = (max / step).ceil() as i64;
    (start..=end).map(move |i| i as f64 * step)
}

fn line_color(value: f64) -> Color {
    if value.abs() < 1.0e-12 {
        theme::GRATICULE_AXIS_COLOR
    } else {
        theme::GRATICULE_COLOR
    }
}

pub fn draw_graticule(
    mut gizmos: Gizmos,
    projection: Res<MapProjection>,
    camera: CameraParams,
    camera_query: Query<(&Transform, &CameraZoom), With<EditorCamera>>,
) {
    let Ok((camera_transform, zoom)) = camera_query.single() else {
        return;
    };

    let window = camera
        .window_size()
        .unwrap_or(Vec2::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    let half_view = window * zoom.scale / 2.0;
    let camera_pos = camera_transform.translation.truncate();

    let southwest = projection.to_point(camera_pos - half_view);
    let northeast = projection.to_point(camera_pos + half_view);

    let step = graticule_step((northeast.lng - southwest.lng).max(northeast.lat - southwest.lat));

    for lng in graticule_lines(southwest.lng, northeast.lng, step) {
        gizmos.line_2d(
            projection.to_world(&Point::new(southwest.lat, lng)),
            projection.to_world(&Point::new(northeast.lat, lng)),
            line_color(lng),
        );
    }

    for lat in graticule_lines(southwest.lat, northeast.lat, step) {
        gizmos.line_2d(
            projection.to_world(&Point::new(lat, southwest.lng)),
            projection.to_world(&Point::new(lat, northeast.lng)),
            line_color(lat),
        );
    }
}
