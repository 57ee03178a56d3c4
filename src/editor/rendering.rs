//! Gizmo rendering of every layer on the map surface.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

use crate::constants::ANCHOR_MARKER_RADIUS_PX;
use crate::geo::{Geometry, LayerHandle, LayerStyle, MapProjection};
use crate::shapes::ShapeCatalog;
use crate::theme;

use super::camera::{CameraZoom, EditorCamera};
use super::catalog_sync::InspectedShape;
use super::surface::MapSurface;

/// Gizmo group for shape layers, drawn above the graticule with thicker lines
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct MapGizmoGroup;

pub fn configure_map_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<MapGizmoGroup>();
    config.line.width = 2.5;
}

/// A layer reduced to what the gizmo API draws
#[derive(Debug, Clone, PartialEq)]
enum Outline {
    Strip(Vec<Vec2>),
    Circle { center: Vec2, radius: f32 },
}

/// World-space outline of a geometry. `marker_radius` is in world units.
fn outline(geometry: &Geometry, projection: &MapProjection, marker_radius: f32) -> Option<Outline> {
    match geometry {
        Geometry::Marker(point) => Some(Outline::Circle {
            center: projection.to_world(point),
            radius: marker_radius,
        }),
        Geometry::Polyline(points) => {
            if points.len() < 2 {
                return None;
            }
            Some(Outline::Strip(
                points.iter().map(|p| projection.to_world(p)).collect(),
            ))
        }
        Geometry::Polygon(points) => {
            if points.len() < 2 {
                return None;
            }
            let mut strip: Vec<Vec2> = points.iter().map(|p| projection.to_world(p)).collect();
            strip.push(strip[0]);
            Some(Outline::Strip(strip))
        }
        Geometry::Rectangle(bounds) => {
            let mut strip: Vec<Vec2> = bounds
                .corners()
                .iter()
                .map(|p| projection.to_world(p))
                .collect();
            strip.push(strip[0]);
            Some(Outline::Strip(strip))
        }
        Geometry::Circle { center, radius_m } => Some(Outline::Circle {
            center: projection.to_world(center),
            radius: projection.meters_to_world(*radius_m, center.lat),
        }),
    }
}

fn layer_color(handle: LayerHandle, style: LayerStyle, highlighted: Option<LayerHandle>) -> Color {
    if highlighted == Some(handle) {
        return theme::HIGHLIGHT_COLOR;
    }
    match style {
        LayerStyle::PreviewOutline => theme::layer_color(style).with_alpha(0.6),
        _ => theme::layer_color(style),
    }
}

pub fn render_map_layers(
    mut gizmos: Gizmos<MapGizmoGroup>,
    surface: Res<MapSurface>,
    projection: Res<MapProjection>,
    catalog: Res<ShapeCatalog>,
    inspected: Res<InspectedShape>,
    camera_query: Query<&CameraZoom, With<EditorCamera>>,
) {
    let Ok(zoom) = camera_query.single() else {
        return;
    };

    let marker_radius = ANCHOR_MARKER_RADIUS_PX * zoom.scale;
    let highlighted = inspected
        .index
        .and_then(|index| catalog.get(index))
        .map(|descriptor| descriptor.layer);

    for (handle, layer) in surface.layers() {
        let color = layer_color(handle, layer.style, highlighted);
        match outline(&layer.geometry, &projection, marker_radius) {
            Some(Outline::Strip(points)) => gizmos.linestrip_2d(points, color),
            Some(Outline::Circle { center, radius }) => {
                gizmos.circle_2d(center, radius, color);
            }
            None => {}
        }
    }
}
