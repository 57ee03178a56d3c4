//! Hit detection for clicking finalized shapes on the map.

use crate::geo::{Bounds, GeoSurface, Point};

use super::catalog::ShapeCatalog;
use super::descriptor::Shape;

/// Even-odd ray casting in the lat/lng plane. The ring is closed implicitly.
pub fn point_in_ring(point: &Point, ring: &[Point]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (&ring[i], &ring[j]);
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let cross_lng = (b.lng - a.lng) * (point.lat - a.lat) / (b.lat - a.lat) + a.lng;
            if point.lng < cross_lng {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

impl Shape {
    pub fn contains<S: GeoSurface + ?Sized>(&self, point: &Point, surface: &S) -> bool {
        match self {
            Shape::Box {
                northeast,
                southwest,
            } => Bounds {
                northeast: *northeast,
                southwest: *southwest,
            }
            .contains(point),
            Shape::Circle { center, radius_m } => surface.distance(center, point) <= *radius_m,
            Shape::Polygon { vertices } => point_in_ring(point, vertices),
        }
    }
}

/// Index of the topmost (most recently added) shape under `point`
pub fn shape_at<S: GeoSurface + ?Sized>(
    catalog: &ShapeCatalog,
    point: &Point,
    surface: &S,
) -> Option<usize> {
    catalog
        .list()
        .filter(|(_, d)| d.shape.contains(point, surface))
        .map(|(i, _)| i)
        .last()
}
