//! The rendering contract the creation session and the catalog draw through.
//!
//! A surface owns every rendered layer. Callers only ever hold a [`LayerHandle`] and
//! ask the surface to update or remove the layer behind it.

use super::{Bounds, Point};

/// Opaque id of a layer owned by a [`GeoSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerHandle(pub u64);

/// Vector primitives a surface can render
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Marker(Point),
    Polyline(Vec<Point>),
    /// Ring is closed implicitly by the renderer
    Polygon(Vec<Point>),
    Rectangle(Bounds),
    Circle { center: Point, radius_m: f64 },
}

/// Semantic style of a layer; the renderer maps these to colors and stroke widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerStyle {
    /// First point of a box or circle while waiting for the second click
    Anchor,
    /// Filled preview that follows the pointer
    Preview,
    /// Dashed trail through the committed polygon vertices
    PreviewOutline,
    /// A finalized shape
    Final,
}

pub trait GeoSurface {
    fn add_layer(&mut self, geometry: Geometry, style: LayerStyle) -> LayerHandle;

    /// Replace the geometry of an existing layer in place. Unknown handles are ignored.
    fn set_geometry(&mut self, handle: LayerHandle, geometry: Geometry);

    /// Unknown handles are ignored
    fn remove_layer(&mut self, handle: LayerHandle);

    /// Distance in meters in the surface's metric
    fn distance(&self, a: &Point, b: &Point) -> f64;
}
