//! Geographic primitives shared by the creation session, the catalog and the map surface.
//!
//! All coordinates are WGS84 latitude/longitude in degrees. Distances are meters on a
//! spherical earth, the same metric the map surface reports to the creation session.

mod projection;
mod surface;
#[cfg(test)]
pub mod testing;

pub use projection::MapProjection;
pub use surface::{GeoSurface, Geometry, LayerHandle, LayerStyle};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean earth radius used by the haversine metric and the mercator projection
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Two points closer than this (in degrees, per axis) are the same point
const POINT_MARGIN: f64 = 1.0e-9;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Equality with a tiny tolerance, used to drop repeated clicks on one spot
    pub fn same_as(&self, other: &Point) -> bool {
        (self.lat - other.lat).abs() <= POINT_MARGIN && (self.lng - other.lng).abs() <= POINT_MARGIN
    }

    /// Great-circle distance in meters
    pub fn haversine_distance(&self, other: &Point) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let sin_dlat = ((other.lat - self.lat).to_radians() / 2.0).sin();
        let sin_dlng = ((other.lng - self.lng).to_radians() / 2.0).sin();

        let a = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng;
        2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Axis-aligned lat/lng rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub northeast: Point,
    pub southwest: Point,
}

impl Bounds {
    /// Normalizes two arbitrary corners into northeast/southwest form
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            northeast: Point::new(a.lat.max(b.lat), a.lng.max(b.lng)),
            southwest: Point::new(a.lat.min(b.lat), a.lng.min(b.lng)),
        }
    }

    pub fn northwest(&self) -> Point {
        Point::new(self.northeast.lat, self.southwest.lng)
    }

    pub fn southeast(&self) -> Point {
        Point::new(self.southwest.lat, self.northeast.lng)
    }

    /// Corners in ring order: NW, NE, SE, SW
    pub fn corners(&self) -> [Point; 4] {
        [
            self.northwest(),
            self.northeast,
            self.southeast(),
            self.southwest,
        ]
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.lat >= self.southwest.lat
            && point.lat <= self.northeast.lat
            && point.lng >= self.southwest.lng
            && point.lng <= self.northeast.lng
    }
}
