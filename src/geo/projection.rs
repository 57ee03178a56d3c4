//! Spherical web mercator projection between lat/lng and editor world space.

use bevy::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::{Point, EARTH_RADIUS_M};

/// Mercator is undefined at the poles; latitudes are clamped to the usual web map limit
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Pixel size of one slippy-map tile
const TILE_SIZE_PX: f64 = 256.0;

/// Projects points into world space, one world unit per projected meter.
///
/// World coordinates are taken relative to `origin` so that f32 positions stay precise
/// around the area being edited.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MapProjection {
    pub origin: Point,
}

impl MapProjection {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    fn project(point: &Point) -> (f64, f64) {
        let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = EARTH_RADIUS_M * point.lng.to_radians();
        let y = EARTH_RADIUS_M * (FRAC_PI_4 + lat / 2.0).tan().ln();
        (x, y)
    }

    pub fn to_world(&self, point: &Point) -> Vec2 {
        let (ox, oy) = Self::project(&self.origin);
        let (x, y) = Self::project(point);
        Vec2::new((x - ox) as f32, (y - oy) as f32)
    }

    pub fn to_point(&self, world: Vec2) -> Point {
        let (ox, oy) = Self::project(&self.origin);
        let x = world.x as f64 + ox;
        let y = world.y as f64 + oy;
        let lat = 2.0 * (y / EARTH_RADIUS_M).exp().atan() - FRAC_PI_2;
        Point::new(lat.to_degrees(), (x / EARTH_RADIUS_M).to_degrees())
    }

    /// Length in world units of a ground distance measured at `lat`
    pub fn meters_to_world(&self, meters: f64, lat: f64) -> f32 {
        let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        (meters / lat.cos()) as f32
    }

    /// Orthographic camera scale (world units per pixel) matching a slippy-map zoom level
    pub fn scale_for_zoom(zoom: u8) -> f32 {
        (2.0 * PI * EARTH_RADIUS_M / (TILE_SIZE_PX * 2f64.powi(zoom as i32))) as f32
    }
}
