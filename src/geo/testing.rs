//! In-memory surface for unit tests.

use std::collections::BTreeMap;

use super::{GeoSurface, Geometry, LayerHandle, LayerStyle, Point};

/// Records every layer operation and measures distance on a flat plane.
pub struct RecordingSurface {
    /// Planar distance scale: one degree of either axis is this many meters
    pub meters_per_degree: f64,
    pub layers: BTreeMap<LayerHandle, (Geometry, LayerStyle)>,
    pub removed: Vec<LayerHandle>,
    next_id: u64,
}

impl RecordingSurface {
    pub fn new(meters_per_degree: f64) -> Self {
        Self {
            meters_per_degree,
            layers: BTreeMap::new(),
            removed: Vec::new(),
            next_id: 1,
        }
    }

    pub fn layers_with_style(&self, style: LayerStyle) -> Vec<&Geometry> {
        self.layers
            .values()
            .filter(|(_, s)| *s == style)
            .map(|(g, _)| g)
            .collect()
    }

    pub fn transient_layer_count(&self) -> usize {
        self.layers
            .values()
            .filter(|(_, s)| *s != LayerStyle::Final)
            .count()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl GeoSurface for RecordingSurface {
    fn add_layer(&mut self, geometry: Geometry, style: LayerStyle) -> LayerHandle {
        let handle = LayerHandle(self.next_id);
        self.next_id += 1;
        self.layers.insert(handle, (geometry, style));
        handle
    }

    fn set_geometry(&mut self, handle: LayerHandle, geometry: Geometry) {
        if let Some(entry) = self.layers.get_mut(&handle) {
            entry.0 = geometry;
        }
    }

    fn remove_layer(&mut self, handle: LayerHandle) {
        if self.layers.remove(&handle).is_some() {
            self.removed.push(handle);
        }
    }

    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let dlat = a.lat - b.lat;
        let dlng = a.lng - b.lng;
        (dlat * dlat + dlng * dlng).sqrt() * self.meters_per_degree
    }
}
