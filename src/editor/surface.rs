//! The editor's map surface: a table of layers drawn with gizmos every frame.

use bevy::prelude::*;
use std::collections::BTreeMap;

use crate::geo::{GeoSurface, Geometry, LayerHandle, LayerStyle, Point};

#[derive(Debug, Clone, PartialEq)]
pub struct MapLayer {
    pub geometry: Geometry,
    pub style: LayerStyle,
}

/// Layers in creation order. Handles are never reused.
#[derive(Resource, Debug, Default)]
pub struct MapSurface {
    layers: BTreeMap<LayerHandle, MapLayer>,
    next_id: u64,
}

impl MapSurface {
    pub fn layers(&self) -> impl Iterator<Item = (LayerHandle, &MapLayer)> {
        self.layers.iter().map(|(handle, layer)| (*handle, layer))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }
}

impl GeoSurface for MapSurface {
    fn add_layer(&mut self, geometry: Geometry, style: LayerStyle) -> LayerHandle {
        self.next_id += 1;
        let handle = LayerHandle(self.next_id);
        self.layers.insert(handle, MapLayer { geometry, style });
        handle
    }

    fn set_geometry(&mut self, handle: LayerHandle, geometry: Geometry) {
        match self.layers.get_mut(&handle) {
            Some(layer) => layer.geometry = geometry,
            None => debug!("Ignoring update for unknown layer {:?}", handle),
        }
    }

    fn remove_layer(&mut self, handle: LayerHandle) {
        if self.layers.remove(&handle).is_none() {
            debug!("Ignoring removal of unknown layer {:?}", handle);
        }
    }

    fn distance(&self, a: &Point, b: &Point) -> f64 {
        a.haversine_distance(b)
    }
}
