//! Keeps the shape catalog in step with session events and UI requests.

use bevy::prelude::*;

use crate::shapes::{CatalogError, ShapeCatalog};

use super::messages::{DeleteShapeRequest, ShapeFinalized};
use super::surface::MapSurface;

/// Catalog index of the shape shown in the inspector window
#[derive(Resource, Debug, Default)]
pub struct InspectedShape {
    pub index: Option<usize>,
}

impl InspectedShape {
    /// Keep the inspected index pointing at the same shape after `removed` is deleted
    pub fn shift_after_removal(&mut self, removed: usize) {
        self.index = match self.index {
            Some(index) if index == removed => None,
            Some(index) if index > removed => Some(index - 1),
            other => other,
        };
    }
}

pub fn store_finalized_shapes(
    mut events: MessageReader<ShapeFinalized>,
    mut catalog: ResMut<ShapeCatalog>,
) {
    for event in events.read() {
        let index = catalog.append(event.descriptor.clone());
        info!(
            "Stored {} ({} shapes in catalog)",
            event.descriptor.title(index),
            catalog.len()
        );
    }
}

pub fn handle_delete_requests(
    mut events: MessageReader<DeleteShapeRequest>,
    mut catalog: ResMut<ShapeCatalog>,
    mut surface: ResMut<MapSurface>,
    mut inspected: ResMut<InspectedShape>,
) {
    for event in events.read() {
        match catalog.remove_at(event.index, &mut *surface) {
            Ok(removed) => {
                info!("Deleted {}", removed.title(event.index));
                debug!("{} layers left on the map", surface.len());
                inspected.shift_after_removal(event.index);
            }
            Err(CatalogError::IndexOutOfRange { index, len }) => {
                warn!("Ignoring delete of shape {}: catalog has {}", index, len);
            }
        }
    }
}
