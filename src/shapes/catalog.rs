//! Ordered store of finalized shapes.
//!
//! Insertion order is display order. Entries are addressed by position, so removing
//! one shifts every later index down; callers re-read [`ShapeCatalog::list`] after any
//! mutation.

use bevy::prelude::*;
use std::fmt;

use crate::geo::GeoSurface;

use super::descriptor::ShapeDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::IndexOutOfRange { index, len } => {
                write!(f, "shape index {} out of range (catalog has {})", index, len)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Resource, Debug, Default)]
pub struct ShapeCatalog {
    shapes: Vec<ShapeDescriptor>,
}

impl ShapeCatalog {
    /// Adds a shape at the end and returns its index
    pub fn append(&mut self, descriptor: ShapeDescriptor) -> usize {
        self.shapes.push(descriptor);
        self.shapes.len() - 1
    }

    /// Removes the shape at `index` and releases its layer on the surface
    pub fn remove_at<S: GeoSurface + ?Sized>(
        &mut self,
        index: usize,
        surface: &mut S,
    ) -> Result<ShapeDescriptor, CatalogError> {
        if index >= self.shapes.len() {
            return Err(CatalogError::IndexOutOfRange {
                index,
                len: self.shapes.len(),
            });
        }

        let removed = self.shapes.remove(index);
        surface.remove_layer(removed.layer);
        Ok(removed)
    }

    pub fn list(&self) -> impl Iterator<Item = (usize, &ShapeDescriptor)> {
        self.shapes.iter().enumerate()
    }

    pub fn get(&self, index: usize) -> Option<&ShapeDescriptor> {
        self.shapes.get(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
