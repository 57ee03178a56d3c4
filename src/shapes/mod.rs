//! Finalized shapes and the catalog that owns them.
//!
//! ## Module Structure
//!
//! - [`descriptor`] - Shape geometry ([`Shape`]) plus its rendered layer ([`ShapeDescriptor`])
//! - [`catalog`] - Ordered, index-addressed store of finalized shapes
//! - [`hit_testing`] - Point-in-shape checks for clicking shapes on the map

mod catalog;
mod descriptor;
mod hit_testing;

pub use catalog::{CatalogError, ShapeCatalog};
pub use descriptor::{MIN_POLYGON_VERTICES, Shape, ShapeDescriptor, ShapeKind};
pub use hit_testing::shape_at;
