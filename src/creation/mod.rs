//! Interactive shape creation.
//!
//! [`ShapeCreationSession`] turns a stream of pointer events into either a finalized
//! [`ShapeDescriptor`](crate::shapes::ShapeDescriptor) or a cancellation:
//!
//! - Box and circle: click the anchor, move to preview, click again to finish.
//! - Polygon: click each vertex, then double-click (or quickly click back near the
//!   first vertex) to close the ring.
//! - Right-click cancels whatever is in progress and disarms the mode.
//!
//! The session never renders anything itself. Anchor markers and previews are layers
//! on a [`GeoSurface`](crate::geo::GeoSurface), owned by the session and released on
//! every path out of a state.

mod session;
mod state;

pub use session::ShapeCreationSession;
pub use state::{CancelReason, CreationSettings, SessionEvent, SessionState};
