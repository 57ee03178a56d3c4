//! Session state, settings and the events a session emits.

use std::fmt;
use std::time::Duration;

use crate::constants::{DEFAULT_CLOSING_TOLERANCE_M, DEFAULT_DOUBLE_CLICK_WINDOW_MS};
use crate::geo::{GeoSurface, Geometry, LayerHandle, LayerStyle, Point};
use crate::shapes::{ShapeDescriptor, ShapeKind};

/// Tunables for polygon closing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreationSettings {
    /// A rapid click this close (meters) to the first vertex closes the polygon
    pub closing_tolerance_m: f64,
    /// Clicks arriving within this window of the last accepted click are treated as
    /// the tail of a double-click
    pub debounce_window: Duration,
}

impl Default for CreationSettings {
    fn default() -> Self {
        Self {
            closing_tolerance_m: DEFAULT_CLOSING_TOLERANCE_M,
            debounce_window: Duration::from_millis(DEFAULT_DOUBLE_CLICK_WINDOW_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// Box or circle with its first point placed
    AwaitingSecondPoint { kind: ShapeKind, anchor: Point },
    /// Polygon with at least one committed vertex
    CollectingVertices { points: Vec<Point> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Right-click or an explicit cancel
    UserCancelled,
    /// The active mode was selected again while drawing
    Toggled,
    /// A different mode was selected
    ModeChanged,
    /// A polygon was closed with fewer than three vertices
    TooFewPoints,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CancelReason::UserCancelled => "Drawing cancelled",
            CancelReason::Toggled => "Drawing cancelled",
            CancelReason::ModeChanged => "Shape mode changed",
            CancelReason::TooFewPoints => "Polygon needs at least 3 points",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Finalized(ShapeDescriptor),
    Cancelled(CancelReason),
}

/// Transient layers owned by the session
#[derive(Debug, Default)]
pub(super) struct PreviewLayers {
    pub marker: Option<LayerHandle>,
    pub outline: Option<LayerHandle>,
    pub shape: Option<LayerHandle>,
}

impl PreviewLayers {
    pub fn release<S: GeoSurface + ?Sized>(&mut self, surface: &mut S) {
        for handle in [self.marker.take(), self.outline.take(), self.shape.take()]
            .into_iter()
            .flatten()
        {
            surface.remove_layer(handle);
        }
    }
}

/// Update the layer in `slot` in place, or create it on first use
pub(super) fn upsert_layer<S: GeoSurface + ?Sized>(
    slot: &mut Option<LayerHandle>,
    surface: &mut S,
    geometry: Geometry,
    style: LayerStyle,
) {
    match slot {
        Some(handle) => surface.set_geometry(*handle, geometry),
        None => *slot = Some(surface.add_layer(geometry, style)),
    }
}

/// Drop the layer in `slot`, if any
pub(super) fn clear_layer<S: GeoSurface + ?Sized>(slot: &mut Option<LayerHandle>, surface: &mut S) {
    if let Some(handle) = slot.take() {
        surface.remove_layer(handle);
    }
}
