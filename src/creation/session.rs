use bevy::prelude::*;
use std::time::Duration;

use crate::geo::{Bounds, GeoSurface, Geometry, LayerStyle, Point};
use crate::shapes::{MIN_POLYGON_VERTICES, Shape, ShapeDescriptor, ShapeKind};

use super::state::{
    CancelReason, CreationSettings, PreviewLayers, SessionEvent, SessionState, clear_layer,
    upsert_layer,
};

/// The single in-progress shape creation.
///
/// Every operation takes the surface to draw previews on and returns the event (if
/// any) the operation produced. Timestamps are monotonic time since an arbitrary
/// epoch and are only compared with each other.
#[derive(Resource, Debug, Default)]
pub struct ShapeCreationSession {
    settings: CreationSettings,
    mode: Option<ShapeKind>,
    state: SessionState,
    last_accepted_click: Option<Duration>,
    preview: PreviewLayers,
}

impl ShapeCreationSession {
    pub fn new(settings: CreationSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> &CreationSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: CreationSettings) {
        self.settings = settings;
    }

    /// The armed mode, if any. Toolbar highlighting reads this.
    pub fn mode(&self) -> Option<ShapeKind> {
        self.mode
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_in_progress(&self) -> bool {
        self.state != SessionState::Idle
    }

    /// Arm a mode (or disarm with `None`).
    ///
    /// Selecting the mode that is currently drawing cancels the drawing. Any other
    /// selection discards what was in progress and arms the requested mode.
    pub fn set_mode<S: GeoSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        mode: Option<ShapeKind>,
    ) -> Option<SessionEvent> {
        if self.is_in_progress() && mode.is_some() && mode == self.mode {
            debug!("Mode {:?} selected while drawing; cancelling", mode);
            return self.cancel_with(surface, CancelReason::Toggled);
        }

        let event = self.cancel_with(surface, CancelReason::ModeChanged);
        self.mode = mode;
        debug!("Creation mode set to {:?}", mode);
        event
    }

    pub fn on_primary_click<S: GeoSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        point: Point,
        at: Duration,
    ) -> Option<SessionEvent> {
        match self.mode? {
            ShapeKind::Polygon => self.polygon_click(surface, point, at),
            kind @ (ShapeKind::Box | ShapeKind::Circle) => self.anchored_click(surface, kind, point),
        }
    }

    /// Closes a polygon. Only meaningful while collecting polygon vertices.
    pub fn on_double_primary_click<S: GeoSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        point: Point,
    ) -> Option<SessionEvent> {
        if self.mode != Some(ShapeKind::Polygon)
            || !matches!(self.state, SessionState::CollectingVertices { .. })
        {
            return None;
        }

        self.push_vertex(surface, point);
        self.finalize_polygon(surface)
    }

    /// Cancels and disarms. A no-op (no event) when nothing is armed.
    pub fn on_secondary_click<S: GeoSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Option<SessionEvent> {
        self.cancel(surface)
    }

    /// Redraws the preview to follow the pointer. Committed points are untouched.
    pub fn on_pointer_move<S: GeoSurface + ?Sized>(&mut self, surface: &mut S, point: Point) {
        match &self.state {
            SessionState::Idle => {}
            SessionState::AwaitingSecondPoint { kind, anchor } => {
                let geometry = match kind {
                    ShapeKind::Box => Geometry::Rectangle(Bounds::from_corners(*anchor, point)),
                    ShapeKind::Circle => Geometry::Circle {
                        center: *anchor,
                        radius_m: surface.distance(anchor, &point),
                    },
                    ShapeKind::Polygon => return,
                };
                upsert_layer(&mut self.preview.shape, surface, geometry, LayerStyle::Preview);
            }
            SessionState::CollectingVertices { points } => {
                let mut trail = points.clone();
                trail.push(point);

                upsert_layer(
                    &mut self.preview.outline,
                    surface,
                    Geometry::Polyline(trail.clone()),
                    LayerStyle::PreviewOutline,
                );

                // Two committed points plus the pointer already make a ring
                if points.len() >= 2 {
                    upsert_layer(
                        &mut self.preview.shape,
                        surface,
                        Geometry::Polygon(trail),
                        LayerStyle::Preview,
                    );
                } else {
                    clear_layer(&mut self.preview.shape, surface);
                }
            }
        }
    }

    /// Drops the in-progress shape, disarms the mode and releases all previews
    pub fn cancel<S: GeoSurface + ?Sized>(&mut self, surface: &mut S) -> Option<SessionEvent> {
        self.cancel_with(surface, CancelReason::UserCancelled)
    }

    fn cancel_with<S: GeoSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        reason: CancelReason,
    ) -> Option<SessionEvent> {
        let was_active = self.is_in_progress() || self.mode.is_some();

        self.reset(surface);

        if was_active {
            debug!("Creation cancelled: {:?}", reason);
            Some(SessionEvent::Cancelled(reason))
        } else {
            None
        }
    }

    fn reset<S: GeoSurface + ?Sized>(&mut self, surface: &mut S) {
        self.mode = None;
        self.state = SessionState::Idle;
        self.last_accepted_click = None;
        self.preview.release(surface);
    }

    fn anchored_click<S: GeoSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        kind: ShapeKind,
        point: Point,
    ) -> Option<SessionEvent> {
        let anchor = match &self.state {
            SessionState::Idle => {
                self.preview.marker =
                    Some(surface.add_layer(Geometry::Marker(point), LayerStyle::Anchor));
                self.state = SessionState::AwaitingSecondPoint {
                    kind,
                    anchor: point,
                };
                debug!("{} creation started at {}", kind.name(), point);
                return None;
            }
            SessionState::AwaitingSecondPoint { anchor, .. } => *anchor,
            SessionState::CollectingVertices { .. } => return None,
        };

        // A zero-size box or circle is not a shape; wait for a real second point
        if anchor.same_as(&point) {
            debug!("Second point equals anchor; ignoring");
            return None;
        }

        let shape = match kind {
            ShapeKind::Box => Shape::box_from_corners(anchor, point),
            ShapeKind::Circle => Shape::Circle {
                center: anchor,
                radius_m: surface.distance(&anchor, &point),
            },
            ShapeKind::Polygon => return None,
        };

        self.reset(surface);
        Some(self.emit(surface, shape))
    }

    fn polygon_click<S: GeoSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        point: Point,
        at: Duration,
    ) -> Option<SessionEvent> {
        let (committed, first) = match &self.state {
            SessionState::Idle => {
                self.last_accepted_click = Some(at);
                self.state = SessionState::CollectingVertices {
                    points: vec![point],
                };
                upsert_layer(
                    &mut self.preview.outline,
                    surface,
                    Geometry::Polyline(vec![point]),
                    LayerStyle::PreviewOutline,
                );
                debug!("Polygon creation started at {}", point);
                return None;
            }
            SessionState::CollectingVertices { points } => (points.len(), *points.first()?),
            SessionState::AwaitingSecondPoint { .. } => return None,
        };

        let within_window = self
            .last_accepted_click
            .is_some_and(|last| at.saturating_sub(last) < self.settings.debounce_window);

        if within_window {
            let closes = committed >= MIN_POLYGON_VERTICES
                && surface.distance(&point, &first) < self.settings.closing_tolerance_m;
            if closes {
                debug!("Clicked near the first vertex; closing polygon");
                self.push_vertex(surface, point);
                return self.finalize_polygon(surface);
            }
            // Second half of a double-click; the double-click itself decides
            return None;
        }

        self.last_accepted_click = Some(at);
        self.push_vertex(surface, point);
        None
    }

    /// Appends a vertex unless it repeats the last one. Returns whether it was added.
    fn push_vertex<S: GeoSurface + ?Sized>(&mut self, surface: &mut S, point: Point) -> bool {
        let SessionState::CollectingVertices { points } = &mut self.state else {
            return false;
        };

        if points.last().is_some_and(|last| last.same_as(&point)) {
            debug!("Ignoring duplicate polygon point");
            return false;
        }

        points.push(point);
        debug!("Added polygon point {}: {}", points.len(), point);

        upsert_layer(
            &mut self.preview.outline,
            surface,
            Geometry::Polyline(points.clone()),
            LayerStyle::PreviewOutline,
        );
        true
    }

    fn finalize_polygon<S: GeoSurface + ?Sized>(&mut self, surface: &mut S) -> Option<SessionEvent> {
        let vertices = match &self.state {
            SessionState::CollectingVertices { points } => points.clone(),
            _ => return None,
        };

        if vertices.len() < MIN_POLYGON_VERTICES {
            warn!(
                "Polygon has {} points, needs {}; cancelling",
                vertices.len(),
                MIN_POLYGON_VERTICES
            );
            return self.cancel_with(surface, CancelReason::TooFewPoints);
        }

        self.reset(surface);
        Some(self.emit(surface, Shape::Polygon { vertices }))
    }

    fn emit<S: GeoSurface + ?Sized>(&self, surface: &mut S, shape: Shape) -> SessionEvent {
        let layer = surface.add_layer(shape.geometry(), LayerStyle::Final);
        info!("{} finalized", shape.kind().name());
        SessionEvent::Finalized(ShapeDescriptor { shape, layer })
    }
}
