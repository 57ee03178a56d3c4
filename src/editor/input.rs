//! Translates bevy mouse input into creation session and inspection operations.

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use std::time::Duration;

use crate::constants::DOUBLE_CLICK_MAX_TRAVEL_PX;
use crate::creation::ShapeCreationSession;
use crate::geo::MapProjection;
use crate::shapes::{ShapeCatalog, shape_at};

use super::catalog_sync::InspectedShape;
use super::params::{CameraParams, SessionEventWriters, is_cursor_over_ui};
use super::surface::MapSurface;

/// Recognizes double clicks from consecutive left presses
#[derive(Resource, Debug, Default)]
pub struct ClickTracker {
    last_press: Option<(Duration, Vec2)>,
    last_pointer: Option<Vec2>,
}

impl ClickTracker {
    /// Records a press and reports whether it completes a double click.
    ///
    /// A completed double click is forgotten, so a third quick press starts a new pair.
    pub fn register_press(&mut self, now: Duration, screen: Vec2, window: Duration) -> bool {
        if let Some((at, position)) = self.last_press
            && now.saturating_sub(at) <= window
            && position.distance(screen) <= DOUBLE_CLICK_MAX_TRAVEL_PX
        {
            self.last_press = None;
            return true;
        }

        self.last_press = Some((now, screen));
        false
    }

    /// Returns true when the pointer is somewhere new
    fn pointer_moved(&mut self, world: Vec2) -> bool {
        if self.last_pointer == Some(world) {
            return false;
        }
        self.last_pointer = Some(world);
        true
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_pointer_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    time: Res<Time<Real>>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    projection: Res<MapProjection>,
    catalog: Res<ShapeCatalog>,
    mut session: ResMut<ShapeCreationSession>,
    mut surface: ResMut<MapSurface>,
    mut inspected: ResMut<InspectedShape>,
    mut tracker: ResMut<ClickTracker>,
    mut events: SessionEventWriters,
) {
    if is_cursor_over_ui(&mut contexts) {
        return;
    }

    let Some((screen_pos, world_pos)) = camera.cursor_positions() else {
        return;
    };
    let point = projection.to_point(world_pos);

    if tracker.pointer_moved(world_pos) {
        session.on_pointer_move(&mut *surface, point);
    }

    if mouse_button.just_pressed(MouseButton::Right) {
        events.forward(session.on_secondary_click(&mut *surface));
    }

    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    // With nothing armed a click inspects whatever shape is under the pointer
    if session.mode().is_none() {
        inspected.index = shape_at(&catalog, &point, &*surface);
        return;
    }

    let now = time.elapsed();
    let window = session.settings().debounce_window;
    let is_double = tracker.register_press(now, screen_pos, window);

    events.forward(session.on_primary_click(&mut *surface, point, now));
    if is_double {
        events.forward(session.on_double_primary_click(&mut *surface, point));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn test_quick_second_press_is_double() {
        let mut tracker = ClickTracker::default();
        assert!(!tracker.register_press(Duration::from_millis(1_000), Vec2::ZERO, WINDOW));
        assert!(tracker.register_press(Duration::from_millis(1_200), Vec2::new(1.0, 1.0), WINDOW));
    }

    #[test]
    fn test_slow_second_press_is_single() {
        let mut tracker = ClickTracker::default();
        tracker.register_press(Duration::from_millis(1_000), Vec2::ZERO, WINDOW);
        assert!(!tracker.register_press(Duration::from_millis(1_400), Vec2::ZERO, WINDOW));
    }

    #[test]
    fn test_distant_second_press_is_single() {
        let mut tracker = ClickTracker::default();
        tracker.register_press(Duration::from_millis(1_000), Vec2::ZERO, WINDOW);
        assert!(!tracker.register_press(
            Duration::from_millis(1_100),
            Vec2::new(DOUBLE_CLICK_MAX_TRAVEL_PX + 1.0, 0.0),
            WINDOW
        ));
    }

    #[test]
    fn test_third_press_starts_new_pair() {
        let mut tracker = ClickTracker::default();
        tracker.register_press(Duration::from_millis(1_000), Vec2::ZERO, WINDOW);
        assert!(tracker.register_press(Duration::from_millis(1_100), Vec2::ZERO, WINDOW));
        assert!(!tracker.register_press(Duration::from_millis(1_200), Vec2::ZERO, WINDOW));
        assert!(tracker.register_press(Duration::from_millis(1_300), Vec2::ZERO, WINDOW));
    }

    #[test]
    fn test_pointer_moved_reports_changes_only() {
        let mut tracker = ClickTracker::default();
        assert!(tracker.pointer_moved(Vec2::new(1.0, 2.0)));
        assert!(!tracker.pointer_moved(Vec2::new(1.0, 2.0)));
        assert!(tracker.pointer_moved(Vec2::new(1.5, 2.0)));
    }
}
