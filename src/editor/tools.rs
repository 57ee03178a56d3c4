use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use crate::creation::{SessionEvent, SessionState, ShapeCreationSession};
use crate::geo::GeoSurface;
use crate::shapes::ShapeKind;

use super::messages::{CancelCreationRequest, ToggleModeRequest};
use super::params::SessionEventWriters;
use super::surface::MapSurface;

impl ShapeKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Box => "Box (B)",
            ShapeKind::Circle => "Circle (C)",
            ShapeKind::Polygon => "Polygon (P)",
        }
    }

    pub fn shortcut(&self) -> KeyCode {
        match self {
            ShapeKind::Box => KeyCode::KeyB,
            ShapeKind::Circle => KeyCode::KeyC,
            ShapeKind::Polygon => KeyCode::KeyP,
        }
    }
}

fn cursor_icon(mode: Option<ShapeKind>) -> CursorIcon {
    match mode {
        Some(_) => CursorIcon::System(SystemCursorIcon::Crosshair),
        None => CursorIcon::System(SystemCursorIcon::Default),
    }
}

/// Mode buttons and shortcuts go through here.
///
/// Holds no mode of its own: the highlighted mode is always the session's mode.
pub struct SelectionModeController<'a, S: GeoSurface + ?Sized> {
    session: &'a mut ShapeCreationSession,
    surface: &'a mut S,
}

impl<'a, S: GeoSurface + ?Sized> SelectionModeController<'a, S> {
    pub fn new(session: &'a mut ShapeCreationSession, surface: &'a mut S) -> Self {
        Self { session, surface }
    }

    pub fn toggle(&mut self, mode: ShapeKind) -> Option<SessionEvent> {
        // A second press on the armed, idle mode disarms it
        let requested = if self.session.mode() == Some(mode) && !self.session.is_in_progress() {
            None
        } else {
            Some(mode)
        };
        self.session.set_mode(&mut *self.surface, requested)
    }

    /// Cancel any drawing and disarm
    pub fn clear(&mut self) -> Option<SessionEvent> {
        self.session.cancel(&mut *self.surface)
    }

    pub fn active_mode(&self) -> Option<ShapeKind> {
        self.session.mode()
    }
}

/// One-line instruction for the current creation step
pub fn creation_hint(session: &ShapeCreationSession) -> &'static str {
    match (session.mode(), session.state()) {
        (None, _) => "Select a shape tool, or click a shape to inspect it",
        (Some(ShapeKind::Box), SessionState::Idle) => "Click to place the first corner",
        (Some(ShapeKind::Box), _) => "Click to place the opposite corner",
        (Some(ShapeKind::Circle), SessionState::Idle) => "Click to place the center",
        (Some(ShapeKind::Circle), _) => "Click to set the radius",
        (Some(ShapeKind::Polygon), SessionState::Idle) => "Click to place the first point",
        (Some(ShapeKind::Polygon), _) => {
            "Click to add points, double-click or click the first point to finish"
        }
    }
}

pub fn handle_mode_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut toggle_events: MessageWriter<ToggleModeRequest>,
    mut cancel_events: MessageWriter<CancelCreationRequest>,
    mut contexts: EguiContexts,
) {
    // Don't change modes if typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    for kind in ShapeKind::all() {
        if keyboard.just_pressed(kind.shortcut()) {
            toggle_events.write(ToggleModeRequest { mode: *kind });
        }
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        cancel_events.write(CancelCreationRequest);
    }
}

pub fn apply_mode_requests(
    mut toggle_events: MessageReader<ToggleModeRequest>,
    mut cancel_events: MessageReader<CancelCreationRequest>,
    mut session: ResMut<ShapeCreationSession>,
    mut surface: ResMut<MapSurface>,
    mut events: SessionEventWriters,
) {
    if toggle_events.is_empty() && cancel_events.is_empty() {
        return;
    }

    let mut controller = SelectionModeController::new(&mut session, &mut *surface);

    for request in toggle_events.read() {
        events.forward(controller.toggle(request.mode));
    }

    for _ in cancel_events.read() {
        events.forward(controller.clear());
    }

    debug!("Active shape mode: {:?}", controller.active_mode());
}

pub fn update_cursor_icon(
    session: Res<ShapeCreationSession>,
    window_query: Query<Entity, With<PrimaryWindow>>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok(entity) = window_query.single() else {
        return;
    };

    // Use default cursor over UI, mode cursor over the map
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        commands.entity(entity).insert(cursor_icon(None));
        return;
    }

    commands.entity(entity).insert(cursor_icon(session.mode()));
}
