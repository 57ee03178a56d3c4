//! Common SystemParam bundles to reduce parameter counts in editor systems.
//!
//! ## Available Bundles
//!
//! - [`CameraParams`]: Camera and window access for cursor-to-world conversion
//! - [`SessionEventWriters`]: Forwards creation session events as messages
//!
//! ## Helper Functions
//!
//! - [`is_cursor_over_ui`]: Check if cursor is over egui UI (for input gating)

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::creation::SessionEvent;

use super::messages::{CreationCancelled, ShapeFinalized};
use super::EditorCamera;

/// Bundled camera and window queries for cursor-to-world calculations
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CameraParams<'_, '_> {
    /// Cursor position in window pixels and in world space, if the cursor is in the window
    pub fn cursor_positions(&self) -> Option<(Vec2, Vec2)> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        let world_pos = camera.viewport_to_world_2d(transform, cursor_pos).ok()?;
        Some((cursor_pos, world_pos))
    }

    /// Window size in logical pixels
    pub fn window_size(&self) -> Option<Vec2> {
        self.window.single().ok().map(|w| w.size())
    }
}

/// Writers for the two events a creation session can produce
#[derive(SystemParam)]
pub struct SessionEventWriters<'w> {
    pub finalized: MessageWriter<'w, ShapeFinalized>,
    pub cancelled: MessageWriter<'w, CreationCancelled>,
}

impl SessionEventWriters<'_> {
    pub fn forward(&mut self, event: Option<SessionEvent>) {
        match event {
            Some(SessionEvent::Finalized(descriptor)) => {
                self.finalized.write(ShapeFinalized { descriptor });
            }
            Some(SessionEvent::Cancelled(reason)) => {
                self.cancelled.write(CreationCancelled { reason });
            }
            None => {}
        }
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}
