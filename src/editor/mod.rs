//! The map editor: surface, camera, pointer input and the systems that connect the
//! creation session to the shape catalog.
//!
//! ## Module Structure
//!
//! - [`surface`] - [`MapSurface`], the gizmo-rendered layer table
//! - [`rendering`] - Draws surface layers each frame
//! - [`graticule`] - Lat/lng background lines
//! - [`camera`] - Pan and zoom
//! - [`input`] - Mouse input to session operations
//! - [`tools`] - Mode toggling, shortcuts and cursor
//! - [`catalog_sync`] - Stores finalized shapes, handles deletes
//! - [`messages`] - Messages between the editor and the UI

mod camera;
pub mod catalog_sync;
mod graticule;
mod input;
pub mod messages;
pub mod params;
mod rendering;
mod surface;
pub mod tools;

pub use camera::EditorCamera;
pub use catalog_sync::InspectedShape;
pub use surface::MapSurface;

use bevy::prelude::*;

use crate::config::{AppConfig, ConfigLoaded};
use crate::creation::ShapeCreationSession;
use crate::geo::MapProjection;
use crate::shapes::ShapeCatalog;
use crate::theme;

use messages::{
    CancelCreationRequest, CreationCancelled, DeleteShapeRequest, ShapeFinalized,
    ToggleModeRequest,
};

/// Apply loaded config to the session and the projection
fn apply_config(
    config: Res<AppConfig>,
    mut session: ResMut<ShapeCreationSession>,
    mut projection: ResMut<MapProjection>,
) {
    *session = ShapeCreationSession::new(config.data.drawing.to_settings());
    *projection = MapProjection::new(config.data.map.center);
    info!(
        "Map centered on {} at zoom {}",
        config.data.map.center, config.data.map.zoom
    );
}

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShapeCreationSession>()
            .init_resource::<ShapeCatalog>()
            .init_resource::<MapSurface>()
            .init_resource::<InspectedShape>()
            .init_resource::<input::ClickTracker>()
            .insert_resource(MapProjection::new(crate::config::MapViewConfig::default().center))
            .insert_resource(ClearColor(theme::MAP_BACKGROUND))
            .add_message::<ShapeFinalized>()
            .add_message::<CreationCancelled>()
            .add_message::<ToggleModeRequest>()
            .add_message::<CancelCreationRequest>()
            .add_message::<DeleteShapeRequest>()
            .init_gizmo_group::<rendering::MapGizmoGroup>()
            .add_systems(
                Startup,
                (
                    (apply_config, camera::spawn_camera).after(ConfigLoaded),
                    rendering::configure_map_gizmos,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_camera_zoom,
                    graticule::draw_graticule,
                    tools::update_cursor_icon,
                ),
            )
            .add_systems(
                Update,
                (
                    tools::handle_mode_shortcuts,
                    tools::apply_mode_requests,
                    input::handle_pointer_input,
                    catalog_sync::store_finalized_shapes,
                    catalog_sync::handle_delete_requests,
                    rendering::render_map_layers,
                )
                    .chain(),
            );
    }
}
