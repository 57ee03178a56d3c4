use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::editor::InspectedShape;
use crate::editor::messages::DeleteShapeRequest;
use crate::shapes::ShapeCatalog;
use crate::theme;

/// Info window for the shape clicked on the map
pub fn shape_inspector_ui(
    mut contexts: EguiContexts,
    catalog: Res<ShapeCatalog>,
    mut inspected: ResMut<InspectedShape>,
    mut delete_events: MessageWriter<DeleteShapeRequest>,
) -> Result {
    let Some(index) = inspected.index else {
        return Ok(());
    };

    let Some(descriptor) = catalog.get(index) else {
        inspected.index = None;
        return Ok(());
    };

    let mut open = true;
    let mut close = false;

    egui::Window::new(format!("Clicked {}", descriptor.kind().name()))
        .id(egui::Id::new("shape_inspector"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_BOTTOM, [12.0, -12.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label(
                egui::RichText::new(descriptor.title(index))
                    .color(theme::bevy_to_egui_opaque(theme::mode_color(descriptor.kind())))
                    .strong(),
            );
            ui.add_space(4.0);

            for line in descriptor.shape.info_lines() {
                ui.label(egui::RichText::new(line).monospace());
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Close").clicked() {
                    close = true;
                }
                if ui.button("Delete").clicked() {
                    delete_events.write(DeleteShapeRequest { index });
                    close = true;
                }
            });
        });

    if !open || close {
        inspected.index = None;
    }

    Ok(())
}
