use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::editor::InspectedShape;
use crate::editor::messages::DeleteShapeRequest;
use crate::shapes::{ShapeCatalog, ShapeKind};
use crate::theme;

/// One rendered row of the shape list
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeListEntry {
    pub index: usize,
    pub kind: ShapeKind,
    pub title: String,
    pub info: Vec<String>,
}

/// Rebuilt from the catalog every frame, so indices are always current
pub fn shape_list_entries(catalog: &ShapeCatalog) -> Vec<ShapeListEntry> {
    catalog
        .list()
        .map(|(index, descriptor)| ShapeListEntry {
            index,
            kind: descriptor.kind(),
            title: descriptor.title(index),
            info: descriptor.shape.info_lines(),
        })
        .collect()
}

pub fn shape_list_ui(
    mut contexts: EguiContexts,
    catalog: Res<ShapeCatalog>,
    mut inspected: ResMut<InspectedShape>,
    mut delete_events: MessageWriter<DeleteShapeRequest>,
) -> Result {
    egui::SidePanel::right("shapes_panel")
        .default_width(240.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Shapes").heading().size(18.0));
            ui.add_space(4.0);
            ui.separator();

            if catalog.is_empty() {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("No shapes yet")
                        .color(theme::ui::HINT_TEXT)
                        .italics(),
                );
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for entry in shape_list_entries(&catalog) {
                    let selected = inspected.index == Some(entry.index);
                    egui::Frame::new()
                        .inner_margin(egui::Margin::symmetric(4, 4))
                        .stroke(if selected {
                            egui::Stroke::new(1.0, theme::ui::SELECTED_BORDER)
                        } else {
                            egui::Stroke::NONE
                        })
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                let accent = theme::bevy_to_egui_opaque(theme::mode_color(entry.kind));
                                if ui
                                    .selectable_label(
                                        selected,
                                        egui::RichText::new(&entry.title).color(accent).strong(),
                                    )
                                    .clicked()
                                {
                                    inspected.index = Some(entry.index);
                                }

                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("Delete").clicked() {
                                            delete_events
                                                .write(DeleteShapeRequest { index: entry.index });
                                        }
                                    },
                                );
                            });

                            for line in &entry.info {
                                ui.label(egui::RichText::new(line).size(11.0).monospace());
                            }
                        });
                    ui.separator();
                }
            });
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{LayerHandle, Point};
    use crate::shapes::{Shape, ShapeDescriptor};

    #[test]
    fn test_entries_follow_catalog_order() {
        let mut catalog = ShapeCatalog::default();
        catalog.append(ShapeDescriptor {
            shape: Shape::box_from_corners(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            layer: LayerHandle(1),
        });
        catalog.append(ShapeDescriptor {
            shape: Shape::Circle {
                center: Point::new(0.0, 0.0),
                radius_m: 500.0,
            },
            layer: LayerHandle(2),
        });

        let entries = shape_list_entries(&catalog);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Box 1");
        assert_eq!(entries[0].info.len(), 4);
        assert_eq!(entries[1].title, "Circle 2");
        assert_eq!(entries[1].kind, ShapeKind::Circle);
        assert_eq!(entries[1].info[1], "Radius: 500.00 meters");
    }

    #[test]
    fn test_empty_catalog_has_no_entries() {
        assert!(shape_list_entries(&ShapeCatalog::default()).is_empty());
    }
}
