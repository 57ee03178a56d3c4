use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{AppConfig, SaveConfigRequest};
use crate::constants::DOUBLE_CLICK_WINDOW_RANGE_MS;
use crate::creation::ShapeCreationSession;
use crate::editor::messages::{CancelCreationRequest, ToggleModeRequest};
use crate::editor::tools::creation_hint;
use crate::shapes::ShapeKind;
use crate::theme;

use super::StatusMessage;

/// Main toolbar with one button per shape mode
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    session: Res<ShapeCreationSession>,
    status: Res<StatusMessage>,
    mut toggle_events: MessageWriter<ToggleModeRequest>,
    mut cancel_events: MessageWriter<CancelCreationRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                // Highlight comes from the session, never from local state
                for kind in ShapeKind::all() {
                    let selected = session.mode() == Some(*kind);
                    let mut button = egui::Button::new(
                        egui::RichText::new(kind.name()).size(14.0).strong(),
                    )
                    .min_size(egui::vec2(72.0, 28.0))
                    .selected(selected);
                    if selected {
                        button = button
                            .fill(theme::bevy_to_egui_opaque(theme::mode_color(*kind)))
                            .stroke(egui::Stroke::new(1.5, theme::ui::SELECTED_BORDER));
                    }

                    let response = ui.add(button);
                    if response.clicked() {
                        toggle_events.write(ToggleModeRequest { mode: *kind });
                    }
                    response.on_hover_text(kind.display_name());
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if ui
                    .add_enabled(session.mode().is_some(), egui::Button::new("Cancel"))
                    .on_hover_text("Cancel (Esc / right-click)")
                    .clicked()
                {
                    cancel_events.write(CancelCreationRequest);
                }

                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(creation_hint(&session))
                        .color(theme::ui::HINT_TEXT)
                        .size(12.0),
                );

                if let Some(text) = &status.text {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(text)
                                .color(theme::ui::STATUS_TEXT)
                                .strong(),
                        );
                    });
                }
            });
        });
    Ok(())
}

/// Polygon closing settings, shown while polygon mode is armed
pub fn tool_settings_ui(
    mut contexts: EguiContexts,
    mut session: ResMut<ShapeCreationSession>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    if session.mode() != Some(ShapeKind::Polygon) {
        return Ok(());
    }

    egui::TopBottomPanel::top("tool_settings")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 6))
                .fill(theme::ui::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                ui.label(
                    egui::RichText::new("Polygon Settings:").color(theme::ui::LABEL_TEXT),
                );
                ui.add_space(8.0);

                ui.label("Close within:");
                let tolerance = ui.add(
                    egui::DragValue::new(&mut config.data.drawing.closing_tolerance_m)
                        .range(1.0..=500.0)
                        .speed(0.5)
                        .suffix(" m"),
                );

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                ui.label("Double-click:");
                let window = ui.add(
                    egui::DragValue::new(&mut config.data.drawing.double_click_window_ms)
                        .range(DOUBLE_CLICK_WINDOW_RANGE_MS)
                        .speed(5.0)
                        .suffix(" ms"),
                );

                if tolerance.changed() || window.changed() {
                    session.set_settings(config.data.drawing.to_settings());
                    config.dirty = true;
                }

                // Persist once an edit is finished rather than on every drag step
                let finished = |r: &egui::Response| r.drag_stopped() || r.lost_focus();
                if finished(&tolerance) || finished(&window) {
                    save_events.write(SaveConfigRequest);
                }

                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("Esc / right-click: cancel")
                        .color(theme::ui::HINT_TEXT)
                        .size(11.0),
                );
            });
        });
    Ok(())
}
