mod dialogs;
mod inspector;
mod shape_list;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::constants::STATUS_MESSAGE_SECS;
use crate::editor::messages::CreationCancelled;

/// Transient notice shown in the toolbar, such as why a drawing was cancelled
#[derive(Resource, Default)]
pub struct StatusMessage {
    pub text: Option<String>,
    remaining_secs: f32,
}

impl StatusMessage {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
        self.remaining_secs = STATUS_MESSAGE_SECS;
    }

    pub fn tick(&mut self, delta_secs: f32) {
        if self.text.is_none() {
            return;
        }
        self.remaining_secs -= delta_secs;
        if self.remaining_secs <= 0.0 {
            self.text = None;
        }
    }
}

fn record_cancellations(
    mut events: MessageReader<CreationCancelled>,
    mut status: ResMut<StatusMessage>,
) {
    for event in events.read() {
        status.show(event.reason.to_string());
    }
}

fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.text.is_some() {
        status.tick(time.delta_secs());
    }
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatusMessage>()
            .add_systems(
                Update,
                (
                    record_cancellations.run_if(on_message::<CreationCancelled>),
                    tick_status_message,
                )
                    .chain(),
            )
            // Side panel renders first so top panels fit beside it
            .add_systems(
                EguiPrimaryContextPass,
                (
                    shape_list::shape_list_ui,
                    toolbar::toolbar_ui,
                    toolbar::tool_settings_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    inspector::shape_inspector_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .after(toolbar::tool_settings_ui),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_expires() {
        let mut status = StatusMessage::default();
        status.show("Drawing cancelled");
        assert_eq!(status.text.as_deref(), Some("Drawing cancelled"));

        status.tick(STATUS_MESSAGE_SECS / 2.0);
        assert!(status.text.is_some());

        status.tick(STATUS_MESSAGE_SECS);
        assert!(status.text.is_none());
    }

    #[test]
    fn test_new_message_restarts_timer() {
        let mut status = StatusMessage::default();
        status.show("first");
        status.tick(STATUS_MESSAGE_SECS - 0.1);
        status.show("second");
        status.tick(0.5);
        assert_eq!(status.text.as_deref(), Some("second"));
    }
}
