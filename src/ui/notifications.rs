//! Modal load-error notifications.
//!
//! Notifications are shown one at a time, oldest first, and stay up until
//! the user dismisses them.

use crate::state::AppState;
use eframe::egui::{self, Align2, RichText};

pub fn render_notifications(ctx: &egui::Context, state: &mut AppState) {
    let Some(notification) = state.notifications.first().cloned() else {
        return;
    };

    egui::Window::new(format!("{} Load error", egui_phosphor::regular::WARNING))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(&notification.message).size(13.0));
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    state.notifications.remove(0);
                }
            });
        });
}
