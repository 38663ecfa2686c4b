use eframe::egui;
use tracing::error;

use crate::constants::gui::*;
use crate::gui::state::{EditorState, EditorTab, StatusMessage};

/// Renders the header panel: tabs on the right, save controls and status below
pub fn render(ui: &mut egui::Ui, state: &mut EditorState, active_tab: &mut EditorTab) {
    // Row 0: Status (Left) | Tabs (Right)
    ui.horizontal(|ui| {
        ui.label(format!(
            "{} cvars from {}",
            state.cvars.len(),
            state.paths.schema.display()
        ));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(5.0);

            // Right to left
            if ui
                .add(egui::Button::new("Controls").selected(*active_tab == EditorTab::Controls))
                .clicked()
            {
                *active_tab = EditorTab::Controls;
            }
            ui.add_space(5.0);

            if ui
                .add(egui::Button::new("Cvars").selected(*active_tab == EditorTab::Cvars))
                .clicked()
            {
                // Leaving the controls tab abandons any pending capture
                state.cancel_capture();
                *active_tab = EditorTab::Cvars;
            }
        });
    });
    ui.separator();

    // Row 1: Reset (Left) | Save & Discard (Right)
    ui.horizontal(|ui| {
        ui.set_min_height(30.0);

        if ui.button("Reset to Defaults").clicked()
            && let Err(err) = state.reset_to_defaults()
        {
            error!(error = ?err, "Failed to reset to defaults");
            state.status_message = Some(StatusMessage {
                text: format!("Reset failed: {err}"),
                color: COLOR_ERROR,
            });
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖ Discard Changes").clicked()
                && let Err(err) = state.discard_changes()
            {
                error!(error = ?err, "Failed to reload configuration");
                state.status_message = Some(StatusMessage {
                    text: format!("Reload failed: {err}"),
                    color: COLOR_ERROR,
                });
            }

            if ui.button("💾 Save").clicked() {
                // Failure is logged and shown in the status line
                let _ = state.request_save();
            }

            if let Some(message) = &state.status_message {
                ui.colored_label(message.color, &message.text);
            } else if state.settings_changed {
                ui.colored_label(COLOR_PENDING, "Unsaved changes");
            }
        });
    });

    ui.add_space(5.0);
}
