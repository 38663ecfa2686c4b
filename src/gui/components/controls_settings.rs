//! Controls editor: one bind button per command, grouped by section

use eframe::egui;

use crate::constants::format::HEADING_PREFIX;
use crate::constants::gui::*;
use crate::gui::state::EditorState;

pub fn ui(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.label("Click a binding, then press a key to bind it to the command.");
    ui.label(egui::RichText::new("Esc or a second click cancels.").small().weak());
    ui.add_space(ITEM_SPACING);

    let mut clicked: Option<String> = None;

    for section in state.renderable_sections() {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            let heading = section.heading.trim_start_matches(HEADING_PREFIX).trim();
            ui.label(egui::RichText::new(heading).strong());
            ui.separator();

            egui::Grid::new(&section.heading)
                .num_columns(3)
                .min_col_width(CONTROL_LABEL_WIDTH)
                .spacing([ITEM_SPACING, ITEM_SPACING / 2.0])
                .show(ui, |ui| {
                    for row in &section.rows {
                        ui.label(format!("{}:", row.display_name));

                        let button =
                            egui::Button::new(row.key_label.as_str()).selected(row.awaiting);
                        if ui.add(button).clicked() {
                            clicked = Some(row.command.clone());
                        }

                        if row.awaiting {
                            ui.colored_label(COLOR_PENDING, AWAITING_LABEL);
                        } else {
                            ui.label("");
                        }
                        ui.end_row();
                    }
                });
        });
        ui.add_space(SECTION_SPACING);
    }

    if let Some(command) = clicked {
        state.begin_capture(&command);
    }
}
