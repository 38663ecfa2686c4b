//! Cvar editor: one widget per cvar, grouped by kind

use eframe::egui;

use crate::common::color::Rgba;
use crate::config::cvar::{CvarKind, CvarValue};
use crate::constants::gui::*;
use crate::gui::state::EditorState;

/// Renders every cvar and returns true if any value changed
pub fn ui(ui: &mut egui::Ui, state: &mut EditorState) -> bool {
    let mut changed = false;
    let mut current_kind: Option<CvarKind> = None;

    for entry in state.renderable_entries() {
        if current_kind != Some(entry.kind) {
            if current_kind.is_some() {
                ui.add_space(ITEM_SPACING);
            }
            ui.label(egui::RichText::new(entry.kind.as_str()).strong());
            ui.separator();
            current_kind = Some(entry.kind);
        }

        ui.push_id(entry.name, |ui| {
            ui.horizontal(|ui| {
                if render_value(ui, entry.value) {
                    changed = true;
                }
                ui.label(entry.name);
            });
        });
    }

    if current_kind.is_none() {
        ui.label(egui::RichText::new("The schema defines no cvars").weak());
    }

    changed
}

/// Edits go through the value setters so numeric input stays inside its bounds
fn render_value(ui: &mut egui::Ui, value: &mut CvarValue) -> bool {
    match *value {
        CvarValue::Bool(current) => {
            let mut edited = current;
            ui.checkbox(&mut edited, "").changed() && value.set_bool(edited)
        }
        CvarValue::Int {
            value: current,
            min,
            max,
        } => {
            let mut edited = current;
            ui.add(egui::Slider::new(&mut edited, min..=max)).changed() && value.set_int(edited)
        }
        CvarValue::Float {
            value: current,
            min,
            max,
        } => {
            let mut edited = current;
            ui.add(egui::Slider::new(&mut edited, min..=max).fixed_decimals(3))
                .changed()
                && value.set_float(edited)
        }
        CvarValue::Color(current) => {
            let mut rgba = current.to_array();
            ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed()
                && value.set_color(Rgba::from_array(rgba))
        }
        CvarValue::String(ref current) => {
            let mut edited = current.clone();
            ui.add(egui::TextEdit::singleline(&mut edited).desired_width(160.0))
                .changed()
                && value.set_string(&edited)
        }
    }
}
