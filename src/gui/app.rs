//! Editor window implemented with egui/eframe

use anyhow::{Result, anyhow};
use eframe::{NativeOptions, egui};
use tracing::{info, warn};

use super::components;
use super::key_capture::frame_key_presses;
use super::state::{EditorState, EditorTab};
use crate::constants::gui::*;

struct EditorApp {
    state: EditorState,
    active_tab: EditorTab,
    // Modifiers held last frame, for spotting bare modifier presses
    previous_modifiers: egui::Modifiers,
}

impl EditorApp {
    fn new(state: EditorState) -> Self {
        info!("Initializing editor window");
        Self {
            state,
            active_tab: EditorTab::Cvars,
            previous_modifiers: egui::Modifiers::NONE,
        }
    }

    fn route_key_presses(&mut self, ctx: &egui::Context) {
        let (presses, modifiers) =
            ctx.input(|i| (frame_key_presses(i, self.previous_modifiers), i.modifiers));
        self.previous_modifiers = modifiers;

        if self.state.capture.is_idle() {
            return;
        }

        for key in presses {
            if self.state.on_key_down(key) {
                break;
            }
        }

        // Keep the captured key away from widgets, or Space/Enter would
        // also click the focused bind button and re-arm the capture
        ctx.input_mut(|i| {
            i.events
                .retain(|event| !matches!(event, egui::Event::Key { .. }))
        });
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.route_key_presses(ctx);

        egui::TopBottomPanel::top("global_header").show(ctx, |ui| {
            components::header::render(ui, &mut self.state, &mut self.active_tab);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.active_tab {
                EditorTab::Cvars => {
                    if components::cvar_settings::ui(ui, &mut self.state) {
                        self.state.mark_changed();
                    }
                }
                EditorTab::Controls => {
                    components::controls_settings::ui(ui, &mut self.state);
                }
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.state.settings_changed {
            warn!("Exiting with unsaved changes");
        }
        info!("Editor exiting");
    }
}

pub fn run_gui(state: EditorState) -> Result<()> {
    let title = format!("Cvar Editor - v{}", env!("CARGO_PKG_VERSION"));

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(EditorApp::new(state)))),
    )
    .map_err(|err| anyhow!("Failed to launch editor window: {err}"))
}
