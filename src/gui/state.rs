//! Editor state shared by the GUI components
//!
//! Owns the cvar store, the control table and the key capture for one
//! session. Everything the window shows or edits goes through here.

use anyhow::{Context, Result};
use eframe::egui;
use tracing::{error, info, warn};

use crate::config::controls::ControlTable;
use crate::config::cvar::{CvarEntry, CvarStore};
use crate::config::paths::EditorPaths;
use crate::config::{keybinds, overlay, schema};
use crate::constants::gui::{COLOR_ERROR, COLOR_SUCCESS, UNBOUND_LABEL};
use crate::gui::key_capture::{CaptureResult, CapturedKey, KeyCapture};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EditorTab {
    Cvars,
    Controls,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub color: egui::Color32,
}

/// One row of the controls editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRow {
    pub command: String,
    pub display_name: String,
    pub key_label: String,
    pub awaiting: bool,
}

/// One heading of the controls editor with its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub heading: String,
    pub rows: Vec<BindingRow>,
}

/// Section layout for display, marking the row that is waiting for a key
pub fn renderable_sections(table: &ControlTable, capture: &KeyCapture) -> Vec<SectionView> {
    table
        .sections()
        .iter()
        .map(|section| SectionView {
            heading: section.heading.clone(),
            rows: section
                .commands
                .iter()
                .filter_map(|command| table.get(command))
                .map(|binding| BindingRow {
                    command: binding.command.clone(),
                    display_name: binding.display_name.clone(),
                    key_label: if binding.is_bound() {
                        binding.key.clone()
                    } else {
                        UNBOUND_LABEL.to_string()
                    },
                    awaiting: capture.is_awaiting(&binding.command),
                })
                .collect(),
        })
        .collect()
}

pub struct EditorState {
    pub paths: EditorPaths,
    pub cvars: CvarStore,
    pub controls: ControlTable,
    pub capture: KeyCapture,
    pub settings_changed: bool,
    pub status_message: Option<StatusMessage>,
}

impl EditorState {
    /// Seed cvars from the schema and overlay both saved files.
    ///
    /// Only a bad schema is an error; missing value or controls files leave
    /// the defaults in place.
    pub fn load(paths: EditorPaths) -> Result<Self> {
        let (cvars, controls) = load_from_disk(&paths)?;
        Ok(Self {
            paths,
            cvars,
            controls,
            capture: KeyCapture::new(),
            settings_changed: false,
            status_message: None,
        })
    }

    pub fn renderable_entries(&mut self) -> Vec<CvarEntry<'_>> {
        self.cvars.renderable_entries()
    }

    pub fn renderable_sections(&self) -> Vec<SectionView> {
        renderable_sections(&self.controls, &self.capture)
    }

    pub fn begin_capture(&mut self, command: &str) {
        self.capture.toggle_capture(command);
    }

    pub fn cancel_capture(&mut self) {
        self.capture.cancel_capture();
    }

    /// Route a key press to the capture. Returns true if it was consumed.
    pub fn on_key_down(&mut self, key: CapturedKey) -> bool {
        match self.capture.on_key_down(key, &mut self.controls) {
            Some(CaptureResult::Captured { command, key }) => {
                info!(command = %command, key = %key, "Key bound");
                self.mark_changed();
                true
            }
            Some(CaptureResult::Cancelled) => true,
            None => false,
        }
    }

    pub fn mark_changed(&mut self) {
        self.settings_changed = true;
        self.status_message = None;
    }

    pub fn save_cvars(&self) -> Result<()> {
        overlay::save(&self.cvars, &self.paths.cvars)
    }

    pub fn save_controls(&self) -> Result<()> {
        keybinds::save(&self.controls, &self.paths.controls)
    }

    /// Write both files. A failure on one still attempts the other.
    pub fn request_save(&mut self) -> Result<()> {
        let cvars = self.save_cvars();
        let controls = self.save_controls();

        let result = cvars.and(controls);
        match &result {
            Ok(()) => {
                self.settings_changed = false;
                self.status_message = Some(StatusMessage {
                    text: "Configuration saved successfully".to_string(),
                    color: COLOR_SUCCESS,
                });
                info!("Configuration saved to disk");
            }
            Err(err) => {
                error!(error = ?err, "Failed to save configuration");
                self.status_message = Some(StatusMessage {
                    text: format!("Save failed: {err}"),
                    color: COLOR_ERROR,
                });
            }
        }
        result
    }

    /// Throw away in-memory edits and reload both files
    pub fn discard_changes(&mut self) -> Result<()> {
        let (cvars, controls) = load_from_disk(&self.paths)?;
        self.cvars = cvars;
        self.controls = controls;
        self.capture.cancel_capture();
        self.settings_changed = false;
        self.status_message = Some(StatusMessage {
            text: "Changes discarded".to_string(),
            color: COLOR_ERROR,
        });
        info!("Configuration changes discarded");
        Ok(())
    }

    /// Schema defaults and the built-in bindings, ignoring saved files
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.cvars = schema::load_schema(&self.paths.schema)
            .with_context(|| format!("Failed to reload schema {:?}", self.paths.schema))?;
        self.controls = ControlTable::default();
        self.capture.cancel_capture();
        self.mark_changed();
        info!("Reset to defaults");
        Ok(())
    }
}

fn load_from_disk(paths: &EditorPaths) -> Result<(CvarStore, ControlTable)> {
    let mut cvars = schema::load_schema(&paths.schema)
        .with_context(|| format!("Failed to load schema {:?}", paths.schema))?;
    overlay::load_overlay(&mut cvars, &paths.cvars);

    let mut controls = ControlTable::default();
    if let Err(err) = keybinds::load_overlay(&mut controls, &paths.controls) {
        warn!(error = ?err, "Using built-in key bindings");
    }

    Ok((cvars, controls))
}
