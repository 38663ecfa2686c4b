//! Key capture for interactive rebinding
//!
//! Clicking a command's bind button arms the capture; the next key press is
//! written to that binding as its game key name. Escape, or clicking the same
//! button again, backs out without changing anything.

use eframe::egui;
use tracing::debug;

use crate::config::controls::ControlTable;

/// Modifier keys egui reports only as held-state flags, without a side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKey {
    Ctrl,
    Shift,
    Alt,
}

/// A key press as seen by the capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturedKey {
    Key(egui::Key),
    Modifier(ModifierKey),
}

impl CapturedKey {
    /// Game key name written to the controls file. Escape never gets here
    /// since it cancels the capture, so it cannot be bound.
    pub fn display_string(self) -> String {
        match self {
            CapturedKey::Modifier(ModifierKey::Ctrl) => "lctrl".to_string(),
            CapturedKey::Modifier(ModifierKey::Shift) => "lshift".to_string(),
            CapturedKey::Modifier(ModifierKey::Alt) => "lalt".to_string(),
            CapturedKey::Key(key) => match key {
                egui::Key::ArrowUp => "up".to_string(),
                egui::Key::ArrowDown => "down".to_string(),
                egui::Key::ArrowLeft => "left".to_string(),
                egui::Key::ArrowRight => "right".to_string(),
                egui::Key::Space => "spacebar".to_string(),
                egui::Key::Enter => "enter".to_string(),
                egui::Key::Backspace => "backspace".to_string(),
                egui::Key::PageUp => "pageup".to_string(),
                egui::Key::PageDown => "pagedown".to_string(),
                other => other.name().to_lowercase(),
            },
        }
    }
}

/// Which binding, if any, is waiting for a key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Awaiting(String),
}

/// Outcome of feeding a key press to the capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureResult {
    /// The key was written to the command's binding
    Captured { command: String, key: String },
    /// Escape pressed while awaiting
    Cancelled,
}

#[derive(Debug, Default)]
pub struct KeyCapture {
    state: CaptureState,
}

impl KeyCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.state == CaptureState::Idle
    }

    pub fn is_awaiting(&self, command: &str) -> bool {
        matches!(&self.state, CaptureState::Awaiting(c) if c == command)
    }

    /// Start waiting for a key for `command`, replacing any pending capture
    pub fn begin_capture(&mut self, command: &str) {
        debug!(command, "Awaiting key");
        self.state = CaptureState::Awaiting(command.to_string());
    }

    pub fn cancel_capture(&mut self) {
        if let CaptureState::Awaiting(command) = &self.state {
            debug!(command = %command, "Key capture cancelled");
        }
        self.state = CaptureState::Idle;
    }

    /// Bind-button click: arm for `command`, or back out if it is already armed
    pub fn toggle_capture(&mut self, command: &str) {
        if self.is_awaiting(command) {
            self.cancel_capture();
        } else {
            self.begin_capture(command);
        }
    }

    /// Feed a key press. Returns `None` when the press is not consumed.
    pub fn on_key_down(
        &mut self,
        key: CapturedKey,
        table: &mut ControlTable,
    ) -> Option<CaptureResult> {
        let CaptureState::Awaiting(command) = &self.state else {
            return None;
        };

        if key == CapturedKey::Key(egui::Key::Escape) {
            self.cancel_capture();
            return Some(CaptureResult::Cancelled);
        }

        // The table can be replaced underneath us by a reload
        if !table.contains(command) {
            return None;
        }

        let command = command.clone();
        let key_name = key.display_string();
        table.set_key(&command, &key_name);
        self.state = CaptureState::Idle;

        Some(CaptureResult::Captured {
            command,
            key: key_name,
        })
    }
}

/// Key presses for this frame, in event order.
///
/// Bare modifier presses show up only as a change in held modifiers, so the
/// previous frame's modifiers are needed to spot them.
pub fn frame_key_presses(
    input: &egui::InputState,
    previous: egui::Modifiers,
) -> Vec<CapturedKey> {
    let mut presses: Vec<CapturedKey> = input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => Some(CapturedKey::Key(*key)),
            _ => None,
        })
        .collect();

    let now = input.modifiers;
    if now.ctrl && !previous.ctrl {
        presses.push(CapturedKey::Modifier(ModifierKey::Ctrl));
    }
    if now.shift && !previous.shift {
        presses.push(CapturedKey::Modifier(ModifierKey::Shift));
    }
    if now.alt && !previous.alt {
        presses.push(CapturedKey::Modifier(ModifierKey::Alt));
    }

    presses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_binds_key_and_returns_to_idle() {
        let mut table = ControlTable::default();
        let mut capture = KeyCapture::new();

        capture.begin_capture("save");
        assert!(capture.is_awaiting("save"));

        let result = capture.on_key_down(CapturedKey::Key(egui::Key::F5), &mut table);

        assert_eq!(
            result,
            Some(CaptureResult::Captured {
                command: "save".to_string(),
                key: "f5".to_string(),
            })
        );
        assert_eq!(table.get("save").unwrap().key, "f5");
        assert!(capture.is_idle());
    }

    #[test]
    fn test_key_down_while_idle_ignored() {
        let mut table = ControlTable::default();
        let mut capture = KeyCapture::new();

        let result = capture.on_key_down(CapturedKey::Key(egui::Key::A), &mut table);

        assert_eq!(result, None);
        assert_eq!(table, ControlTable::default());
        assert!(capture.is_idle());
    }

    #[test]
    fn test_only_first_key_is_captured() {
        let mut table = ControlTable::default();
        let mut capture = KeyCapture::new();

        capture.begin_capture("turn");
        capture.on_key_down(CapturedKey::Key(egui::Key::T), &mut table);
        capture.on_key_down(CapturedKey::Key(egui::Key::Y), &mut table);

        assert_eq!(table.get("turn").unwrap().key, "t");
    }

    #[test]
    fn test_escape_cancels() {
        let mut table = ControlTable::default();
        let mut capture = KeyCapture::new();

        capture.begin_capture("save");
        let result = capture.on_key_down(CapturedKey::Key(egui::Key::Escape), &mut table);

        assert_eq!(result, Some(CaptureResult::Cancelled));
        assert!(capture.is_idle());
        assert_eq!(table.get("save").unwrap().key, "f3");
    }

    #[test]
    fn test_toggle_same_command_cancels() {
        let mut capture = KeyCapture::new();

        capture.toggle_capture("load");
        assert!(capture.is_awaiting("load"));
        capture.toggle_capture("load");
        assert!(capture.is_idle());
    }

    #[test]
    fn test_begin_retargets_pending_capture() {
        let mut table = ControlTable::default();
        let mut capture = KeyCapture::new();

        capture.begin_capture("save");
        capture.toggle_capture("load");
        assert!(capture.is_awaiting("load"));
        assert!(!capture.is_awaiting("save"));

        capture.on_key_down(CapturedKey::Key(egui::Key::F9), &mut table);
        assert_eq!(table.get("load").unwrap().key, "f9");
        assert_eq!(table.get("save").unwrap().key, "f3");
    }

    #[test]
    fn test_missing_command_is_ignored() {
        let mut table = ControlTable::default();
        let mut capture = KeyCapture::new();

        capture.begin_capture("jump");
        let result = capture.on_key_down(CapturedKey::Key(egui::Key::J), &mut table);

        assert_eq!(result, None);
        assert!(capture.is_awaiting("jump"));
        assert_eq!(table, ControlTable::default());
    }

    #[test]
    fn test_display_strings() {
        let name = |k| CapturedKey::Key(k).display_string();
        assert_eq!(name(egui::Key::ArrowUp), "up");
        assert_eq!(name(egui::Key::Space), "spacebar");
        assert_eq!(name(egui::Key::F3), "f3");
        assert_eq!(name(egui::Key::Q), "q");
        assert_eq!(
            CapturedKey::Modifier(ModifierKey::Ctrl).display_string(),
            "lctrl"
        );
    }

    #[test]
    fn test_frame_key_presses_detects_modifier_edges() {
        let mut input = egui::InputState::default();
        input.modifiers = egui::Modifiers::CTRL;
        input.events.push(egui::Event::Key {
            key: egui::Key::A,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::CTRL,
        });
        input.events.push(egui::Event::Key {
            key: egui::Key::B,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: egui::Modifiers::CTRL,
        });

        let presses = frame_key_presses(&input, egui::Modifiers::NONE);
        assert_eq!(
            presses,
            vec![
                CapturedKey::Key(egui::Key::A),
                CapturedKey::Modifier(ModifierKey::Ctrl),
            ]
        );

        // Held since last frame: no new edge
        let presses = frame_key_presses(&input, egui::Modifiers::CTRL);
        assert_eq!(presses, vec![CapturedKey::Key(egui::Key::A)]);
    }
}
