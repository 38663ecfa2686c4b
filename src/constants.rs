//! Application-wide constants
//!
//! Default file locations, text format details and GUI layout values.

/// Default file locations, relative to the working directory
pub mod paths {
    /// Declarative cvar schema (types, defaults, bounds)
    pub const SCHEMA_FILE: &str = "cfg/cvars.json";

    /// Saved cvar values overlaid on the schema defaults
    pub const CVARS_FILE: &str = "cfg/cvars.cfg";

    /// Saved key bindings
    pub const CONTROLS_FILE: &str = "cfg/controls.cfg";
}

/// Text format constants for the cvar and keybind files
pub mod format {
    /// Column width the cvar name is padded to before its value
    pub const CVAR_NAME_WIDTH: usize = 20;

    /// Decimal places written for float cvars
    pub const FLOAT_PRECISION: usize = 3;

    /// Keyword that starts every keybind data line
    pub const BIND_KEYWORD: &str = "bind";

    /// Lines starting with this are section headings
    pub const HEADING_PREFIX: char = '#';

    /// Separator between actions in a keybind action list
    pub const ACTION_SEPARATOR: &str = ";";

    /// Command that gets an extra "hold" line on save
    pub const LOAD_COMMAND: &str = "load";

    /// Action emitted alongside the load binding
    pub const HOLD_ACTION: &str = "hold";
}

/// GUI layout and colour constants
pub mod gui {
    use eframe::egui;

    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;

    pub const ITEM_SPACING: f32 = 8.0;
    pub const SECTION_SPACING: f32 = 16.0;

    /// Width of the label column in the controls grid
    pub const CONTROL_LABEL_WIDTH: f32 = 160.0;

    pub const UNBOUND_LABEL: &str = "Unbound";
    pub const AWAITING_LABEL: &str = "Press a key... (Esc to cancel)";

    pub const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
    pub const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
    pub const COLOR_PENDING: egui::Color32 = egui::Color32::from_rgb(220, 160, 0);
}
