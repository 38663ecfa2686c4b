//! Configuration management
//!
//! Typed cvars seeded from a JSON schema and overlaid with saved values, plus
//! the keybinding table and its controls file.

pub mod controls;
pub mod cvar;
pub mod keybinds;
pub mod overlay;
pub mod paths;
pub mod schema;

pub use paths::EditorPaths;
