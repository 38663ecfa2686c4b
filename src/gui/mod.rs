//! GUI module - egui-based cvar and controls editor

mod app;
pub mod components;
pub mod key_capture;
pub mod state;

pub use app::run_gui;
