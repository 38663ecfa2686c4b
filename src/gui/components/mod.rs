pub mod controls_settings;
pub mod cvar_settings;
pub mod header;
