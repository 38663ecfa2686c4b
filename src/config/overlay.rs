//! Flat `name value` cvar file
//!
//! Saved values are overlaid onto a schema-seeded store. Only names the
//! store already knows are touched; everything else in the file is ignored.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::common::color::Rgba;
use crate::config::cvar::{CvarStore, CvarValue};
use crate::constants::format::{CVAR_NAME_WIDTH, FLOAT_PRECISION};

/// Apply overlay text to the store, returning how many cvars were updated
pub fn apply_overlay(store: &mut CvarStore, text: &str) -> usize {
    let mut applied = 0;

    for (line_no, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let (Some(name), Some(raw), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            continue;
        };

        let Some(cvar) = store.get_mut(name) else {
            debug!(line = line_no + 1, cvar = name, "Ignoring unknown cvar");
            continue;
        };

        if parse_into(&mut cvar.value, raw) {
            applied += 1;
        } else {
            debug!(
                line = line_no + 1,
                cvar = name,
                value = raw,
                kind = %cvar.kind(),
                "Skipping unparseable value"
            );
        }
    }

    applied
}

/// Overlay saved values from a file. A missing or unreadable file keeps the
/// current values.
pub fn load_overlay(store: &mut CvarStore, path: &Path) {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let applied = apply_overlay(store, &contents);
            info!(path = ?path, applied, "Loaded cvar values");
        }
        Err(e) => {
            warn!(path = ?path, error = %e, "Failed to read cvar values, using defaults");
        }
    }
}

/// Render the store in file form, one padded `name value` line per cvar
pub fn render(store: &CvarStore) -> String {
    let mut out = String::new();
    for cvar in store.iter() {
        // Names that fill the column still need a separator
        let _ = writeln!(
            out,
            "{:<width$} {}",
            cvar.name,
            format_value(&cvar.value),
            width = CVAR_NAME_WIDTH - 1
        );
    }
    out
}

/// Write the store to `path`, creating parent directories as needed
pub fn save(store: &CvarStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    fs::write(path, render(store))
        .with_context(|| format!("Failed to write cvar values to {:?}", path))?;

    info!(path = ?path, cvars = store.len(), "Saved cvar values");
    Ok(())
}

fn parse_into(value: &mut CvarValue, raw: &str) -> bool {
    match value {
        CvarValue::Bool(current) => *current = raw == "1",
        CvarValue::Int { value, .. } => match raw.parse() {
            Ok(parsed) => *value = parsed,
            Err(_) => return false,
        },
        CvarValue::Float { value, .. } => match raw.parse() {
            Ok(parsed) => *value = parsed,
            Err(_) => return false,
        },
        CvarValue::Color(current) => match Rgba::parse_hex(raw) {
            Some(parsed) if !raw.starts_with('#') => *current = parsed,
            _ => return false,
        },
        CvarValue::String(current) => raw.clone_into(current),
    }
    true
}

fn format_value(value: &CvarValue) -> String {
    match value {
        CvarValue::Bool(v) => String::from(if *v { "1" } else { "0" }),
        CvarValue::Int { value, .. } => value.to_string(),
        CvarValue::Float { value, .. } => format!("{:.*}", FLOAT_PRECISION, value),
        CvarValue::Color(color) => color.to_hex(),
        CvarValue::String(s) => s.clone(),
    }
}
