//! Line-oriented controls file
//!
//! ```text
//! # Saveload Controls
//! bind +f3 "save"
//! bind +f4 "load;resetdata"
//! bind *f4 "hold"
//! ```
//!
//! Heading lines are layout only. Each data line is matched to a binding by
//! comparing its quoted action list with the binding's actions.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::controls::{ControlTable, Modifier};
use crate::constants::format::{BIND_KEYWORD, HEADING_PREFIX, HOLD_ACTION, LOAD_COMMAND};

/// A parsed `bind` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindLine<'a> {
    pub modifier: Modifier,
    pub key: &'a str,
    /// Raw `;`-joined action list from between the quotes
    pub actions: &'a str,
}

/// Parse one data line. Returns `None` for headings, blanks and malformed lines.
pub fn parse_line(line: &str) -> Option<BindLine<'_>> {
    if line.is_empty() || line.starts_with(HEADING_PREFIX) {
        return None;
    }

    let mut tokens = line.split_whitespace();
    if tokens.next()? != BIND_KEYWORD {
        return None;
    }
    let combined = tokens.next()?;

    let quote_start = line.find('"')?;
    let quote_end = quote_start + 1 + line[quote_start + 1..].find('"')?;
    let actions = &line[quote_start + 1..quote_end];

    let mut chars = combined.chars();
    let modifier = Modifier::from_char(chars.next()?)?;

    Some(BindLine {
        modifier,
        key: chars.as_str(),
        actions,
    })
}

/// Apply controls text to the table, returning how many bindings were updated
pub fn apply_overlay(table: &mut ControlTable, text: &str) -> usize {
    let mut applied = 0;

    for (line_no, line) in text.lines().enumerate() {
        let Some(bind) = parse_line(line) else {
            continue;
        };

        let Some(command) = table.find_by_actions(bind.actions).map(str::to_string) else {
            debug!(line = line_no + 1, actions = bind.actions, "No command for action list");
            continue;
        };

        if let Some(binding) = table.get_mut(&command) {
            bind.key.clone_into(&mut binding.key);
            binding.modifier = bind.modifier;
            applied += 1;
        }
    }

    applied
}

/// Overlay saved bindings from a file. Fails only if the file can't be read.
pub fn load_overlay(table: &mut ControlTable, path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read controls from {:?}", path))?;
    let applied = apply_overlay(table, &contents);
    info!(path = ?path, applied, "Loaded key bindings");
    Ok(())
}

/// Render the table in file form
pub fn render(table: &ControlTable) -> String {
    let mut out = String::new();

    for section in table.sections() {
        let _ = writeln!(out, "{}", section.heading);

        for command in &section.commands {
            let Some(binding) = table.get(command) else {
                continue;
            };

            let _ = writeln!(
                out,
                "{} {}{} \"{}\"",
                BIND_KEYWORD,
                binding.modifier,
                binding.key,
                binding.joined_actions()
            );

            if command == LOAD_COMMAND && binding.is_bound() {
                let _ = writeln!(
                    out,
                    "{} {}{} \"{}\"",
                    BIND_KEYWORD,
                    Modifier::Always,
                    binding.key,
                    HOLD_ACTION
                );
            }
        }

        out.push('\n');
    }

    out
}

/// Write the table to `path`, creating parent directories as needed
pub fn save(table: &ControlTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    fs::write(path, render(table))
        .with_context(|| format!("Failed to write controls to {:?}", path))?;

    info!(path = ?path, "Saved key bindings");
    Ok(())
}
