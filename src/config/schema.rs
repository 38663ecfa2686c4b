//! Schema loader
//!
//! The schema is a JSON object mapping each cvar name to a descriptor:
//!
//! ```json
//! {
//!     "fps_cap": { "type": "int", "default": 60, "min": 30, "max": 1000 },
//!     "sky":     { "type": "color", "default": "#87CEEBFF" }
//! }
//! ```
//!
//! `min`/`max` are required for `int` and `float`. Colour defaults are
//! `RRGGBBAA` hex with an optional leading '#'.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::common::color::Rgba;
use crate::config::cvar::{Cvar, CvarStore, CvarValue};

/// Errors that make a schema unusable
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read schema {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema is not a JSON object of cvar descriptors: {0}")]
    Document(#[source] serde_json::Error),

    #[error("Invalid descriptor for cvar '{name}': {source}")]
    Descriptor {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid colour '{value}' for cvar '{name}'")]
    Color { name: String, value: String },

    #[error("String default for cvar '{name}' must be one word, got '{value}'")]
    String { name: String, value: String },
}

/// One schema descriptor, tagged by its `type` field
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Descriptor {
    Bool {
        default: bool,
    },
    Int {
        default: i32,
        min: i32,
        max: i32,
    },
    Float {
        default: f32,
        min: f32,
        max: f32,
    },
    Color {
        default: String,
    },
    String {
        default: String,
    },
}

impl Descriptor {
    fn into_value(self, name: &str) -> Result<CvarValue, SchemaError> {
        Ok(match self {
            Descriptor::Bool { default } => CvarValue::Bool(default),
            Descriptor::Int { default, min, max } => CvarValue::Int {
                value: default,
                min,
                max,
            },
            Descriptor::Float { default, min, max } => CvarValue::Float {
                value: default,
                min,
                max,
            },
            Descriptor::Color { default } => {
                let color = Rgba::parse_hex(&default).ok_or_else(|| SchemaError::Color {
                    name: name.to_string(),
                    value: default.clone(),
                })?;
                CvarValue::Color(color)
            }
            Descriptor::String { default } => {
                if default.is_empty() || default.contains(char::is_whitespace) {
                    return Err(SchemaError::String {
                        name: name.to_string(),
                        value: default,
                    });
                }
                CvarValue::String(default)
            }
        })
    }
}

/// Build a store from schema JSON text
pub fn parse_schema(json: &str) -> Result<CvarStore, SchemaError> {
    let raw: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(json).map_err(SchemaError::Document)?;

    let mut store = CvarStore::new();
    for (name, descriptor) in raw {
        let descriptor: Descriptor =
            serde_json::from_value(descriptor).map_err(|source| SchemaError::Descriptor {
                name: name.clone(),
                source,
            })?;
        let value = descriptor.into_value(&name)?;
        debug!(cvar = %name, kind = %value.kind(), "Loaded cvar descriptor");
        store.insert(Cvar::new(name, value));
    }

    Ok(store)
}

/// Build a store from a schema file
pub fn load_schema(path: &Path) -> Result<CvarStore, SchemaError> {
    let contents = fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let store = parse_schema(&contents)?;
    info!(path = ?path, cvars = store.len(), "Loaded cvar schema");
    Ok(store)
}
