//! Typed configuration variables ("cvars") and the store that owns them

use std::collections::BTreeMap;
use std::fmt;

use crate::common::color::Rgba;

/// The five cvar kinds, as named in the schema `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CvarKind {
    Bool,
    Int,
    Float,
    Color,
    String,
}

impl CvarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CvarKind::Bool => "bool",
            CvarKind::Int => "int",
            CvarKind::Float => "float",
            CvarKind::Color => "color",
            CvarKind::String => "string",
        }
    }
}

impl fmt::Display for CvarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of a cvar, carrying bounds for the numeric kinds
#[derive(Debug, Clone, PartialEq)]
pub enum CvarValue {
    Bool(bool),
    Int { value: i32, min: i32, max: i32 },
    Float { value: f32, min: f32, max: f32 },
    Color(Rgba),
    String(String),
}

impl CvarValue {
    pub fn kind(&self) -> CvarKind {
        match self {
            CvarValue::Bool(_) => CvarKind::Bool,
            CvarValue::Int { .. } => CvarKind::Int,
            CvarValue::Float { .. } => CvarKind::Float,
            CvarValue::Color(_) => CvarKind::Color,
            CvarValue::String(_) => CvarKind::String,
        }
    }

    // Setters return true if the stored value changed. A setter for another
    // kind leaves the value alone.

    pub fn set_bool(&mut self, new_value: bool) -> bool {
        match self {
            CvarValue::Bool(value) if *value != new_value => {
                *value = new_value;
                true
            }
            _ => false,
        }
    }

    pub fn set_int(&mut self, new_value: i32) -> bool {
        match self {
            CvarValue::Int { value, min, max } => {
                let clamped = clamp_int(new_value, *min, *max);
                let changed = *value != clamped;
                *value = clamped;
                changed
            }
            _ => false,
        }
    }

    pub fn set_float(&mut self, new_value: f32) -> bool {
        match self {
            CvarValue::Float { value, min, max } => {
                let clamped = clamp_float(new_value, *min, *max);
                let changed = *value != clamped;
                *value = clamped;
                changed
            }
            _ => false,
        }
    }

    pub fn set_color(&mut self, new_value: Rgba) -> bool {
        match self {
            CvarValue::Color(value) => {
                let clamped = new_value.clamped();
                let changed = *value != clamped;
                *value = clamped;
                changed
            }
            _ => false,
        }
    }

    /// String values are saved as a single token, so whitespace is dropped and
    /// an empty result is refused
    pub fn set_string(&mut self, new_value: &str) -> bool {
        let token: String = new_value.chars().filter(|c| !c.is_whitespace()).collect();
        match self {
            CvarValue::String(value) if !token.is_empty() && *value != token => {
                *value = token;
                true
            }
            _ => false,
        }
    }
}

/// A named, typed, user-adjustable setting
#[derive(Debug, Clone, PartialEq)]
pub struct Cvar {
    pub name: String,
    pub value: CvarValue,
}

impl Cvar {
    pub fn new(name: impl Into<String>, value: CvarValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn kind(&self) -> CvarKind {
        self.value.kind()
    }
}

/// One row handed to the GUI: name, kind and a mutable handle on the value
#[derive(Debug)]
pub struct CvarEntry<'a> {
    pub name: &'a str,
    pub kind: CvarKind,
    pub value: &'a mut CvarValue,
}

/// All cvars of one editor session, keyed by name
///
/// Iteration follows name order. Overlay and edit operations only ever mutate
/// entries that already exist; only the schema loader inserts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvarStore {
    cvars: BTreeMap<String, Cvar>,
}

impl CvarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a cvar
    pub fn insert(&mut self, cvar: Cvar) {
        self.cvars.insert(cvar.name.clone(), cvar);
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Cvar> {
        self.cvars.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Cvar> {
        self.cvars.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.cvars.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cvar> {
        self.cvars.values()
    }

    /// Entries grouped by kind name (`bool`, `color`, `float`, `int`, `string`),
    /// name order within a kind
    pub fn renderable_entries(&mut self) -> Vec<CvarEntry<'_>> {
        let mut entries: Vec<CvarEntry<'_>> = self
            .cvars
            .iter_mut()
            .map(|(name, cvar)| CvarEntry {
                name: name.as_str(),
                kind: cvar.value.kind(),
                value: &mut cvar.value,
            })
            .collect();
        entries.sort_by_key(|entry| entry.kind.as_str());
        entries
    }
}

// Bounds come from user-written schema files, so a reversed range must not panic.
fn clamp_int(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max.max(min))
}

fn clamp_float(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max.max(min))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> CvarStore {
        let mut store = CvarStore::new();
        store.insert(Cvar::new(
            "zoom",
            CvarValue::Float {
                value: 1.0,
                min: 0.5,
                max: 4.0,
            },
        ));
        store.insert(Cvar::new("show_fps", CvarValue::Bool(false)));
        store.insert(Cvar::new(
            "fps_cap",
            CvarValue::Int {
                value: 60,
                min: 30,
                max: 1000,
            },
        ));
        store.insert(Cvar::new("sky", CvarValue::Color(Rgba::new(0.0, 0.0, 1.0, 1.0))));
        store.insert(Cvar::new("nick", CvarValue::String("player".to_string())));
        store.insert(Cvar::new("hud", CvarValue::Bool(true)));
        store
    }

    #[test]
    fn test_renderable_entries_grouped_by_kind() {
        let mut store = sample_store();
        let order: Vec<(String, CvarKind)> = store
            .renderable_entries()
            .into_iter()
            .map(|e| (e.name.to_string(), e.kind))
            .collect();

        assert_eq!(
            order,
            vec![
                ("hud".to_string(), CvarKind::Bool),
                ("show_fps".to_string(), CvarKind::Bool),
                ("sky".to_string(), CvarKind::Color),
                ("zoom".to_string(), CvarKind::Float),
                ("fps_cap".to_string(), CvarKind::Int),
                ("nick".to_string(), CvarKind::String),
            ]
        );
    }

    #[test]
    fn test_renderable_entry_edits_store() {
        let mut store = sample_store();
        for entry in store.renderable_entries() {
            if let CvarValue::Bool(value) = entry.value {
                *value = !*value;
            }
        }
        assert_eq!(store.get("hud").unwrap().value, CvarValue::Bool(false));
        assert_eq!(store.get("show_fps").unwrap().value, CvarValue::Bool(true));
    }

    fn value<'a>(store: &'a mut CvarStore, name: &str) -> &'a mut CvarValue {
        &mut store.get_mut(name).unwrap().value
    }

    #[test]
    fn test_set_int_clamps() {
        let mut store = sample_store();

        assert!(value(&mut store, "fps_cap").set_int(5000));
        assert_eq!(
            store.get("fps_cap").unwrap().value,
            CvarValue::Int {
                value: 1000,
                min: 30,
                max: 1000
            }
        );

        assert!(value(&mut store, "fps_cap").set_int(i32::MIN));
        assert!(matches!(
            store.get("fps_cap").unwrap().value,
            CvarValue::Int { value: 30, .. }
        ));
    }

    #[test]
    fn test_set_float_clamps() {
        let mut store = sample_store();

        value(&mut store, "zoom").set_float(100.0);
        assert!(matches!(
            store.get("zoom").unwrap().value,
            CvarValue::Float { value, .. } if value == 4.0
        ));

        value(&mut store, "zoom").set_float(f32::NEG_INFINITY);
        assert!(matches!(
            store.get("zoom").unwrap().value,
            CvarValue::Float { value, .. } if value == 0.5
        ));

        value(&mut store, "zoom").set_float(f32::NAN);
        assert!(matches!(
            store.get("zoom").unwrap().value,
            CvarValue::Float { value, .. } if value == 0.5
        ));
    }

    #[test]
    fn test_set_wrong_kind_is_ignored() {
        let mut store = sample_store();
        let before = store.clone();

        assert!(!value(&mut store, "show_fps").set_int(1));
        assert!(!value(&mut store, "fps_cap").set_bool(true));
        assert!(!value(&mut store, "zoom").set_string("x"));
        assert!(!value(&mut store, "nick").set_color(Rgba::default()));
        assert_eq!(store, before);
    }

    #[test]
    fn test_unknown_name_has_no_entry() {
        let mut store = sample_store();
        assert!(store.get_mut("missing").is_none());
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_set_unchanged_reports_false() {
        let mut store = sample_store();
        assert!(!value(&mut store, "hud").set_bool(true));
        assert!(!value(&mut store, "fps_cap").set_int(60));
        assert!(!value(&mut store, "nick").set_string("player"));
        assert!(value(&mut store, "nick").set_string("rider"));
    }

    #[test]
    fn test_set_string_keeps_a_single_token() {
        let mut store = sample_store();

        assert!(value(&mut store, "nick").set_string("big rider\t"));
        assert_eq!(
            store.get("nick").unwrap().value,
            CvarValue::String("bigrider".to_string())
        );

        assert!(!value(&mut store, "nick").set_string(""));
        assert!(!value(&mut store, "nick").set_string("  "));
        assert_eq!(
            store.get("nick").unwrap().value,
            CvarValue::String("bigrider".to_string())
        );
    }

    #[test]
    fn test_set_color_clamps_channels() {
        let mut store = sample_store();
        value(&mut store, "sky").set_color(Rgba::new(2.0, -1.0, 0.5, 1.0));
        assert_eq!(
            store.get("sky").unwrap().value,
            CvarValue::Color(Rgba::new(1.0, 0.0, 0.5, 1.0))
        );
    }

    #[test]
    fn test_reversed_bounds_do_not_panic() {
        let mut bad = CvarValue::Int {
            value: 0,
            min: 10,
            max: 0,
        };
        bad.set_int(5);
        assert!(matches!(bad, CvarValue::Int { value: 10, .. }));
    }
}
