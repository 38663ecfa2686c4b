//! Keybinding table
//!
//! A fixed catalog of game commands grouped into ordered sections. Only a
//! binding's key and trigger modifier change at runtime; its action list is
//! the identity used when matching lines from a saved controls file.

use std::collections::HashMap;
use std::fmt;

use crate::constants::format::ACTION_SEPARATOR;

/// Trigger semantics, written as a one-character prefix on the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `*` - active for as long as the key is held
    Always,
    /// `+` - fires when the key goes down
    OnPress,
    /// `-` - fires when the key goes up
    OnRelease,
}

impl Modifier {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Modifier::Always),
            '+' => Some(Modifier::OnPress),
            '-' => Some(Modifier::OnRelease),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Modifier::Always => '*',
            Modifier::OnPress => '+',
            Modifier::OnRelease => '-',
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A command bound to a physical key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub command: String,
    /// Key name, empty when unbound
    pub key: String,
    pub modifier: Modifier,
    actions: Vec<String>,
    pub display_name: String,
}

impl Binding {
    pub fn new(
        command: &str,
        key: &str,
        modifier: Modifier,
        actions: &[&str],
        display_name: &str,
    ) -> Self {
        Self {
            command: command.to_string(),
            key: key.to_string(),
            modifier,
            actions: actions.iter().map(|a| a.to_string()).collect(),
            display_name: display_name.to_string(),
        }
    }

    /// Actions in file form (`left;right`)
    pub fn joined_actions(&self) -> String {
        self.actions.join(ACTION_SEPARATOR)
    }

    pub fn is_bound(&self) -> bool {
        !self.key.is_empty()
    }
}

/// Ordered group of commands shown and saved under one heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSection {
    /// Heading line written verbatim, including its leading '#'
    pub heading: String,
    pub commands: Vec<String>,
}

impl BindingSection {
    pub fn new(heading: &str, commands: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// All bindings plus the section layout they are displayed and saved in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlTable {
    bindings: HashMap<String, Binding>,
    sections: Vec<BindingSection>,
}

impl ControlTable {
    pub fn new(bindings: Vec<Binding>, sections: Vec<BindingSection>) -> Self {
        Self {
            bindings: bindings
                .into_iter()
                .map(|b| (b.command.clone(), b))
                .collect(),
            sections,
        }
    }

    pub fn get(&self, command: &str) -> Option<&Binding> {
        self.bindings.get(command)
    }

    pub fn get_mut(&mut self, command: &str) -> Option<&mut Binding> {
        self.bindings.get_mut(command)
    }

    pub fn contains(&self, command: &str) -> bool {
        self.bindings.contains_key(command)
    }

    pub fn sections(&self) -> &[BindingSection] {
        &self.sections
    }

    /// Bindings in section order. Commands listed in a section but missing from
    /// the table are skipped.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Binding> {
        self.sections
            .iter()
            .flat_map(|s| s.commands.iter())
            .filter_map(|c| self.bindings.get(c))
    }

    /// First binding (in section order) whose joined actions equal `actions`
    pub fn find_by_actions(&self, actions: &str) -> Option<&str> {
        self.iter_ordered()
            .find(|b| b.joined_actions() == actions)
            .map(|b| b.command.as_str())
    }

    pub fn set_key(&mut self, command: &str, key: &str) -> bool {
        match self.bindings.get_mut(command) {
            Some(binding) => {
                key.clone_into(&mut binding.key);
                true
            }
            None => false,
        }
    }
}

impl Default for ControlTable {
    /// The built-in Elasto Mania command catalog
    fn default() -> Self {
        use Modifier::{Always, OnPress};

        let bindings = vec![
            Binding::new("throttle", "up", Always, &["throttle", "spy_up"], "Throttle"),
            Binding::new("brake", "down", Always, &["brake", "spy_down"], "Brake"),
            Binding::new("brake_alias", "", Always, &["brake"], "Brake alias"),
            Binding::new("ofbrake", "q", OnPress, &["ofbrake"], "One Frame Brake"),
            Binding::new("left", "left", Always, &["left", "spy_left"], "Left Volt"),
            Binding::new("right", "right", Always, &["right", "spy_right"], "Right Volt"),
            Binding::new("left;right", "rctrl", Always, &["left", "right"], "Alovolt"),
            Binding::new("turn", "spacebar", Always, &["turn"], "Turn"),
            Binding::new("save", "f3", OnPress, &["save"], "Save"),
            Binding::new("load", "f4", OnPress, &["load", "resetdata"], "Load"),
        ];

        let sections = vec![
            BindingSection::new(
                "# Elma Controls",
                &[
                    "throttle",
                    "brake",
                    "brake_alias",
                    "ofbrake",
                    "left",
                    "right",
                    "left;right",
                    "turn",
                ],
            ),
            BindingSection::new("# Saveload Controls", &["save", "load"]),
        ];

        Self::new(bindings, sections)
    }
}
