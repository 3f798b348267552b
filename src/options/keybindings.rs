use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

fn default_bindings() -> HashMap<KeyAction, String> {
    [
        (KeyAction::Quit, "Escape"),
        (KeyAction::Wireframe, "KeyW"),
        (KeyAction::Solid, "KeyS"),
        (KeyAction::ResetCamera, "Space"),
        (KeyAction::FullScreen, "KeyF"),
        (KeyAction::Windowed, "KeyN"),
    ]
    .into_iter()
    .map(|(action, key)| (action, key.to_owned()))
    .collect()
}

/// Loaded entries override the defaults one action at a time. A default
/// whose key was claimed by a loaded entry is dropped.
fn merge_over_defaults<'de, D>(deserializer: D) -> Result<HashMap<KeyAction, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let loaded = HashMap::<KeyAction, String>::deserialize(deserializer)?;
    let mut bindings = default_bindings();
    bindings.retain(|action, key| loaded.contains_key(action) || !loaded.values().any(|k| k == key));
    bindings.extend(loaded);
    Ok(bindings)
}

/// Key strings (winit `KeyCode` debug names) for each [`KeyAction`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Action → key string, e.g. `wireframe = "KeyW"`.
    #[serde(deserialize_with = "merge_over_defaults")]
    pub bindings: HashMap<KeyAction, String>,
    #[serde(skip)]
    by_key: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut opts = Self {
            bindings: default_bindings(),
            by_key: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Recompute key → action lookups from `bindings`. Needed after
    /// deserializing or editing `bindings` directly.
    pub fn rebuild_reverse_map(&mut self) {
        self.by_key = self
            .bindings
            .iter()
            .map(|(action, key)| (key.clone(), *action))
            .collect();
    }

    /// Point `action` at `key`, dropping whatever it was bound to before.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Action bound to `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.by_key.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> KeybindingOptions {
        let mut opts: KeybindingOptions = toml::from_str(toml_str).unwrap();
        opts.rebuild_reverse_map();
        opts
    }

    #[test]
    fn one_override_keeps_other_defaults() {
        let opts = parse("[bindings]\nquit = \"KeyQ\"\n");
        assert_eq!(opts.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(opts.lookup("Escape"), None);
        assert_eq!(opts.lookup("KeyW"), Some(KeyAction::Wireframe));
        assert_eq!(opts.lookup("Space"), Some(KeyAction::ResetCamera));
        assert_eq!(opts.bindings.len(), 6);
    }

    #[test]
    fn claimed_default_key_is_released() {
        let opts = parse("[bindings]\nreset_camera = \"KeyW\"\n");
        assert_eq!(opts.lookup("KeyW"), Some(KeyAction::ResetCamera));
        assert!(!opts.bindings.contains_key(&KeyAction::Wireframe));
        assert_eq!(opts.lookup("Space"), None);
    }

    #[test]
    fn missing_table_is_all_defaults() {
        assert_eq!(parse(""), KeybindingOptions::default());
    }
}
