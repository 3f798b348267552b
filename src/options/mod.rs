//! Demo options with TOML support.
//!
//! Window, camera, lighting, and keybinding settings live here. Every
//! section is `#[serde(default)]`, so a file that only overrides
//! `[lighting]` still yields a complete [`Options`].

mod camera;
mod keybindings;
mod lighting;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::DemoError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window size, multisampling, and clear colour.
    pub window: WindowOptions,
    /// Projection and controller factors.
    pub camera: CameraOptions,
    /// Light and material for the lit shaders.
    pub lighting: LightingOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, DemoError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| DemoError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, DemoError> {
        toml::to_string_pretty(self)
            .map_err(|e| DemoError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = std::fs::read_to_string(path).map_err(DemoError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), DemoError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DemoError::Io)?;
        }
        std::fs::write(path, content).map_err(DemoError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml_string().unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[lighting]
shininess = 80.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.lighting.shininess, 80.0);
        assert_eq!(opts.lighting.light_position, [-2.0, 5.0, 2.0, 0.0]);
        assert_eq!(opts.window.sample_count, 4);
        assert_eq!(opts.camera.zoom_step, 0.1);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::Wireframe));
        assert_eq!(opts.keybindings.lookup("KeyN"), Some(KeyAction::Windowed));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn loaded_bindings_are_searchable() {
        let toml_str = r#"
[keybindings.bindings]
quit = "KeyQ"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("Escape"), None);
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::Wireframe));
    }

    #[test]
    fn rebinding_replaces_old_key() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::ResetCamera, "KeyR");
        assert_eq!(bindings.lookup("KeyR"), Some(KeyAction::ResetCamera));
        assert_eq!(bindings.lookup("Space"), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[window\nwidth = ").unwrap_err();
        assert!(matches!(err, DemoError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("vao-demos-options-test");
        let path = dir.join("nested").join("options.toml");
        let mut opts = Options::default();
        opts.window.sample_count = 1;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
