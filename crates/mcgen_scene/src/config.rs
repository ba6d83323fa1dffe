//! `scene.toml` handling

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CameraOptions, SceneError, TextOptions};

/// Top-level scene configuration (scene.toml)
///
/// ```toml
/// [text]
/// size = 12
/// colorSide = "#555555"
///
/// [camera]
/// fov = 60
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub text: TextOptions,
    #[serde(default)]
    pub camera: CameraOptions,
}

impl SceneConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, SceneError> {
        let config: SceneConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load_from_path(path: &Path) -> Result<Self, SceneError> {
        let content = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Loaded scene config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        self.text.validate()?;
        self.camera.validate()
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, SceneError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
