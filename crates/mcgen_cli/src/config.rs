//! Where the CLI finds its files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mcgen_i18n::config_dir_with_override;
use mcgen_scene::SceneConfig;

const SCENE_FILE: &str = "scene.toml";

/// Resolve the config directory (`--config-dir` > `MCGEN_CONFIG_DIR` > platform default).
pub fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    config_dir_with_override(flag).context(
        "No config directory available. Pass --config-dir or set MCGEN_CONFIG_DIR.",
    )
}

/// Load scene options from an explicit file, or from `scene.toml` in the
/// config directory when it exists. Otherwise the defaults apply.
pub fn load_scene(explicit: Option<&Path>, config_dir: &Path) -> Result<SceneConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = config_dir.join(SCENE_FILE);
            if !candidate.exists() {
                return Ok(SceneConfig::default());
            }
            candidate
        }
    };

    SceneConfig::load_from_path(&path)
        .with_context(|| format!("Failed to load scene config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn explicit_flag_wins() {
        let dir = PathBuf::from("/custom/mcgen");
        assert_eq!(resolve_config_dir(Some(dir.clone())).unwrap(), dir);
    }

    #[test]
    fn scene_defaults_without_file() {
        let dir = tempdir().unwrap();
        assert_eq!(load_scene(None, dir.path()).unwrap(), SceneConfig::default());
    }

    #[test]
    fn scene_file_in_config_dir_is_used() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SCENE_FILE), "[camera]\nfov = 30.0\n").unwrap();
        assert_eq!(load_scene(None, dir.path()).unwrap().camera.fov, 30.0);
    }

    #[test]
    fn explicit_missing_scene_file_errors() {
        let dir = tempdir().unwrap();
        let err = load_scene(Some(&dir.path().join("missing.toml")), dir.path()).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
