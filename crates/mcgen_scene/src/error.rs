use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid color `{0}` (expected #rgb, #rrggbb or #rrggbbaa)")]
    InvalidColor(String),

    #[error("`{field}` must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f32,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse scene config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize scene config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
