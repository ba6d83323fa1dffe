//! Scene options for the mcgen 3D text renderer
//!
//! The renderer itself lives elsewhere; this crate owns the shape of its
//! configuration:
//!
//! - [`TextOptions`]: extrusion size, colors and outline of the text mesh
//! - [`CameraOptions`]: camera field of view
//! - [`SceneConfig`]: both, loaded from a `scene.toml`

mod color;
mod config;
mod error;
mod options;

pub use color::Color;
pub use config::SceneConfig;
pub use error::SceneError;
pub use options::{CameraOptions, TextOptions};
