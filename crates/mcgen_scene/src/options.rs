use serde::{Deserialize, Serialize};

use crate::{Color, SceneError};

/// Extruded text appearance.
///
/// Field names serialize in camelCase (`colorGradualStart`, `letterSpacing`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextOptions {
    /// Font size in world units.
    pub size: f32,
    /// Extrusion depth.
    pub depth: f32,
    /// Vertical offset of the text block.
    pub y: f32,
    /// Front face gradient, top color.
    pub color_gradual_start: Color,
    /// Front face gradient, bottom color.
    pub color_gradual_end: Color,
    pub color_side: Color,
    pub color_bottom_start: Color,
    pub color_bottom_end: Color,
    pub outline_color: Color,
    pub outline_width: f32,
    pub letter_spacing: f32,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            size: 10.0,
            depth: 2.0,
            y: 0.0,
            color_gradual_start: Color::WHITE,
            color_gradual_end: Color::from_hex(0xa0a0a0),
            color_side: Color::from_hex(0x707070),
            color_bottom_start: Color::from_hex(0x404040),
            color_bottom_end: Color::from_hex(0x202020),
            outline_color: Color::BLACK,
            outline_width: 0.5,
            letter_spacing: 1.0,
        }
    }
}

fn check(
    field: &'static str,
    expected: &'static str,
    value: f32,
    ok: impl Fn(f32) -> bool,
) -> Result<(), SceneError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(SceneError::OutOfRange {
            field,
            expected,
            value,
        })
    }
}

impl TextOptions {
    pub fn validate(&self) -> Result<(), SceneError> {
        check("size", "a finite number > 0", self.size, |v| v > 0.0)?;
        check("depth", "a finite number >= 0", self.depth, |v| v >= 0.0)?;
        check("y", "a finite number", self.y, |_| true)?;
        check("outlineWidth", "a finite number >= 0", self.outline_width, |v| {
            v >= 0.0
        })?;
        check("letterSpacing", "a finite number", self.letter_spacing, |_| true)?;
        Ok(())
    }
}

/// Scene camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self { fov: 75.0 }
    }
}

impl CameraOptions {
    pub fn validate(&self) -> Result<(), SceneError> {
        check("fov", "between 0 and 180 degrees (exclusive)", self.fov, |v| {
            v > 0.0 && v < 180.0
        })
    }
}
