//! Board configuration.
//!
//! Every field has a default, so a JSON config only needs the keys it
//! overrides:
//!
//! ```json
//! { "background": "#fdf6e3", "stroke_width": 20 }
//! ```

use crate::tools::Brush;
use sb_core::model::{CANVAS_HEIGHT, CANVAS_WIDTH, Color, StrokeWidth};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    pub background: Color,
    pub stroke_color: Color,
    pub stroke_width: StrokeWidth,
    /// Size of the rectangle stamped by "draw rectangle". Also the margin
    /// kept free on the right/bottom when picking a random shape origin.
    pub rect_width: f32,
    pub rect_height: f32,
    pub circle_radius: f32,
    /// Seed for shape placement.
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: Color::WHITE,
            stroke_color: Color::BLACK,
            stroke_width: StrokeWidth::default(),
            rect_width: 200.0,
            rect_height: 150.0,
            circle_radius: 50.0,
            seed: 0,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid board config: {e}"))
    }

    /// Brush for the next stroke.
    pub fn brush(&self) -> Brush {
        Brush {
            color: self.stroke_color,
            width: self.stroke_width.as_f32(),
        }
    }
}
