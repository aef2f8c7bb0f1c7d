//! Drawing data model for SketchBoard.
//!
//! A drawing is an ordered list of [`DrawingAction`]s. Each action carries
//! everything needed to paint it onto a blank, background-filled canvas:
//! geometry, color, and width. Nothing refers to pixels already on the
//! surface, so any prefix of the list can be replayed on its own.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default logical canvas width.
pub const CANVAS_WIDTH: u32 = 800;
/// Default logical canvas height.
pub const CANVAS_HEIGHT: u32 = 500;

// ─── Colors ──────────────────────────────────────────────────────────────

/// 8-bit straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let short = |i: usize| hex_val(bytes[i]).map(|v| v * 17);
        let long = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        match bytes.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Emit as lowercase hex. The alpha pair is omitted when fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color `{s}`")))
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// A position on the canvas in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ─── Stroke width ────────────────────────────────────────────────────────

/// Pen widths offered by the width selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrokeWidth {
    #[default]
    Px5,
    Px10,
    Px20,
    Px30,
    Px40,
    Px50,
}

impl StrokeWidth {
    pub const ALL: [StrokeWidth; 6] = [
        StrokeWidth::Px5,
        StrokeWidth::Px10,
        StrokeWidth::Px20,
        StrokeWidth::Px30,
        StrokeWidth::Px40,
        StrokeWidth::Px50,
    ];

    /// Map a pixel value to a selectable width. Anything outside the set is `None`.
    pub fn from_px(px: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.px() == px)
    }

    pub const fn px(self) -> u32 {
        match self {
            StrokeWidth::Px5 => 5,
            StrokeWidth::Px10 => 10,
            StrokeWidth::Px20 => 20,
            StrokeWidth::Px30 => 30,
            StrokeWidth::Px40 => 40,
            StrokeWidth::Px50 => 50,
        }
    }

    pub fn as_f32(self) -> f32 {
        self.px() as f32
    }
}

impl Serialize for StrokeWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.px())
    }
}

impl<'de> Deserialize<'de> for StrokeWidth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let px = u32::deserialize(deserializer)?;
        StrokeWidth::from_px(px).ok_or_else(|| {
            serde::de::Error::custom(format!("stroke width must be one of 5, 10, 20, 30, 40, 50; got {px}"))
        })
    }
}

// ─── Actions ─────────────────────────────────────────────────────────────

/// One discrete, replayable drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawingAction {
    /// Freehand polyline, painted as round-capped segments between
    /// consecutive points.
    Stroke {
        points: Vec<Point>,
        color: Color,
        width: f32,
    },
    /// Wipe the surface back to the background color.
    Clear,
    /// Filled axis-aligned rectangle with its top-left corner at `(x, y)`.
    Rectangle {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    /// Filled circle centered at `(x, y)`.
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
}

impl DrawingAction {
    /// Short name used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            DrawingAction::Stroke { .. } => "stroke",
            DrawingAction::Clear => "clear",
            DrawingAction::Rectangle { .. } => "rectangle",
            DrawingAction::Circle { .. } => "circle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_forms_parse() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("00FF00"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("#0008"), Some(Color::rgba(0, 0, 0, 0x88)));
        assert_eq!(
            Color::from_hex("#11223344"),
            Some(Color::rgba(0x11, 0x22, 0x33, 0x44))
        );
    }

    #[test]
    fn bad_hex_rejected() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ff00ff00ff"), None);
    }

    #[test]
    fn hex_output_is_shortest_lowercase() {
        assert_eq!(Color::rgb(0xAB, 0xCD, 0xEF).to_hex(), "#abcdef");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn stroke_width_set_is_closed() {
        assert_eq!(StrokeWidth::from_px(20), Some(StrokeWidth::Px20));
        assert_eq!(StrokeWidth::from_px(50), Some(StrokeWidth::Px50));
        assert_eq!(StrokeWidth::from_px(15), None);
        assert_eq!(StrokeWidth::from_px(0), None);
        assert_eq!(StrokeWidth::default().px(), 5);
    }

    #[test]
    fn action_json_is_tagged() {
        let action = DrawingAction::Circle {
            x: 300.0,
            y: 200.0,
            radius: 50.0,
            color: Color::rgb(0, 255, 0),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "circle",
                "x": 300.0,
                "y": 200.0,
                "radius": 50.0,
                "color": "#00ff00",
            })
        );

        let clear: DrawingAction = serde_json::from_str(r#"{"type":"clear"}"#).unwrap();
        assert_eq!(clear, DrawingAction::Clear);
    }

    #[test]
    fn invalid_width_fails_to_deserialize() {
        let err = serde_json::from_str::<StrokeWidth>("7").unwrap_err();
        assert!(err.to_string().contains("got 7"));
    }
}
