//! The sketch board controller.
//!
//! Holds the action log, the raster surface, the pen, and the placement
//! RNG. Every UI interaction goes through this struct; it keeps the
//! surface equal to a replay of `history().actions()` over the configured
//! background after every call returns.
//!
//! New actions are painted on top of the existing surface (the result is
//! the same as a replay, since the log only grows at the end). Undo, redo,
//! background changes, mount, and resize rebuild the surface from scratch.
//!
//! Operations that need the surface are no-ops until [`SketchBoard::mount`]
//! has allocated one.

use crate::commands::ActionLog;
use crate::config::BoardConfig;
use crate::input::InputEvent;
use crate::shortcuts::ShortcutAction;
use crate::tools::{PenOutput, PenTool, random_origin};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sb_core::model::{Color, DrawingAction, StrokeWidth};
use sb_render::{Surface, paint_action, paint_segment, replay_into};

/// File name offered for the PNG download.
pub const EXPORT_FILENAME: &str = "my-canvas.png";

pub struct SketchBoard {
    config: BoardConfig,
    log: ActionLog,
    surface: Option<Surface>,
    pen: PenTool,
    rng: ChaCha8Rng,
}

impl SketchBoard {
    /// Create an unmounted board. Call [`mount`](Self::mount) before drawing.
    pub fn new(config: BoardConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            log: ActionLog::new(),
            surface: None,
            pen: PenTool::new(),
            rng,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn history(&self) -> &ActionLog {
        &self.log
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn is_drawing(&self) -> bool {
        self.pen.is_drawing()
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    // ─── Surface lifecycle ───────────────────────────────────────────────

    /// Allocate the surface at the configured size and paint the history
    /// over the background. Returns `false` if no surface can be allocated;
    /// an already mounted surface is kept in that case.
    pub fn mount(&mut self) -> bool {
        let (width, height) = (self.config.width, self.config.height);
        let Some(surface) = Surface::new(width, height) else {
            log::warn!("cannot allocate a {width}x{height} surface");
            return false;
        };
        self.surface = Some(surface);
        log::debug!("mounted {width}x{height} surface");
        self.replay();
        true
    }

    /// Change the canvas size. A mounted board reallocates and replays.
    ///
    /// A size that cannot be allocated (a zero side) is rejected: the board
    /// keeps its current surface and size and returns `false`. An unmounted
    /// board only records the size for the next [`mount`](Self::mount).
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if !self.is_mounted() {
            self.config.width = width;
            self.config.height = height;
            return false;
        }
        let Some(surface) = Surface::new(width, height) else {
            log::warn!("cannot resize to {width}x{height}, keeping the current surface");
            return false;
        };
        self.commit_pending_stroke();
        self.config.width = width;
        self.config.height = height;
        self.surface = Some(surface);
        log::debug!("resized surface to {width}x{height}");
        self.replay();
        true
    }

    // ─── Pointer input ───────────────────────────────────────────────────

    /// Feed a pointer event to the pen.
    ///
    /// Segments paint immediately; a finished stroke is appended to the log.
    /// Returns `true` if the surface or the history changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let mut changed = false;
        for output in self.pen.handle(event, self.config.brush()) {
            match output {
                PenOutput::Segment { from, to, brush } => {
                    paint_segment(surface, from, to, brush.color, brush.width);
                }
                PenOutput::Finished(action) => self.log.append(action),
            }
            changed = true;
        }
        changed
    }

    // ─── Buttons ─────────────────────────────────────────────────────────

    /// Wipe the surface to the background. Recorded, so it can be undone.
    pub fn clear(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.commit_pending_stroke();
        self.log.clear();
        self.paint_newest();
        true
    }

    /// Undo the newest action and rebuild the surface. `false` if there was
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.commit_pending_stroke();
        if self.log.undo().is_none() {
            return false;
        }
        self.replay();
        true
    }

    /// Redo the most recently undone action and rebuild the surface. `false`
    /// if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.commit_pending_stroke();
        if self.log.redo().is_none() {
            return false;
        }
        self.replay();
        true
    }

    /// Stamp a rectangle in the stroke color at a random origin.
    pub fn draw_rectangle(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let (x, y) = self.next_origin();
        self.draw_rectangle_at(x, y)
    }

    /// Stamp a circle in the stroke color at a random center.
    pub fn draw_circle(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let (x, y) = self.next_origin();
        self.draw_circle_at(x, y)
    }

    /// Stamp a rectangle with its top-left corner at `(x, y)`.
    pub fn draw_rectangle_at(&mut self, x: f32, y: f32) -> bool {
        let action = DrawingAction::Rectangle {
            x,
            y,
            width: self.config.rect_width,
            height: self.config.rect_height,
            color: self.config.stroke_color,
        };
        self.push(action)
    }

    /// Stamp a circle centered at `(x, y)`.
    pub fn draw_circle_at(&mut self, x: f32, y: f32) -> bool {
        let action = DrawingAction::Circle {
            x,
            y,
            radius: self.config.circle_radius,
            color: self.config.stroke_color,
        };
        self.push(action)
    }

    /// Dispatch a keyboard shortcut.
    ///
    /// [`ShortcutAction::Export`] produces bytes rather than a state change,
    /// so it is left to the caller and returns `false` here.
    pub fn apply_shortcut(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::Clear => self.clear(),
            ShortcutAction::DrawRectangle => self.draw_rectangle(),
            ShortcutAction::DrawCircle => self.draw_circle(),
            ShortcutAction::Export => false,
        }
    }

    // ─── Configuration ───────────────────────────────────────────────────

    /// Set the pen/shape color from a hex string. Invalid input is ignored.
    pub fn set_stroke_color(&mut self, hex: &str) -> bool {
        match Color::from_hex(hex) {
            Some(color) => {
                self.config.stroke_color = color;
                true
            }
            None => {
                log::warn!("ignoring invalid stroke color `{hex}`");
                false
            }
        }
    }

    /// Set the background from a hex string and repaint the history over it.
    /// Invalid input is ignored.
    pub fn set_background_color(&mut self, hex: &str) -> bool {
        let Some(color) = Color::from_hex(hex) else {
            log::warn!("ignoring invalid background color `{hex}`");
            return false;
        };
        self.commit_pending_stroke();
        self.config.background = color;
        self.replay();
        true
    }

    /// Set the pen width in pixels. Only 5, 10, 20, 30, 40, and 50 are accepted.
    pub fn set_stroke_width(&mut self, px: u32) -> bool {
        match StrokeWidth::from_px(px) {
            Some(width) => {
                self.config.stroke_width = width;
                true
            }
            None => {
                log::warn!("ignoring unsupported stroke width {px}px");
                false
            }
        }
    }

    // ─── Export ──────────────────────────────────────────────────────────

    /// Encode the visible surface as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, String> {
        let surface = self
            .surface
            .as_ref()
            .ok_or_else(|| "canvas not mounted".to_string())?;
        let png = surface.encode_png()?;
        log::debug!("exported {} bytes as {EXPORT_FILENAME}", png.len());
        Ok(png)
    }

    // ─── Internals ───────────────────────────────────────────────────────

    fn push(&mut self, action: DrawingAction) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.commit_pending_stroke();
        self.log.append(action);
        self.paint_newest();
        true
    }

    /// A gesture still in progress is committed before any other action so
    /// its live segments end up in the log.
    fn commit_pending_stroke(&mut self) {
        if let Some(stroke) = self.pen.finish() {
            self.log.append(stroke);
        }
    }

    fn next_origin(&mut self) -> (f32, f32) {
        let origin = random_origin(
            &mut self.rng,
            self.config.width as f32,
            self.config.height as f32,
            self.config.rect_width,
            self.config.rect_height,
        );
        (origin.x, origin.y)
    }

    fn paint_newest(&mut self) {
        if let (Some(surface), Some(action)) = (self.surface.as_mut(), self.log.actions().last()) {
            paint_action(surface, action, self.config.background);
        }
    }

    fn replay(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            replay_into(surface, self.log.actions(), self.config.background);
        }
    }
}
