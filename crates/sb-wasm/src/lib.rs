//! WASM bridge for SketchBoard — exposes the drawing board to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards pointer,
//! button, and key events here; whenever a call returns `true` it calls
//! `render(ctx)` to copy the surface into its `<canvas>`.

use sb_editor::input::InputEvent;
use sb_editor::shortcuts::{ShortcutAction, ShortcutMap};
use sb_editor::{BoardConfig, EXPORT_FILENAME, SketchBoard};
use wasm_bindgen::Clamped;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, ImageData};

/// The WASM-facing drawing board.
///
/// Wraps a `SketchBoard`; every interaction from the page goes through
/// this struct.
#[wasm_bindgen]
pub struct SketchCanvas {
    board: SketchBoard,
}

#[wasm_bindgen]
impl SketchCanvas {
    /// Create an unmounted board with default settings and the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        console_error_panic_hook_setup();
        let config = BoardConfig {
            width,
            height,
            seed: random_seed(),
            ..BoardConfig::default()
        };
        Self {
            board: SketchBoard::new(config),
        }
    }

    /// Create an unmounted board from a JSON `BoardConfig`. Throws on
    /// malformed config.
    pub fn with_config(json: &str) -> Result<SketchCanvas, JsValue> {
        console_error_panic_hook_setup();
        let config = BoardConfig::from_json(json).map_err(|e| {
            log::warn!("{e}");
            JsValue::from_str(&e)
        })?;
        Ok(Self {
            board: SketchBoard::new(config),
        })
    }

    /// Allocate the surface and fill it with the background.
    pub fn mount(&mut self) -> bool {
        self.board.mount()
    }

    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.board.resize(width, height)
    }

    /// Copy the surface into a Canvas2D context. Does nothing before `mount`.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let Some(surface) = self.board.surface() else {
            return Ok(());
        };
        let pixels = surface.to_rgba8();
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(pixels.as_slice()),
            surface.width(),
            surface.height(),
        )?;
        ctx.put_image_data(&image, 0.0, 0.0)
    }

    // ─── Pointer events (canvas coordinates) ─────────────────────────────

    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.board.handle_input(&InputEvent::from_pointer_down(x, y))
    }

    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.board.handle_input(&InputEvent::from_pointer_move(x, y))
    }

    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.board.handle_input(&InputEvent::from_pointer_up(x, y))
    }

    /// Pointer left the canvas (or the browser cancelled it).
    pub fn handle_pointer_leave(&mut self) -> bool {
        self.board.handle_input(&InputEvent::PointerLeave)
    }

    // ─── Buttons ─────────────────────────────────────────────────────────

    pub fn clear(&mut self) -> bool {
        self.board.clear()
    }

    pub fn undo(&mut self) -> bool {
        self.board.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.board.redo()
    }

    pub fn draw_rectangle(&mut self) -> bool {
        self.board.draw_rectangle()
    }

    pub fn draw_circle(&mut self) -> bool {
        self.board.draw_circle()
    }

    pub fn can_undo(&self) -> bool {
        self.board.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.board.can_redo()
    }

    /// Resolve and apply a key event.
    ///
    /// Returns `{"action":"<name>","changed":<bool>}`. The name is one of
    /// `"undo"`, `"redo"`, `"clear"`, `"draw_rectangle"`, `"draw_circle"`,
    /// `"export"`, or empty when the combo is unbound. Re-render when
    /// `changed` is true; on `"export"` the page should call `export_png`
    /// and start the download.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let (name, changed) = match ShortcutMap::resolve(key, ctrl, shift, alt, meta) {
            Some(action) => (shortcut_name(action), self.board.apply_shortcut(action)),
            None => ("", false),
        };
        format!(r#"{{"action":"{name}","changed":{changed}}}"#)
    }

    // ─── Configuration ───────────────────────────────────────────────────

    pub fn set_stroke_color(&mut self, hex: &str) -> bool {
        self.board.set_stroke_color(hex)
    }

    pub fn set_background_color(&mut self, hex: &str) -> bool {
        self.board.set_background_color(hex)
    }

    pub fn set_stroke_width(&mut self, px: u32) -> bool {
        self.board.set_stroke_width(px)
    }

    // ─── Export ──────────────────────────────────────────────────────────

    /// PNG bytes of the visible surface (a `Uint8Array` on the JS side).
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        self.board.export_png().map_err(|e| JsValue::from_str(&e))
    }

    /// Default download name for `export_png`.
    pub fn export_filename(&self) -> String {
        EXPORT_FILENAME.to_string()
    }

    /// The action log as JSON: `{"undone":[...],"redone":[...]}`.
    pub fn history_json(&self) -> String {
        match serde_json::to_string(self.board.history()) {
            Ok(json) => json,
            Err(e) => format!(r#"{{"error":"Serialization error: {e}"}}"#),
        }
    }
}

fn shortcut_name(action: ShortcutAction) -> &'static str {
    match action {
        ShortcutAction::Undo => "undo",
        ShortcutAction::Redo => "redo",
        ShortcutAction::Clear => "clear",
        ShortcutAction::DrawRectangle => "draw_rectangle",
        ShortcutAction::DrawCircle => "draw_circle",
        ShortcutAction::Export => "export",
    }
}

/// Placement seed from the browser's `Math.random`. Fixed off-wasm so
/// native builds stay reproducible.
fn random_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("SketchBoard WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
