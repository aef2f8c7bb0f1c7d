//! Drawing actions → tiny-skia paint operations.
//!
//! Geometry is described with kurbo shapes and flattened into tiny-skia
//! paths. Strokes are painted one segment at a time so the live pen path
//! and a full replay go through the same primitive and produce the same
//! pixels.

use crate::surface::Surface;
use kurbo::{Circle, Line, PathEl, Rect, Shape};
use sb_core::model::{Color, DrawingAction, Point};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Stroke, Transform};

/// Flattening tolerance for curved kurbo shapes, in logical pixels.
const TOLERANCE: f64 = 0.1;

/// Paint one action on top of whatever the surface already shows.
///
/// `background` is only consulted by [`DrawingAction::Clear`].
pub fn paint_action(surface: &mut Surface, action: &DrawingAction, background: Color) {
    match action {
        DrawingAction::Stroke {
            points,
            color,
            width,
        } => paint_stroke(surface, points, *color, *width),

        DrawingAction::Clear => {
            surface.clear();
            surface.fill(background);
        }

        DrawingAction::Rectangle {
            x,
            y,
            width,
            height,
            color,
        } => paint_rect(surface, *x, *y, *width, *height, *color),

        DrawingAction::Circle {
            x,
            y,
            radius,
            color,
        } => paint_circle(surface, *x, *y, *radius, *color),
    }
}

/// Paint a polyline as consecutive round-capped segments.
pub fn paint_stroke(surface: &mut Surface, points: &[Point], color: Color, width: f32) {
    for pair in points.windows(2) {
        paint_segment(surface, pair[0], pair[1], color, width);
    }
}

/// Paint a single round-capped segment. Zero-length segments paint nothing.
pub fn paint_segment(surface: &mut Surface, from: Point, to: Point, color: Color, width: f32) {
    if !from.is_finite() || !to.is_finite() || from == to {
        return;
    }
    if !(width.is_finite() && width > 0.0) {
        return;
    }
    log::trace!(
        "segment ({}, {}) → ({}, {}) w={width} {color}",
        from.x,
        from.y,
        to.x,
        to.y
    );
    let line = Line::new(
        (from.x as f64, from.y as f64),
        (to.x as f64, to.y as f64),
    );
    let stroke = Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    stroke_shape(surface, &line, &stroke, color);
}

// ─── Shape painters ──────────────────────────────────────────────────────────

fn paint_rect(surface: &mut Surface, x: f32, y: f32, width: f32, height: f32, color: Color) {
    if ![x, y, width, height].iter().all(|v| v.is_finite()) || width <= 0.0 || height <= 0.0 {
        return;
    }
    let rect = Rect::new(
        x as f64,
        y as f64,
        (x + width) as f64,
        (y + height) as f64,
    );
    fill_shape(surface, &rect, color);
}

fn paint_circle(surface: &mut Surface, x: f32, y: f32, radius: f32, color: Color) {
    if ![x, y, radius].iter().all(|v| v.is_finite()) || radius <= 0.0 {
        return;
    }
    let circle = Circle::new((x as f64, y as f64), radius as f64);
    fill_shape(surface, &circle, color);
}

// ─── Fill and stroke ─────────────────────────────────────────────────────────

fn fill_shape<S: Shape>(surface: &mut Surface, shape: &S, color: Color) {
    let Some(path) = to_skia_path(shape) else {
        return;
    };
    surface.pixmap_mut().fill_path(
        &path,
        &solid_paint(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

fn stroke_shape<S: Shape>(surface: &mut Surface, shape: &S, stroke: &Stroke, color: Color) {
    let Some(path) = to_skia_path(shape) else {
        return;
    };
    surface.pixmap_mut().stroke_path(
        &path,
        &solid_paint(color),
        stroke,
        Transform::identity(),
        None,
    );
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn to_skia_path<S: Shape>(shape: &S) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in shape.path_elements(TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => {
                builder.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32)
            }
            PathEl::CurveTo(c1, c2, p) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}
