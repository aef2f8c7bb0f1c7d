//! Pen tool and shape placement.
//!
//! The pen turns a pointer gesture into live segments (painted straight
//! onto the surface while the pointer moves) and, when the gesture ends,
//! one `Stroke` action for the log. Shapes are stamped at a random origin
//! drawn from a seeded RNG so placement is reproducible.

use crate::input::InputEvent;
use rand::Rng;
use sb_core::model::{Color, DrawingAction, Point};

/// Color and width a stroke is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub width: f32,
}

/// What the pen asks the board to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PenOutput {
    /// Paint this segment now (live fast path).
    Segment { from: Point, to: Point, brush: Brush },
    /// The gesture ended; commit this stroke to the log.
    Finished(DrawingAction),
}

// ─── Pen Tool ────────────────────────────────────────────────────────────

pub struct PenTool {
    drawing: bool,
    points: Vec<Point>,
    /// Brush captured at pointer-down; config changes mid-stroke don't apply.
    brush: Brush,
}

impl Default for PenTool {
    fn default() -> Self {
        Self::new()
    }
}

impl PenTool {
    pub fn new() -> Self {
        Self {
            drawing: false,
            points: Vec::new(),
            brush: Brush {
                color: Color::BLACK,
                width: 5.0,
            },
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Handle an input event, returning zero or more outputs.
    pub fn handle(&mut self, event: &InputEvent, brush: Brush) -> Vec<PenOutput> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                // A down without a matching up: close the old gesture first.
                let out = self.finish().map(PenOutput::Finished).into_iter().collect();
                self.drawing = true;
                self.brush = brush;
                self.points.clear();
                self.points.push(Point::new(x, y));
                out
            }
            InputEvent::PointerMove { x, y } => {
                if !self.drawing {
                    return vec![];
                }
                let to = Point::new(x, y);
                let Some(&from) = self.points.last() else {
                    return vec![];
                };
                if from == to {
                    return vec![];
                }
                self.points.push(to);
                vec![PenOutput::Segment {
                    from,
                    to,
                    brush: self.brush,
                }]
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                self.finish().map(PenOutput::Finished).into_iter().collect()
            }
        }
    }

    /// End the current gesture, if any.
    ///
    /// Returns the stroke to commit. A press that never moved has no visible
    /// effect and yields `None`.
    pub fn finish(&mut self) -> Option<DrawingAction> {
        if !self.drawing {
            return None;
        }
        self.drawing = false;
        let points = std::mem::take(&mut self.points);
        if points.len() < 2 {
            log::trace!("discarding stroke without movement");
            return None;
        }
        Some(DrawingAction::Stroke {
            points,
            color: self.brush.color,
            width: self.brush.width,
        })
    }
}

// ─── Shape placement ─────────────────────────────────────────────────────

/// Pick a random origin so a `reserve_width × reserve_height` box placed
/// there starts inside the canvas.
///
/// Each coordinate is uniform in `[0, canvas − reserve)`, or exactly `0`
/// when the canvas is not larger than the reserve.
pub fn random_origin<R: Rng>(
    rng: &mut R,
    canvas_width: f32,
    canvas_height: f32,
    reserve_width: f32,
    reserve_height: f32,
) -> Point {
    Point::new(
        sample_below(rng, canvas_width - reserve_width),
        sample_below(rng, canvas_height - reserve_height),
    )
}

fn sample_below<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 && max.is_finite() {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}
