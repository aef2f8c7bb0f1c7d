//! Full-redraw replay of an action sequence.

use crate::paint::paint_action;
use crate::surface::Surface;
use sb_core::model::{Color, DrawingAction};

/// Render `actions` onto a fresh `width × height` surface filled with
/// `background`.
///
/// Returns `None` only when a surface of that size cannot exist (a zero
/// side).
pub fn render(
    actions: &[DrawingAction],
    background: Color,
    width: u32,
    height: u32,
) -> Option<Surface> {
    let mut surface = Surface::new(width, height)?;
    replay_into(&mut surface, actions, background);
    Some(surface)
}

/// Redraw `surface` from scratch so it shows exactly `actions` over
/// `background`. Prior contents never leak through.
pub fn replay_into(surface: &mut Surface, actions: &[DrawingAction], background: Color) {
    log::debug!(
        "replay {} action(s) onto {}x{} over {background}",
        actions.len(),
        surface.width(),
        surface.height()
    );
    surface.clear();
    surface.fill(background);
    for action in actions {
        paint_action(surface, action, background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sb_core::model::{CANVAS_HEIGHT, CANVAS_WIDTH, Point};

    const WHITE: Color = Color::WHITE;

    fn red_rect() -> DrawingAction {
        DrawingAction::Rectangle {
            x: 10.0,
            y: 10.0,
            width: 200.0,
            height: 150.0,
            color: Color::from_hex("#ff0000").unwrap(),
        }
    }

    fn green_circle() -> DrawingAction {
        DrawingAction::Circle {
            x: 300.0,
            y: 200.0,
            radius: 50.0,
            color: Color::from_hex("#00ff00").unwrap(),
        }
    }

    fn scribble() -> DrawingAction {
        DrawingAction::Stroke {
            points: vec![
                Point::new(20.0, 300.0),
                Point::new(120.0, 340.0),
                Point::new(180.0, 290.0),
                Point::new(260.0, 420.0),
            ],
            color: Color::from_hex("#123456").unwrap(),
            width: 10.0,
        }
    }

    fn canvas(actions: &[DrawingAction]) -> Surface {
        render(actions, WHITE, CANVAS_WIDTH, CANVAS_HEIGHT).unwrap()
    }

    #[test]
    fn empty_history_is_background() {
        let bg = Color::from_hex("#fafafa").unwrap();
        let surface = render(&[], bg, 8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(surface.pixel(x, y), Some(bg));
            }
        }
    }

    #[test]
    fn zero_dimension_has_no_surface() {
        assert!(render(&[red_rect()], WHITE, 0, 0).is_none());
    }

    #[test]
    fn shapes_paint_in_order() {
        let red = Color::rgb(255, 0, 0);
        let green = Color::rgb(0, 255, 0);
        let surface = canvas(&[red_rect(), green_circle()]);
        assert_eq!(surface.pixel(100, 100), Some(red));
        assert_eq!(surface.pixel(300, 200), Some(green));
        assert_eq!(surface.pixel(500, 400), Some(WHITE));

        // A later action covers an earlier one where they overlap.
        let covering = DrawingAction::Circle {
            x: 100.0,
            y: 100.0,
            radius: 20.0,
            color: green,
        };
        let surface = canvas(&[red_rect(), covering.clone()]);
        assert_eq!(surface.pixel(100, 100), Some(green));
        let surface = canvas(&[covering, red_rect()]);
        assert_eq!(surface.pixel(100, 100), Some(red));
    }

    #[test]
    fn clear_hides_everything_before_it() {
        let surface = canvas(&[red_rect(), scribble(), DrawingAction::Clear]);
        assert_eq!(surface, canvas(&[]));

        let after = canvas(&[red_rect(), DrawingAction::Clear, green_circle()]);
        assert_eq!(after, canvas(&[green_circle()]));
    }

    #[test]
    fn replay_is_deterministic() {
        let actions = [red_rect(), scribble(), green_circle(), scribble()];
        assert_eq!(canvas(&actions), canvas(&actions));
    }

    #[test]
    fn replay_ignores_previous_contents() {
        let mut dirty = canvas(&[red_rect(), green_circle(), scribble()]);
        replay_into(&mut dirty, &[green_circle()], WHITE);
        assert_eq!(dirty, canvas(&[green_circle()]));
    }

    #[test]
    fn clear_uses_replay_background() {
        let bg = Color::rgb(0, 0, 128);
        let surface = render(&[red_rect(), DrawingAction::Clear], bg, 64, 64).unwrap();
        assert_eq!(surface.pixel(20, 20), Some(bg));
    }
}
