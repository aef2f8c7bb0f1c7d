//! Undo/Redo action log.
//!
//! The log holds two stacks of [`DrawingAction`]s:
//!
//! - `undone`: applied actions, oldest first. Replaying them in order over
//!   the background reproduces the visible surface.
//! - `redone`: actions taken off `undone` by undo, most recent on top.
//!
//! Appending a new action discards `redone` (linear history, no branches).
//! The log never touches pixels: after `undo`/`redo` the caller replays
//! [`ActionLog::actions`] from scratch.

use sb_core::model::DrawingAction;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionLog {
    undone: Vec<DrawingAction>,
    redone: Vec<DrawingAction>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new action. Anything that could have been redone is dropped.
    pub fn append(&mut self, action: DrawingAction) {
        log::debug!(
            "append {} (history {} → {}, dropping {} redo)",
            action.label(),
            self.undone.len(),
            self.undone.len() + 1,
            self.redone.len()
        );
        self.undone.push(action);
        self.redone.clear();
    }

    /// Record a clear. The wipe is an ordinary entry, so it can be undone.
    pub fn clear(&mut self) {
        self.append(DrawingAction::Clear);
    }

    /// Move the newest applied action onto the redo stack.
    ///
    /// Returns the moved action, or `None` (and changes nothing) when there
    /// is nothing to undo.
    pub fn undo(&mut self) -> Option<&DrawingAction> {
        let action = self.undone.pop()?;
        log::debug!("undo {} ({} left)", action.label(), self.undone.len());
        self.redone.push(action);
        self.redone.last()
    }

    /// Move the most recently undone action back onto the applied list.
    ///
    /// Returns the restored action, or `None` (and changes nothing) when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Option<&DrawingAction> {
        let action = self.redone.pop()?;
        log::debug!("redo {} ({} left to redo)", action.label(), self.redone.len());
        self.undone.push(action);
        self.undone.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redone.is_empty()
    }

    /// Applied actions in replay order.
    pub fn actions(&self) -> &[DrawingAction] {
        &self.undone
    }

    /// Redo stack, bottom first; the next `redo` restores the last element.
    pub fn redone(&self) -> &[DrawingAction] {
        &self.redone
    }

    pub fn len(&self) -> usize {
        self.undone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sb_core::model::Color;

    fn rect(x: f32) -> DrawingAction {
        DrawingAction::Rectangle {
            x,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            color: Color::BLACK,
        }
    }

    #[test]
    fn undo_redo_moves_between_stacks() {
        let mut log = ActionLog::new();
        log.append(rect(1.0));
        log.append(rect(2.0));

        assert_eq!(log.undo(), Some(&rect(2.0)));
        assert_eq!(log.actions(), &[rect(1.0)]);
        assert_eq!(log.redone(), &[rect(2.0)]);

        assert_eq!(log.redo(), Some(&rect(2.0)));
        assert_eq!(log.actions(), &[rect(1.0), rect(2.0)]);
        assert!(log.redone().is_empty());
    }

    #[test]
    fn redo_restores_in_reverse_undo_order() {
        let mut log = ActionLog::new();
        for i in 0..3 {
            log.append(rect(i as f32));
        }
        log.undo();
        log.undo();
        assert_eq!(log.redone(), &[rect(2.0), rect(1.0)]);

        assert_eq!(log.redo(), Some(&rect(1.0)));
        assert_eq!(log.redo(), Some(&rect(2.0)));
        assert_eq!(log.actions(), &[rect(0.0), rect(1.0), rect(2.0)]);
    }

    #[test]
    fn redo_clears_on_new_action() {
        let mut log = ActionLog::new();
        log.append(rect(1.0));
        log.undo();
        assert!(log.can_redo());

        log.append(rect(3.0));
        assert!(!log.can_redo());
        assert_eq!(log.redo(), None);
        assert_eq!(log.actions(), &[rect(3.0)]);
    }

    #[test]
    fn empty_undo_and_redo_are_no_ops() {
        let mut log = ActionLog::new();
        assert_eq!(log.undo(), None);
        assert_eq!(log.redo(), None);
        assert_eq!(log, ActionLog::new());

        log.append(rect(1.0));
        let snapshot = log.clone();
        assert_eq!(log.redo(), None);
        assert_eq!(log, snapshot);

        log.undo();
        let snapshot = log.clone();
        assert_eq!(log.undo(), None);
        assert_eq!(log, snapshot);
    }

    #[test]
    fn clear_is_recorded_and_undoable() {
        let mut log = ActionLog::new();
        log.append(rect(1.0));
        log.clear();
        assert_eq!(log.actions(), &[rect(1.0), DrawingAction::Clear]);

        assert_eq!(log.undo(), Some(&DrawingAction::Clear));
        assert_eq!(log.actions(), &[rect(1.0)]);
    }

    #[test]
    fn clear_discards_redo() {
        let mut log = ActionLog::new();
        log.append(rect(1.0));
        log.undo();
        log.clear();
        assert!(!log.can_redo());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn serializes_both_stacks() {
        let mut log = ActionLog::new();
        log.append(DrawingAction::Clear);
        log.append(rect(5.0));
        log.undo();
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["undone"], serde_json::json!([{ "type": "clear" }]));
        assert_eq!(json["redone"][0]["type"], "rectangle");
    }
}
