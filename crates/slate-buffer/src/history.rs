//! Undo/redo history management.
//!
//! ## Learning: Snapshots instead of commands
//!
//! The text itself lives in the GUI toolkit's editor widget, which reports
//! edits but cannot replay their inverse. So each undo step stores the whole
//! text as it was before the step, plus where the caret sat. Restoring a step
//! means swapping the widget's content for the snapshot.
//!
//! Rapid keystrokes of the same kind coalesce into one step, so undo removes
//! a typed word rather than a single letter.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::Position;

/// Default time window within which edits of the same kind coalesce.
pub const COALESCE_THRESHOLD: Duration = Duration::from_millis(300);

/// The kind of edit that produced an undo step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Characters were typed
    Insert,
    /// Characters were removed (backspace, delete, cut)
    Delete,
    /// Newlines, pastes and anything else; always its own step
    Other,
}

impl EditKind {
    /// Returns true if an edit of this kind may join a step of kind `previous`.
    pub fn coalesces_with(self, previous: EditKind) -> bool {
        self == previous && self != EditKind::Other
    }
}

/// The document state captured before an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Full text at the time of the snapshot
    pub text: String,
    /// Caret position at the time of the snapshot
    pub cursor: Position,
}

impl Snapshot {
    pub fn new(text: impl Into<String>, cursor: Position) -> Self {
        Self {
            text: text.into(),
            cursor,
        }
    }
}

#[derive(Debug, Clone)]
struct Step {
    snapshot: Snapshot,
    kind: EditKind,
    /// When the step was last extended. None prevents coalescing.
    timestamp: Option<Instant>,
}

/// Manages undo/redo history.
///
/// ## Learning: VecDeque
///
/// We use `VecDeque` instead of `Vec` because we need efficient:
/// - Push to back (new edits)
/// - Pop from front (when at capacity)
/// - Pop from back (for undo)
#[derive(Debug, Clone)]
pub struct History {
    /// Stack of undoable steps
    undo_stack: VecDeque<Step>,
    /// Stack of redoable snapshots
    redo_stack: Vec<Snapshot>,
    /// Maximum number of steps to keep
    max_size: usize,
    /// Time threshold for coalescing edits
    coalesce_threshold: Duration,
}

impl History {
    /// Creates a new history with the given capacity.
    pub fn new(max_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(max_size.min(128)),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
            coalesce_threshold: COALESCE_THRESHOLD,
        }
    }

    /// Records the state from before an edit.
    ///
    /// Clears the redo stack. May coalesce with the previous step, in which
    /// case the older snapshot is kept and `before` is dropped.
    pub fn record(&mut self, before: Snapshot, kind: EditKind) {
        self.record_at(before, kind, Instant::now());
    }

    /// Like [`History::record`], with an explicit clock for deterministic callers.
    pub fn record_at(&mut self, before: Snapshot, kind: EditKind, now: Instant) {
        // Clear redo stack - branching history not supported
        self.redo_stack.clear();

        if let Some(last) = self.undo_stack.back_mut() {
            if let Some(timestamp) = last.timestamp {
                let recent = now.saturating_duration_since(timestamp) < self.coalesce_threshold;
                if recent && kind.coalesces_with(last.kind) {
                    last.timestamp = Some(now);
                    return;
                }
            }
        }

        self.undo_stack.push_back(Step {
            snapshot: before,
            kind,
            timestamp: Some(now),
        });

        // Enforce capacity
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.pop_front();
        }
    }

    /// Ends the current step so the next edit starts a new one.
    pub fn seal(&mut self) {
        if let Some(last) = self.undo_stack.back_mut() {
            last.timestamp = None;
        }
    }

    /// Undoes the last step.
    ///
    /// `current` is the state being left; it becomes the redo target.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let step = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(step.snapshot)
    }

    /// Redoes the last undone step.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(Step {
            snapshot: current,
            kind: EditKind::Other,
            timestamp: None, // No timestamp prevents coalescing
        });
        Some(next)
    }

    /// Returns true if there are steps to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are steps to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clears all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Returns the number of undo steps available.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Returns the number of redo steps available.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(text: &str) -> Snapshot {
        Snapshot::new(text, Position::new(0, text.chars().count()))
    }

    #[test]
    fn test_history_undo_redo() {
        let mut history = History::new(100);
        let t0 = Instant::now();

        history.record_at(snap(""), EditKind::Insert, t0);
        history.record_at(snap("a\n"), EditKind::Other, t0 + Duration::from_millis(10));

        assert_eq!(history.undo(snap("a\nb")).unwrap().text, "a\n");
        assert_eq!(history.undo(snap("a\n")).unwrap().text, "");
        assert!(!history.can_undo());

        assert_eq!(history.redo(snap("")).unwrap().text, "a\n");
        assert_eq!(history.redo(snap("a\n")).unwrap().text, "a\nb");
        assert!(!history.can_redo());
        assert_eq!(history.undo_count(), 2);
    }

    #[test]
    fn test_rapid_typing_coalesces() {
        let mut history = History::new(100);
        let t0 = Instant::now();

        history.record_at(snap(""), EditKind::Insert, t0);
        history.record_at(snap("a"), EditKind::Insert, t0 + Duration::from_millis(100));
        history.record_at(snap("ab"), EditKind::Insert, t0 + Duration::from_millis(350));

        // Each record extends the window, so all three join one step
        assert_eq!(history.undo_count(), 1);
        assert_eq!(history.undo(snap("abc")).unwrap().text, "");
    }

    #[test]
    fn test_pause_or_kind_change_breaks_step() {
        let mut history = History::new(100);
        let t0 = Instant::now();

        history.record_at(snap(""), EditKind::Insert, t0);
        history.record_at(snap("a"), EditKind::Insert, t0 + Duration::from_millis(400));
        history.record_at(snap("ab"), EditKind::Delete, t0 + Duration::from_millis(450));
        history.record_at(snap("a"), EditKind::Other, t0 + Duration::from_millis(460));
        history.record_at(snap("a\n"), EditKind::Other, t0 + Duration::from_millis(470));

        assert_eq!(history.undo_count(), 5);
    }

    #[test]
    fn test_seal_prevents_coalescing() {
        let mut history = History::new(100);
        let t0 = Instant::now();

        history.record_at(snap(""), EditKind::Insert, t0);
        history.seal();
        history.record_at(snap("a"), EditKind::Insert, t0 + Duration::from_millis(1));

        assert_eq!(history.undo_count(), 2);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut history = History::new(100);
        history.record(snap(""), EditKind::Other);
        history.undo(snap("x"));
        assert!(history.can_redo());

        history.record(snap(""), EditKind::Other);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::new(3);
        for i in 0..5 {
            history.record(snap(&i.to_string()), EditKind::Other);
        }
        assert_eq!(history.undo_count(), 3);

        let mut oldest = None;
        while let Some(s) = history.undo(snap("now")) {
            oldest = Some(s);
        }
        assert_eq!(oldest.unwrap().text, "2");
    }
}
