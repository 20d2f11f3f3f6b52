use crate::*;

/// Single-slot undo: remembers the board as it was before the latest move.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UndoManager {
    snapshot: Option<Snapshot>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was held with a copy of `board`.
    pub fn capture(&mut self, board: &Board) {
        self.snapshot = Some(board.snapshot());
    }

    /// Takes the held snapshot, leaving the slot empty.
    pub fn consume(&mut self) -> Option<Snapshot> {
        self.snapshot.take()
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    pub fn is_available(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn state(&self) -> UndoState {
        if self.is_available() {
            UndoState::UndoAvailable
        } else {
            UndoState::NoUndoAvailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let mut undo = UndoManager::new();

        assert_eq!(undo.state(), UndoState::NoUndoAvailable);
        assert_eq!(undo.consume(), None);
    }

    #[test]
    fn capture_overwrites_previous_snapshot() {
        let mut undo = UndoManager::new();
        let mut board = Board::solved();

        undo.capture(&board);
        board.swap(Position::HOME_CORNER, Position::new_unchecked(3, 2));
        undo.capture(&board);

        let snapshot = undo.consume().unwrap();
        assert_eq!(snapshot.get(Position::new_unchecked(3, 2)), GAP);
        assert!(!undo.is_available());
        assert_eq!(undo.consume(), None);
    }

    #[test]
    fn clear_drops_snapshot() {
        let mut undo = UndoManager::new();
        undo.capture(&Board::solved());
        assert_eq!(undo.state(), UndoState::UndoAvailable);

        undo.clear();
        assert_eq!(undo.state(), UndoState::NoUndoAvailable);
    }
}
