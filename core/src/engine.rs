use crate::*;

/// Owns the live board and its undo slot, and turns input events into board changes.
///
/// Illegal moves, undo without a held snapshot and unknown tokens all leave the engine untouched
/// and report [`MoveOutcome::NoChange`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    board: Board,
    undo: UndoManager,
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            undo: UndoManager::new(),
        }
    }

    /// Starts a game on a board shuffled with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomWalkGenerator::new(seed).generate())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn undo_state(&self) -> UndoState {
        self.undo.state()
    }

    pub fn is_won(&self) -> bool {
        is_win(&self.board)
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        direction.swap_target(self.board.empty()).is_some()
    }

    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let gap = self.board.empty();
        debug_assert_eq!(gap, self.board.locate_empty(), "gap tracking out of sync");

        let Some(target) = direction.swap_target(gap) else {
            log::trace!("Ignoring {direction:?}, gap at {gap:?}");
            return MoveOutcome::NoChange;
        };

        self.undo.capture(&self.board);
        self.board.swap(gap, target);
        log::trace!("Moved {direction:?}, gap {gap:?} -> {target:?}");
        MoveOutcome::Moved
    }

    pub fn apply_undo(&mut self) -> MoveOutcome {
        match self.undo.consume() {
            Some(snapshot) => {
                self.board.restore_from(snapshot);
                log::trace!("Undo, gap back at {:?}", self.board.empty());
                MoveOutcome::Undone
            }
            None => MoveOutcome::NoChange,
        }
    }

    pub fn handle(&mut self, token: InputToken) -> MoveOutcome {
        match token {
            InputToken::Move(direction) => self.apply_move(direction),
            InputToken::Undo => self.apply_undo(),
        }
    }

    /// Routes a raw input token, unrecognized tokens are ignored.
    pub fn handle_token(&mut self, token: &str) -> MoveOutcome {
        match token.parse() {
            Ok(token) => self.handle(token),
            Err(_) => {
                log::trace!("Ignoring unknown token {token:?}");
                MoveOutcome::NoChange
            }
        }
    }
}

impl Default for PlayEngine {
    fn default() -> Self {
        Self::new(RandomWalkGenerator::default().generate())
    }
}
