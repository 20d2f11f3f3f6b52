#![no_std]

extern crate alloc;

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use types::*;
pub use undo::*;
pub use win::*;

mod board;
mod engine;
mod error;
mod generator;
mod input;
mod types;
mod undo;
mod win;

/// Outcome of feeding one input event to the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
    Undone,
}

impl MoveOutcome {
    /// Whether this outcome could have changed the board
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Undone => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UndoState {
    NoUndoAvailable,
    UndoAvailable,
}

impl UndoState {
    pub const fn is_available(self) -> bool {
        matches!(self, Self::UndoAvailable)
    }
}

impl Default for UndoState {
    fn default() -> Self {
        Self::NoUndoAvailable
    }
}
