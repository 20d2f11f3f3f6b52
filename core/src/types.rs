use serde::{Deserialize, Serialize};

use crate::*;

/// Value printed on a tile, [`GAP`] marks the empty cell.
pub type Tile = u8;

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Board side length.
pub const SIDE: Coord = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (SIDE as usize) * (SIDE as usize);

/// Tile value of the empty cell.
pub const GAP: Tile = 0;

/// Cell coordinates, 0-indexed from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: Coord,
    pub col: Coord,
}

impl Position {
    /// Gap location on a solved board, also where every shuffle walk starts.
    pub const HOME_CORNER: Position = Position::new_unchecked(SIDE - 1, SIDE - 1);

    pub const fn new_unchecked(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub fn new(row: Coord, col: Coord) -> Result<Self> {
        if row < SIDE && col < SIDE {
            Ok(Self::new_unchecked(row, col))
        } else {
            Err(GameError::InvalidPosition(row, col))
        }
    }

    /// Row-major index into the flat tile array.
    pub const fn index(self) -> usize {
        self.row as usize * SIDE as usize + self.col as usize
    }

    /// Inverse of [`Position::index`], `index` must be below [`CELL_COUNT`].
    pub const fn from_index(index: usize) -> Self {
        let side = SIDE as usize;
        Self::new_unchecked((index / side) as Coord, (index % side) as Coord)
    }

    /// Cell a tile occupies on the solved board.
    pub const fn home_of(tile: Tile) -> Self {
        if tile == GAP {
            Self::HOME_CORNER
        } else {
            Self::from_index(tile as usize - 1)
        }
    }

    /// All cells in row-major order.
    pub fn iter_all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Self::from_index)
    }

    /// Applies `delta` as `(rows, cols)`, returning a value only when it remains on the board.
    pub fn offset(self, delta: (i8, i8)) -> Option<Self> {
        let (dr, dc) = delta;

        let row = self.row.checked_add_signed(dr)?;
        if row >= SIDE {
            return None;
        }

        let col = self.col.checked_add_signed(dc)?;
        if col >= SIDE {
            return None;
        }

        Some(Self::new_unchecked(row, col))
    }
}

/// Move requested by the player.
///
/// The tile next to the gap slides in the named direction, so `Left` swaps the gap with the
/// cell to its right. See [`Direction::swap_offset`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Offset from the gap to the cell that gets swapped with it.
    pub const fn swap_offset(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (1, 0),
            Down => (-1, 0),
            Left => (0, 1),
            Right => (0, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Cell that would trade places with a gap at `gap`, if the move is legal.
    pub fn swap_target(self, gap: Position) -> Option<Position> {
        gap.offset(self.swap_offset())
    }
}
