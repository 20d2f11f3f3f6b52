use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 4×4 grid, stored flat in row-major order.
///
/// Every value in `0..16` appears exactly once. The only mutation path is a paired swap, so the
/// invariant set up by [`Board::solved`] or [`Board::from_tiles`] holds for the board's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Tile; CELL_COUNT]", into = "[Tile; CELL_COUNT]")]
pub struct Board {
    tiles: [Tile; CELL_COUNT],
    empty: Position,
}

impl Board {
    pub fn solved() -> Self {
        let mut tiles = [GAP; CELL_COUNT];
        for (i, tile) in tiles.iter_mut().enumerate() {
            *tile = ((i + 1) % CELL_COUNT) as Tile;
        }
        Self {
            tiles,
            empty: Position::HOME_CORNER,
        }
    }

    /// Builds a board from row-major tile values, which must be a permutation of `0..16`.
    pub fn from_tiles(tiles: [Tile; CELL_COUNT]) -> Result<Self> {
        let mut seen = [false; CELL_COUNT];
        let mut empty = Position::HOME_CORNER;

        for (i, &tile) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or(GameError::InvalidTile(tile))?;
            if *slot {
                return Err(GameError::DuplicateTile(tile));
            }
            *slot = true;
            if tile == GAP {
                empty = Position::from_index(i);
            }
        }

        Ok(Self { tiles, empty })
    }

    pub fn get(&self, pos: Position) -> Tile {
        self.tiles[pos.index()]
    }

    /// Writes a single cell. Only [`Board::swap`] may call this, otherwise a value gets lost.
    fn set(&mut self, pos: Position, tile: Tile) {
        self.tiles[pos.index()] = tile;
        if tile == GAP {
            self.empty = pos;
        }
    }

    pub(crate) fn swap(&mut self, a: Position, b: Position) {
        let (tile_a, tile_b) = (self.get(a), self.get(b));
        self.set(a, tile_b);
        self.set(b, tile_a);
    }

    /// Tracked gap position.
    pub fn empty(&self) -> Position {
        self.empty
    }

    /// Gap position found by scanning the grid.
    pub fn locate_empty(&self) -> Position {
        self.tiles
            .iter()
            .position(|&tile| tile == GAP)
            .map(Position::from_index)
            .unwrap_or(self.empty)
    }

    /// Whether the tile at `pos` sits where it belongs on the solved board.
    pub fn is_in_place(&self, pos: Position) -> bool {
        Position::home_of(self.get(pos)) == pos
    }

    pub fn tiles(&self) -> &[Tile; CELL_COUNT] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(SIDE.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        Position::iter_all().map(|pos| (pos, self.get(pos)))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tiles: self.tiles,
            empty: self.empty,
        }
    }

    pub fn restore_from(&mut self, snapshot: Snapshot) {
        self.tiles = snapshot.tiles;
        self.empty = snapshot.empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl Index<Position> for Board {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[pos.index()]
    }
}

impl TryFrom<[Tile; CELL_COUNT]> for Board {
    type Error = GameError;

    fn try_from(tiles: [Tile; CELL_COUNT]) -> Result<Self> {
        Self::from_tiles(tiles)
    }
}

impl From<Board> for [Tile; CELL_COUNT] {
    fn from(board: Board) -> Self {
        board.tiles
    }
}

/// Frozen copy of a board's cells, held for a single undo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    tiles: [Tile; CELL_COUNT],
    empty: Position,
}

impl Snapshot {
    pub fn get(&self, pos: Position) -> Tile {
        self.tiles[pos.index()]
    }

    pub fn tiles(&self) -> &[Tile; CELL_COUNT] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRAMBLED: [Tile; CELL_COUNT] =
        [0, 6, 1, 15, 7, 10, 12, 4, 9, 11, 2, 14, 13, 5, 8, 3];

    #[test]
    fn solved_board_layout() {
        let board = Board::solved();

        assert_eq!(board.get(Position::new_unchecked(0, 0)), 1);
        assert_eq!(board.get(Position::new_unchecked(1, 3)), 8);
        assert_eq!(board.get(Position::new_unchecked(3, 2)), 15);
        assert_eq!(board.get(Position::HOME_CORNER), GAP);
        assert_eq!(board.empty(), Position::HOME_CORNER);
        assert!(Position::iter_all().all(|pos| board.is_in_place(pos)));
    }

    #[test]
    fn from_tiles_tracks_gap() {
        let board = Board::from_tiles(SCRAMBLED).unwrap();

        assert_eq!(board.empty(), Position::new_unchecked(0, 0));
        assert_eq!(board.locate_empty(), board.empty());
        assert_eq!(board[Position::new_unchecked(3, 3)], 3);
    }

    #[test]
    fn from_tiles_rejects_non_permutations() {
        let mut duplicated = SCRAMBLED;
        duplicated[1] = 1;
        assert_eq!(Board::from_tiles(duplicated), Err(GameError::DuplicateTile(1)));

        let mut out_of_range = SCRAMBLED;
        out_of_range[4] = 16;
        assert_eq!(Board::from_tiles(out_of_range), Err(GameError::InvalidTile(16)));
    }

    #[test]
    fn swap_keeps_gap_tracking_in_sync() {
        let mut board = Board::solved();

        board.swap(Position::HOME_CORNER, Position::new_unchecked(2, 3));

        assert_eq!(board.empty(), Position::new_unchecked(2, 3));
        assert_eq!(board.locate_empty(), board.empty());
        assert_eq!(board.get(Position::HOME_CORNER), 12);

        board.swap(Position::new_unchecked(0, 0), Position::new_unchecked(0, 1));
        assert_eq!(board.empty(), Position::new_unchecked(2, 3));
        assert_eq!(board.rows().next(), Some(&[2, 1, 3, 4][..]));
    }

    #[test]
    fn snapshot_is_independent_of_later_moves() {
        let mut board = Board::from_tiles(SCRAMBLED).unwrap();
        let snapshot = board.snapshot();

        board.swap(Position::new_unchecked(0, 0), Position::new_unchecked(0, 1));
        assert_ne!(board.tiles(), snapshot.tiles());
        assert_eq!(snapshot.get(Position::new_unchecked(0, 0)), GAP);

        board.restore_from(snapshot);
        assert_eq!(board, Board::from_tiles(SCRAMBLED).unwrap());
        assert_eq!(board.empty(), Position::new_unchecked(0, 0));
    }

    #[test]
    fn serializes_as_row_major_values() {
        let board = Board::from_tiles(SCRAMBLED).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[0,6,1,15,7,10,12,4,9,11,2,14,13,5,8,3]");

        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.empty(), board.empty());

        let duplicated = "[0,0,1,15,7,10,12,4,9,11,2,14,13,5,8,3]";
        assert!(serde_json::from_str::<Board>(duplicated).is_err());
    }
}
