use crate::*;

/// Whether `board` reads `1, 2, …, 15, 0` in row-major order.
pub fn is_win(board: &Board) -> bool {
    board
        .tiles()
        .iter()
        .enumerate()
        .all(|(i, &tile)| usize::from(tile) == (i + 1) % CELL_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_board_is_a_win() {
        assert!(is_win(&Board::solved()));
    }

    #[test]
    fn every_transposition_of_solved_is_not_a_win() {
        let solved = *Board::solved().tiles();

        for a in 0..CELL_COUNT {
            for b in (a + 1)..CELL_COUNT {
                let mut tiles = solved;
                tiles.swap(a, b);
                let board = Board::from_tiles(tiles).unwrap();
                assert!(!is_win(&board), "swapped cells {a} and {b}");
            }
        }
    }

    #[test]
    fn gap_first_ordering_is_not_a_win() {
        let board =
            Board::from_tiles([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]).unwrap();
        assert!(!is_win(&board));
    }
}
