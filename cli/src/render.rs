use core::fmt;
use fifteen_core::*;

/// Text view of a board, one line per row.
///
/// Tiles sitting on their solved cell are bracketed, and a won board collapses into the banner.
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        if is_win(board) {
            return writeln!(f, "You Won!");
        }

        for row in 0..SIDE {
            for col in 0..SIDE {
                let pos = Position::new_unchecked(row, col);
                let tile = board.get(pos);
                let (open, close) = if board.is_in_place(pos) {
                    ('[', ']')
                } else {
                    (' ', ' ')
                };
                if tile == GAP {
                    write!(f, "{open}  {close}")?;
                } else {
                    write!(f, "{open}{tile:>2}{close}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_tiles_in_place() {
        let board =
            Board::from_tiles([0, 6, 1, 15, 7, 10, 12, 4, 9, 11, 2, 14, 13, 5, 8, 3]).unwrap();
        let text = BoardView(&board).to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "      6   1  15 ");
        assert_eq!(lines[2], "[ 9] 11   2  14 ");
        assert_eq!(lines[3], "[13]  5   8   3 ");
    }

    #[test]
    fn displaced_gap_is_blank() {
        let mut engine = PlayEngine::new(Board::solved());
        engine.apply_move(Direction::Right);

        let text = BoardView(engine.board()).to_string();
        assert_eq!(text.lines().last(), Some("[13][14]     15 "));
    }

    #[test]
    fn gap_in_home_corner_is_bracketed() {
        let board =
            Board::from_tiles([2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]).unwrap();

        let text = BoardView(&board).to_string();
        assert_eq!(text.lines().next(), Some("  2   1 [ 3][ 4]"));
        assert_eq!(text.lines().last(), Some("[13][14][15][  ]"));
    }

    #[test]
    fn won_board_shows_banner() {
        assert_eq!(BoardView(&Board::solved()).to_string(), "You Won!\n");
    }
}
