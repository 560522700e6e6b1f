use super::{Pos, Side};

pub const ROWS: usize = 8;
pub const COLS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Man(Side),
    King(Side),
    Empty,
    /// Returned for coordinates off the board; never stored
    OutOfPlay,
}

impl Square {
    /// Owner of the piece on this square, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Square::Man(side) | Square::King(side) => Some(side),
            Square::Empty | Square::OutOfPlay => None,
        }
    }

    pub fn is_king(self) -> bool {
        matches!(self, Square::King(_))
    }

    /// Single-character symbol used by the text renderers
    pub fn symbol(self) -> char {
        match self {
            Square::Man(Side::White) => 'w',
            Square::King(Side::White) => 'W',
            Square::Man(Side::Black) => 'b',
            Square::King(Side::Black) => 'B',
            Square::Empty => '_',
            Square::OutOfPlay => ' ',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square {0} is off the board")]
    OffBoard(Pos),

    #[error("square {0} is not a playable square")]
    Unplayable(Pos),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Square; COLS]; ROWS],
}

impl Board {
    /// Create a board with no pieces on it
    pub fn empty() -> Self {
        Board {
            cells: [[Square::Empty; COLS]; ROWS],
        }
    }

    /// Standard layout: Black men on the dark squares of rows 0-2, White men
    /// on rows 5-7
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for row in 0..ROWS {
            let square = match row {
                0..=2 => Side::Black.man(),
                5..=7 => Side::White.man(),
                _ => continue,
            };
            for col in 0..COLS {
                if (row + col) % 2 == 1 {
                    board.cells[row][col] = square;
                }
            }
        }
        board
    }

    /// Get the square at a position. Total: off-board positions yield
    /// `OutOfPlay` and light squares always read as `Empty`.
    pub fn get(&self, pos: Pos) -> Square {
        if !pos.is_on_board() {
            return Square::OutOfPlay;
        }
        if !pos.is_playable() {
            return Square::Empty;
        }
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Put a square on the board, refusing positions a piece may not occupy
    pub fn place(&mut self, pos: Pos, square: Square) -> Result<(), BoardError> {
        if !pos.is_on_board() || square == Square::OutOfPlay {
            return Err(BoardError::OffBoard(pos));
        }
        if !pos.is_playable() {
            return Err(BoardError::Unplayable(pos));
        }
        self.cells[pos.row as usize][pos.col as usize] = square;
        Ok(())
    }

    /// Unchecked write for positions already known to be playable
    pub(crate) fn put(&mut self, pos: Pos, square: Square) {
        debug_assert!(pos.is_playable(), "write to unplayable square {pos}");
        self.cells[pos.row as usize][pos.col as usize] = square;
    }

    /// Crown every man standing on its promotion row. Returns the crowned
    /// positions.
    pub fn promote(&mut self) -> Vec<Pos> {
        let mut crowned = Vec::new();
        for side in [Side::White, Side::Black] {
            let row = side.promotion_row() as usize;
            for col in 0..COLS {
                if self.cells[row][col] == side.man() {
                    self.cells[row][col] = side.king();
                    crowned.push(Pos::new(row as i32, col as i32));
                }
            }
        }
        crowned
    }

    /// Positions of every piece belonging to `side`, in row-major order
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Pos> + '_ {
        (0..ROWS as i32)
            .flat_map(|row| (0..COLS as i32).map(move |col| Pos::new(row, col)))
            .filter(move |&pos| self.get(pos).side() == Some(side))
    }

    /// Number of squares holding exactly `square`
    pub fn count(&self, square: Square) -> usize {
        self.cells.iter().flatten().filter(|&&s| s == square).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_piece_counts() {
        let board = Board::initial();
        assert_eq!(board.count(Side::White.man()), 12);
        assert_eq!(board.count(Side::Black.man()), 12);
        assert_eq!(board.count(Side::White.king()), 0);
        assert_eq!(board.count(Side::Black.king()), 0);
    }

    #[test]
    fn test_initial_pieces_on_home_rows() {
        let board = Board::initial();
        for pos in board.pieces(Side::Black) {
            assert!((0..=2).contains(&pos.row), "black piece at {pos}");
            assert!(pos.is_playable());
        }
        for pos in board.pieces(Side::White) {
            assert!((5..=7).contains(&pos.row), "white piece at {pos}");
            assert!(pos.is_playable());
        }
        for col in 0..8 {
            assert_eq!(board.get(Pos::new(3, col)), Square::Empty);
            assert_eq!(board.get(Pos::new(4, col)), Square::Empty);
        }
    }

    #[test]
    fn test_out_of_range_is_out_of_play() {
        let board = Board::initial();
        assert_eq!(board.get(Pos::new(-1, 3)), Square::OutOfPlay);
        assert_eq!(board.get(Pos::new(8, 3)), Square::OutOfPlay);
        assert_eq!(board.get(Pos::new(3, -1)), Square::OutOfPlay);
        assert_eq!(board.get(Pos::new(3, 8)), Square::OutOfPlay);
    }

    #[test]
    fn test_light_squares_read_empty() {
        let board = Board::initial();
        for row in 0..8 {
            for col in 0..8 {
                if (row + col) % 2 == 0 {
                    assert_eq!(board.get(Pos::new(row, col)), Square::Empty);
                }
            }
        }
    }

    #[test]
    fn test_place_rejects_light_and_off_board() {
        let mut board = Board::empty();
        assert_eq!(
            board.place(Pos::new(0, 0), Side::White.man()),
            Err(BoardError::Unplayable(Pos::new(0, 0)))
        );
        assert_eq!(
            board.place(Pos::new(9, 0), Side::White.man()),
            Err(BoardError::OffBoard(Pos::new(9, 0)))
        );
        assert!(board.place(Pos::new(4, 3), Side::White.king()).is_ok());
        assert_eq!(board.get(Pos::new(4, 3)), Side::White.king());
    }

    #[test]
    fn test_promote_only_men_on_far_row() {
        let mut board = Board::empty();
        board.place(Pos::new(0, 1), Side::White.man()).unwrap();
        board.place(Pos::new(0, 3), Side::Black.man()).unwrap();
        board.place(Pos::new(7, 0), Side::Black.man()).unwrap();
        board.place(Pos::new(7, 2), Side::White.man()).unwrap();

        let crowned = board.promote();
        assert_eq!(crowned, vec![Pos::new(0, 1), Pos::new(7, 0)]);
        assert_eq!(board.get(Pos::new(0, 1)), Side::White.king());
        assert_eq!(board.get(Pos::new(0, 3)), Side::Black.man());
        assert_eq!(board.get(Pos::new(7, 0)), Side::Black.king());
        assert_eq!(board.get(Pos::new(7, 2)), Side::White.man());

        // Already crowned pieces are left alone
        assert!(board.promote().is_empty());
    }

    #[test]
    fn test_square_symbols() {
        assert_eq!(Side::White.man().symbol(), 'w');
        assert_eq!(Side::White.king().symbol(), 'W');
        assert_eq!(Side::Black.man().symbol(), 'b');
        assert_eq!(Side::Black.king().symbol(), 'B');
        assert_eq!(Square::Empty.symbol(), '_');
    }
}
