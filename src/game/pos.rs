use std::fmt;

/// A board coordinate. Signed so that squares off the edge are still
/// representable; queries on them return `Square::OutOfPlay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Pos { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Dark squares, the only ones pieces may stand on
    pub fn is_playable(self) -> bool {
        self.is_on_board() && (self.row + self.col) % 2 == 1
    }

    pub fn offset(self, d_row: i32, d_col: i32) -> Pos {
        Pos::new(self.row + d_row, self.col + d_col)
    }

    /// Square jumped over when moving from `self` to `other`
    pub fn midpoint(self, other: Pos) -> Pos {
        Pos::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

/// One move or single jump, displayed as `rc->rc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub from: Pos,
    pub to: Pos,
}

impl Step {
    pub fn new(from: Pos, to: Pos) -> Self {
        Step { from, to }
    }

    pub fn d_row(&self) -> i32 {
        self.to.row - self.from.row
    }

    pub fn d_col(&self) -> i32 {
        self.to.col - self.from.col
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
