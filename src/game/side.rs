use super::board::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a man's step: White heads towards row 0, Black towards row 7
    pub fn forward(self) -> i32 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row on which this side's men are crowned
    pub fn promotion_row(self) -> i32 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    pub fn man(self) -> Square {
        Square::Man(self)
    }

    pub fn king(self) -> Square {
        Square::King(self)
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::White.other(), Side::Black);
        assert_eq!(Side::Black.other(), Side::White);
    }

    #[test]
    fn test_forward_points_at_promotion_row() {
        // White starts on rows 5-7, Black on rows 0-2
        assert_eq!(Side::White.forward(), -1);
        assert_eq!(Side::White.promotion_row(), 0);
        assert_eq!(Side::Black.forward(), 1);
        assert_eq!(Side::Black.promotion_row(), 7);
    }

    #[test]
    fn test_side_name() {
        assert_eq!(Side::White.name(), "White");
        assert_eq!(Side::Black.name(), "Black");
    }
}
