use crate::error::NotationError;

use super::{Pos, Step};

/// How squares are typed in and printed by the console front ends.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// File letter and rank digit, e.g. `a3`; rank 1 is row 0
    #[default]
    Algebraic,
    /// Row digit and column digit, e.g. `52`
    Numeric,
}

impl Notation {
    /// Parse a two-character coordinate token
    pub fn parse(self, token: &str) -> Result<Pos, NotationError> {
        let chars: Vec<char> = token.trim().chars().collect();
        let &[first, second] = chars.as_slice() else {
            return Err(NotationError::Length(token.trim().to_string()));
        };

        match self {
            Notation::Algebraic => {
                let file = first.to_ascii_lowercase();
                if !('a'..='h').contains(&file) {
                    return Err(NotationError::File(first));
                }
                let rank = second
                    .to_digit(10)
                    .filter(|rank| (1..=8).contains(rank))
                    .ok_or(NotationError::Rank(second))?;
                Ok(Pos::new(rank as i32 - 1, file as i32 - 'a' as i32))
            }
            Notation::Numeric => {
                let row = index(first).ok_or(NotationError::Rank(first))?;
                let col = index(second).ok_or(NotationError::File(second))?;
                Ok(Pos::new(row, col))
            }
        }
    }

    pub fn format(self, pos: Pos) -> String {
        match self {
            Notation::Algebraic => {
                let file = (b'a' + pos.col as u8) as char;
                format!("{file}{}", pos.row + 1)
            }
            Notation::Numeric => pos.to_string(),
        }
    }

    pub fn format_step(self, step: Step) -> String {
        format!("{}->{}", self.format(step.from), self.format(step.to))
    }

    /// Example shown in prompts
    pub fn hint(self) -> &'static str {
        match self {
            Notation::Algebraic => "a combination of letter and digit, e.g. a3 or f4",
            Notation::Numeric => "a two digit number of row and column, e.g. 52",
        }
    }
}

fn index(c: char) -> Option<i32> {
    c.to_digit(10).filter(|&d| d < 8).map(|d| d as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algebraic() {
        let n = Notation::Algebraic;
        assert_eq!(n.parse("a1"), Ok(Pos::new(0, 0)));
        assert_eq!(n.parse("f4"), Ok(Pos::new(3, 5)));
        assert_eq!(n.parse(" H8\n"), Ok(Pos::new(7, 7)));
    }

    #[test]
    fn test_parse_algebraic_rejects_malformed() {
        let n = Notation::Algebraic;
        assert_eq!(n.parse("a"), Err(NotationError::Length("a".into())));
        assert_eq!(n.parse("a10"), Err(NotationError::Length("a10".into())));
        assert_eq!(n.parse("i3"), Err(NotationError::File('i')));
        assert_eq!(n.parse("a9"), Err(NotationError::Rank('9')));
        assert_eq!(n.parse("a0"), Err(NotationError::Rank('0')));
        assert_eq!(n.parse("3a"), Err(NotationError::File('3')));
    }

    #[test]
    fn test_parse_numeric() {
        let n = Notation::Numeric;
        assert_eq!(n.parse("52"), Ok(Pos::new(5, 2)));
        assert_eq!(n.parse("07"), Ok(Pos::new(0, 7)));
        assert_eq!(n.parse("82"), Err(NotationError::Rank('8')));
        assert_eq!(n.parse("5x"), Err(NotationError::File('x')));
        assert_eq!(n.parse(""), Err(NotationError::Length(String::new())));
    }

    #[test]
    fn test_format() {
        let step = Step::new(Pos::new(5, 2), Pos::new(4, 3));
        assert_eq!(Notation::Algebraic.format_step(step), "c6->d5");
        assert_eq!(Notation::Numeric.format_step(step), "52->43");
        assert_eq!(Notation::Algebraic.format(Pos::new(2, 7)), "h3");
        assert_eq!(Notation::Numeric.format(Pos::new(2, 7)), "27");
    }
}
