use crate::game::{GameState, Notation, Pos, Side, Square};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Squares to call out on the board
#[derive(Debug, Clone, Default)]
pub struct Highlight<'a> {
    pub selected: Option<Pos>,
    pub destinations: &'a [Pos],
}

/// Board as styled lines with labels matching the notation in use.
pub fn board_lines(
    state: &GameState,
    notation: Notation,
    highlight: &Highlight,
) -> Vec<Line<'static>> {
    let rows: Vec<i32> = match notation {
        Notation::Algebraic => (0..8).rev().collect(),
        Notation::Numeric => (0..8).collect(),
    };

    let mut files = vec![Span::raw("   ")];
    for col in 0..8 {
        let label = match notation {
            Notation::Algebraic => ((b'a' + col as u8) as char).to_string(),
            Notation::Numeric => col.to_string(),
        };
        files.push(Span::styled(
            format!(" {label} "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![Line::from(files.clone())];
    for row in rows {
        let label = match notation {
            Notation::Algebraic => row + 1,
            Notation::Numeric => row,
        };
        let mut spans = vec![Span::styled(
            format!(" {label} "),
            Style::default().fg(Color::DarkGray),
        )];
        for col in 0..8 {
            let pos = Pos::new(row, col);
            spans.push(cell(state.get_square(pos), pos, highlight));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(files));
    lines
}

fn cell(square: Square, pos: Pos, highlight: &Highlight) -> Span<'static> {
    let (symbol, fg) = match square {
        Square::Man(Side::White) => (" ● ", Color::White),
        Square::King(Side::White) => (" ♛ ", Color::White),
        Square::Man(Side::Black) => (" ● ", Color::LightRed),
        Square::King(Side::Black) => (" ♛ ", Color::LightRed),
        Square::Empty | Square::OutOfPlay => ("   ", Color::Reset),
    };
    let bg = if highlight.selected == Some(pos) {
        Color::Cyan
    } else if highlight.destinations.contains(&pos) {
        Color::Green
    } else if pos.is_playable() {
        Color::DarkGray
    } else {
        Color::Gray
    };
    let mut style = Style::default().fg(fg).bg(bg);
    if square.is_king() {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(symbol, style)
}
