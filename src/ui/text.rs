//! Plain-text rendering used by the line console.

use crate::game::{GameState, Notation, Pos, Step, DRAW};

/// Whose move it is, legal action counts and the draw countdown
pub fn status_lines(state: &GameState, notation: Notation, show_legal: bool) -> Vec<String> {
    let moves = state.all_moves();
    let captures = state.all_captures();
    let mut lines = vec![format!("Move: {}", state.turn().name().to_lowercase())];

    lines.push(format!("Legal moves: {}", moves.len()));
    if show_legal && !moves.is_empty() {
        lines.push(step_list(&moves, notation));
    }
    lines.push(format!("Legal captures: {}", captures.len()));
    if show_legal && !captures.is_empty() {
        lines.push(step_list(&captures, notation));
    }
    lines.push(format!("Moves until draw: {}/{}", state.draw_count(), DRAW + 1));
    lines
}

fn step_list(steps: &[Step], notation: Notation) -> String {
    steps
        .iter()
        .map(|&step| notation.format_step(step))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Board with rank and file labels. Algebraic boards put rank 8 on top and
/// repeat the labels on both sides; numeric boards list rows 0 to 7.
pub fn board_lines(state: &GameState, notation: Notation) -> Vec<String> {
    let row_order: Vec<i32> = match notation {
        Notation::Algebraic => (0..8).rev().collect(),
        Notation::Numeric => (0..8).collect(),
    };
    let files: String = (0..8)
        .map(|col| match notation {
            Notation::Algebraic => format!(" {} ", (b'a' + col as u8) as char),
            Notation::Numeric => format!(" {col} "),
        })
        .collect();
    let header = format!("  {}", files.trim_end());

    let mut lines = vec![header.clone()];
    for row in row_order {
        let cells: String = (0..8)
            .map(|col| format!("[{}]", state.get_square(Pos::new(row, col)).symbol()))
            .collect();
        match notation {
            Notation::Algebraic => lines.push(format!("{} {cells} {}", row + 1, row + 1)),
            Notation::Numeric => lines.push(format!("{row} {cells}")),
        }
    }
    if notation == Notation::Algebraic {
        lines.push(header);
    }
    lines
}

/// Status block followed by the board
pub fn render(state: &GameState, notation: Notation, show_legal: bool) -> String {
    let mut lines = status_lines(state, notation, show_legal);
    lines.extend(board_lines(state, notation));
    lines.join("\n")
}
