use super::board_widget::{board_lines, Highlight};
use super::session::{Session, Stage};
use crate::game::{Side, DRAW};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &Session,
    input: &str,
    message: &Option<String>,
    show_legal: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Board + legal actions
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Input
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(20)])
        .split(chunks[1]);

    render_header(frame, session, chunks[0]);
    render_board(frame, session, body[0]);
    if show_legal {
        render_legal(frame, session, body[1]);
    }
    render_message(frame, message, chunks[2]);
    render_input(frame, session, input, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, session: &Session, area: Rect) {
    let state = session.state();
    let (side_name, color) = match state.turn() {
        Side::White => ("White", Color::White),
        Side::Black => ("Black", Color::LightRed),
    };

    let status = if state.is_end() {
        format!("Game Over  |  Moves until draw: {}/{}", state.draw_count(), DRAW + 1)
    } else {
        format!(
            "To move: {}  |  Moves until draw: {}/{}",
            side_name,
            state.draw_count(),
            DRAW + 1
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Draughts"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, session: &Session, area: Rect) {
    let highlight = match session.stage() {
        Stage::Start => Highlight::default(),
        Stage::End { from, destinations } => Highlight {
            selected: Some(*from),
            destinations,
        },
    };
    let lines = board_lines(session.state(), session.notation(), &highlight);
    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, area);
}

fn render_legal(frame: &mut Frame, session: &Session, area: Rect) {
    let state = session.state();
    let notation = session.notation();
    let captures = state.all_captures();
    let moves = state.all_moves();

    let mut lines = vec![Line::from(Span::styled(
        format!("Legal captures: {}", captures.len()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for step in &captures {
        lines.push(Line::from(format!("  {}", notation.format_step(*step))));
    }
    lines.push(Line::from(Span::styled(
        format!("Legal moves: {}", moves.len()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let listed: Vec<String> = moves.iter().map(|&step| notation.format_step(step)).collect();
    if !listed.is_empty() {
        lines.push(Line::from(format!("  {}", listed.join("  "))));
    }

    let legal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Legal actions"));
    frame.render_widget(legal, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_input(frame: &mut Frame, session: &Session, input: &str, area: Rect) {
    let prompt = match session.stage() {
        Stage::Start => "Start: ".to_string(),
        Stage::End { from, .. } => format!("End (from {}): ", session.notation().format(*from)),
    };
    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::Cyan)),
        Span::raw(input.to_string()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(session.notation().hint()),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Type a square  |  Enter: Submit (empty cancels)  |  R: Restart  |  Q/Esc: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
