use super::session::Session;
use crate::game::Notation;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: Session,
    input: String,
    show_legal: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(notation: Notation, show_legal: bool) -> Self {
        App {
            session: Session::new(notation),
            input: String::new(),
            show_legal,
            should_quit: false,
            message: Some(format!("Input moves as {}.", notation.hint())),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.restart();
                self.input.clear();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
                if self.input.len() < 2 {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }
    }

    /// Hand the typed square to the session
    fn submit(&mut self) {
        let token = std::mem::take(&mut self.input);
        let feedback = self.session.submit(&token);
        self.message = Some(self.session.describe(&feedback));
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            &self.input,
            &self.message,
            self.show_legal,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Notation::default(), true)
    }
}
