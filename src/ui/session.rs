use std::fmt::Display;

use log::debug;

use crate::game::{GameOutcome, GameState, MoveOutcome, Notation, Pos, Side};

/// Which coordinate the player is being asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Start,
    End { from: Pos, destinations: Vec<Pos> },
}

/// Result of feeding one token to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Selected { from: Pos, destinations: Vec<Pos> },
    Cancelled,
    Moved { side: Side, outcome: MoveOutcome },
    GameOver(GameOutcome),
    /// Input refused; the player is prompted for a start square again
    Rejected(String),
}

/// One game driven by typed coordinates. Owns its engine state exclusively;
/// front ends only read it back for display.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    notation: Notation,
    stage: Stage,
}

impl Session {
    pub fn new(notation: Notation) -> Self {
        Self::with_state(GameState::initial(), notation)
    }

    pub fn with_state(state: GameState, notation: Notation) -> Self {
        Session {
            state,
            notation,
            stage: Stage::Start,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Throw the current game away and set up a new one
    pub fn restart(&mut self) {
        debug!("starting a new game");
        self.state = GameState::initial();
        self.stage = Stage::Start;
    }

    /// Feed one typed token: a start square, then a destination
    pub fn submit(&mut self, token: &str) -> Feedback {
        if let Some(outcome) = self.state.outcome() {
            return Feedback::GameOver(outcome);
        }
        match std::mem::replace(&mut self.stage, Stage::Start) {
            Stage::Start => self.select(token),
            Stage::End { from, .. } => self.finish(from, token),
        }
    }

    fn select(&mut self, token: &str) -> Feedback {
        let from = match self.notation.parse(token) {
            Ok(pos) => pos,
            Err(e) => return Feedback::Rejected(format!("Wrong syntax: {e}.")),
        };
        let query = if self.state.can_capture_any() {
            self.state.can_capture(from)
        } else {
            self.state.can_move(from)
        };
        match query {
            Ok(destinations) => {
                self.stage = Stage::End {
                    from,
                    destinations: destinations.clone(),
                };
                Feedback::Selected { from, destinations }
            }
            Err(e) => Feedback::Rejected(sentence(e)),
        }
    }

    fn finish(&mut self, from: Pos, token: &str) -> Feedback {
        if token.trim().is_empty() {
            return Feedback::Cancelled;
        }
        let to = match self.notation.parse(token) {
            Ok(pos) => pos,
            Err(e) => return Feedback::Rejected(format!("Wrong syntax: {e}.")),
        };
        let side = self.state.turn();
        match self.state.apply_move_mut(from, to) {
            Ok(outcome) => match self.state.outcome() {
                Some(result) => Feedback::GameOver(result),
                None => Feedback::Moved { side, outcome },
            },
            Err(e) => Feedback::Rejected(format!("This move isn't legal: {e}.")),
        }
    }

    /// Human readable rendition of a feedback, in this session's notation
    pub fn describe(&self, feedback: &Feedback) -> String {
        let n = self.notation;
        match feedback {
            Feedback::Selected { destinations, .. } => {
                let squares: Vec<String> = destinations.iter().map(|&p| n.format(p)).collect();
                format!("Possible destinations: {}", squares.join(" "))
            }
            Feedback::Cancelled => "Selection cleared.".to_string(),
            Feedback::Moved { side, outcome } => {
                let verb = if outcome.captured.is_some() { "captured" } else { "moved" };
                let mut text = format!("{} {verb} {}", side.name(), n.format_step(outcome.step));
                if outcome.promoted {
                    text.push_str(" and was crowned");
                }
                text.push('.');
                if !outcome.turn_passed {
                    text.push_str(&format!(
                        " Continue jumping from {}.",
                        n.format(outcome.step.to)
                    ));
                }
                text
            }
            Feedback::GameOver(GameOutcome::Winner(side)) => {
                format!("End of the game. {} won!", side.name())
            }
            Feedback::GameOver(GameOutcome::Draw) => "End of the game. Drawn game.".to_string(),
            Feedback::Rejected(reason) => reason.clone(),
        }
    }
}

/// Capitalise an error message and end it with a full stop
fn sentence(e: impl Display) -> String {
    let text = e.to_string();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
