use log::{debug, info, trace};

use super::{Board, Pos, Side, Square, Step};

/// Number of non-capturing moves tolerated before the game is drawn. The
/// game ends once the counter exceeds it.
pub const DRAW: u32 = 39;

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// Why a piece cannot be used for the requested kind of action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("that square holds none of your pieces")]
    NotYourPiece,

    #[error("this piece has no capture")]
    NoLegalCapture,

    #[error("this piece has no move")]
    NoLegalMove,

    #[error("a capture is available and must be taken")]
    CaptureRequired,

    #[error("the piece on {0} must continue jumping")]
    MustContinueJump(Pos),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Pos),

    #[error("illegal move {0}")]
    Illegal(Step),
}

/// What an executed action did to the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub step: Step,
    /// Square of the piece removed by a capture
    pub captured: Option<Pos>,
    /// The moving piece was crowned on arrival
    pub promoted: bool,
    /// False while a multi-jump is still in progress
    pub turn_passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Side,
    draw_counter: u32,
    jumping: Option<Pos>,
}

impl GameState {
    /// Create initial game state. White moves first.
    pub fn initial() -> Self {
        GameState {
            board: Board::initial(),
            turn: Side::White,
            draw_counter: 0,
            jumping: None,
        }
    }

    /// Start from an arbitrary position
    pub fn from_position(board: Board, turn: Side, draw_counter: u32) -> Self {
        GameState {
            board,
            turn,
            draw_counter,
            jumping: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose action is next
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Non-capturing moves played so far
    pub fn draw_count(&self) -> u32 {
        self.draw_counter
    }

    /// Piece in the middle of a multi-jump, if any
    pub fn pending_jump(&self) -> Option<Pos> {
        self.jumping
    }

    pub fn get_square(&self, pos: Pos) -> Square {
        self.board.get(pos)
    }

    /// Forward row delta for the side to move
    pub fn direction(&self) -> i32 {
        self.turn.forward()
    }

    pub fn is_friend(&self, pos: Pos) -> bool {
        self.board.get(pos).side() == Some(self.turn)
    }

    pub fn is_enemy(&self, pos: Pos) -> bool {
        self.board.get(pos).side() == Some(self.turn.other())
    }

    /// Destinations `reach` diagonal squares away that the piece on `from`
    /// may head for: two forward ones for a man, all four for a king.
    fn candidates(&self, from: Pos, reach: i32) -> Vec<Pos> {
        let dir = self.direction();
        match self.board.get(from) {
            Square::Man(_) => vec![
                from.offset(reach * dir, -reach),
                from.offset(reach * dir, reach),
            ],
            Square::King(_) => DIAGONALS
                .iter()
                .map(|&(dr, dc)| from.offset(reach * dr, reach * dc))
                .collect(),
            Square::Empty | Square::OutOfPlay => Vec::new(),
        }
    }

    /// Whether the piece on `from` reaches `to` by moving `reach` squares
    /// diagonally. Men of either colour travel in the mover's direction.
    fn reaches(&self, from: Pos, to: Pos, reach: i32) -> bool {
        if !from.is_playable() || !to.is_playable() {
            return false;
        }
        let step = Step::new(from, to);
        if step.d_col().abs() != reach {
            return false;
        }
        match self.board.get(from) {
            Square::Man(_) => step.d_row() == reach * self.direction(),
            Square::King(_) => step.d_row().abs() == reach,
            Square::Empty | Square::OutOfPlay => false,
        }
    }

    /// Jump geometry and occupancy, ignoring any pending multi-jump
    fn jump_ok(&self, from: Pos, to: Pos) -> bool {
        self.reaches(from, to, 2)
            && self.board.get(to) == Square::Empty
            && self.is_enemy(from.midpoint(to))
    }

    fn step_ok(&self, from: Pos, to: Pos) -> bool {
        self.reaches(from, to, 1) && self.board.get(to) == Square::Empty
    }

    fn captures_from(&self, from: Pos) -> Vec<Pos> {
        self.candidates(from, 2)
            .into_iter()
            .filter(|&to| self.jump_ok(from, to))
            .collect()
    }

    fn moves_from(&self, from: Pos) -> Vec<Pos> {
        self.candidates(from, 1)
            .into_iter()
            .filter(|&to| self.step_ok(from, to))
            .collect()
    }

    /// Mandatory-capture gate shared by every move query
    fn capture_pending(&self) -> bool {
        match self.jumping {
            Some(pos) => !self.captures_from(pos).is_empty(),
            None => self
                .board
                .pieces(self.turn)
                .any(|pos| !self.captures_from(pos).is_empty()),
        }
    }

    pub fn legal_capture(&self, from: Pos, to: Pos) -> bool {
        if self.jumping.is_some_and(|pos| pos != from) {
            return false;
        }
        self.jump_ok(from, to)
    }

    pub fn legal_move(&self, from: Pos, to: Pos) -> bool {
        if self.jumping.is_some() || self.capture_pending() {
            return false;
        }
        self.can_capture(from).is_err() && self.step_ok(from, to)
    }

    /// Jump destinations available to the piece on `pos`
    pub fn can_capture(&self, pos: Pos) -> Result<Vec<Pos>, ActionError> {
        if !self.is_friend(pos) {
            return Err(ActionError::NotYourPiece);
        }
        if let Some(jumping) = self.jumping.filter(|&jumping| jumping != pos) {
            return Err(ActionError::MustContinueJump(jumping));
        }
        let targets = self.captures_from(pos);
        if targets.is_empty() {
            return Err(ActionError::NoLegalCapture);
        }
        Ok(targets)
    }

    /// Single-step destinations available to the piece on `pos`
    pub fn can_move(&self, pos: Pos) -> Result<Vec<Pos>, ActionError> {
        if !self.is_friend(pos) {
            return Err(ActionError::NotYourPiece);
        }
        if self.capture_pending() {
            return Err(ActionError::CaptureRequired);
        }
        let targets = self.moves_from(pos);
        if targets.is_empty() {
            return Err(ActionError::NoLegalMove);
        }
        Ok(targets)
    }

    pub fn can_capture_any(&self) -> bool {
        self.capture_pending()
    }

    pub fn can_move_any(&self) -> bool {
        !self.capture_pending()
            && self
                .board
                .pieces(self.turn)
                .any(|pos| !self.moves_from(pos).is_empty())
    }

    /// Every capture open to the side to move
    pub fn all_captures(&self) -> Vec<Step> {
        let sources: Vec<Pos> = match self.jumping {
            Some(pos) => vec![pos],
            None => self.board.pieces(self.turn).collect(),
        };
        sources
            .into_iter()
            .flat_map(|from| {
                self.captures_from(from)
                    .into_iter()
                    .map(move |to| Step::new(from, to))
            })
            .collect()
    }

    /// Every simple move open to the side to move; empty whenever a capture
    /// exists
    pub fn all_moves(&self) -> Vec<Step> {
        if self.capture_pending() {
            return Vec::new();
        }
        self.board
            .pieces(self.turn)
            .flat_map(|from| {
                self.moves_from(from)
                    .into_iter()
                    .map(move |to| Step::new(from, to))
            })
            .collect()
    }

    pub fn count_all_captures(&self) -> usize {
        self.all_captures().len()
    }

    pub fn count_all_moves(&self) -> usize {
        self.all_moves().len()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, from: Pos, to: Pos) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(from, to)?;
        Ok(next)
    }

    /// Execute a capture or simple move in place. Nothing changes when the
    /// action is rejected.
    ///
    /// Any occupied start square is accepted: a man of the opponent's colour
    /// can be pushed in the mover's direction when the move is otherwise legal.
    pub fn apply_move_mut(&mut self, from: Pos, to: Pos) -> Result<MoveOutcome, MoveError> {
        let piece = self.board.get(from);
        if piece.side().is_none() {
            return Err(MoveError::EmptySquare(from));
        }
        let side = self.turn;

        let step = Step::new(from, to);
        let mut outcome = if self.legal_capture(from, to) {
            let captured = from.midpoint(to);
            self.board.put(from, Square::Empty);
            self.board.put(captured, Square::Empty);
            self.board.put(to, piece);

            // Checked before promotion: a man crowned by this jump stops here
            let turn_passed = !self.is_friend(to) || self.captures_from(to).is_empty();
            if turn_passed {
                self.jumping = None;
                self.turn = self.turn.other();
            } else {
                self.jumping = Some(to);
            }
            debug!("{} captures {step}, taking {captured}", side.name());
            MoveOutcome {
                step,
                captured: Some(captured),
                promoted: false,
                turn_passed,
            }
        } else if self.legal_move(from, to) {
            self.board.put(from, Square::Empty);
            self.board.put(to, piece);
            self.turn = self.turn.other();
            self.draw_counter = self.draw_counter.saturating_add(1);
            debug!("{} moves {step} (draw counter {})", side.name(), self.draw_counter);
            MoveOutcome {
                step,
                captured: None,
                promoted: false,
                turn_passed: true,
            }
        } else {
            trace!("rejected {step} for {}", side.name());
            return Err(MoveError::Illegal(step));
        };

        outcome.promoted = self.board.promote().contains(&to);
        if outcome.promoted {
            info!("{} crowned on {to}", side.name());
        }
        if let Some(result) = self.outcome() {
            info!("game over: {result:?}");
        }
        Ok(outcome)
    }

    pub fn is_draw(&self) -> bool {
        self.draw_counter > DRAW
    }

    /// The game is over when drawn or when the side to move has no action
    pub fn is_end(&self) -> bool {
        self.outcome().is_some()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.is_draw() {
            return Some(GameOutcome::Draw);
        }
        if self.can_move_any() || self.can_capture_any() {
            return None;
        }
        Some(GameOutcome::Winner(self.turn.other()))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
