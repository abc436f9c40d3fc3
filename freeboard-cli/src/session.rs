//! Interactive session state
//!
//! Owns the live board, the running notation log, the committed game
//! history, and the replay cursor. The two-phase tap interaction (pick
//! a source, then a destination) is ephemeral presentation state and
//! lives here as a small tagged variant, not in the core.

use freeboard_core::{
    notate, replay, scan_moves, step, Board, Game, History, Move, Square, StepDirection,
};

/// Two-phase selection state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Idle,
    SourceSelected(Square),
}

/// What a tap did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// First tap landed on a piece; it is now the pending source
    Selected(Square),
    /// First tap landed on an empty square; nothing happened
    Ignored,
    /// Second tap executed a move and recorded its notation
    Moved(String),
}

pub struct Session {
    board: Board,
    selection: Selection,
    draft: Game,
    move_log: Vec<String>,
    history: History,
    current_game: Option<usize>,
    cursor: usize,
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            selection: Selection::Idle,
            draft: Game::new(),
            move_log: Vec::new(),
            history: History::new(),
            current_game: None,
            cursor: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_game(&self) -> Option<usize> {
        self.current_game
    }

    /// Handle a tap on a square.
    ///
    /// Idle: a tap on an occupied square selects it as the source, a tap
    /// on an empty square is ignored. With a source selected: the tap is
    /// the destination and the move executes unconditionally; there is
    /// no validity check.
    pub fn tap(&mut self, square: Square) -> TapOutcome {
        match self.selection {
            Selection::Idle => {
                if self.board.occupant(square).is_some() {
                    self.selection = Selection::SourceSelected(square);
                    TapOutcome::Selected(square)
                } else {
                    TapOutcome::Ignored
                }
            }
            Selection::SourceSelected(from) => {
                self.selection = Selection::Idle;
                let mv = Move::new(from, square);
                let notation = notate(mv, self.board.occupant(from));
                self.board = self.board.apply(mv);
                self.draft.record(mv);
                self.move_log.push(notation.clone());
                TapOutcome::Moved(notation)
            }
        }
    }

    /// Commit a pasted notation string as a new game.
    ///
    /// Malformed tokens have already been dropped by the scanner; an
    /// entirely unparseable paste still commits an empty game.
    pub fn save_game(&mut self, notation: &str) -> usize {
        let moves = scan_moves(notation);
        self.history.commit(Game::from_moves(moves))
    }

    /// Select a committed game for review, rewinding to move 0
    pub fn select_game(&mut self, index: usize) -> Option<usize> {
        let game = self.history.game(index)?;
        self.board = replay(game.moves(), 0);
        self.current_game = Some(index);
        self.cursor = 0;
        self.selection = Selection::Idle;
        Some(index)
    }

    /// Step the replay cursor through the selected game, clamped at both
    /// ends. Returns the new cursor, or `None` when no game is selected.
    pub fn step_replay(&mut self, direction: StepDirection) -> Option<usize> {
        let index = self.current_game?;
        let game = self.history.game(index)?;
        self.cursor = step(self.cursor, direction, game.len());
        self.board = replay(game.moves(), self.cursor);
        Some(self.cursor)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
