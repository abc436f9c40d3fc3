//! Move ledger and deterministic replay
//!
//! Moves accumulate into an in-progress `Game` draft; committing a draft
//! appends it to the `History`, after which it is immutable. Board state
//! at any point in a game is reconstructed by replaying a move prefix
//! from the starting position, never by mutating a shared board.

use crate::board::{Board, Square};
use serde::{Deserialize, Serialize};

/// A source/destination square pair, unchecked for legality
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// An ordered sequence of moves
///
/// Append-only while being recorded; committing it to a [`History`]
/// hands over ownership, so no caller can edit a committed game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    moves: Vec<Move>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_moves(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// Append a move to the draft. No validation.
    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Append-only list of committed games
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    games: Vec<Game>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a game, returning its index
    pub fn commit(&mut self, game: Game) -> usize {
        self.games.push(game);
        self.games.len() - 1
    }

    pub fn game(&self, index: usize) -> Option<&Game> {
        self.games.get(index)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.iter()
    }
}

/// Reconstruct the board after the first `upto` moves.
///
/// `upto` ranges from 0 (the starting position) to `moves.len()`
/// inclusive. Deterministic: same prefix, same board, every time.
///
/// # Panics
///
/// Panics if `upto > moves.len()`.
pub fn replay(moves: &[Move], upto: usize) -> Board {
    moves[..upto]
        .iter()
        .fold(Board::starting_position(), |board, &mv| board.apply(mv))
}

/// Navigation direction for stepping through a replay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepDirection {
    Back,
    Forward,
}

/// Move a replay cursor one step, clamped to `[0, moves_len]`.
///
/// At either boundary the cursor stays put; stepping never wraps and
/// never fails.
pub fn step(current: usize, direction: StepDirection, moves_len: usize) -> usize {
    match direction {
        StepDirection::Back => current.saturating_sub(1),
        StepDirection::Forward => (current + 1).min(moves_len),
    }
}
