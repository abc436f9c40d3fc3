//! freeboard core - board state and move replay
//!
//! This crate provides the domain logic for freeboard:
//! - Board geometry and occupancy (8x8 grid, standard starting layout)
//! - Move ledger: draft games, committed game history
//! - Deterministic replay of a move prefix from the starting position
//! - Move notation (display strings, pasted-game scanning)
//!
//! There is deliberately no rules engine: every move is accepted and
//! executed verbatim. See [`board::Board::apply`].

pub mod board;
pub mod game;
pub mod notation;
pub mod pieces;

// Re-exports for convenient access
pub use board::{Board, Square, BACK_RANK, BOARD_SIZE};
pub use game::{replay, step, Game, History, Move, StepDirection};
pub use notation::{notate, parse_square, scan_moves, NotationError};
pub use pieces::{Piece, PieceKind, Side};
