//! 8x8 board geometry and occupancy
//!
//! Row 0 is rank 8 (Black's back rank), row 7 is rank 1 (White's back
//! rank), matching the display convention `rank = 8 - row`,
//! `file = 'a' + col`.

use crate::pieces::{Piece, PieceKind, Side};
use serde::{Deserialize, Serialize};

/// Squares per edge
pub const BOARD_SIZE: usize = 8;

/// Back-rank kind order, queenside to kingside
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A (row, column) coordinate on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Both coordinates must be in [0,7]. Out-of-range coordinates are a
    /// caller bug and fail fast rather than clamping, which would corrupt
    /// replay determinism.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// File letter, 'a'..='h'
    pub fn file(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank digit, '1'..='8' (rank = 8 - row)
    pub fn rank(self) -> char {
        (b'0' + (8 - self.row)) as char
    }

    /// Build from a file letter and rank digit, e.g. ('e', '2').
    /// Case-insensitive on the file. Returns `None` out of range.
    pub fn from_file_rank(file: char, rank: char) -> Option<Self> {
        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        let col = file as u8 - b'a';
        let row = 8 - (rank as u8 - b'0');
        Some(Self { row, col })
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Board occupancy at a point in time.
///
/// A value type: every mutation produces a fresh `Board`, so replay
/// snapshots never share state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The standard starting position: Black on rows 0-1, White on
    /// rows 6-7, back ranks R-N-B-Q-K-B-N-R, pawns in front.
    pub fn starting_position() -> Self {
        let mut squares = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            squares[0][col] = Some(Piece::new(kind, Side::Black));
            squares[7][col] = Some(Piece::new(kind, Side::White));
        }
        for col in 0..BOARD_SIZE {
            squares[1][col] = Some(Piece::new(PieceKind::Pawn, Side::Black));
            squares[6][col] = Some(Piece::new(PieceKind::Pawn, Side::White));
        }
        Self { squares }
    }

    /// Occupant at a square, if any
    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Execute a move, returning the resulting board.
    ///
    /// Whatever occupies the source (possibly nothing) ends up on the
    /// destination and the source becomes empty. No legality check of any
    /// kind: moving an empty square, landing on a friendly piece, and
    /// movement no chess piece could make are all executed verbatim.
    /// Notation and replay depend on this accept-everything behavior.
    pub fn apply(&self, mv: crate::game::Move) -> Board {
        let mut next = self.clone();
        // destination first, then clear the source: a degenerate move with
        // from == to therefore empties the square
        next.squares[mv.to.row() as usize][mv.to.col() as usize] =
            self.occupant(mv.from);
        next.squares[mv.from.row() as usize][mv.from.col() as usize] = None;
        next
    }

    /// Iterate rows top (row 0, rank 8) to bottom, for rendering
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; BOARD_SIZE]> {
        self.squares.iter()
    }

    /// Total occupied squares
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().flatten().filter(|o| o.is_some()).count()
    }

    /// Occupied squares belonging to one side
    pub fn side_count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|o| matches!(o, Some(p) if p.side == side))
            .count()
    }
}
