//! Move notation: display strings and pasted-game scanning
//!
//! The display form is `<piece-letter><from><to>`, e.g. `"e2e4"` for a
//! pawn move or `"Ng1f3"` for a knight. The scanner reads that form back
//! as a flat string of concatenated 5-character tokens where pawns take
//! a leading blank.

use crate::board::Square;
use crate::game::Move;
use crate::pieces::Piece;
use thiserror::Error;

/// Width of one pasted-move token: piece letter (or blank) + from + to
const TOKEN_WIDTH: usize = 5;

/// Failure to parse a typed square
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected a file letter and a rank digit, got {0:?}")]
    MalformedSquare(String),
    #[error("square {0:?} is off the board")]
    OutOfRange(String),
}

/// Display string for a move, given the occupant of its source square.
///
/// The prefix letter comes from the piece being moved; pawn moves and
/// moves of an empty square carry no prefix. Infallible.
pub fn notate(mv: Move, occupant: Option<Piece>) -> String {
    let prefix = occupant.map_or("", |p| p.kind.letter());
    format!("{}{}{}", prefix, mv.from, mv.to)
}

/// Strict parse of a typed square such as `"e2"`.
///
/// Used on the interactive path, where the user deserves to hear what
/// was wrong rather than having input dropped on the floor.
pub fn parse_square(text: &str) -> Result<Square, NotationError> {
    let mut chars = text.chars();
    let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
        (Some(f), Some(r), None) => (f, r),
        _ => return Err(NotationError::MalformedSquare(text.to_string())),
    };
    Square::from_file_rank(file, rank).ok_or_else(|| NotationError::OutOfRange(text.to_string()))
}

/// Scan a pasted flat string of 5-character move tokens into moves.
///
/// Token layout: `<piece-or-blank><fromFile><fromRank><toFile><toRank>`.
/// The piece letter is display-only and ignored here; the board is what
/// decides what actually sits on the source square at replay time.
/// Malformed tokens, including a short tail, are silently discarded,
/// since pasted input must never crash the session.
pub fn scan_moves(text: &str) -> Vec<Move> {
    let chars: Vec<char> = text.chars().collect();
    let mut moves = Vec::new();
    let mut index = 0;
    while index < chars.len() {
        let end = (index + TOKEN_WIDTH).min(chars.len());
        if let Some(mv) = parse_token(&chars[index..end]) {
            moves.push(mv);
        }
        index += TOKEN_WIDTH;
    }
    moves
}

fn parse_token(token: &[char]) -> Option<Move> {
    if token.len() != TOKEN_WIDTH {
        return None;
    }
    let from = Square::from_file_rank(token[1], token[2])?;
    let to = Square::from_file_rank(token[3], token[4])?;
    Some(Move::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{PieceKind, Side};

    #[test]
    fn test_notate_pawn_has_no_prefix() {
        let mv = Move::new(Square::new(6, 4), Square::new(4, 4));
        let pawn = Piece::new(PieceKind::Pawn, Side::White);
        assert_eq!(notate(mv, Some(pawn)), "e2e4");
    }

    #[test]
    fn test_notate_piece_prefix() {
        let mv = Move::new(Square::new(7, 6), Square::new(5, 5));
        let knight = Piece::new(PieceKind::Knight, Side::White);
        assert_eq!(notate(mv, Some(knight)), "Ng1f3");

        let mv = Move::new(Square::new(0, 3), Square::new(4, 7));
        let queen = Piece::new(PieceKind::Queen, Side::Black);
        assert_eq!(notate(mv, Some(queen)), "Qd8h4");
    }

    #[test]
    fn test_notate_empty_source() {
        let mv = Move::new(Square::new(4, 4), Square::new(3, 3));
        assert_eq!(notate(mv, None), "e4d5");
    }

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_square("e2"), Ok(Square::new(6, 4)));
        assert_eq!(parse_square("H8"), Ok(Square::new(0, 7)));
        assert_eq!(
            parse_square("e"),
            Err(NotationError::MalformedSquare("e".to_string()))
        );
        assert_eq!(
            parse_square("e22"),
            Err(NotationError::MalformedSquare("e22".to_string()))
        );
        assert_eq!(
            parse_square("j4"),
            Err(NotationError::OutOfRange("j4".to_string()))
        );
    }

    #[test]
    fn test_scan_two_moves() {
        let moves = scan_moves(" e2e4 d7d5");
        assert_eq!(
            moves,
            vec![
                Move::new(Square::new(6, 4), Square::new(4, 4)),
                Move::new(Square::new(1, 3), Square::new(3, 3)),
            ]
        );
    }

    #[test]
    fn test_scan_ignores_piece_letter() {
        let moves = scan_moves("Ng1f3");
        assert_eq!(
            moves,
            vec![Move::new(Square::new(7, 6), Square::new(5, 5))]
        );
    }

    #[test]
    fn test_scan_discards_short_tail() {
        let moves = scan_moves(" e2e4 d7d");
        assert_eq!(moves.len(), 1);
        assert!(scan_moves("e2e").is_empty());
        assert!(scan_moves("").is_empty());
    }

    #[test]
    fn test_scan_discards_garbage_token() {
        // bad file/rank characters drop the token, not the whole string
        let moves = scan_moves(" z9x0 e2e4");
        assert_eq!(
            moves,
            vec![Move::new(Square::new(6, 4), Square::new(4, 4))]
        );
    }
}
