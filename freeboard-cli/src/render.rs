//! Text rendering of a board position
//!
//! Rank digits run down the right edge, file letters along the bottom.

use freeboard_core::Board;

/// Render the board as an 8x8 text diagram.
///
/// Uppercase glyphs are White, lowercase Black, `.` an empty square.
pub fn board_diagram(board: &Board) -> String {
    let mut out = String::new();
    for (row, rank_squares) in board.rows().enumerate() {
        for occupant in rank_squares {
            let glyph = occupant.map_or('.', |p| p.glyph());
            out.push(glyph);
            out.push(' ');
        }
        out.push_str(&format!(" {}\n", 8 - row));
    }
    out.push_str("a b c d e f g h\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use freeboard_core::{replay, scan_moves, Board};

    #[test]
    fn test_starting_diagram() {
        let diagram = board_diagram(&Board::starting_position());
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "r n b q k b n r  8");
        assert_eq!(lines[1], "p p p p p p p p  7");
        assert_eq!(lines[4], ". . . . . . . .  4");
        assert_eq!(lines[6], "P P P P P P P P  2");
        assert_eq!(lines[7], "R N B Q K B N R  1");
        assert_eq!(lines[8], "a b c d e f g h");
    }

    #[test]
    fn test_diagram_after_move() {
        let moves = scan_moves(" e2e4");
        let diagram = board_diagram(&replay(&moves, 1));
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines[4], ". . . . P . . .  4");
        assert_eq!(lines[6], "P P P P . P P P  2");
    }
}
