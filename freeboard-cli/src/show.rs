//! Show command - print a position, optionally replayed from notation

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use freeboard_core::{replay, scan_moves, Board};

use crate::render::board_diagram;

#[derive(Args)]
pub struct ShowArgs {
    /// Flat notation string of 5-character move tokens to replay
    #[arg(long, value_name = "NOTATION")]
    pub moves: Option<String>,

    /// Replay up to this move index (default: the whole game)
    #[arg(long, value_name = "INDEX")]
    pub at: Option<usize>,

    /// Output the position as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for `show --json`
#[derive(Serialize)]
struct ShowOutput {
    moves_scanned: usize,
    at: usize,
    board: Board,
}

/// Run show command
pub fn run(args: ShowArgs) -> Result<()> {
    let output = position(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", board_diagram(&output.board));
    }

    Ok(())
}

fn position(args: &ShowArgs) -> Result<ShowOutput> {
    let Some(notation) = &args.moves else {
        return Ok(ShowOutput {
            moves_scanned: 0,
            at: 0,
            board: Board::starting_position(),
        });
    };

    let moves = scan_moves(notation);
    let upto = args.at.unwrap_or(moves.len());
    if upto > moves.len() {
        bail!(
            "move index {} is out of range: the game has {} moves",
            upto,
            moves.len()
        );
    }

    tracing::info!("Replaying {} of {} scanned moves", upto, moves.len());
    Ok(ShowOutput {
        moves_scanned: moves.len(),
        at: upto,
        board: replay(&moves, upto),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_shape() {
        let args = ShowArgs {
            moves: Some(" e2e4 d7d5".to_string()),
            at: Some(1),
            json: true,
        };
        let output = position(&args).unwrap();
        assert_eq!(output.moves_scanned, 2);
        assert_eq!(output.at, 1);

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&output).unwrap()).unwrap();
        assert_eq!(json["moves_scanned"], 2);
        assert_eq!(json["at"], 1);
        assert!(json["board"]["squares"].is_array());
    }

    #[test]
    fn test_out_of_range_index_errors() {
        let args = ShowArgs {
            moves: Some(" e2e4".to_string()),
            at: Some(3),
            json: false,
        };
        assert!(position(&args).is_err());
    }
}
