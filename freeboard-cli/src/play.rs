//! Play command - interactive board session
//!
//! A line-oriented board session. Squares are "tapped" by typing them;
//! saving pasted games, selecting a game, and stepping through its
//! moves are each a small command.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use freeboard_core::{parse_square, StepDirection};

use crate::render::board_diagram;
use crate::session::{Selection, Session, TapOutcome};

#[derive(Args)]
pub struct PlayArgs {
    /// Suppress the board diagram after every action
    #[arg(long)]
    pub quiet: bool,
}

/// Run play command
pub fn run(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new();

    println!("freeboard interactive session");
    println!("{}", HELP);
    print!("{}", board_diagram(session.board()));
    prompt(&session)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            prompt(&session)?;
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }
        handle_input(&mut session, input, args.quiet);
        prompt(&session)?;
    }

    Ok(())
}

const HELP: &str = "\
  e2            tap a square (first tap selects, second tap moves)
  save <text>   commit a pasted notation string as a new game
  list          list committed games
  game <n>      select game n for review (games are numbered from 1)
  prev / next   step through the selected game
  moves         show the notation log of the live session
  help          show this help
  quit          leave the session";

fn handle_input(session: &mut Session, input: &str, quiet: bool) {
    match input.split_once(' ') {
        Some(("save", rest)) => {
            let index = session.save_game(rest);
            println!("Saved game {}", index + 1);
        }
        Some(("game", rest)) => select_game(session, rest),
        None if input == "help" => println!("{}", HELP),
        None if input == "list" => list_games(session),
        None if input == "moves" => list_moves(session),
        None if input == "prev" => step(session, StepDirection::Back, quiet),
        None if input == "next" => step(session, StepDirection::Forward, quiet),
        _ => tap(session, input, quiet),
    }
}

fn tap(session: &mut Session, input: &str, quiet: bool) {
    let square = match parse_square(input) {
        Ok(square) => square,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    match session.tap(square) {
        TapOutcome::Selected(square) => println!("Selected {}", square),
        TapOutcome::Ignored => println!("{} is empty", square),
        TapOutcome::Moved(notation) => {
            println!("{}", notation);
            if !quiet {
                print!("{}", board_diagram(session.board()));
            }
        }
    }
}

fn select_game(session: &mut Session, rest: &str) {
    let Ok(number) = rest.trim().parse::<usize>() else {
        println!("game wants a number, e.g. `game 1`");
        return;
    };
    match number.checked_sub(1).and_then(|i| session.select_game(i)) {
        Some(_) => {
            let game_len = session
                .history()
                .game(number - 1)
                .map(|g| g.len())
                .unwrap_or(0);
            println!("Game {} selected at move 0 of {}", number, game_len);
            print!("{}", board_diagram(session.board()));
        }
        None => println!("No game {} (have {})", number, session.history().len()),
    }
}

fn step(session: &mut Session, direction: StepDirection, quiet: bool) {
    match session.step_replay(direction) {
        Some(cursor) => {
            println!("At move {}", cursor);
            if !quiet {
                print!("{}", board_diagram(session.board()));
            }
        }
        None => println!("No game selected; `list` then `game <n>` first"),
    }
}

fn list_games(session: &Session) {
    if session.history().is_empty() {
        println!("No saved games");
        return;
    }
    for (i, game) in session.history().iter().enumerate() {
        println!("Game {}: {} moves", i + 1, game.len());
    }
}

fn list_moves(session: &Session) {
    if session.move_log().is_empty() {
        println!("No moves played");
        return;
    }
    for notation in session.move_log() {
        println!("{}", notation);
    }
}

fn prompt(session: &Session) -> Result<()> {
    match session.selection() {
        Selection::Idle => print!("> "),
        Selection::SourceSelected(square) => print!("{} > ", square),
    }
    io::stdout().flush()?;
    Ok(())
}
