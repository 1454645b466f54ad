//! Strictly SOS - terminal front end
//!
//! Plays SOS over stdin/stdout and replays recorded games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use std::io::{BufRead, Write};
use std::path::Path;
use strictly_sos::{
    GameRecorder, Letter, MoveReport, Outcome, ReplayDriver, Session, SessionError,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Replay { log, json } => run_replay(&log, json),
    }
}

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Place { row: usize, col: usize, letter: Letter },
    Hint,
    Restart,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["hint"] => Some(Input::Hint),
        ["new"] => Some(Input::Restart),
        ["quit"] | ["q"] => Some(Input::Quit),
        [row, col, letter] => Some(Input::Place {
            row: row.parse().ok()?,
            col: col.parse().ok()?,
            letter: letter.to_uppercase().parse().ok()?,
        }),
        _ => None,
    }
}

fn print_report(report: &MoveReport) {
    println!("{}", report.mov);
    for event in &report.scored {
        println!("  {} scores {}", event.color, event.window);
    }
}

/// Play a game over stdin/stdout
#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = args.to_config()?.validate()?;
    let mut session = Session::start(&config)?;
    info!(log = ?config.log_path(), "Game started");
    println!(
        "{}x{} {} game. Enter moves as `row col letter`, `hint`, `new` or `quit`.",
        config.board_size(),
        config.board_size(),
        config.mode()
    );
    session.advance()?.iter().for_each(print_report);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}", session.game().board());
        if let Some(outcome) = session.game().outcome() {
            let scores = session.game().scores();
            match outcome {
                Outcome::Winner(color) => println!("{} wins.", color),
                Outcome::Draw => println!("Draw."),
            }
            println!("Blue {} - Red {}", scores.blue, scores.red);
            println!("Type `new` to play again or `quit`.");
        } else {
            print!("{} to move> ", session.current_player().color());
        }
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line.context("Failed to read input")?;
        match parse_input(&line) {
            Some(Input::Quit) => break,
            Some(Input::Restart) => {
                session.restart(&config)?;
                session.advance()?.iter().for_each(print_report);
            }
            Some(Input::Hint) => match session.request_ai_move() {
                Ok(s) => println!("Try {} at ({}, {})", s.letter, s.row, s.col),
                Err(e) => println!("{}", e),
            },
            Some(Input::Place { row, col, letter }) => match session.submit(row, col, letter) {
                Ok(turn) => {
                    print_report(&turn.human);
                    turn.computer.iter().for_each(print_report);
                }
                Err(SessionError::Move(e)) if e.is_retryable() => println!("{}", e),
                Err(e) => {
                    warn!(error = %e, "Move not applied");
                    println!("{}", e);
                }
            },
            None => println!("Could not read {:?}; expected `row col letter`", line.trim()),
        }
    }
    Ok(())
}

/// Replay a recorded game
#[instrument(fields(log = %log.display()))]
fn run_replay(log: &Path, json: bool) -> Result<()> {
    let recorder = GameRecorder::to_file(log);
    let mut driver = ReplayDriver::load(&recorder)
        .with_context(|| format!("Failed to load {}", log.display()))?;
    let reports = driver.run()?;
    let summary = driver.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    reports.iter().for_each(print_report);
    println!("\n{}", summary.board);
    println!("Blue {} - Red {}", summary.scores.blue, summary.scores.red);
    match summary.outcome {
        Some(Outcome::Winner(color)) => println!("{} wins.", color),
        Some(Outcome::Draw) => println!("Draw."),
        None => println!("Game unfinished after {} moves.", summary.moves_replayed),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_input("2 1 s"),
            Some(Input::Place {
                row: 2,
                col: 1,
                letter: Letter::S
            })
        );
        assert_eq!(parse_input(" hint "), Some(Input::Hint));
        assert_eq!(parse_input("q"), Some(Input::Quit));
        assert_eq!(parse_input("2 1 x"), None);
        assert_eq!(parse_input("2 s"), None);
    }
}
