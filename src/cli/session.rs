//! Interactive Session Loop
//!
//! Owns the per-run mutable state: the validated move list, the single
//! sealed commitment, and the exit flag. The loop blocks on one line of
//! input at a time, processes it to completion, and re-prompts; bad input
//! never ends the session.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::core::entropy::EntropyError;
use crate::game::moves::MoveList;
use crate::game::rules::resolve;
use crate::proof::commitment::MoveCommitment;

use super::{menu, table};

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `0`: end the session.
    Exit,
    /// `?`: show the outcome table.
    Help,
    /// A move choice, zero-based.
    Play(usize),
    /// Anything else, including an empty line.
    Invalid,
}

impl Command {
    /// Parse one input line against a ring of `move_count` moves.
    ///
    /// Accepts surrounding whitespace; `1..=move_count` select a move,
    /// `0` exits, `?` opens the help table. Everything else is invalid
    /// and costs the player nothing but a re-prompt.
    pub fn parse(input: &str, move_count: usize) -> Self {
        let input = input.trim();
        if input == "?" {
            return Self::Help;
        }
        match input.parse::<usize>() {
            Ok(0) => Self::Exit,
            Ok(choice) if choice <= move_count => Self::Play(choice - 1),
            _ => Self::Invalid,
        }
    }
}

/// A single interactive run.
pub struct Session {
    moves: MoveList,
    commitment: MoveCommitment,
    exit: bool,
}

impl Session {
    /// Seal the opponent's move and build the session context.
    ///
    /// The commitment is created exactly once, before any menu is shown;
    /// an entropy failure aborts the session before it starts.
    pub fn start(moves: MoveList) -> Result<Self, EntropyError> {
        let commitment = MoveCommitment::seal(&moves)?;
        info!(
            moves = moves.len(),
            tag = %commitment.tag_hex(),
            "opponent move sealed"
        );
        Ok(Self {
            moves,
            commitment,
            exit: false,
        })
    }

    /// Run the prompt/response loop until the player exits.
    pub fn run(&mut self) -> io::Result<()> {
        while !self.exit {
            menu::print_menu(&self.moves, &self.commitment.tag_hex());
            match prompt("Enter your move: ")? {
                Some(line) => self.dispatch(&line)?,
                // stdin closed; nothing more will ever arrive
                None => self.exit = true,
            }
        }
        menu::clear_screen();
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> io::Result<()> {
        match Command::parse(line, self.moves.len()) {
            Command::Exit => {
                self.exit = true;
            }
            Command::Help => {
                menu::clear_screen();
                table::print_outcome_table(&self.moves);
                println!();
                pause("Press enter to return...")?;
            }
            Command::Play(player) => {
                self.play_round(player)?;
            }
            Command::Invalid => {
                println!();
                println!("Please insert a valid option!");
                pause("\nPress enter to continue...")?;
            }
        }
        Ok(())
    }

    /// Resolve one round and disclose the key.
    ///
    /// `reveal` is only reachable from here, after the player's move is
    /// already in hand.
    fn play_round(&self, player: usize) -> io::Result<()> {
        let reveal = self.commitment.reveal(&self.moves);
        let outcome = resolve(player, reveal.move_index, self.moves.len());
        debug!(player, opponent = reveal.move_index, %outcome, "round resolved");
        menu::print_round(&self.moves, player, &reveal, outcome);
        pause("\nPress enter to continue...")
    }
}

/// Print `text`, then block for one line. `None` means stdin reached EOF.
fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn pause(text: &str) -> io::Result<()> {
    prompt(text).map(|_| ())
}

// =============================================================================
// TESTS
// =============================================================================
