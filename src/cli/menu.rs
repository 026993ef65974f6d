//! Menu and round rendering.

use colored::Colorize;

use crate::game::moves::MoveList;
use crate::game::rules::Outcome;
use crate::proof::commitment::MoveReveal;

/// Reset the terminal before drawing a fresh view.
pub fn clear_screen() {
    print!("\x1Bc");
}

/// Render the session menu, tag included.
pub fn print_menu(moves: &MoveList, tag_hex: &str) {
    clear_screen();
    println!("{}", "Beat the computer to win!".bold());
    println!();
    println!("How does it work?");
    println!();
    println!("Suppose that there are 5 options.");
    println!(
        "If you choose 1, you will beat the last two options (4 and 5), \
         but you will lose against the next two (2 and 3)."
    );
    println!(
        "If you choose 5, you will beat the two before it (3 and 4), \
         but you will lose against the two after it (1 and 2)."
    );
    println!();
    println!("HMAC: {}", tag_hex);
    println!();
    println!("Available moves:");
    for (i, name) in moves.names().iter().enumerate() {
        println!("{} - {}", i + 1, name);
    }
    println!("0 - exit");
    println!("? - help");
}

/// Render a played round: both moves, the outcome, the revealed key.
pub fn print_round(moves: &MoveList, player: usize, reveal: &MoveReveal, outcome: Outcome) {
    let verdict = match outcome {
        Outcome::Win => "win".green(),
        Outcome::Lose => "lose".red(),
        Outcome::Draw => "draw".yellow(),
    };
    println!();
    println!("Your move: {}", moves.name(player));
    println!("Computer move: {}", reveal.move_name);
    println!("You {}!", verdict);
    println!();
    println!("HMAC key: {}", reveal.key_hex());
}
