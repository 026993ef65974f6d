//! Outcome Table Rendering
//!
//! Plain-text bordered table of every pairing. Rows are the computer's
//! candidate move, columns the player's; each cell is the player's result.

use colored::Colorize;

use crate::game::moves::MoveList;
use crate::game::rules::OutcomeMatrix;

const CORNER_LABEL: &str = "v PC/User >";

/// Widest cell text an outcome can produce ("draw").
const OUTCOME_WIDTH: usize = 4;

/// Print the pairwise outcome table with a short explainer.
pub fn print_outcome_table(moves: &MoveList) {
    println!("This table shows who wins in all the cases.");
    println!();
    println!("Example:");
    println!(
        "-If you select {} and computer {}, it's a draw.",
        moves.name(0),
        moves.name(0)
    );
    println!(
        "-If you select {} and computer {}, you win.",
        moves.name(1),
        moves.name(0)
    );
    println!();

    let matrix = OutcomeMatrix::build(moves);
    let label_width = moves
        .names()
        .iter()
        .map(|name| name.len())
        .max()
        .unwrap_or(0)
        .max(CORNER_LABEL.len());
    let widths: Vec<usize> = moves
        .names()
        .iter()
        .map(|name| name.len().max(OUTCOME_WIDTH))
        .collect();

    let border = border_line(label_width, &widths);

    println!("{}", border);
    print!("| {} ", pad(CORNER_LABEL, label_width));
    for (name, width) in moves.names().iter().zip(&widths) {
        print!("| {} ", pad(name, *width).magenta());
    }
    println!("|");
    println!("{}", border);

    for row in 0..matrix.size() {
        print!("| {} ", pad(moves.name(row), label_width).magenta());
        for (col, width) in widths.iter().enumerate() {
            let cell = matrix.get(row, col).to_string();
            print!("| {} ", pad(&cell, *width));
        }
        println!("|");
    }
    println!("{}", border);
}

/// Left-align `text` in a field of `width` characters.
///
/// Padding happens before any coloring so ANSI escapes do not throw the
/// column alignment off.
fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

fn border_line(label_width: usize, widths: &[usize]) -> String {
    let mut line = format!("+{}", "-".repeat(label_width + 2));
    for width in widths {
        line.push('+');
        line.push_str(&"-".repeat(width + 2));
    }
    line.push('+');
    line
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_fills_to_width() {
        assert_eq!(pad("ab", 5), "ab   ");
        assert_eq!(pad("abcde", 5), "abcde");
    }

    #[test]
    fn test_border_line_shape() {
        let line = border_line(4, &[2, 3]);
        assert_eq!(line, "+------+----+-----+");
    }
}
