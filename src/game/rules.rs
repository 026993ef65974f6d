//! Circular Outcome Resolution
//!
//! Win/lose/draw over a ring of N moves, N odd. Each move beats the
//! `floor(N/2)` moves listed cyclically before it and loses to the
//! `floor(N/2)` listed after it. With N=3 and the listed order
//! `[Rock, Paper, Scissors]` this is classic rock-paper-scissors; the same
//! rule extends to any odd N with no case enumeration.

use serde::{Deserialize, Serialize};

use super::moves::MoveList;

/// Round outcome from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player's move beats the opponent's.
    Win,
    /// The opponent's move beats the player's.
    Lose,
    /// Identical moves.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Lose => write!(f, "lose"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Resolve one round from two indices into a ring of `move_count` moves.
///
/// `move_count` must be odd and at least three, and both indices must be
/// in `[0, move_count)`; callers guarantee this (the move list is
/// validated at startup and indices come from bounded parsing).
///
/// The signed circular distance from player to opponent, normalized into
/// `[-half, half]`, decides the round: negative means the opponent sits in
/// the arc the player beats, zero is the same move, positive means the
/// player sits in the arc the opponent beats. Oddness of N makes the split
/// symmetric with no boundary move, which is why even counts are rejected
/// upstream instead of tie-broken here.
pub fn resolve(player: usize, opponent: usize, move_count: usize) -> Outcome {
    debug_assert!(
        move_count >= 3 && move_count % 2 == 1,
        "move count must be odd and at least 3"
    );
    debug_assert!(
        player < move_count && opponent < move_count,
        "move indices must be in range"
    );

    let n = move_count as i64;
    let half = n / 2;
    // Signed circular distance from player to opponent, in [-half, half].
    let distance = (opponent as i64 - player as i64 + half + n) % n - half;
    match distance.signum() {
        -1 => Outcome::Win,
        0 => Outcome::Draw,
        _ => Outcome::Lose,
    }
}

/// Full pairwise outcome table for a move list.
///
/// Rows are the opponent's candidate move, columns the player's; every
/// cell is the player's outcome for that pairing. Built with O(N²) calls
/// to [`resolve`], used by the interactive help view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeMatrix {
    size: usize,
    cells: Vec<Outcome>,
}

impl OutcomeMatrix {
    /// Build the N×N table for `moves`.
    pub fn build(moves: &MoveList) -> Self {
        let size = moves.len();
        let mut cells = Vec::with_capacity(size * size);
        for opponent in 0..size {
            for player in 0..size {
                cells.push(resolve(player, opponent, size));
            }
        }
        Self { size, cells }
    }

    /// Table dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Outcome at `(row = opponent move, col = player move)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Outcome {
        assert!(row < self.size && col < self.size, "matrix index out of range");
        self.cells[row * self.size + col]
    }
}

// =============================================================================
// TESTS
// =============================================================================


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    /// An odd ring size with two indices into it.
    fn ring_pair() -> impl Strategy<Value = (usize, usize, usize)> {
        (1usize..=15).prop_flat_map(|k| {
            let n = 2 * k + 1;
            (Just(n), 0..n, 0..n)
        })
    }

    proptest! {
        #[test]
        fn draw_iff_identical((n, a, b) in ring_pair()) {
            prop_assert_eq!(resolve(a, b, n) == Outcome::Draw, a == b);
        }

        #[test]
        fn swapping_seats_flips_the_result((n, a, b) in ring_pair()) {
            let forward = resolve(a, b, n);
            let backward = resolve(b, a, n);
            match forward {
                Outcome::Win => prop_assert_eq!(backward, Outcome::Lose),
                Outcome::Lose => prop_assert_eq!(backward, Outcome::Win),
                Outcome::Draw => prop_assert_eq!(backward, Outcome::Draw),
            }
        }

        #[test]
        fn rotating_the_ring_preserves_outcomes(
            (n, a, b) in ring_pair(),
            k in 0usize..64,
        ) {
            let rotated = resolve((a + k) % n, (b + k) % n, n);
            prop_assert_eq!(resolve(a, b, n), rotated);
        }
    }
}
