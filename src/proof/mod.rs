//! Commitment Protocol
//!
//! Binds the opponent's move to a secret key before the player chooses,
//! and proves after the round that the move was never changed.
//!
//! - `commitment`: seal a move, publish the tag, reveal and verify

pub mod commitment;

// Re-export protocol types
pub use commitment::{CommitmentError, MoveCommitment, MoveReveal, KEY_LEN};
