//! Move Commitment
//!
//! The opponent's move is fixed and tagged before the player chooses.
//! The tag (HMAC-SHA-256 over the move name under a fresh secret key) is
//! published at round start; the key only after the player has moved.
//! Recomputing the tag from the revealed name and key and comparing it to
//! the published one proves the move was fixed in advance.
//!
//! Disclosure order is the security-critical invariant: tag before the
//! player's move, key strictly after. The key and move index are private
//! fields here, reachable only through [`MoveCommitment::reveal`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::entropy::{secure_bytes, secure_index, EntropyError};
use crate::core::mac::{compute_tag, verify_tag, Tag};
use crate::game::moves::MoveList;

/// Default key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// A sealed opponent move.
///
/// Created once per session. The move index is drawn first and never
/// re-rolled; the tag is derived once and cached.
#[derive(Debug, Clone)]
pub struct MoveCommitment {
    key: Vec<u8>,
    move_index: usize,
    tag: Tag,
}

impl MoveCommitment {
    /// Seal a uniformly random move from `moves` with the default key
    /// length.
    pub fn seal(moves: &MoveList) -> Result<Self, EntropyError> {
        Self::seal_with_key_len(moves, KEY_LEN)
    }

    /// Seal with a caller-chosen key length.
    pub fn seal_with_key_len(moves: &MoveList, key_len: usize) -> Result<Self, EntropyError> {
        let move_index = secure_index(moves.len())?;
        let key = secure_bytes(key_len)?;
        let tag = compute_tag(moves.name(move_index).as_bytes(), &key);
        Ok(Self {
            key,
            move_index,
            tag,
        })
    }

    /// The published tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Hex rendering of the tag, shown before the player moves.
    pub fn tag_hex(&self) -> String {
        hex::encode(self.tag)
    }

    /// Disclose the key and move.
    ///
    /// Call only after the player has submitted a move; earlier disclosure
    /// defeats the protocol.
    pub fn reveal(&self, moves: &MoveList) -> MoveReveal {
        MoveReveal {
            move_index: self.move_index,
            move_name: moves.name(self.move_index).to_string(),
            key: self.key.clone(),
            tag: self.tag,
        }
    }
}

/// Post-round disclosure: everything the player needs to re-check the tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveReveal {
    /// Index of the opponent's move in the session move list.
    pub move_index: usize,
    /// Plain-text name of the opponent's move.
    pub move_name: String,
    /// The MAC key, withheld until now.
    pub key: Vec<u8>,
    /// The tag that was published at round start.
    pub tag: Tag,
}

impl MoveReveal {
    /// Recompute the tag from the revealed name and key and compare it to
    /// the published one, in constant time.
    pub fn verify(&self) -> Result<(), CommitmentError> {
        if verify_tag(self.move_name.as_bytes(), &self.key, &self.tag) {
            Ok(())
        } else {
            Err(CommitmentError::TagMismatch)
        }
    }

    /// Hex rendering of the key for display.
    pub fn key_hex(&self) -> String {
        hex::encode(&self.key)
    }
}

/// Commitment verification errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// The revealed move and key do not reproduce the published tag.
    #[error("revealed move and key do not reproduce the published tag")]
    TagMismatch,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mac::compute_tag;

    fn moves() -> MoveList {
        MoveList::new(
            ["rock", "paper", "scissors", "lizard", "spock"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_seal_reveal_round_trip() {
        let moves = moves();
        let commitment = MoveCommitment::seal(&moves).unwrap();
        let published = *commitment.tag();

        let reveal = commitment.reveal(&moves);
        assert!(reveal.verify().is_ok());
        assert_eq!(reveal.tag, published);
        assert_eq!(reveal.key.len(), KEY_LEN);
        assert!(reveal.move_index < moves.len());
        assert_eq!(reveal.move_name, moves.name(reveal.move_index));
    }

    #[test]
    fn test_reveal_matches_independent_recomputation() {
        // The player-side check: recompute the tag from the disclosed
        // name and key alone.
        let moves = moves();
        let commitment = MoveCommitment::seal(&moves).unwrap();
        let reveal = commitment.reveal(&moves);

        let recomputed = compute_tag(reveal.move_name.as_bytes(), &reveal.key);
        assert_eq!(recomputed, *commitment.tag());
    }

    #[test]
    fn test_tampered_move_fails_verification() {
        let moves = moves();
        let commitment = MoveCommitment::seal(&moves).unwrap();
        let mut reveal = commitment.reveal(&moves);

        reveal.move_name = "banana".to_string();
        assert_eq!(reveal.verify(), Err(CommitmentError::TagMismatch));
    }

    #[test]
    fn test_tampered_key_fails_verification() {
        let moves = moves();
        let commitment = MoveCommitment::seal(&moves).unwrap();
        let mut reveal = commitment.reveal(&moves);

        reveal.key[0] ^= 0xFF;
        assert_eq!(reveal.verify(), Err(CommitmentError::TagMismatch));
    }

    #[test]
    fn test_configurable_key_length() {
        let moves = moves();
        let commitment = MoveCommitment::seal_with_key_len(&moves, 16).unwrap();
        let reveal = commitment.reveal(&moves);

        assert_eq!(reveal.key.len(), 16);
        assert!(reveal.verify().is_ok());
    }

    #[test]
    fn test_tag_is_stable_across_reads() {
        let moves = moves();
        let commitment = MoveCommitment::seal(&moves).unwrap();
        assert_eq!(commitment.tag_hex(), commitment.tag_hex());
        assert_eq!(commitment.tag_hex(), hex::encode(commitment.tag()));
    }

    #[test]
    fn test_fresh_sessions_use_fresh_keys() {
        let moves = moves();
        let a = MoveCommitment::seal(&moves).unwrap();
        let b = MoveCommitment::seal(&moves).unwrap();
        assert_ne!(a.reveal(&moves).key, b.reveal(&moves).key);
    }
}
