//! # Ringmatch
//!
//! Provably fair generalized rock-paper-scissors: any odd number of moves
//! (three or more) arranged on a ring, played against a computer opponent
//! whose move is cryptographically committed before the player chooses.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        RINGMATCH                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives with no game knowledge         │
//! │  ├── entropy.rs  - OS-backed CSPRNG draws                    │
//! │  └── mac.rs      - HMAC-SHA-256 move tags                    │
//! │                                                              │
//! │  game/           - Pure game logic                           │
//! │  ├── moves.rs    - Validated move list (ring topology)       │
//! │  └── rules.rs    - Circular outcome resolution               │
//! │                                                              │
//! │  proof/          - Commitment protocol                       │
//! │  └── commitment.rs - Seal, tag disclosure, reveal, verify    │
//! │                                                              │
//! │  cli/            - Terminal surface (non-deterministic I/O)  │
//! │  ├── menu.rs     - Menu and round rendering                  │
//! │  ├── table.rs    - N×N outcome table rendering               │
//! │  └── session.rs  - Blocking prompt/response loop             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! The opponent's move is drawn and bound to a fresh secret key before the
//! menu is ever shown. The keyed tag (HMAC-SHA-256) is published up front;
//! the key only after the player has moved. Recomputing the tag from the
//! revealed move name and key proves the move was never changed. All
//! randomness comes from the operating system CSPRNG.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod core;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use core::entropy::EntropyError;
pub use core::mac::{compute_tag, Tag, TAG_LEN};
pub use game::moves::{MoveList, MoveListError};
pub use game::rules::{resolve, Outcome, OutcomeMatrix};
pub use proof::commitment::{CommitmentError, MoveCommitment, MoveReveal, KEY_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
