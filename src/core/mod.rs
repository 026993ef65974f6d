//! Core primitives.
//!
//! Entropy and message authentication. Nothing in this module knows about
//! moves, rings, or sessions; it is the foundation the commitment protocol
//! is built on.

pub mod entropy;
pub mod mac;

// Re-export core types
pub use entropy::{secure_bytes, secure_index, EntropyError};
pub use mac::{compute_tag, verify_tag, Tag, TAG_LEN};
