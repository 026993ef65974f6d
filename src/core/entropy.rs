//! Secure Randomness
//!
//! Every random draw in the commitment protocol comes from the operating
//! system CSPRNG. The unpredictability of the opponent's move and key is
//! the security property the whole protocol rests on, so a failure to
//! obtain entropy is surfaced as an error and never replaced by a weaker
//! seeded generator.

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Errors from the operating-system entropy source.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The OS refused or failed to provide secure random bytes.
    #[error("entropy source failure: {0}")]
    Source(#[from] rand::Error),
}

/// Draw `len` cryptographically secure random bytes.
pub fn secure_bytes(len: usize) -> Result<Vec<u8>, EntropyError> {
    let mut bytes = vec![0u8; len];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Draw a uniform index in `[0, bound)`.
///
/// Uses rejection sampling: 32-bit draws at or above the largest multiple
/// of `bound` are discarded, so the modulo step cannot bias small indices.
pub fn secure_index(bound: usize) -> Result<usize, EntropyError> {
    debug_assert!(bound > 0, "index bound must be positive");
    debug_assert!(bound <= u32::MAX as usize, "index bound must fit in u32");

    let bound = bound as u64;
    // Largest multiple of `bound` not exceeding 2^32.
    let zone = (1u64 << 32) - (1u64 << 32) % bound;
    loop {
        let mut buf = [0u8; 4];
        OsRng.try_fill_bytes(&mut buf)?;
        let raw = u64::from(u32::from_le_bytes(buf));
        if raw < zone {
            return Ok((raw % bound) as usize);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
