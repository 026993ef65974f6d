//! Keyed Move Authentication
//!
//! HMAC-SHA-256 tags binding a message to a secret key. A keyed MAC is
//! required here rather than a plain hash: the move-name space is tiny,
//! so a bare hash of the name could be brute-forced by the player before
//! the round ends.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Tag length in bytes (256 bits).
pub const TAG_LEN: usize = 32;

/// Keyed authentication tag.
pub type Tag = [u8; TAG_LEN];

/// Compute the HMAC-SHA-256 tag of `message` under `key`.
///
/// Deterministic for fixed inputs; changing either input changes the tag
/// with overwhelming probability.
pub fn compute_tag(message: &[u8], key: &[u8]) -> Tag {
    let mut mac = HmacSha256::new_from_slice(key)
        .expect("HMAC-SHA-256 accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Check `tag` against `message` and `key`.
///
/// Comparison runs in constant time.
pub fn verify_tag(message: &[u8], key: &[u8], tag: &Tag) -> bool {
    let mut mac = HmacSha256::new_from_slice(key)
        .expect("HMAC-SHA-256 accepts keys of any length");
    mac.update(message);
    mac.verify_slice(tag).is_ok()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_determinism() {
        let tag1 = compute_tag(b"rock", b"secret key");
        let tag2 = compute_tag(b"rock", b"secret key");
        assert_eq!(tag1, tag2);
    }

    #[test]
    fn test_tag_depends_on_message() {
        let tag1 = compute_tag(b"rock", b"secret key");
        let tag2 = compute_tag(b"paper", b"secret key");
        assert_ne!(tag1, tag2);
    }

    #[test]
    fn test_tag_depends_on_key() {
        let tag1 = compute_tag(b"rock", b"key one");
        let tag2 = compute_tag(b"rock", b"key two");
        assert_ne!(tag1, tag2);
    }

    #[test]
    fn test_verify_round_trip() {
        let tag = compute_tag(b"scissors", b"k");
        assert!(verify_tag(b"scissors", b"k", &tag));
        assert!(!verify_tag(b"scissors", b"wrong", &tag));
        assert!(!verify_tag(b"rock", b"k", &tag));
    }

    #[test]
    fn test_known_vector() {
        // RFC 4231 test case 2: key "Jefe", data "what do ya want for nothing?"
        let tag = compute_tag(b"what do ya want for nothing?", b"Jefe");
        let expected = hex::decode(
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
        )
        .unwrap();
        assert_eq!(tag.as_slice(), expected.as_slice());
    }
}
