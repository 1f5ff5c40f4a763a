//! Canonical identifier derivation.
//!
//! Isolated as a free function so the load-bearing algorithm can be tested
//! independently of registry state.

use distinction_data::DistinctionId;
use sha2::{Digest, Sha256};

/// Derives the identifier produced by synthesizing two distinctions.
///
/// The parent identifiers are canonicalized (lexicographically sorted),
/// joined with `":"` and hashed with SHA-256, hex-encoded. The function
/// reads no registry state, no clock and no randomness, so
/// `derive_id(a, b) == derive_id(b, a)` for all inputs and the same
/// unordered pair yields the identical identifier at any point in any
/// engine's history.
#[must_use]
pub fn derive_id(a: &DistinctionId, b: &DistinctionId) -> DistinctionId {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update(lo.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(hi.as_str().as_bytes());
    DistinctionId::new(hex::encode(hasher.finalize()))
}
