//! Subset key derivation.

use sha1::{Digest, Sha1};
use std::fmt;

/// A derived subset key, naming one subset cache entry on the server.
///
/// The key has the form `{branch_id}__{digest}` where `digest` is the
/// lowercase hex SHA-1 of the machine identifiers concatenated in the
/// order the caller supplied them, with no separator. Derivation is a
/// pure function of its inputs.
///
/// The caller's ordering is part of the contract: two identifier
/// sequences that differ only in order derive different keys, so callers
/// that want a stable key must supply a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubsetKey(String);

impl SubsetKey {
    /// Derives the key for a branch id and machine identifier sequence.
    pub fn derive(branch_id: &str, machine_ids: &[String]) -> Self {
        let mut hasher = Sha1::new();
        for id in machine_ids {
            hasher.update(id.as_bytes());
        }
        let digest = hex::encode(hasher.finalize());
        SubsetKey(format!("{}__{}", branch_id, digest))
    }

    /// Returns the key as a string slice, suitable for URL embedding.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
