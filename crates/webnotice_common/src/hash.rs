//! Content hashing for cache-busting asset filenames.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 128-bit content hash computed using XXH3.
///
/// Two payloads with the same `ContentHash` are assumed to have identical
/// content. The build pipeline embeds the [`short`](Self::short) form in
/// published asset filenames so that browser and CDN caches can never serve a
/// stale script or stylesheet under a new build's URL. This is a
/// collision-avoidance scheme, not a security primitive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

/// Number of hex characters of the hash embedded in asset filenames.
const SHORT_LEN: usize = 8;

impl ContentHash {
    /// Computes a content hash from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }

    /// Returns the short lowercase-hex form used in asset filenames.
    ///
    /// Eight hex characters keep filenames readable while leaving the chance
    /// of two differing builds colliding negligible for cache-busting
    /// purposes. The output contains only `[0-9a-f]` and is safe in any
    /// filename or URL.
    pub fn short(&self) -> String {
        let full = self.to_string();
        full[..SHORT_LEN].to_string()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}
