//! FNV-1a hashing over raw block images.

use serde::{Deserialize, Serialize};
use std::fmt;

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// A wrapper type for the 32-bit block hash with hex formatting.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Hash(pub u32);

impl Hash {
    /// Create a new Hash from a raw value.
    pub fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw hash value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Convert to a hex string.
    pub fn to_hex(&self) -> String {
        format!("{:08x}", self.0)
    }

    /// Whether this hash satisfies the given difficulty threshold.
    pub fn meets(&self, threshold: u32) -> bool {
        self.0 <= threshold
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash(0x{})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl From<u32> for Hash {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Hash> for u32 {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

/// Hash arbitrary data using 32-bit FNV-1a.
pub fn fnv1a(data: &[u8]) -> Hash {
    let mut h = FNV_OFFSET_BASIS;
    for &b in data {
        h = (h ^ u32::from(b)).wrapping_mul(FNV_PRIME);
    }
    Hash(h)
}
