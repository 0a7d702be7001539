//! Brute-force nonce search.

use microledger_core::{fnv1a, Block, Hash};
use tracing::debug;

/// Reference mining difficulty: accept hashes at or below 2^20.
pub const DEFAULT_THRESHOLD: u32 = 1 << 20;

/// Mine `block` against `threshold`, returning the satisfying hash.
///
/// Records the threshold on the block, then scans nonces exhaustively from 0
/// until the FNV-1a hash of the block's canonical image is at or below the
/// threshold. The scan is deterministic: re-mining an unchanged block finds
/// the same nonce and hash. Unbounded in the worst case; expected iterations
/// are about 2^32 / threshold.
///
/// The caller invokes this on the block that is about to serve as a
/// predecessor, so an already-appended block's nonce and threshold are
/// rewritten each time a successor references it.
pub fn mine(block: &mut Block, threshold: u32) -> Hash {
    block.threshold = threshold;
    block.nonce = 0;
    loop {
        let hash = fnv1a(&block.to_bytes());
        if hash.meets(threshold) {
            debug!(index = block.index, nonce = block.nonce, %hash, "nonce search finished");
            return hash;
        }
        block.nonce += 1;
    }
}
