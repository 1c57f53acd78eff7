//! Hash computation for leaves and internal nodes using SHA-256

use crate::types::Digest;
use sha2::{Digest as _, Sha256};

/// Content hashed in place of a padding leaf
pub const EMPTY_SENTINEL: &[u8] = b"empty";

/// Separator placed between the two hex digests of an internal node
pub const PAIR_SEPARATOR: &str = ":";

/// Compute the digest of arbitrary bytes.
///
/// Unkeyed and stateless; a fresh hasher is used for every call.
pub fn digest(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Digest::new(hasher.finalize().into())
}

/// Digest of a padding leaf, also the root of the empty collection
pub fn empty_digest() -> Digest {
    digest(EMPTY_SENTINEL)
}

/// Digest of the leaf holding `content`, or of a padding leaf when `None`
pub fn leaf_digest(content: Option<&[u8]>) -> Digest {
    match content {
        Some(bytes) => digest(bytes),
        None => empty_digest(),
    }
}

/// Compute the parent digest of two children.
///
/// parent = sha256(lower_hex || ":" || higher_hex)
///
/// The pair is sorted first, so `combine(a, b) == combine(b, a)`. Position is not
/// committed to; only the grouping of leaves is.
pub fn combine(a: &Digest, b: &Digest) -> Digest {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let mut hasher = Sha256::new();
    hasher.update(lo.to_hex().as_bytes());
    hasher.update(PAIR_SEPARATOR.as_bytes());
    hasher.update(hi.to_hex().as_bytes());
    Digest::new(hasher.finalize().into())
}
