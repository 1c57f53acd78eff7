//! Commitment Tree
//!
//! Binary Merkle tree over an ordered list of items. Leaves are padded to a power of
//! two and each internal node hashes its children's digests in sorted order.

pub mod builder;
pub mod hasher;
pub mod node;
