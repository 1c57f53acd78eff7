//! Commitment APIs
//!
//! Stateless entry points for callers: build a tree, prove an item, verify a proof.

use crate::error::TreeError;
use crate::proof::{self, Proof};
use crate::tree::builder::{Tree, TreeBuilder};
use crate::types::Digest;

/// Commit to `items` in order. Returns the root digest and the tree for later proving.
pub fn build_tree<I>(items: &[I]) -> Result<(Digest, Tree), TreeError>
where
    I: AsRef<[u8]>,
{
    let tree = TreeBuilder::new().build(items)?;
    Ok((tree.root_digest(), tree))
}

/// Inclusion proof for `item`, or `None` when the tree does not commit to it
pub fn generate_proof(item: &[u8], tree: &Tree) -> Option<Proof> {
    proof::generate(item, tree)
}

/// Whether `proof` shows that `root_digest` commits to `item`
pub fn verify_proof(item: &[u8], root_digest: &Digest, proof: Option<&Proof>) -> bool {
    proof::verify(item, root_digest, proof)
}
