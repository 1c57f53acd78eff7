//! Proof generation: walk a built tree toward the leaf holding an item

use crate::proof::{Proof, ProofSlot};
use crate::tree::builder::Tree;
use crate::tree::hasher;
use crate::tree::node::{LeafNode, MerkleNode};
use crate::types::Digest;
use tracing::{debug, instrument};

/// Produce an inclusion proof for `item`, or `None` if the tree does not commit to it.
///
/// Only leaves carrying real content can match; padding leaves never do. With
/// duplicate items the left subtree is searched first, so the proof follows the
/// left-most occurrence.
#[instrument(skip_all, fields(item_len = item.len(), leaf_count = tree.leaf_count()))]
pub fn generate(item: &[u8], tree: &Tree) -> Option<Proof> {
    let target = hasher::digest(item);

    let proof = match tree.root() {
        MerkleNode::Leaf(leaf) => is_match(leaf, &target).then_some(Proof::Root),
        MerkleNode::Internal(_) => search(tree.root(), &target),
    };

    match &proof {
        Some(p) => debug!(depth = p.depth(), "Inclusion proof generated"),
        None => debug!(target = %target, "Item not committed to by tree"),
    }
    proof
}

fn is_match(leaf: &LeafNode, target: &Digest) -> bool {
    !leaf.is_padding() && leaf.digest() == *target
}

/// Search below an internal node. Depth is bounded by the tree height.
fn search(node: &MerkleNode, target: &Digest) -> Option<Proof> {
    let MerkleNode::Internal(inner) = node else {
        return None;
    };

    match (inner.left.as_ref(), inner.right.as_ref()) {
        (MerkleNode::Leaf(left), MerkleNode::Leaf(right)) => {
            if is_match(left, target) {
                Some(Proof::Sibling(right.digest()))
            } else if is_match(right, target) {
                Some(Proof::Sibling(left.digest()))
            } else {
                None
            }
        }
        (left, right) => {
            if let Some(sub) = search(left, target) {
                Some(Proof::Branch(
                    ProofSlot::Path(Box::new(sub)),
                    ProofSlot::Digest(right.digest()),
                ))
            } else {
                search(right, target).map(|sub| {
                    Proof::Branch(
                        ProofSlot::Digest(left.digest()),
                        ProofSlot::Path(Box::new(sub)),
                    )
                })
            }
        }
    }
}
