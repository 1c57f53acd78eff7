//! Proof verification: fold a proof back into a root digest

use crate::proof::{Proof, ProofSlot};
use crate::tree::hasher;
use crate::types::Digest;
use tracing::{debug, instrument};

/// Check that `proof` ties `item` to `root`.
///
/// Uses only the item, the claimed root and the proof. A missing or malformed proof
/// is a `false` result, never an error.
#[instrument(skip_all, fields(item_len = item.len(), root = %root))]
pub fn verify(item: &[u8], root: &Digest, proof: Option<&Proof>) -> bool {
    let Some(proof) = proof else {
        debug!("No proof supplied");
        return false;
    };
    if let Err(e) = proof.check_shape() {
        debug!(error = %e, "Rejected malformed proof");
        return false;
    }

    let leaf = hasher::digest(item);
    let recomputed = fold(proof, &leaf);
    let verified = recomputed == *root;
    debug!(recomputed = %recomputed, verified, "Proof folded");
    verified
}

/// Parse a JSON proof and verify it. Parse failures verify as `false`.
pub fn verify_json(item: &[u8], root: &Digest, json: &str) -> bool {
    match Proof::from_json(json) {
        Ok(proof) => verify(item, root, Some(&proof)),
        Err(e) => {
            debug!(error = %e, "Rejected unparseable proof");
            false
        }
    }
}

/// Recompute the digest a proof commits to. Shape is checked by the caller.
fn fold(proof: &Proof, leaf: &Digest) -> Digest {
    match proof {
        Proof::Root => *leaf,
        Proof::Sibling(sibling) => hasher::combine(leaf, sibling),
        Proof::Branch(a, b) => hasher::combine(&fold_slot(a, leaf), &fold_slot(b, leaf)),
    }
}

fn fold_slot(slot: &ProofSlot, leaf: &Digest) -> Digest {
    match slot {
        ProofSlot::Digest(digest) => *digest,
        ProofSlot::Path(inner) => fold(inner, leaf),
    }
}
