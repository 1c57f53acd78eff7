//! Inclusion Proofs
//!
//! A proof is the nested list of sibling digests on the path from an item's leaf to
//! the root. On the wire it is JSON:
//!
//! - `[]`: the item's leaf is the root (single-item tree)
//! - `["<sibling>"]`: the level where the item's leaf meets its sibling leaf
//! - `[<a>, <b>]`: an ancestor level; the slot that continues toward the item is a
//!   nested array, the other slot is a plain digest string
//!
//! The proof never contains the item itself.

pub mod generate;
pub mod verify;

use crate::error::ProofError;
use crate::types::Digest;
use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use generate::generate;
pub use verify::{verify, verify_json};

/// Deepest proof accepted; no buildable tree has more levels
pub const MAX_PROOF_DEPTH: usize = 64;

/// Inclusion proof for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proof {
    /// The item's leaf is the root
    Root,
    /// Digest of the sibling leaf at the lowest level
    Sibling(Digest),
    /// One ancestor level; at least one slot is a `Path`
    Branch(ProofSlot, ProofSlot),
}

/// One position of a branch level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofSlot {
    /// Full digest of a subtree that does not contain the item
    Digest(Digest),
    /// The remainder of the path toward the item
    Path(Box<Proof>),
}

impl Proof {
    /// Number of sibling levels between the item's leaf and the root
    pub fn depth(&self) -> usize {
        match self {
            Proof::Root => 0,
            Proof::Sibling(_) => 1,
            Proof::Branch(a, b) => 1 + a.depth().max(b.depth()),
        }
    }

    /// Check that the proof can be folded back into a root.
    ///
    /// Every branch must descend toward the item, `Root` may only appear at the top,
    /// and nesting is bounded by `MAX_PROOF_DEPTH`.
    pub fn check_shape(&self) -> Result<(), ProofError> {
        let mut stack: Vec<(&Proof, usize)> = vec![(self, 0)];

        while let Some((proof, level)) = stack.pop() {
            if level >= MAX_PROOF_DEPTH {
                return Err(ProofError::TooDeep {
                    depth: level + 1,
                    limit: MAX_PROOF_DEPTH,
                });
            }
            match proof {
                Proof::Root if level > 0 => {
                    return Err(ProofError::MalformedProof(
                        "empty level nested inside a branch".to_string(),
                    ));
                }
                Proof::Root | Proof::Sibling(_) => {}
                Proof::Branch(a, b) => {
                    let mut descends = false;
                    for slot in [a, b] {
                        if let ProofSlot::Path(inner) = slot {
                            descends = true;
                            stack.push((&**inner, level + 1));
                        }
                    }
                    if !descends {
                        return Err(ProofError::MalformedProof(
                            "branch holds two digests and no path toward the item".to_string(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ProofError> {
        serde_json::to_string(self).map_err(|e| ProofError::MalformedProof(e.to_string()))
    }

    /// Parse a proof from JSON and check its shape
    pub fn from_json(json: &str) -> Result<Self, ProofError> {
        let proof: Proof =
            serde_json::from_str(json).map_err(|e| ProofError::MalformedProof(e.to_string()))?;
        proof.check_shape()?;
        Ok(proof)
    }
}

impl ProofSlot {
    fn depth(&self) -> usize {
        match self {
            ProofSlot::Digest(_) => 0,
            ProofSlot::Path(inner) => inner.depth(),
        }
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl Serialize for Proof {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Proof::Root => serializer.serialize_seq(Some(0))?.end(),
            Proof::Sibling(digest) => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(digest)?;
                seq.end()
            }
            Proof::Branch(a, b) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(a)?;
                seq.serialize_element(b)?;
                seq.end()
            }
        }
    }
}

impl Serialize for ProofSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProofSlot::Digest(digest) => digest.serialize(serializer),
            ProofSlot::Path(inner) => inner.serialize(serializer),
        }
    }
}

struct ProofVisitor;

impl<'de> Visitor<'de> for ProofVisitor {
    type Value = Proof;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a proof array of zero, one or two elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Proof, A::Error> {
        let first: Option<ProofSlot> = seq.next_element()?;
        let second: Option<ProofSlot> = match first {
            Some(_) => seq.next_element()?,
            None => None,
        };
        if second.is_some() && seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }

        match (first, second) {
            (None, _) => Ok(Proof::Root),
            (Some(ProofSlot::Digest(digest)), None) => Ok(Proof::Sibling(digest)),
            (Some(ProofSlot::Path(_)), None) => Err(de::Error::custom(
                "single-element proof level must hold a digest",
            )),
            (Some(a), Some(b)) => Ok(Proof::Branch(a, b)),
        }
    }
}

impl<'de> Deserialize<'de> for Proof {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ProofVisitor)
    }
}

struct ProofSlotVisitor;

impl<'de> Visitor<'de> for ProofSlotVisitor {
    type Value = ProofSlot;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex digest string or a nested proof array")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<ProofSlot, E> {
        Digest::from_hex(value)
            .map(ProofSlot::Digest)
            .map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<ProofSlot, A::Error> {
        ProofVisitor
            .visit_seq(seq)
            .map(|inner| ProofSlot::Path(Box::new(inner)))
    }
}

impl<'de> Deserialize<'de> for ProofSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ProofSlotVisitor)
    }
}
