//! Integration tests for Merkle commitments, proofs and verification

mod proof_roundtrip;
mod tree_determinism;
mod tree_structure;
mod wire_format;
