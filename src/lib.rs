//! Merkle Commit: Merkle roots and inclusion proofs over byte strings
//!
//! Commits to an ordered collection of byte strings with a single SHA-256 root,
//! produces inclusion proofs for individual items, and verifies a proof using only the
//! item, the root and the proof.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod proof;
pub mod tree;
pub mod types;

pub use api::{build_tree, generate_proof, verify_proof};
pub use proof::{Proof, ProofSlot};
pub use tree::builder::{Tree, TreeBuilder};
pub use types::Digest;
