//! CLI presentation: text and json formatters per command.

use crate::error::ApiError;
use crate::proof::Proof;
use crate::tree::builder::Tree;
use crate::types::Digest;
use owo_colors::OwoColorize;

pub fn format_root_text(tree: &Tree) -> String {
    tree.root_digest().to_hex()
}

pub fn format_root_json(tree: &Tree) -> Result<String, ApiError> {
    let out = serde_json::json!({
        "root": tree.root_digest(),
        "items": tree.item_count(),
        "leaves": tree.leaf_count(),
        "depth": tree.depth(),
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Proof as JSON, or `null` when there is none
pub fn format_proof(proof: Option<&Proof>) -> Result<String, ApiError> {
    Ok(serde_json::to_string(&proof)?)
}

pub fn format_verification(verified: bool) -> String {
    verified.to_string()
}

pub fn format_demo_intro(sample: &str, root: &Digest) -> String {
    format!(
        "Here is a sample of text:\n{}\n*************\n\
         Here is a merkle root that commits to the sample: {}\n\
         Type a word. If it's in the sample, you get a merkle inclusion proof.",
        sample,
        root.bold()
    )
}

pub fn format_demo_result(proof: Option<&Proof>, verified: bool) -> Result<String, ApiError> {
    let verdict = if verified {
        "true".green().to_string()
    } else {
        "false".red().to_string()
    };
    Ok(format!(
        "Here's your merkle proof:\n{}\n*************\n\
         Item is committed to by the merkle root: {}",
        format_proof(proof)?,
        verdict
    ))
}
