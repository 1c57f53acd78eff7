//! Integration tests for tree building determinism

use merkle_commit::tree::builder::TreeBuilder;
use merkle_commit::tree::hasher;

/// Test that the same items produce the same root
#[test]
fn test_same_items_same_root() {
    let items = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let builder = TreeBuilder::new();
    let root1 = builder.build(&items).unwrap().root_digest();
    let root2 = builder.build(&items).unwrap().root_digest();
    assert_eq!(root1, root2);
}

/// Test that changing an item changes the root
#[test]
fn test_item_change_different_root() {
    let builder = TreeBuilder::new();
    let root1 = builder.build(&["a", "b", "c"]).unwrap().root_digest();
    let root2 = builder.build(&["a", "b", "d"]).unwrap().root_digest();
    assert_ne!(root1, root2);
}

/// Test that adding an item changes the root
#[test]
fn test_item_addition_different_root() {
    let builder = TreeBuilder::new();
    let root1 = builder.build(&["a", "b"]).unwrap().root_digest();
    let root2 = builder.build(&["a", "b", "c"]).unwrap().root_digest();
    assert_ne!(root1, root2);
}

/// Swapping two items inside the same pair keeps the root
#[test]
fn test_swap_within_pair_same_root() {
    let builder = TreeBuilder::new();
    let root1 = builder.build(&["a", "b", "c", "d"]).unwrap().root_digest();
    let root2 = builder.build(&["b", "a", "c", "d"]).unwrap().root_digest();
    let root3 = builder.build(&["c", "d", "a", "b"]).unwrap().root_digest();
    assert_eq!(root1, root2);
    assert_eq!(root1, root3);
}

/// Moving an item to a different pair changes the grouping and the root
#[test]
fn test_regrouping_different_root() {
    let builder = TreeBuilder::new();
    let root1 = builder.build(&["a", "b", "c", "d"]).unwrap().root_digest();
    let root2 = builder.build(&["a", "c", "b", "d"]).unwrap().root_digest();
    assert_ne!(root1, root2);
}

/// The empty collection commits to the padding digest
#[test]
fn test_empty_set_commitment() {
    let items: Vec<String> = Vec::new();
    let tree = TreeBuilder::new().build(&items).unwrap();
    assert_eq!(tree.root_digest(), hasher::digest(b"empty"));
    assert_eq!(
        tree.root_digest().to_hex(),
        "2e1cfa82b035c26cbbbdae632cea070514eb8b773f616aaeaf668e2f0be8f10d"
    );
}
