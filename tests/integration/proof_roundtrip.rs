//! Integration tests for proof generation and verification

use merkle_commit::{build_tree, generate_proof, verify_proof};

fn words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("word-{}", i)).collect()
}

/// Every committed item verifies against the root, for many tree sizes
#[test]
fn test_every_item_roundtrips() {
    for n in 1..=33 {
        let items = words(n);
        let (root, tree) = build_tree(&items).unwrap();
        for item in &items {
            let proof = generate_proof(item.as_bytes(), &tree);
            assert!(proof.is_some(), "no proof for {} in {} items", item, n);
            assert!(
                verify_proof(item.as_bytes(), &root, proof.as_ref()),
                "{} failed in {} items",
                item,
                n
            );
        }
    }
}

/// Proof depth equals tree depth
#[test]
fn test_proof_depth_matches_tree() {
    let items = words(13);
    let (_, tree) = build_tree(&items).unwrap();
    assert_eq!(tree.leaf_count(), 16);
    for item in &items {
        let proof = generate_proof(item.as_bytes(), &tree).unwrap();
        assert_eq!(proof.depth(), tree.depth());
    }
}

/// Items never committed get no proof
#[test]
fn test_absent_item_has_no_proof() {
    let (_, tree) = build_tree(&words(10)).unwrap();
    assert!(generate_proof(b"word-10", &tree).is_none());
    assert!(generate_proof(b"", &tree).is_none());
    assert!(generate_proof(b"empty", &tree).is_none());
}

/// A proof for one item does not verify another
#[test]
fn test_proof_bound_to_item() {
    let items = words(8);
    let (root, tree) = build_tree(&items).unwrap();
    let proof = generate_proof(b"word-3", &tree);
    for other in items.iter().filter(|w| w.as_str() != "word-3") {
        assert!(!verify_proof(other.as_bytes(), &root, proof.as_ref()));
    }
}

/// A proof from one tree does not verify against another tree's root
#[test]
fn test_proof_bound_to_root() {
    let (_, tree_a) = build_tree(&["a", "b", "c", "d"]).unwrap();
    let (root_b, _) = build_tree(&["a", "b", "c", "e"]).unwrap();
    let proof = generate_proof(b"a", &tree_a);
    assert!(!verify_proof(b"a", &root_b, proof.as_ref()));
}

/// The concrete three-item scenario
#[test]
fn test_abc_scenario() {
    let items = vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()];
    let (root, tree) = build_tree(&items).unwrap();
    assert_eq!(tree.leaf_count(), 4);

    let proof = generate_proof(b"b", &tree);
    assert!(verify_proof(b"b", &root, proof.as_ref()));
    assert!(!verify_proof(b"z", &root, proof.as_ref()));
}

/// Nothing is provable against the empty-set commitment
#[test]
fn test_empty_set_not_provable() {
    let items: Vec<&str> = Vec::new();
    let (root, tree) = build_tree(&items).unwrap();
    for candidate in ["", "empty", "a"] {
        assert!(generate_proof(candidate.as_bytes(), &tree).is_none());
        assert!(!verify_proof(candidate.as_bytes(), &root, None));
    }
}

/// Duplicate items are all provable through one path
#[test]
fn test_duplicates() {
    let items = ["x", "dup", "y", "z", "dup"];
    let (root, tree) = build_tree(&items).unwrap();
    let proof = generate_proof(b"dup", &tree);
    assert!(verify_proof(b"dup", &root, proof.as_ref()));
}
