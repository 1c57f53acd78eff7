//! Integration tests for tree structure correctness

use merkle_commit::tree::builder::TreeBuilder;
use merkle_commit::tree::node::MerkleNode;

fn leaf_depths(node: &MerkleNode, depth: usize, out: &mut Vec<(usize, bool)>) {
    match node {
        MerkleNode::Leaf(leaf) => out.push((depth, leaf.is_padding())),
        MerkleNode::Internal(inner) => {
            leaf_depths(&inner.left, depth + 1, out);
            leaf_depths(&inner.right, depth + 1, out);
        }
    }
}

/// Test that all leaves sit at the same depth and padding fills the gap
#[test]
fn test_balanced_with_padding() {
    for n in 1..=17usize {
        let items: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        let tree = TreeBuilder::new().build(&items).unwrap();

        let mut leaves = Vec::new();
        leaf_depths(tree.root(), 0, &mut leaves);

        assert_eq!(leaves.len(), n.next_power_of_two());
        assert_eq!(leaves.len(), tree.leaf_count());
        assert!(leaves.iter().all(|(d, _)| *d == tree.depth()));

        let padding = leaves.iter().filter(|(_, pad)| *pad).count();
        assert_eq!(padding, n.next_power_of_two() - n);
    }
}

/// Test that every internal digest is the sorted combination of its children
#[test]
fn test_internal_digests_consistent() {
    fn check(node: &MerkleNode) {
        if let MerkleNode::Internal(inner) = node {
            let expected = merkle_commit::tree::hasher::combine(
                &inner.left.digest(),
                &inner.right.digest(),
            );
            assert_eq!(node.digest(), expected);
            check(&inner.left);
            check(&inner.right);
        }
    }
    let tree = TreeBuilder::new().build(&["q", "w", "e", "r", "t", "y"]).unwrap();
    check(tree.root());
}

/// Test that real items keep their input order among the leaves
#[test]
fn test_items_present_once() {
    let items = ["one", "two", "three", "four", "five"];
    let tree = TreeBuilder::new().build(&items).unwrap();

    fn collect(node: &MerkleNode, out: &mut Vec<Vec<u8>>) {
        match node {
            MerkleNode::Leaf(leaf) => {
                if let Some(content) = &leaf.content {
                    out.push(content.clone());
                }
            }
            MerkleNode::Internal(inner) => {
                collect(&inner.left, out);
                collect(&inner.right, out);
            }
        }
    }
    let mut contents = Vec::new();
    collect(tree.root(), &mut contents);
    contents.sort();

    let mut expected: Vec<Vec<u8>> = items.iter().map(|s| s.as_bytes().to_vec()).collect();
    expected.sort();
    assert_eq!(contents, expected);
}
