//! Tree node types

use crate::tree::hasher;
use crate::types::Digest;

/// Node in a commitment tree
///
/// Each node caches its digest when it is created; nodes are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleNode {
    Leaf(LeafNode),
    Internal(InternalNode),
}

/// A single item, or a padding placeholder when `content` is `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub content: Option<Vec<u8>>,
    digest: Digest,
}

/// Two children combined with the sorted-pair hash
///
/// `left` and `right` record construction order only. They do not affect the digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalNode {
    pub left: Box<MerkleNode>,
    pub right: Box<MerkleNode>,
    digest: Digest,
}

impl LeafNode {
    pub fn item(content: Vec<u8>) -> Self {
        let digest = hasher::digest(&content);
        Self {
            content: Some(content),
            digest,
        }
    }

    pub fn padding() -> Self {
        Self {
            content: None,
            digest: hasher::empty_digest(),
        }
    }

    pub fn is_padding(&self) -> bool {
        self.content.is_none()
    }

    pub fn digest(&self) -> Digest {
        self.digest
    }
}

impl InternalNode {
    pub fn new(left: MerkleNode, right: MerkleNode) -> Self {
        let digest = hasher::combine(&left.digest(), &right.digest());
        Self {
            left: Box::new(left),
            right: Box::new(right),
            digest,
        }
    }

    pub fn digest(&self) -> Digest {
        self.digest
    }
}

impl MerkleNode {
    pub fn digest(&self) -> Digest {
        match self {
            MerkleNode::Leaf(leaf) => leaf.digest(),
            MerkleNode::Internal(node) => node.digest(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, MerkleNode::Leaf(_))
    }
}

impl From<LeafNode> for MerkleNode {
    fn from(leaf: LeafNode) -> Self {
        MerkleNode::Leaf(leaf)
    }
}

impl From<InternalNode> for MerkleNode {
    fn from(node: InternalNode) -> Self {
        MerkleNode::Internal(node)
    }
}
