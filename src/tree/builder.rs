//! Tree builder for constructing commitment trees from ordered items

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::tree::hasher;
use crate::tree::node::{InternalNode, LeafNode, MerkleNode};
use crate::types::Digest;
use std::time::Instant;
use tracing::{debug, error, info, instrument, trace};

/// Complete commitment tree
///
/// Holds the root node; every real leaf sits at the same depth.
#[derive(Debug, Clone)]
pub struct Tree {
    root: MerkleNode,
    item_count: usize,
    leaf_count: usize,
}

impl Tree {
    pub fn root(&self) -> &MerkleNode {
        &self.root
    }

    /// Digest of the root node, the published commitment
    pub fn root_digest(&self) -> Digest {
        self.root.digest()
    }

    /// Number of real items committed to
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of leaves after padding (a power of two, or 1 for the empty tree)
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of internal levels between the leaves and the root
    pub fn depth(&self) -> usize {
        self.leaf_count.trailing_zeros() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Tree builder for constructing commitment trees
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: TreeConfig,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply tree settings (item limit)
    pub fn with_config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the tree over `items`, preserving their order.
    ///
    /// An empty input yields a single padding leaf. Otherwise the leaves are padded to
    /// the next power of two and folded level by level into one root.
    #[instrument(skip_all, fields(item_count = items.len()))]
    pub fn build<I>(&self, items: &[I]) -> Result<Tree, TreeError>
    where
        I: AsRef<[u8]>,
    {
        let start = Instant::now();
        let item_count = items.len();

        if let Some(limit) = self.config.max_items {
            if item_count > limit {
                error!(limit, "Item limit exceeded");
                return Err(TreeError::TooManyItems {
                    count: item_count,
                    limit,
                });
            }
        }

        if items.is_empty() {
            debug!("Empty input, committing to the empty sentinel");
            return Ok(Tree {
                root: LeafNode::padding().into(),
                item_count: 0,
                leaf_count: 1,
            });
        }

        let leaf_count = item_count
            .checked_next_power_of_two()
            .ok_or(TreeError::LeafCountOverflow(item_count))?;

        // Step 1: one leaf per item, then padding
        let mut level: Vec<MerkleNode> = Vec::with_capacity(leaf_count);
        level.extend(
            items
                .iter()
                .map(|item| MerkleNode::from(LeafNode::item(item.as_ref().to_vec()))),
        );
        level.resize_with(leaf_count, || LeafNode::padding().into());
        trace!(
            leaf_count,
            padding = leaf_count - item_count,
            "Created leaf level"
        );

        // Step 2: fold levels until one node remains
        while level.len() > 1 {
            level = fold_level(level);
            trace!(width = level.len(), "Folded level");
        }

        let root = match level.pop() {
            Some(root) => root,
            None => return Err(TreeError::LeafCountOverflow(item_count)),
        };

        info!(
            item_count,
            leaf_count,
            root = %root.digest(),
            duration_ms = start.elapsed().as_millis(),
            "Tree build completed"
        );

        Ok(Tree {
            root,
            item_count,
            leaf_count,
        })
    }

    /// Compute the root digest only.
    ///
    /// Same result as `build(items)?.root_digest()` without keeping any nodes.
    pub fn compute_root<I>(&self, items: &[I]) -> Result<Digest, TreeError>
    where
        I: AsRef<[u8]>,
    {
        if let Some(limit) = self.config.max_items {
            if items.len() > limit {
                return Err(TreeError::TooManyItems {
                    count: items.len(),
                    limit,
                });
            }
        }
        if items.is_empty() {
            return Ok(hasher::empty_digest());
        }

        let leaf_count = items
            .len()
            .checked_next_power_of_two()
            .ok_or(TreeError::LeafCountOverflow(items.len()))?;
        let mut level: Vec<Digest> = items.iter().map(|i| hasher::digest(i.as_ref())).collect();
        level.resize(leaf_count, hasher::empty_digest());

        while level.len() > 1 {
            level = level
                .chunks_exact(2)
                .map(|pair| hasher::combine(&pair[0], &pair[1]))
                .collect();
        }
        Ok(level[0])
    }
}

/// Pair up one level into the next.
///
/// The level is consumed from its end two nodes at a time: the first node taken is
/// the left child, the second the right. The level width must be even.
fn fold_level(mut level: Vec<MerkleNode>) -> Vec<MerkleNode> {
    let mut next = Vec::with_capacity(level.len() / 2);
    while let (Some(left), Some(right)) = (level.pop(), level.pop()) {
        next.push(InternalNode::new(left, right).into());
    }
    next
}
