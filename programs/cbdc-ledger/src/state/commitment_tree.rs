use std::collections::HashSet;

use aegis_primitives::FieldElement;
use serde::{Deserialize, Serialize};

/// Default height of the commitment merkle tree (2^32 leaves).
pub const DEFAULT_TREE_HEIGHT: u8 = 32;

/// Largest supported height; leaf indexes must fit in a `u64` with room to
/// spare for the capacity computation.
pub const MAX_TREE_HEIGHT: u8 = 32;

/// How many past roots stay acceptable for membership proofs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootHistoryPolicy {
    /// Every root ever produced stays known.
    #[default]
    Unbounded,
    /// Circular buffer of the most recent `n` roots.
    Window(usize),
}

/// Roots produced by the accumulator, oldest first.
#[derive(Clone, Debug)]
pub enum RootHistory {
    /// Append-only list with a membership index.
    Unbounded {
        /// Every root, in production order.
        roots: Vec<FieldElement>,
        /// Membership index over `roots`.
        index: HashSet<FieldElement>,
    },
    /// Circular buffer of fixed size.
    Window {
        /// Buffer slots; unused slots hold the zero root.
        roots: Vec<FieldElement>,
        /// Slot holding the latest root.
        root_index: usize,
        /// Number of roots pushed so far.
        pushed: u64,
    },
}

impl RootHistory {
    /// Empty history for `policy`. A zero-sized window is treated as one slot.
    pub fn new(policy: RootHistoryPolicy) -> Self {
        match policy {
            RootHistoryPolicy::Unbounded => RootHistory::Unbounded {
                roots: Vec::new(),
                index: HashSet::new(),
            },
            RootHistoryPolicy::Window(size) => RootHistory::Window {
                roots: vec![FieldElement::ZERO; size.max(1)],
                root_index: 0,
                pushed: 0,
            },
        }
    }

    /// Records a newly produced root.
    pub fn push(&mut self, root: FieldElement) {
        match self {
            RootHistory::Unbounded { roots, index } => {
                roots.push(root);
                index.insert(root);
            }
            RootHistory::Window {
                roots,
                root_index,
                pushed,
            } => {
                if *pushed > 0 {
                    *root_index = (*root_index + 1) % roots.len();
                }
                roots[*root_index] = root;
                *pushed += 1;
            }
        }
    }

    /// Returns true if `root` is still acceptable. The zero root never is.
    pub fn contains(&self, root: &FieldElement) -> bool {
        if root.is_zero() {
            return false;
        }
        match self {
            RootHistory::Unbounded { index, .. } => index.contains(root),
            RootHistory::Window {
                roots, root_index, ..
            } => {
                let size = roots.len();
                // Search backwards through the circular buffer
                (0..size).any(|offset| roots[(root_index + size - offset) % size] == *root)
            }
        }
    }

    /// Number of roots currently retained.
    pub fn len(&self) -> usize {
        match self {
            RootHistory::Unbounded { roots, .. } => roots.len(),
            RootHistory::Window { roots, pushed, .. } => {
                usize::try_from(*pushed).map_or(roots.len(), |p| p.min(roots.len()))
            }
        }
    }

    /// Returns true before the first push.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retained roots, oldest first.
    pub fn roots(&self) -> Vec<FieldElement> {
        match self {
            RootHistory::Unbounded { roots, .. } => roots.clone(),
            RootHistory::Window {
                roots, root_index, ..
            } => {
                let size = roots.len();
                let retained = self.len();
                (0..retained)
                    .rev()
                    .map(|offset| roots[(root_index + size - offset) % size])
                    .collect()
            }
        }
    }
}

/// Incremental merkle frontier: the left siblings still needed to extend
/// the tree to the right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frontier {
    /// Next index for insertion. Starts at 0 (no genesis leaf).
    pub next_index: u64,
    /// Subtree hashes for incremental merkle tree
    pub subtrees: Vec<FieldElement>,
}

/// Commitment merkle tree state.
///
/// Standard append-only tree: `next_index` starts at 0 and the first
/// commitment is inserted at index 0. Capacity is `2^height`.
#[derive(Clone, Debug)]
pub struct CommitmentMerkleTree {
    /// Tree height (constant after init)
    pub height: u8,
    /// Current root of the tree
    pub root: FieldElement,
    /// Insertion frontier
    pub frontier: Frontier,
    /// Empty subtree hash per level, `zeros[0]` is the empty leaf
    pub zeros: Vec<FieldElement>,
    /// History of past roots for proof verification
    pub root_history: RootHistory,
}

impl CommitmentMerkleTree {
    /// Uninitialized tree; see [`crate::merkle_tree::MerkleTree::initialize`].
    pub fn new(height: u8, policy: RootHistoryPolicy) -> Self {
        Self {
            height,
            root: FieldElement::ZERO,
            frontier: Frontier {
                next_index: 0,
                subtrees: vec![FieldElement::ZERO; height as usize],
            },
            zeros: vec![FieldElement::ZERO; height as usize + 1],
            root_history: RootHistory::new(policy),
        }
    }

    /// Maximum number of leaves.
    pub fn capacity(&self) -> u64 {
        1u64 << self.height
    }

    /// Number of leaves inserted so far.
    pub fn len(&self) -> u64 {
        self.frontier.next_index
    }

    /// Returns true before the first insertion.
    pub fn is_empty(&self) -> bool {
        self.frontier.next_index == 0
    }

    /// Free leaf slots.
    pub fn remaining_capacity(&self) -> u64 {
        self.capacity().saturating_sub(self.frontier.next_index)
    }
}
