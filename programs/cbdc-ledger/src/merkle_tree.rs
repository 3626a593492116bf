//! Fixed-height append-only commitment accumulator with a root history ring.

use aegis_primitives::{AccumulatorHasher, FieldElement};
use tracing::warn;

use crate::errors::LedgerError;
use crate::state::{
    CommitmentMerkleTree, Frontier, MAX_TREE_HEIGHT, RootHistory, RootHistoryPolicy,
};

/// Standard append-only merkle tree operations for the commitment tree.
///
/// The tree has no genesis sentinel leaf. `next_index` starts at 0 after
/// initialization, and the first commitment is inserted at index 0.
pub struct MerkleTree;

impl MerkleTree {
    /// Initialize the commitment merkle tree with zero values.
    ///
    /// After initialization:
    /// - `zeros[0] = 0`, `zeros[i + 1] = hash(zeros[i], zeros[i])`
    /// - `root` = zero hash at tree height
    /// - the initial root is the first entry of the root history
    pub fn initialize<H: AccumulatorHasher>(
        tree: &mut CommitmentMerkleTree,
        hasher: &H,
    ) -> Result<(), LedgerError> {
        let height = tree.height as usize;

        let mut zeros = Vec::with_capacity(height + 1);
        zeros.push(FieldElement::ZERO);
        for i in 0..height {
            zeros.push(Self::hash(hasher, &zeros[i], &zeros[i])?);
        }

        tree.frontier = Frontier {
            next_index: 0,
            subtrees: zeros[..height].to_vec(),
        };
        tree.root = zeros[height];
        tree.zeros = zeros;
        tree.root_history.push(tree.root);

        Ok(())
    }

    /// Appends `leaf` to `frontier` and returns the new root.
    ///
    /// Only the frontier is touched, so a caller can stage several appends
    /// on a copy and commit them together.
    pub fn append<H: AccumulatorHasher>(
        leaf: FieldElement,
        frontier: &mut Frontier,
        zeros: &[FieldElement],
        hasher: &H,
    ) -> Result<FieldElement, LedgerError> {
        let height = frontier.subtrees.len();

        let max_capacity = 1u64 << height;
        if frontier.next_index >= max_capacity {
            return Err(LedgerError::TreeFull);
        }

        let mut current_index = frontier.next_index;
        let mut current_level_hash = leaf;

        for (i, subtree) in frontier.subtrees.iter_mut().enumerate() {
            let (left, right) = if current_index % 2 == 0 {
                *subtree = current_level_hash;
                (current_level_hash, zeros[i])
            } else {
                (*subtree, current_level_hash)
            };
            current_level_hash = Self::hash(hasher, &left, &right)?;
            current_index /= 2;
        }

        frontier.next_index += 1;
        Ok(current_level_hash)
    }

    /// Returns true if `root` is in the tree's root history.
    pub fn is_known_root(tree: &CommitmentMerkleTree, root: &FieldElement) -> bool {
        tree.root_history.contains(root)
    }

    fn hash<H: AccumulatorHasher>(
        hasher: &H,
        left: &FieldElement,
        right: &FieldElement,
    ) -> Result<FieldElement, LedgerError> {
        hasher.hash(left, right).map_err(|e| {
            warn!(error = %e, "merkle hash error");
            LedgerError::HashFailed
        })
    }
}

/// Append-only commitment accumulator with root history.
///
/// Identical insertion sequences always produce identical root histories.
#[derive(Clone, Debug)]
pub struct CommitmentAccumulator<H: AccumulatorHasher> {
    hasher: H,
    tree: CommitmentMerkleTree,
}

impl<H: AccumulatorHasher> CommitmentAccumulator<H> {
    /// Empty accumulator of the given height.
    ///
    /// # Errors
    /// [`LedgerError::InvalidConfig`] if `height` is 0 or above
    /// [`MAX_TREE_HEIGHT`].
    pub fn new(height: u8, policy: RootHistoryPolicy, hasher: H) -> Result<Self, LedgerError> {
        if height == 0 || height > MAX_TREE_HEIGHT {
            return Err(LedgerError::InvalidConfig);
        }
        let mut tree = CommitmentMerkleTree::new(height, policy);
        MerkleTree::initialize(&mut tree, &hasher)?;
        Ok(Self { hasher, tree })
    }

    /// Inserts one commitment and returns the new root.
    ///
    /// # Errors
    /// [`LedgerError::TreeFull`] when capacity is exhausted.
    pub fn insert(&mut self, cm: FieldElement) -> Result<FieldElement, LedgerError> {
        self.insert_all(&[cm])?;
        Ok(self.tree.root)
    }

    /// Inserts `leaves` in order as one unit and returns the root produced
    /// by each insertion.
    ///
    /// Either every leaf is inserted (and every intermediate root enters the
    /// history) or the accumulator is left unchanged.
    ///
    /// # Errors
    /// [`LedgerError::TreeFull`] if fewer than `leaves.len()` slots remain.
    pub fn insert_all(&mut self, leaves: &[FieldElement]) -> Result<Vec<FieldElement>, LedgerError> {
        if (leaves.len() as u64) > self.tree.remaining_capacity() {
            return Err(LedgerError::TreeFull);
        }

        let mut staged = self.tree.frontier.clone();
        let mut roots = Vec::with_capacity(leaves.len());
        for leaf in leaves {
            roots.push(MerkleTree::append(
                *leaf,
                &mut staged,
                &self.tree.zeros,
                &self.hasher,
            )?);
        }

        self.tree.frontier = staged;
        for root in &roots {
            self.tree.root = *root;
            self.tree.root_history.push(*root);
        }
        Ok(roots)
    }

    /// Root after the latest insertion.
    pub fn current_root(&self) -> FieldElement {
        self.tree.root
    }

    /// Returns true if `root` was produced by this accumulator and is
    /// still retained.
    pub fn is_known_root(&self, root: &FieldElement) -> bool {
        MerkleTree::is_known_root(&self.tree, root)
    }

    /// Index the next commitment will occupy.
    pub fn next_index(&self) -> u64 {
        self.tree.len()
    }

    /// Maximum number of commitments.
    pub fn capacity(&self) -> u64 {
        self.tree.capacity()
    }

    /// Free slots.
    pub fn remaining_capacity(&self) -> u64 {
        self.tree.remaining_capacity()
    }

    /// Tree height.
    pub fn height(&self) -> u8 {
        self.tree.height
    }

    /// Root history.
    pub fn root_history(&self) -> &RootHistory {
        &self.tree.root_history
    }

    /// Empty-subtree hash at `level`.
    pub fn zero(&self, level: usize) -> Option<&FieldElement> {
        self.tree.zeros.get(level)
    }

    /// Applies the accumulator hash.
    ///
    /// # Errors
    /// [`LedgerError::HashFailed`] if the backend rejects the inputs.
    pub fn hash(&self, left: &FieldElement, right: &FieldElement) -> Result<FieldElement, LedgerError> {
        MerkleTree::hash(&self.hasher, left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_primitives::{PoseidonHasher, PrimitiveError, hash_to_field};
    use proptest::prelude::*;
    use sha2::{Digest, Sha256};

    /// Fast hasher for shape tests.
    #[derive(Clone, Copy, Debug, Default)]
    struct Sha256Hasher;

    impl AccumulatorHasher for Sha256Hasher {
        fn hash(
            &self,
            left: &FieldElement,
            right: &FieldElement,
        ) -> Result<FieldElement, PrimitiveError> {
            let digest: [u8; 32] = Sha256::new()
                .chain_update(left.as_slice())
                .chain_update(right.as_slice())
                .finalize()
                .into();
            Ok(hash_to_field(&digest))
        }
    }

    fn fe(v: u64) -> FieldElement {
        FieldElement::from_u64(v)
    }

    #[test]
    fn test_initial_root_value_for_height_26() {
        // Poseidon zero hash at height 26, shared with the light-protocol trees
        let acc = CommitmentAccumulator::new(26, RootHistoryPolicy::Unbounded, PoseidonHasher)
            .unwrap();

        let expected_root: [u8; 32] = [
            18, 12, 88, 241, 67, 212, 145, 233, 89, 2, 247, 245, 39, 119, 120, 162, 224, 173, 81,
            104, 246, 173, 215, 86, 105, 147, 38, 48, 206, 97, 21, 24,
        ];
        assert_eq!(acc.current_root().to_be_bytes(), expected_root);
        println!("Initial root (hex): 0x{}", hex::encode(expected_root));
    }

    #[test]
    fn test_initial_root_is_known_and_zero_is_not() {
        let acc = CommitmentAccumulator::new(4, RootHistoryPolicy::Unbounded, Sha256Hasher).unwrap();
        assert!(acc.is_known_root(&acc.current_root()));
        assert!(!acc.is_known_root(&FieldElement::ZERO));
        assert_eq!(acc.root_history().len(), 1);
    }

    #[test]
    fn test_rejects_invalid_heights() {
        for height in [0, MAX_TREE_HEIGHT + 1] {
            assert_eq!(
                CommitmentAccumulator::new(height, RootHistoryPolicy::Unbounded, Sha256Hasher)
                    .unwrap_err(),
                LedgerError::InvalidConfig
            );
        }
    }

    #[test]
    fn test_single_leaf_root_matches_manual_path() {
        let hasher = Sha256Hasher;
        let mut acc = CommitmentAccumulator::new(3, RootHistoryPolicy::Unbounded, hasher).unwrap();
        let root = acc.insert(fe(5)).unwrap();

        let z0 = FieldElement::ZERO;
        let z1 = hasher.hash(&z0, &z0).unwrap();
        let z2 = hasher.hash(&z1, &z1).unwrap();
        let l1 = hasher.hash(&fe(5), &z0).unwrap();
        let l2 = hasher.hash(&l1, &z1).unwrap();
        let l3 = hasher.hash(&l2, &z2).unwrap();
        assert_eq!(root, l3);
    }

    #[test]
    fn test_second_leaf_uses_left_sibling() {
        let hasher = Sha256Hasher;
        let mut acc = CommitmentAccumulator::new(2, RootHistoryPolicy::Unbounded, hasher).unwrap();
        acc.insert(fe(5)).unwrap();
        let root = acc.insert(fe(6)).unwrap();

        let z1 = hasher.hash(&FieldElement::ZERO, &FieldElement::ZERO).unwrap();
        let l1 = hasher.hash(&fe(5), &fe(6)).unwrap();
        assert_eq!(root, hasher.hash(&l1, &z1).unwrap());
    }

    #[test]
    fn test_tree_full() {
        let mut acc = CommitmentAccumulator::new(2, RootHistoryPolicy::Unbounded, Sha256Hasher).unwrap();
        for v in 1..=4 {
            acc.insert(fe(v)).unwrap();
        }
        let root = acc.current_root();
        assert_eq!(acc.insert(fe(5)), Err(LedgerError::TreeFull));
        assert_eq!(acc.current_root(), root);
        assert_eq!(acc.next_index(), 4);
    }

    #[test]
    fn test_insert_all_is_all_or_nothing() {
        let mut acc = CommitmentAccumulator::new(2, RootHistoryPolicy::Unbounded, Sha256Hasher).unwrap();
        acc.insert_all(&[fe(1), fe(2), fe(3)]).unwrap();
        let history_len = acc.root_history().len();

        assert_eq!(acc.insert_all(&[fe(4), fe(5)]), Err(LedgerError::TreeFull));
        assert_eq!(acc.next_index(), 3);
        assert_eq!(acc.root_history().len(), history_len);
    }

    #[test]
    fn test_every_intermediate_root_is_recorded() {
        let mut batched = CommitmentAccumulator::new(4, RootHistoryPolicy::Unbounded, Sha256Hasher).unwrap();
        let mut single = batched.clone();

        batched.insert_all(&[fe(1), fe(2), fe(3)]).unwrap();
        let r1 = single.insert(fe(1)).unwrap();
        let r2 = single.insert(fe(2)).unwrap();
        let r3 = single.insert(fe(3)).unwrap();

        assert_eq!(batched.current_root(), r3);
        for root in [r1, r2, r3] {
            assert!(batched.is_known_root(&root));
        }
        assert_eq!(batched.root_history().roots(), single.root_history().roots());
    }

    #[test]
    fn test_window_policy_forgets_old_roots() {
        let mut acc = CommitmentAccumulator::new(8, RootHistoryPolicy::Window(2), Sha256Hasher).unwrap();
        let initial = acc.current_root();
        let r1 = acc.insert(fe(1)).unwrap();
        let r2 = acc.insert(fe(2)).unwrap();

        assert!(!acc.is_known_root(&initial));
        assert!(acc.is_known_root(&r1));
        assert!(acc.is_known_root(&r2));
    }

    proptest! {
        #[test]
        fn prop_root_is_deterministic(leaves in proptest::collection::vec(any::<u64>(), 0..20)) {
            let leaves: Vec<FieldElement> = leaves.into_iter().map(fe).collect();
            let mut a = CommitmentAccumulator::new(6, RootHistoryPolicy::Unbounded, Sha256Hasher).unwrap();
            let mut b = CommitmentAccumulator::new(6, RootHistoryPolicy::Unbounded, Sha256Hasher).unwrap();
            for leaf in &leaves {
                a.insert(*leaf).unwrap();
            }
            b.insert_all(&leaves).unwrap();
            prop_assert_eq!(a.current_root(), b.current_root());
            prop_assert_eq!(a.root_history().roots(), b.root_history().roots());
        }
    }
}
