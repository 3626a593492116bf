//! The confidential ledger engine and the state it owns.

use aegis_primitives::{
    AccumulatorHasher, CurvePoint, FieldElement, PoseidonHasher, ProofSystem,
};
use ethers_core::types::Address;
use tracing::info;

use crate::config::{LedgerConfig, OperationKeys};
use crate::errors::LedgerError;
use crate::events::LedgerEvent;
use crate::instructions::{
    self, ExchangeArgs, ReceiveArgs, RegisterArgs, SendArgs,
};
use crate::merkle_tree::CommitmentAccumulator;
use crate::state::{DestinationAccountState, DestinationStore, NullifierSet, RootHistory};

/// Confidential ledger instance.
///
/// Owns the commitment accumulator, the nullifier set, the destination
/// store and the frozen operation keys. Each instruction runs to completion
/// against `&mut self`; a failed instruction leaves every store unchanged.
pub struct CbdcLedger<P: ProofSystem, H: AccumulatorHasher = PoseidonHasher> {
    pub(crate) proof_system: P,
    pub(crate) accumulator: CommitmentAccumulator<H>,
    pub(crate) nullifiers: NullifierSet,
    pub(crate) destinations: DestinationStore,
    pub(crate) keys: OperationKeys,
    pub(crate) auditor_public_key: CurvePoint,
    pub(crate) commitment_key: [CurvePoint; 2],
    pub(crate) authority: Address,
    pub(crate) events: Vec<LedgerEvent>,
}

impl<P: ProofSystem> CbdcLedger<P, PoseidonHasher> {
    /// Builds a ledger that hashes with Poseidon.
    ///
    /// # Errors
    /// [`LedgerError::InvalidConfig`] if the configuration does not validate.
    pub fn new(config: LedgerConfig, proof_system: P) -> Result<Self, LedgerError> {
        Self::with_hasher(config, proof_system, PoseidonHasher)
    }
}

impl<P: ProofSystem, H: AccumulatorHasher> CbdcLedger<P, H> {
    /// Builds a ledger with an explicit accumulator hasher.
    ///
    /// # Errors
    /// [`LedgerError::InvalidConfig`] if the configuration does not validate.
    pub fn with_hasher(
        config: LedgerConfig,
        proof_system: P,
        hasher: H,
    ) -> Result<Self, LedgerError> {
        config.validate()?;
        let accumulator =
            CommitmentAccumulator::new(config.tree_height, config.root_history, hasher)?;

        info!(
            tree_height = config.tree_height,
            root_history = ?config.root_history,
            root = %accumulator.current_root(),
            authority = ?config.authority,
            "ledger initialized"
        );

        Ok(Self {
            proof_system,
            accumulator,
            nullifiers: NullifierSet::new(),
            destinations: DestinationStore::default(),
            keys: config.keys,
            auditor_public_key: config.auditor_public_key,
            commitment_key: config.commitment_key,
            authority: config.authority,
            events: Vec::new(),
        })
    }

    // =========================================================================
    // State transitions
    // =========================================================================

    /// Registers a new account commitment. Returns the new root.
    ///
    /// # Errors
    /// See [`instructions::process_register`].
    pub fn register(&mut self, args: &RegisterArgs) -> Result<FieldElement, LedgerError> {
        instructions::process_register(self, args)
    }

    /// Spends the account note and appends `cm_new`, `cm_v`. Returns the new
    /// root.
    ///
    /// # Errors
    /// See [`instructions::process_send`].
    pub fn send(&mut self, args: &SendArgs) -> Result<FieldElement, LedgerError> {
        instructions::process_send(self, args)
    }

    /// Consumes a value note and appends `cm_new`. Returns the new root.
    ///
    /// # Errors
    /// See [`instructions::process_receive`].
    pub fn receive(&mut self, args: &ReceiveArgs) -> Result<FieldElement, LedgerError> {
        instructions::process_receive(self, args)
    }

    /// Moves value into a registered destination. Returns the new root.
    ///
    /// # Errors
    /// See [`instructions::process_exchange`].
    pub fn exchange(&mut self, args: &ExchangeArgs) -> Result<FieldElement, LedgerError> {
        instructions::process_exchange(self, args)
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// Appends a commitment without a proof. Authority only.
    ///
    /// # Errors
    /// See [`instructions::process_insert_cm`].
    pub fn insert_cm(
        &mut self,
        caller: &Address,
        cm: FieldElement,
    ) -> Result<FieldElement, LedgerError> {
        instructions::process_insert_cm(self, caller, cm)
    }

    /// Registers an exchange destination with its initial state. Authority
    /// only.
    ///
    /// # Errors
    /// See [`instructions::process_register_destination`].
    pub fn register_destination(
        &mut self,
        caller: &Address,
        addr_d: FieldElement,
        state: DestinationAccountState,
    ) -> Result<(), LedgerError> {
        instructions::process_register_destination(self, caller, addr_d, state)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current accumulator root.
    pub fn get_root(&self) -> FieldElement {
        self.accumulator.current_root()
    }

    /// Returns true if `root` is in the retained root history.
    pub fn is_known_root(&self, root: &FieldElement) -> bool {
        self.accumulator.is_known_root(root)
    }

    /// Returns true if `sn` has been spent.
    pub fn isin_list_sn(&self, sn: &FieldElement) -> bool {
        self.nullifiers.contains(sn)
    }

    /// Destination state for `addr_d`, if registered.
    pub fn get_cm_d(&self, addr_d: &FieldElement) -> Option<&DestinationAccountState> {
        self.destinations.get(addr_d)
    }

    /// The accumulator hash, exposed as a read-only helper.
    ///
    /// # Errors
    /// [`LedgerError::HashFailed`] if the backend rejects the inputs.
    pub fn hash(
        &self,
        left: &FieldElement,
        right: &FieldElement,
    ) -> Result<FieldElement, LedgerError> {
        self.accumulator.hash(left, right)
    }

    /// Number of commitments appended so far.
    pub fn commitment_count(&self) -> u64 {
        self.accumulator.next_index()
    }

    /// Number of spent nullifiers.
    pub fn nullifier_count(&self) -> usize {
        self.nullifiers.len()
    }

    /// Root history of the accumulator.
    pub fn root_history(&self) -> &RootHistory {
        self.accumulator.root_history()
    }

    /// Frozen operation keys.
    pub fn keys(&self) -> &OperationKeys {
        &self.keys
    }

    /// Auditor public key bound into every operation.
    pub fn auditor_public_key(&self) -> &CurvePoint {
        &self.auditor_public_key
    }

    /// Commitment key bound into exchange.
    pub fn commitment_key(&self) -> &[CurvePoint; 2] {
        &self.commitment_key
    }

    /// Admin authority.
    pub fn authority(&self) -> &Address {
        &self.authority
    }

    /// Events emitted since the last drain, oldest first.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Drains the event journal.
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        core::mem::take(&mut self.events)
    }
}
