//! Proposal type definitions

use soroban_sdk::{contracttype, Address, Vec};

use shroud_addressing::InstanceToken;

// ============================================================
// PROPOSAL SPEC
// ============================================================

/// One instance requested by a proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceSpec {
    /// Fixed deposit size of the instance
    pub denomination: i128,
    /// Protocol fee in basis points charged on the instance
    pub protocol_fee: u32,
}

/// Everything a proposal commits governance to.
///
/// Written once by the proposal creator and never mutated afterwards; the
/// execute hook only reads it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalSpec {
    /// Backing asset shared by all requested instances
    pub token: InstanceToken,
    /// Fee tier of the exchange pool the liquidity gate was checked against
    pub exchange_fee_tier: u32,
    /// Requested instances, at least one
    pub instances: Vec<InstanceSpec>,
}

// ============================================================
// PROPOSAL RECORD
// ============================================================

/// Lifecycle of a proposal. `Executed` is terminal and set only after every
/// clone deployment and registry write of the execution has succeeded.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalState {
    Created,
    Executed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRecord {
    pub spec: ProposalSpec,
    /// Ledger timestamp the proposal was opened at
    pub created_at: u64,
    pub state: ProposalState,
}

// ============================================================
// BOOK CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct BookConfig {
    /// Only caller allowed to execute proposals
    pub governance: Address,
    /// Instance factory driven during execution
    pub factory: Address,
    /// Registry admitted instances are written to
    pub instance_registry: Address,
}
