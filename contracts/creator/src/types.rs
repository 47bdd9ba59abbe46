//! Proposal creator type definitions

use soroban_sdk::{contracttype, Address, Vec};

use shroud_addressing::InstanceToken;

// ============================================================
// CREATOR CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct CreatorConfig {
    /// Receives every creation fee; sole writer of the mutable settings
    pub governance: Address,
    /// Token the creation fee is denominated in
    pub fee_token: Address,
    /// Exchange factory used for the liquidity gate lookups
    pub amm_factory: Address,
    /// Quote asset the candidate token must have an exchange pool against
    pub base_asset: Address,
    /// Proposal book new proposals are recorded in
    pub proposal_book: Address,
}

// ============================================================
// PROPOSAL WIRE TYPES
// ============================================================
// Wire-compatible with the proposal book's spec types: contract types
// encode by field name, so the book decodes these without a shared crate.

#[contracttype]
#[derive(Clone, Debug)]
pub struct InstanceSpec {
    pub denomination: i128,
    pub protocol_fee: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ProposalSpec {
    pub token: InstanceToken,
    pub exchange_fee_tier: u32,
    pub instances: Vec<InstanceSpec>,
}
