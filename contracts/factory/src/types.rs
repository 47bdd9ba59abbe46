//! Factory type definitions

use soroban_sdk::{contracttype, Address};

// ============================================================
// FACTORY CONFIG
// ============================================================

/// Factory configuration
///
/// `governance` is the single writer of every mutable setting. It is injected
/// once at initialization and only ever replaced through its own authorized
/// calls, never reassigned informally.
#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    /// Governance capability: authorizes setters and instance creation
    pub governance: Address,
    /// Proof verifier wired into every new instance
    pub verifier: Address,
    /// Commitment hasher wired into every new instance
    pub hasher: Address,
    /// Merkle tree height wired into every new instance
    pub merkle_tree_height: u32,
    /// Registry new instances are bound to at initialization
    pub instance_registry: Address,
}
