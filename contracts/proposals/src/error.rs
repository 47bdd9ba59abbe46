// Proposal error module for Shroud

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProposalError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    /// Open called before a creator was registered
    Unauthorized = 3,

    ProposalNotFound = 4,

    /// The execution guard: a proposal is consumed at most once
    AlreadyExecuted = 5,

    /// Proposals must request at least one instance
    EmptyProposal = 6,

    /// Per-index getter asked past the end of the spec
    InvalidIndex = 7,
}
