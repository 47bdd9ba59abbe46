//! Proposal events

use soroban_sdk::{Env, Symbol};

use shroud_addressing::InstanceToken;

/// Emitted when the book is initialized
pub fn emit_initialized(env: &Env) {
    env.events().publish((Symbol::new(env, "BookInit"),), ());
}

/// Emitted when a new governance-ready proposal is recorded
pub fn emit_proposal_opened(env: &Env, id: u32, token: &InstanceToken) {
    env.events().publish(
        (Symbol::new(env, "ProposalOpened"),),
        (id, token.clone()),
    );
}

/// Emitted after a proposal executed in full
pub fn emit_proposal_executed(env: &Env, id: u32, instances: u32) {
    env.events().publish(
        (Symbol::new(env, "ProposalExecuted"),),
        (id, instances),
    );
}
