//! Proposal creator events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the creator is initialized
pub fn emit_initialized(env: &Env, governance: &Address) {
    env.events().publish(
        (Symbol::new(env, "CreatorInit"),),
        (governance.clone(),),
    );
}

/// Emitted when a governance-ready proposal was recorded and paid for
pub fn emit_proposal_created(env: &Env, id: u32, payer: &Address) {
    env.events().publish(
        (Symbol::new(env, "NewProposal"),),
        (id, payer.clone()),
    );
}

/// Emitted when governance adjusts the creation fee
pub fn emit_creation_fee_updated(env: &Env, fee: i128) {
    env.events().publish((Symbol::new(env, "FeeUpdated"),), (fee,));
}

/// Emitted when governance adjusts the observation-history threshold
pub fn emit_min_observation_slots_updated(env: &Env, slots: u32) {
    env.events().publish((Symbol::new(env, "MinObsUpd"),), (slots,));
}
