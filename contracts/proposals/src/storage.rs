// Proposal storage module for Shroud

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{BookConfig, ProposalRecord};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum BookDataKey {
    Config,
    Initialized,
    /// Contract allowed to open proposals
    Creator,
    Proposal(u32),
    ProposalCount,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &BookDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&BookDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&BookDataKey::Initialized, &true);
    extend_ttl(env, &BookDataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &BookConfig) {
    env.storage().persistent().set(&BookDataKey::Config, config);
    extend_ttl(env, &BookDataKey::Config);
}

pub fn read_config(env: &Env) -> BookConfig {
    env.storage()
        .persistent()
        .get(&BookDataKey::Config)
        .expect("proposal book not initialized")
}

// ============================================================
// CREATOR
// ============================================================

pub fn write_creator(env: &Env, creator: &Address) {
    env.storage().persistent().set(&BookDataKey::Creator, creator);
    extend_ttl(env, &BookDataKey::Creator);
}

pub fn read_creator(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&BookDataKey::Creator)
}

// ============================================================
// PROPOSALS
// ============================================================

pub fn read_proposal_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&BookDataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn write_proposal_count(env: &Env, count: u32) {
    env.storage()
        .persistent()
        .set(&BookDataKey::ProposalCount, &count);
    extend_ttl(env, &BookDataKey::ProposalCount);
}

pub fn read_proposal(env: &Env, id: u32) -> Option<ProposalRecord> {
    env.storage().persistent().get(&BookDataKey::Proposal(id))
}

pub fn write_proposal(env: &Env, id: u32, record: &ProposalRecord) {
    let key = BookDataKey::Proposal(id);
    env.storage().persistent().set(&key, record);
    extend_ttl(env, &key);
}
