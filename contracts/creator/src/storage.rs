// Proposal creator storage module for Shroud

use soroban_sdk::{contracttype, Env};

use crate::types::CreatorConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum CreatorDataKey {
    Config,
    Initialized,
    CreationFee,
    MinObservationSlots,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &CreatorDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&CreatorDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&CreatorDataKey::Initialized, &true);
    extend_ttl(env, &CreatorDataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &CreatorConfig) {
    env.storage()
        .persistent()
        .set(&CreatorDataKey::Config, config);
    extend_ttl(env, &CreatorDataKey::Config);
}

pub fn read_config(env: &Env) -> CreatorConfig {
    env.storage()
        .persistent()
        .get(&CreatorDataKey::Config)
        .expect("proposal creator not initialized")
}

// ============================================================
// SETTINGS
// ============================================================

pub fn write_creation_fee(env: &Env, fee: i128) {
    env.storage()
        .persistent()
        .set(&CreatorDataKey::CreationFee, &fee);
    extend_ttl(env, &CreatorDataKey::CreationFee);
}

pub fn read_creation_fee(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&CreatorDataKey::CreationFee)
        .unwrap_or(0)
}

pub fn write_min_observation_slots(env: &Env, slots: u32) {
    env.storage()
        .persistent()
        .set(&CreatorDataKey::MinObservationSlots, &slots);
    extend_ttl(env, &CreatorDataKey::MinObservationSlots);
}

pub fn read_min_observation_slots(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&CreatorDataKey::MinObservationSlots)
        .unwrap_or(0)
}
