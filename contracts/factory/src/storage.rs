// Factory storage module for Shroud

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use shroud_addressing::{InstanceKind, InstanceToken};

use crate::types::FactoryConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum FactoryDataKey {
    Config,
    Initialized,
    /// Contract allowed to drive instance creation besides governance
    Operator,
    /// Wasm hash per instance kind
    Implementation(InstanceKind),
    /// Deployed instance by deployment key
    Instance(InstanceToken, i128),
    /// All deployed instance addresses
    InstanceList,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &FactoryDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&FactoryDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&FactoryDataKey::Initialized, &true);
    extend_ttl(env, &FactoryDataKey::Initialized);
}

// ============================================================
// FACTORY CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &FactoryConfig) {
    env.storage()
        .persistent()
        .set(&FactoryDataKey::Config, config);
    extend_ttl(env, &FactoryDataKey::Config);
}

pub fn read_config(env: &Env) -> FactoryConfig {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Config)
        .expect("factory not initialized")
}

// ============================================================
// OPERATOR
// ============================================================

pub fn write_operator(env: &Env, operator: &Address) {
    env.storage()
        .persistent()
        .set(&FactoryDataKey::Operator, operator);
    extend_ttl(env, &FactoryDataKey::Operator);
}

pub fn read_operator(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&FactoryDataKey::Operator)
}

// ============================================================
// IMPLEMENTATION SLOTS
// ============================================================

pub fn write_implementation(env: &Env, kind: InstanceKind, wasm_hash: &BytesN<32>) {
    let key = FactoryDataKey::Implementation(kind);
    env.storage().persistent().set(&key, wasm_hash);
    extend_ttl(env, &key);
}

pub fn read_implementation(env: &Env, kind: InstanceKind) -> Option<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Implementation(kind))
}

// ============================================================
// INSTANCE INDEX
// ============================================================

pub fn instance_exists(env: &Env, token: &InstanceToken, denomination: i128) -> bool {
    env.storage()
        .persistent()
        .has(&FactoryDataKey::Instance(token.clone(), denomination))
}

pub fn read_instance(env: &Env, token: &InstanceToken, denomination: i128) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Instance(token.clone(), denomination))
}

pub fn write_instance(env: &Env, token: &InstanceToken, denomination: i128, instance: &Address) {
    let key = FactoryDataKey::Instance(token.clone(), denomination);
    env.storage().persistent().set(&key, instance);
    extend_ttl(env, &key);
}

pub fn init_instance_list(env: &Env) {
    let list: Vec<Address> = Vec::new(env);
    env.storage()
        .persistent()
        .set(&FactoryDataKey::InstanceList, &list);
    extend_ttl(env, &FactoryDataKey::InstanceList);
}

pub fn read_instance_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::InstanceList)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn add_to_instance_list(env: &Env, instance: &Address) {
    let mut list = read_instance_list(env);
    list.push_back(instance.clone());
    env.storage()
        .persistent()
        .set(&FactoryDataKey::InstanceList, &list);
    extend_ttl(env, &FactoryDataKey::InstanceList);
}
