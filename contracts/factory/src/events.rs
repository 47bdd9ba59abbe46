//! Factory events

use soroban_sdk::{Address, BytesN, Env, Symbol};

use shroud_addressing::InstanceToken;

/// Emitted when the factory is initialized
pub fn emit_initialized(env: &Env, governance: &Address) {
    env.events().publish(
        (Symbol::new(env, "FactoryInit"),),
        (governance.clone(),),
    );
}

/// Emitted once per freshly deployed instance.
///
/// Never emitted on the idempotent path: a repeated request for an existing
/// deployment key produces no event.
pub fn emit_instance_created(
    env: &Env,
    instance: &Address,
    token: &InstanceToken,
    denomination: i128,
) {
    env.events().publish(
        (Symbol::new(env, "InstanceCreated"),),
        (instance.clone(), token.clone(), denomination),
    );
}

/// Emitted when governance repoints the implementation slots
pub fn emit_implementations_updated(
    env: &Env,
    token_wasm_hash: &BytesN<32>,
    native_wasm_hash: &BytesN<32>,
) {
    env.events().publish(
        (Symbol::new(env, "ImplUpdated"),),
        (token_wasm_hash.clone(), native_wasm_hash.clone()),
    );
}

/// Emitted when governance registers a new operator
pub fn emit_operator_updated(env: &Env, operator: &Address) {
    env.events().publish(
        (Symbol::new(env, "OperatorSet"),),
        (operator.clone(),),
    );
}
