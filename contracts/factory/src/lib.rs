#![no_std]

//! # Shroud Instance Factory
//!
//! Deterministic provisioning of fixed-denomination privacy-pool instances.
//!
//! ## Responsibilities:
//! 1. Deploy instances at addresses derived from (token, denomination)
//! 2. Idempotency: one live contract per deployment key, ever
//! 3. Hold the implementation slots (token-backed / native-backed)
//! 4. Governance-gated configuration of verifier, hasher and tree height

use soroban_sdk::{contract, contractimpl, vec, Address, BytesN, Env, IntoVal, Symbol, Vec};

use shroud_addressing::{derive_address, instance_salt, kind_of, InstanceKind, InstanceToken};

mod error;
mod events;
mod storage;
mod types;

pub use error::FactoryError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct InstanceFactory;

#[contractimpl]
impl InstanceFactory {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the factory with its governance capability, the parameters
    /// wired into every future instance, and the implementation slots.
    pub fn initialize(
        env: Env,
        governance: Address,
        verifier: Address,
        hasher: Address,
        merkle_tree_height: u32,
        token_wasm_hash: BytesN<32>,
        native_wasm_hash: BytesN<32>,
        instance_registry: Address,
    ) -> Result<(), FactoryError> {
        governance.require_auth();

        if is_initialized(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        let config = FactoryConfig {
            governance: governance.clone(),
            verifier,
            hasher,
            merkle_tree_height,
            instance_registry,
        };
        write_config(&env, &config);
        write_implementation(&env, InstanceKind::Token, &token_wasm_hash);
        write_implementation(&env, InstanceKind::Native, &native_wasm_hash);
        set_initialized(&env);
        init_instance_list(&env);

        emit_initialized(&env, &governance);

        Ok(())
    }

    // ========================================================
    // INSTANCE CREATION
    // ========================================================

    /// Deploy one instance for a deployment key.
    ///
    /// Idempotent: if an instance already exists for `(token, denomination)`
    /// the recorded address is returned, nothing is deployed and no event is
    /// emitted. Duplicate requests are safe to resubmit.
    pub fn create_instance(
        env: Env,
        caller: Address,
        token: InstanceToken,
        denomination: i128,
    ) -> Result<Address, FactoryError> {
        caller.require_auth();

        if !is_initialized(&env) {
            return Err(FactoryError::NotInitialized);
        }
        let config = read_config(&env);
        Self::ensure_provisioner(&env, &config, &caller)?;

        Self::create_one(&env, &config, &token, denomination)
    }

    /// Batch form of `create_instance`.
    ///
    /// Each element's skip/create decision is independent: existing keys are
    /// returned as-is, new keys are deployed, and no element rolls back the
    /// others.
    pub fn create_instances(
        env: Env,
        caller: Address,
        token: InstanceToken,
        denominations: Vec<i128>,
    ) -> Result<Vec<Address>, FactoryError> {
        caller.require_auth();

        if !is_initialized(&env) {
            return Err(FactoryError::NotInitialized);
        }
        let config = read_config(&env);
        Self::ensure_provisioner(&env, &config, &caller)?;

        let mut instances = Vec::new(&env);
        for denomination in denominations.iter() {
            instances.push_back(Self::create_one(&env, &config, &token, denomination)?);
        }
        Ok(instances)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Address a deployment key resolves to, deployed or not.
    ///
    /// Pure prediction over (factory, token, denomination); external tooling
    /// uses this for skip-if-exists checks before submitting anything.
    pub fn instance_address(env: Env, token: InstanceToken, denomination: i128) -> Address {
        let salt = instance_salt(&env, &token, denomination);
        derive_address(&env, &env.current_contract_address(), &salt)
    }

    /// Deployed instance for a key, if any
    pub fn instance_at(env: Env, token: InstanceToken, denomination: i128) -> Option<Address> {
        read_instance(&env, &token, denomination)
    }

    /// Whether an instance is already deployed for this key
    pub fn is_instance_deployed(env: Env, token: InstanceToken, denomination: i128) -> bool {
        instance_exists(&env, &token, denomination)
    }

    /// Total number of deployed instances
    pub fn total_instances(env: Env) -> u32 {
        read_instance_list(&env).len()
    }

    /// All deployed instance addresses
    pub fn all_instances(env: Env) -> Vec<Address> {
        read_instance_list(&env)
    }

    /// Implementation slot for an instance kind
    pub fn implementation(env: Env, kind: InstanceKind) -> Option<BytesN<32>> {
        read_implementation(&env, kind)
    }

    pub fn governance(env: Env) -> Address {
        read_config(&env).governance
    }

    pub fn verifier(env: Env) -> Address {
        read_config(&env).verifier
    }

    pub fn hasher(env: Env) -> Address {
        read_config(&env).hasher
    }

    pub fn merkle_tree_height(env: Env) -> u32 {
        read_config(&env).merkle_tree_height
    }

    pub fn instance_registry(env: Env) -> Address {
        read_config(&env).instance_registry
    }

    pub fn operator(env: Env) -> Option<Address> {
        read_operator(&env)
    }

    // ========================================================
    // GOVERNANCE FUNCTIONS
    // ========================================================

    /// Update the verifier wired into future instances
    pub fn set_verifier(env: Env, verifier: Address) -> Result<(), FactoryError> {
        let mut config = read_config(&env);
        config.governance.require_auth();
        config.verifier = verifier;
        write_config(&env, &config);
        Ok(())
    }

    /// Update the hasher wired into future instances
    pub fn set_hasher(env: Env, hasher: Address) -> Result<(), FactoryError> {
        let mut config = read_config(&env);
        config.governance.require_auth();
        config.hasher = hasher;
        write_config(&env, &config);
        Ok(())
    }

    /// Update the Merkle tree height wired into future instances
    pub fn set_merkle_tree_height(env: Env, height: u32) -> Result<(), FactoryError> {
        let mut config = read_config(&env);
        config.governance.require_auth();
        config.merkle_tree_height = height;
        write_config(&env, &config);
        Ok(())
    }

    /// Repoint both implementation slots at freshly uploaded instance code.
    ///
    /// Already-deployed instances are untouched: each one is an
    /// instantiation of the code hash current at its creation.
    pub fn update_implementations(
        env: Env,
        token_wasm_hash: BytesN<32>,
        native_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        let config = read_config(&env);
        config.governance.require_auth();

        write_implementation(&env, InstanceKind::Token, &token_wasm_hash);
        write_implementation(&env, InstanceKind::Native, &native_wasm_hash);

        emit_implementations_updated(&env, &token_wasm_hash, &native_wasm_hash);

        Ok(())
    }

    /// Register the contract allowed to drive instance creation on behalf of
    /// executed governance proposals.
    pub fn set_operator(env: Env, operator: Address) -> Result<(), FactoryError> {
        let config = read_config(&env);
        config.governance.require_auth();

        write_operator(&env, &operator);
        emit_operator_updated(&env, &operator);

        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn ensure_provisioner(
        env: &Env,
        config: &FactoryConfig,
        caller: &Address,
    ) -> Result<(), FactoryError> {
        if *caller == config.governance {
            return Ok(());
        }
        match read_operator(env) {
            Some(operator) if operator == *caller => Ok(()),
            _ => Err(FactoryError::Unauthorized),
        }
    }

    fn create_one(
        env: &Env,
        config: &FactoryConfig,
        token: &InstanceToken,
        denomination: i128,
    ) -> Result<Address, FactoryError> {
        if denomination <= 0 {
            return Err(FactoryError::InvalidDenomination);
        }

        // Idempotent path: the key already resolved once, return it silently.
        if let Some(existing) = read_instance(env, token, denomination) {
            return Ok(existing);
        }

        let wasm_hash = read_implementation(env, kind_of(token))
            .ok_or(FactoryError::MissingImplementation)?;

        // === DEPLOY ===
        let salt = instance_salt(env, token, denomination);
        let instance = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(wasm_hash, ());

        // === INITIALIZE ===
        let _: () = env.invoke_contract(
            &instance,
            &Symbol::new(env, "initialize"),
            vec![
                env,
                config.verifier.clone().into_val(env),
                config.hasher.clone().into_val(env),
                config.merkle_tree_height.into_val(env),
                denomination.into_val(env),
                token.clone().into_val(env),
                config.instance_registry.clone().into_val(env),
            ],
        );

        // === RECORD ===
        write_instance(env, token, denomination, &instance);
        add_to_instance_list(env, &instance);

        emit_instance_created(env, &instance, token, denomination);

        Ok(instance)
    }
}
