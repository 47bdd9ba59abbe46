#![no_std]

//! # Shroud Proposal Book
//!
//! Ledger of add-instance proposals, the only path from governance into the
//! instance factory.
//!
//! A proposal is an immutable record: the backing token, the exchange fee
//! tier its liquidity was validated against, and the requested
//! (denomination, protocol fee) pairs. Its lifecycle is `Created` →
//! `Executed`, one transition, driven by governance after its own vote and
//! timelock. Execution deploys every requested instance and registers it;
//! if any step fails the whole call unwinds and the record stays `Created`,
//! so a fixed fault can be retried without risk of double registration.

use soroban_sdk::{contract, contractimpl, vec, Address, Env, IntoVal, Symbol};

mod error;
mod events;
mod storage;
mod types;

pub use error::ProposalError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct ProposalBook;

#[contractimpl]
impl ProposalBook {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(
        env: Env,
        governance: Address,
        factory: Address,
        instance_registry: Address,
    ) -> Result<(), ProposalError> {
        governance.require_auth();

        if is_initialized(&env) {
            return Err(ProposalError::AlreadyInitialized);
        }

        let config = BookConfig {
            governance,
            factory,
            instance_registry,
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env);

        Ok(())
    }

    /// Register the proposal creator, the only caller allowed to open
    /// proposals.
    pub fn set_creator(env: Env, creator: Address) -> Result<(), ProposalError> {
        let config = read_config(&env);
        config.governance.require_auth();

        write_creator(&env, &creator);

        Ok(())
    }

    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Record a new proposal and hand back its id.
    ///
    /// The record is immutable from here on; nothing in this contract
    /// mutates a spec after it is written.
    pub fn open(env: Env, spec: ProposalSpec) -> Result<u32, ProposalError> {
        if !is_initialized(&env) {
            return Err(ProposalError::NotInitialized);
        }

        let creator = read_creator(&env).ok_or(ProposalError::Unauthorized)?;
        creator.require_auth();

        if spec.instances.is_empty() {
            return Err(ProposalError::EmptyProposal);
        }

        let id = read_proposal_count(&env);
        let record = ProposalRecord {
            spec: spec.clone(),
            created_at: env.ledger().timestamp(),
            state: ProposalState::Created,
        };
        write_proposal(&env, id, &record);
        write_proposal_count(&env, id + 1);

        emit_proposal_opened(&env, id, &spec.token);

        Ok(id)
    }

    /// Execute a passed proposal: deploy every requested instance and admit
    /// it into the registry.
    ///
    /// All-or-nothing: a failure in any deployment or registry write unwinds
    /// the entire call, leaving the proposal `Created` and re-executable.
    /// The `Executed` mark is only persisted after the last step succeeded,
    /// after which a second call fails with `AlreadyExecuted`.
    pub fn execute(env: Env, id: u32) -> Result<(), ProposalError> {
        let config = read_config(&env);
        config.governance.require_auth();

        let mut record = read_proposal(&env, id).ok_or(ProposalError::ProposalNotFound)?;
        if record.state == ProposalState::Executed {
            return Err(ProposalError::AlreadyExecuted);
        }

        let caller = env.current_contract_address();
        for item in record.spec.instances.iter() {
            let instance: Address = env.invoke_contract(
                &config.factory,
                &Symbol::new(&env, "create_instance"),
                vec![
                    &env,
                    caller.clone().into_val(&env),
                    record.spec.token.clone().into_val(&env),
                    item.denomination.into_val(&env),
                ],
            );

            let _: () = env.invoke_contract(
                &config.instance_registry,
                &Symbol::new(&env, "register"),
                vec![
                    &env,
                    instance.into_val(&env),
                    record.spec.token.clone().into_val(&env),
                    record.spec.exchange_fee_tier.into_val(&env),
                    item.protocol_fee.into_val(&env),
                ],
            );
        }

        record.state = ProposalState::Executed;
        write_proposal(&env, id, &record);

        emit_proposal_executed(&env, id, record.spec.instances.len());

        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn proposal(env: Env, id: u32) -> Option<ProposalRecord> {
        read_proposal(&env, id)
    }

    pub fn state(env: Env, id: u32) -> Result<ProposalState, ProposalError> {
        read_proposal(&env, id)
            .map(|r| r.state)
            .ok_or(ProposalError::ProposalNotFound)
    }

    pub fn total_proposals(env: Env) -> u32 {
        read_proposal_count(&env)
    }

    /// Number of instances a proposal requests
    pub fn num_instances(env: Env, id: u32) -> Result<u32, ProposalError> {
        let record = read_proposal(&env, id).ok_or(ProposalError::ProposalNotFound)?;
        Ok(record.spec.instances.len())
    }

    pub fn denomination_by_index(env: Env, id: u32, index: u32) -> Result<i128, ProposalError> {
        let record = read_proposal(&env, id).ok_or(ProposalError::ProposalNotFound)?;
        record
            .spec
            .instances
            .get(index)
            .map(|i| i.denomination)
            .ok_or(ProposalError::InvalidIndex)
    }

    pub fn protocol_fee_by_index(env: Env, id: u32, index: u32) -> Result<u32, ProposalError> {
        let record = read_proposal(&env, id).ok_or(ProposalError::ProposalNotFound)?;
        record
            .spec
            .instances
            .get(index)
            .map(|i| i.protocol_fee)
            .ok_or(ProposalError::InvalidIndex)
    }

    pub fn governance(env: Env) -> Address {
        read_config(&env).governance
    }

    pub fn factory(env: Env) -> Address {
        read_config(&env).factory
    }

    pub fn instance_registry(env: Env) -> Address {
        read_config(&env).instance_registry
    }

    pub fn creator(env: Env) -> Option<Address> {
        read_creator(&env)
    }
}
