#![no_std]

//! # Shroud Proposal Creator
//!
//! Front door for listing new pool instances: anyone can request instances
//! for a token by paying the creation fee to governance's treasury, either
//! with a prior allowance or with a signed permit redeemed in the same call.
//!
//! All validation happens before any fee moves: protocol fee bounds, the
//! exchange liquidity gate for non-native tokens, and list arity. On success
//! a governance-ready proposal is recorded in the proposal book.

use soroban_sdk::{
    contract, contractimpl, token, vec, Address, BytesN, Env, IntoVal, Symbol, Vec,
};

use shroud_addressing::InstanceToken;

mod error;
mod events;
mod liquidity;
mod storage;
mod types;

pub use error::CreatorError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONSTANTS
// ============================================================

/// Maximum protocol fee in basis points (100%)
const MAX_PROTOCOL_FEE: u32 = 10_000;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct ProposalCreator;

#[contractimpl]
impl ProposalCreator {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(
        env: Env,
        governance: Address,
        fee_token: Address,
        creation_fee: i128,
        amm_factory: Address,
        base_asset: Address,
        min_observation_slots: u32,
        proposal_book: Address,
    ) -> Result<(), CreatorError> {
        governance.require_auth();

        if is_initialized(&env) {
            return Err(CreatorError::AlreadyInitialized);
        }

        let config = CreatorConfig {
            governance: governance.clone(),
            fee_token,
            amm_factory,
            base_asset,
            proposal_book,
        };
        write_config(&env, &config);
        write_creation_fee(&env, creation_fee);
        write_min_observation_slots(&env, min_observation_slots);
        set_initialized(&env);

        emit_initialized(&env, &governance);

        Ok(())
    }

    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Create a proposal, paying the fee from a prior allowance.
    ///
    /// The proposer must have approved this contract for at least the
    /// current creation fee on the fee token.
    pub fn create_proposal_approve(
        env: Env,
        proposer: Address,
        token: InstanceToken,
        exchange_fee_tier: u32,
        denominations: Vec<i128>,
        protocol_fees: Vec<u32>,
    ) -> Result<u32, CreatorError> {
        proposer.require_auth();

        if !is_initialized(&env) {
            return Err(CreatorError::NotInitialized);
        }
        let config = read_config(&env);

        Self::validate(&env, &config, &token, exchange_fee_tier, &denominations, &protocol_fees)?;

        let fee = read_creation_fee(&env);
        if fee > 0 {
            token::Client::new(&env, &config.fee_token).transfer_from(
                &env.current_contract_address(),
                &proposer,
                &config.governance,
                &fee,
            );
        }

        let id = Self::open(&env, &config, token, exchange_fee_tier, denominations, protocol_fees);
        emit_proposal_created(&env, id, &proposer);

        Ok(id)
    }

    /// Create a proposal, paying the fee with a signed permit.
    ///
    /// Collapses approve + transfer into one transaction for the fee payer:
    /// the permit is forwarded to the fee token and consumed there (nonce
    /// and deadline enforcement are the token's contract), then the fee is
    /// pulled from `owner`. No transaction-level authorization from `owner`
    /// is required.
    pub fn create_proposal_permit(
        env: Env,
        token: InstanceToken,
        exchange_fee_tier: u32,
        denominations: Vec<i128>,
        protocol_fees: Vec<u32>,
        owner: Address,
        deadline: u64,
        signature: BytesN<64>,
    ) -> Result<u32, CreatorError> {
        if !is_initialized(&env) {
            return Err(CreatorError::NotInitialized);
        }
        let config = read_config(&env);

        Self::validate(&env, &config, &token, exchange_fee_tier, &denominations, &protocol_fees)?;

        let fee = read_creation_fee(&env);
        if fee > 0 {
            let spender = env.current_contract_address();
            let _: () = env.invoke_contract(
                &config.fee_token,
                &Symbol::new(&env, "permit"),
                vec![
                    &env,
                    owner.clone().into_val(&env),
                    spender.clone().into_val(&env),
                    fee.into_val(&env),
                    deadline.into_val(&env),
                    signature.into_val(&env),
                ],
            );
            token::Client::new(&env, &config.fee_token).transfer_from(
                &spender,
                &owner,
                &config.governance,
                &fee,
            );
        }

        let id = Self::open(&env, &config, token, exchange_fee_tier, denominations, protocol_fees);
        emit_proposal_created(&env, id, &owner);

        Ok(id)
    }

    // ========================================================
    // GOVERNANCE FUNCTIONS
    // ========================================================

    pub fn set_creation_fee(env: Env, fee: i128) -> Result<(), CreatorError> {
        let config = read_config(&env);
        config.governance.require_auth();

        write_creation_fee(&env, fee);
        emit_creation_fee_updated(&env, fee);

        Ok(())
    }

    pub fn set_min_observation_slots(env: Env, slots: u32) -> Result<(), CreatorError> {
        let config = read_config(&env);
        config.governance.require_auth();

        write_min_observation_slots(&env, slots);
        emit_min_observation_slots_updated(&env, slots);

        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn creation_fee(env: Env) -> i128 {
        read_creation_fee(&env)
    }

    pub fn min_observation_slots(env: Env) -> u32 {
        read_min_observation_slots(&env)
    }

    pub fn governance(env: Env) -> Address {
        read_config(&env).governance
    }

    pub fn fee_token(env: Env) -> Address {
        read_config(&env).fee_token
    }

    pub fn amm_factory(env: Env) -> Address {
        read_config(&env).amm_factory
    }

    pub fn base_asset(env: Env) -> Address {
        read_config(&env).base_asset
    }

    pub fn proposal_book(env: Env) -> Address {
        read_config(&env).proposal_book
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Fail-fast input validation; nothing is charged or recorded before
    /// every check has passed.
    fn validate(
        env: &Env,
        config: &CreatorConfig,
        token: &InstanceToken,
        exchange_fee_tier: u32,
        denominations: &Vec<i128>,
        protocol_fees: &Vec<u32>,
    ) -> Result<(), CreatorError> {
        for fee in protocol_fees.iter() {
            if fee > MAX_PROTOCOL_FEE {
                return Err(CreatorError::ProtocolFeeTooHigh);
            }
        }

        // Native-asset instances have no exchange pool to gate on.
        if let InstanceToken::Token(addr) = token {
            liquidity::ensure_listable(env, config, addr, exchange_fee_tier)?;
        }

        if denominations.len() != protocol_fees.len() || denominations.is_empty() {
            return Err(CreatorError::ArityMismatch);
        }

        Ok(())
    }

    fn open(
        env: &Env,
        config: &CreatorConfig,
        token: InstanceToken,
        exchange_fee_tier: u32,
        denominations: Vec<i128>,
        protocol_fees: Vec<u32>,
    ) -> u32 {
        let mut instances = Vec::new(env);
        for (i, denomination) in denominations.iter().enumerate() {
            instances.push_back(InstanceSpec {
                denomination,
                protocol_fee: protocol_fees.get(i as u32).unwrap_or(0),
            });
        }

        let spec = ProposalSpec {
            token,
            exchange_fee_tier,
            instances,
        };

        env.invoke_contract(
            &config.proposal_book,
            &Symbol::new(env, "open"),
            vec![env, spec.into_val(env)],
        )
    }
}
