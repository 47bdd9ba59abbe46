//! Liquidity gate
//!
//! Read-only admission check against the external exchange: a token may only
//! be proposed if a pool against the base asset exists at the requested fee
//! tier and has accumulated enough price-observation history to make its
//! TWAP hard to manipulate. Evaluated at proposal-creation time only; never
//! re-checked at execution.

use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

use crate::error::CreatorError;
use crate::storage::read_min_observation_slots;
use crate::types::CreatorConfig;

pub fn ensure_listable(
    env: &Env,
    config: &CreatorConfig,
    token: &Address,
    exchange_fee_tier: u32,
) -> Result<(), CreatorError> {
    let pool: Option<Address> = env.invoke_contract(
        &config.amm_factory,
        &Symbol::new(env, "pool"),
        vec![
            env,
            token.clone().into_val(env),
            config.base_asset.clone().into_val(env),
            exchange_fee_tier.into_val(env),
        ],
    );
    let pool = pool.ok_or(CreatorError::PoolNotFound)?;

    let slots: u32 = env.invoke_contract(&pool, &Symbol::new(env, "observation_slots"), vec![env]);
    if slots < read_min_observation_slots(env) {
        return Err(CreatorError::InsufficientObservationHistory);
    }

    Ok(())
}
