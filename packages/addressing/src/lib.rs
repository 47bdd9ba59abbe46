// Shroud addressing package

#![no_std]

//! Deterministic address derivation for pool instances.
//!
//! An instance is identified by its deployment key `(token, denomination)`.
//! The key is folded into the deployment salt, so the address of an instance
//! is a pure function of the factory address and the key — predictable before
//! deployment and stable across any number of retries.

use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Backing asset of a pool instance.
///
/// Replaces the zero-address sentinel convention: a pool either wraps the
/// native asset or a specific fungible token contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InstanceToken {
    Native,
    Token(Address),
}

/// Instance kind, used to select the implementation slot a clone is
/// instantiated from.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InstanceKind {
    Native,
    Token,
}

/// Implementation slot selector for a given backing asset.
pub fn kind_of(token: &InstanceToken) -> InstanceKind {
    match token {
        InstanceToken::Native => InstanceKind::Native,
        InstanceToken::Token(_) => InstanceKind::Token,
    }
}

/// Salt for the deterministic deployment of one instance.
///
/// sha256 over the XDR of the deployment key. Two keys never share a salt,
/// and the same key always produces the same salt.
pub fn instance_salt(env: &Env, token: &InstanceToken, denomination: i128) -> BytesN<32> {
    let mut material: Bytes = token.clone().to_xdr(env);
    material.append(&denomination.to_xdr(env));
    env.crypto().sha256(&material).to_bytes()
}

/// Address a deployer will produce for a given salt.
///
/// Pure prediction: the host derives the address as a two-step hash over the
/// network id, the deployer address and the salt. No deployment happens.
pub fn derive_address(env: &Env, deployer: &Address, salt: &BytesN<32>) -> Address {
    env.deployer()
        .with_address(deployer.clone(), salt.clone())
        .deployed_address()
}

/// Address the factory will deploy a given deployment key at.
pub fn instance_address(
    env: &Env,
    factory: &Address,
    token: &InstanceToken,
    denomination: i128,
) -> Address {
    let salt = instance_salt(env, token, denomination);
    derive_address(env, factory, &salt)
}
