#![allow(dead_code)]

use soroban_sdk::{
    contract, contractimpl, contracttype, testutils::Address as _, token, xdr::ToXdr, Address,
    Bytes, BytesN, Env,
};

use shroud_proposal_creator::{ProposalCreator, ProposalCreatorClient, ProposalSpec};

pub const CREATION_FEE: i128 = 300;
pub const MIN_OBSERVATION_SLOTS: u32 = 10;

// ============================================================
// MOCK EXCHANGE (liquidity gate collaborators)
// ============================================================

#[contracttype]
pub enum AmmKey {
    Pool(Address, Address, u32),
}

#[contract]
pub struct MockAmmFactory;

#[contractimpl]
impl MockAmmFactory {
    pub fn set_pool(env: Env, token_a: Address, token_b: Address, fee_tier: u32, pool: Address) {
        env.storage()
            .persistent()
            .set(&AmmKey::Pool(token_a, token_b, fee_tier), &pool);
    }

    pub fn pool(env: Env, token_a: Address, token_b: Address, fee_tier: u32) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&AmmKey::Pool(token_a, token_b, fee_tier))
    }
}

#[contract]
pub struct MockAmmPool;

#[contractimpl]
impl MockAmmPool {
    pub fn set_observation_slots(env: Env, slots: u32) {
        env.storage()
            .persistent()
            .set(&soroban_sdk::symbol_short!("slots"), &slots);
    }

    pub fn observation_slots(env: Env) -> u32 {
        env.storage()
            .persistent()
            .get(&soroban_sdk::symbol_short!("slots"))
            .unwrap_or(0)
    }
}

// ============================================================
// MOCK PROPOSAL BOOK
// ============================================================

#[contracttype]
pub enum BookKey {
    Count,
    Spec(u32),
}

#[contract]
pub struct MockProposalBook;

#[contractimpl]
impl MockProposalBook {
    pub fn open(env: Env, spec: ProposalSpec) -> u32 {
        let id: u32 = env.storage().persistent().get(&BookKey::Count).unwrap_or(0);
        env.storage().persistent().set(&BookKey::Spec(id), &spec);
        env.storage().persistent().set(&BookKey::Count, &(id + 1));
        id
    }

    pub fn total(env: Env) -> u32 {
        env.storage().persistent().get(&BookKey::Count).unwrap_or(0)
    }

    pub fn spec(env: Env, id: u32) -> Option<ProposalSpec> {
        env.storage().persistent().get(&BookKey::Spec(id))
    }
}

// ============================================================
// MOCK PERMIT TOKEN
// ============================================================
// Minimal fungible token with an off-chain-signed approval entry point,
// standing in for the fee token's permit extension. Nonces are single-use
// and the deadline is checked before the signature.

#[contracttype]
pub enum PermitTokenKey {
    Balance(Address),
    Allowance(Address, Address),
    Nonce(Address),
    Signer(Address),
}

#[contract]
pub struct MockPermitToken;

#[contractimpl]
impl MockPermitToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let key = PermitTokenKey::Balance(to);
        let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        env.storage().persistent().set(&key, &(balance + amount));
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&PermitTokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn set_signer(env: Env, owner: Address, public_key: BytesN<32>) {
        env.storage()
            .persistent()
            .set(&PermitTokenKey::Signer(owner), &public_key);
    }

    pub fn nonce(env: Env, owner: Address) -> u64 {
        env.storage()
            .persistent()
            .get(&PermitTokenKey::Nonce(owner))
            .unwrap_or(0)
    }

    /// Message a permit for (owner, spender, value, deadline) must sign at
    /// the owner's current nonce.
    pub fn permit_digest(
        env: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
    ) -> BytesN<32> {
        let nonce = Self::nonce(env.clone(), owner.clone());
        Self::digest(&env, &owner, &spender, value, nonce, deadline)
    }

    pub fn permit(
        env: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
        signature: BytesN<64>,
    ) {
        if deadline < env.ledger().timestamp() {
            panic!("permit expired");
        }

        let nonce = Self::nonce(env.clone(), owner.clone());
        let digest = Self::digest(&env, &owner, &spender, value, nonce, deadline);
        let public_key: BytesN<32> = env
            .storage()
            .persistent()
            .get(&PermitTokenKey::Signer(owner.clone()))
            .expect("no signer registered");

        let message = Bytes::from_slice(&env, &digest.to_array());
        env.crypto().ed25519_verify(&public_key, &message, &signature);

        env.storage()
            .persistent()
            .set(&PermitTokenKey::Nonce(owner.clone()), &(nonce + 1));
        env.storage()
            .persistent()
            .set(&PermitTokenKey::Allowance(owner, spender), &value);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        let allowance_key = PermitTokenKey::Allowance(from.clone(), spender);
        let allowance: i128 = env.storage().persistent().get(&allowance_key).unwrap_or(0);
        if allowance < amount {
            panic!("insufficient allowance");
        }
        env.storage()
            .persistent()
            .set(&allowance_key, &(allowance - amount));

        let from_key = PermitTokenKey::Balance(from);
        let from_balance: i128 = env.storage().persistent().get(&from_key).unwrap_or(0);
        if from_balance < amount {
            panic!("insufficient balance");
        }
        env.storage().persistent().set(&from_key, &(from_balance - amount));

        let to_key = PermitTokenKey::Balance(to);
        let to_balance: i128 = env.storage().persistent().get(&to_key).unwrap_or(0);
        env.storage().persistent().set(&to_key, &(to_balance + amount));
    }

    fn digest(
        env: &Env,
        owner: &Address,
        spender: &Address,
        value: i128,
        nonce: u64,
        deadline: u64,
    ) -> BytesN<32> {
        let mut material: Bytes = owner.clone().to_xdr(env);
        material.append(&spender.clone().to_xdr(env));
        material.append(&value.to_xdr(env));
        material.append(&nonce.to_xdr(env));
        material.append(&deadline.to_xdr(env));
        env.crypto().sha256(&material).to_bytes()
    }
}

// ============================================================
// FIXTURE
// ============================================================

pub struct CreatorSetup<'a> {
    pub client: ProposalCreatorClient<'a>,
    pub governance: Address,
    pub fee_token: Address,
    pub fee_token_admin: Address,
    pub amm_factory: Address,
    pub base_asset: Address,
    pub book: Address,
}

/// Creator wired to a Stellar Asset fee token, a mock exchange and a mock
/// proposal book.
pub fn setup_creator(env: &Env) -> CreatorSetup<'_> {
    let governance = Address::generate(env);
    let fee_token_admin = Address::generate(env);
    let sac = env.register_stellar_asset_contract_v2(fee_token_admin.clone());
    let fee_token = sac.address();
    let base_asset = Address::generate(env);

    let amm_factory = env.register_contract(None, MockAmmFactory);
    let book = env.register_contract(None, MockProposalBook);

    let creator_id = env.register_contract(None, ProposalCreator);
    let client = ProposalCreatorClient::new(env, &creator_id);
    client.initialize(
        &governance,
        &fee_token,
        &CREATION_FEE,
        &amm_factory,
        &base_asset,
        &MIN_OBSERVATION_SLOTS,
        &book,
    );

    CreatorSetup {
        client,
        governance,
        fee_token,
        fee_token_admin,
        amm_factory,
        base_asset,
        book,
    }
}

/// Register an exchange pool for `token` with the given observation history.
pub fn list_pool(env: &Env, setup: &CreatorSetup, token: &Address, fee_tier: u32, slots: u32) {
    let pool = env.register_contract(None, MockAmmPool);
    MockAmmPoolClient::new(env, &pool).set_observation_slots(&slots);
    MockAmmFactoryClient::new(env, &setup.amm_factory).set_pool(
        token,
        &setup.base_asset,
        &fee_tier,
        &pool,
    );
}

pub fn mint_fee_to(env: &Env, setup: &CreatorSetup, who: &Address, amount: i128) {
    token::StellarAssetClient::new(env, &setup.fee_token).mint(who, &amount);
}

pub fn fee_balance(env: &Env, setup: &CreatorSetup, who: &Address) -> i128 {
    token::Client::new(env, &setup.fee_token).balance(who)
}

pub fn approve_fee(env: &Env, setup: &CreatorSetup, from: &Address, amount: i128) {
    token::Client::new(env, &setup.fee_token).approve(
        from,
        &setup.client.address,
        &amount,
        &1000,
    );
}
