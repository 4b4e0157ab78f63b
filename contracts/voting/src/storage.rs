use soroban_sdk::{contracttype, Address, Env, String};

use crate::config::Config;
use crate::errors::ContractError;
use crate::vote::Vote;

// Keep entries alive for roughly 30 days, topping up to 60 on every write.
const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 1_036_800;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    PendingOwner,
    /// Number of votes ever created.
    VoteCount,
    /// Vote name by creation index.
    VoteName(u32),
    Vote(String),
    Voter(String, Address),
}

fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_ttl_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Configuration ───────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn load_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_ttl_instance(env);
}

pub fn pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PendingOwner)
}

pub fn set_pending_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::PendingOwner, owner);
}

pub fn clear_pending_owner(env: &Env) {
    env.storage().instance().remove(&DataKey::PendingOwner);
}

// ── Votes ───────────────────────────────────────────────────────────────────

pub fn has_vote(env: &Env, name: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(name.clone()))
}

pub fn load_vote(env: &Env, name: &String) -> Result<Vote, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(name.clone()))
        .ok_or(ContractError::VoteNotFound)
}

pub fn save_vote(env: &Env, vote: &Vote) {
    let key = DataKey::Vote(vote.name.clone());
    env.storage().persistent().set(&key, vote);
    extend_ttl_persistent(env, &key);
}

pub fn vote_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::VoteCount)
        .unwrap_or(0)
}

pub fn vote_name(env: &Env, index: u32) -> Option<String> {
    env.storage().persistent().get(&DataKey::VoteName(index))
}

/// Append `name` to the creation-order index.
pub fn push_vote_name(env: &Env, name: &String) {
    let index = vote_count(env);
    let key = DataKey::VoteName(index);
    env.storage().persistent().set(&key, name);
    extend_ttl_persistent(env, &key);

    env.storage()
        .instance()
        .set(&DataKey::VoteCount, &index.saturating_add(1));
    extend_ttl_instance(env);
}

// ── Voters ──────────────────────────────────────────────────────────────────

pub fn has_voted(env: &Env, name: &String, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(name.clone(), voter.clone()))
        .unwrap_or(false)
}

pub fn mark_voted(env: &Env, name: &String, voter: &Address) {
    let key = DataKey::Voter(name.clone(), voter.clone());
    env.storage().persistent().set(&key, &true);
    extend_ttl_persistent(env, &key);
}
