#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, String};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub payment_token: Address,
    pub timestamp: u64,
}

/// Fired when the owner opens a new vote.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCreatedEvent {
    pub name: String,
    pub candidate_count: u32,
    pub start_time: u64,
    pub timestamp: u64,
}

/// Fired for every accepted ballot.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCastEvent {
    pub name: String,
    pub voter: Address,
    pub candidate: Address,
    pub payment: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteEndedEvent {
    pub name: String,
    pub winner: Option<Address>,
    pub payout: i128,
    pub timestamp: u64,
}

/// Fired when the owner collects the residual of an ended vote.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub name: String,
    pub target: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferProposedEvent {
    pub current_owner: Address,
    pub proposed_owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferCancelledEvent {
    pub owner: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, payment_token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            payment_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_vote_created(env: &Env, name: String, candidate_count: u32, start_time: u64) {
    env.events().publish(
        (symbol_short!("VOTE_NEW"), name.clone()),
        VoteCreatedEvent {
            name,
            candidate_count,
            start_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_vote_cast(
    env: &Env,
    name: String,
    voter: Address,
    candidate: Address,
    payment: i128,
) {
    env.events().publish(
        (symbol_short!("VOTED"), voter.clone()),
        VoteCastEvent {
            name,
            voter,
            candidate,
            payment,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_vote_ended(env: &Env, name: String, winner: Option<Address>, payout: i128) {
    env.events().publish(
        (symbol_short!("END_VOTE"), name.clone()),
        VoteEndedEvent {
            name,
            winner,
            payout,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, name: String, target: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), target.clone()),
        WithdrawnEvent {
            name,
            target,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_proposed(env: &Env, current_owner: Address, proposed_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), current_owner.clone()),
        OwnerTransferProposedEvent {
            current_owner,
            proposed_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnerTransferAcceptedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_cancelled(env: &Env, owner: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), owner.clone()),
        OwnerTransferCancelledEvent {
            owner,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
