#![no_std]

pub mod config;
pub mod errors;
pub mod events;
pub mod storage;
pub mod vote;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

pub use config::{
    Config, MAX_CANDIDATES, MAX_NAME_LEN, MAX_PAGE_SIZE, MIN_VOTING_DURATION, VOTE_FEE,
    WINNER_RESIDUAL,
};
pub use errors::{ContractError, ErrorCategory};
pub use vote::{Candidate, CandidateParams, Vote, VoterInfo, VotingInfo, VotingState};

use vote::{leading_candidate, winner_payout};

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner`         – address allowed to create, end and withdraw votes.
    /// * `payment_token` – SAC address of the token vote fees are paid in.
    pub fn initialize(
        env: Env,
        owner: Address,
        payment_token: Address,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::save_config(&env, &Config::new(owner.clone(), payment_token.clone()));

        events::publish_initialized(&env, owner, payment_token);

        Ok(())
    }

    // ── Vote lifecycle ──────────────────────────────────────────────────────

    /// Open a new vote named `name` with a fixed candidate list.
    ///
    /// Owner only. `start_time` is the ledger timestamp from which the
    /// minimum voting duration is measured.
    pub fn create_vote(
        env: Env,
        caller: Address,
        name: String,
        candidates: Vec<CandidateParams>,
        start_time: u64,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        if storage::has_vote(&env, &name) {
            return Err(ContractError::VoteAlreadyExists);
        }

        let mut vote = Vote::new(&env, name.clone(), &candidates, start_time)?;
        vote.transition(VotingState::InProgress)?;

        storage::save_vote(&env, &vote);
        storage::push_vote_name(&env, &name);

        events::publish_vote_created(&env, name, vote.candidates.len(), start_time);

        Ok(())
    }

    /// Cast one ballot for `candidate`, paying exactly `VOTE_FEE`.
    ///
    /// Repeat voters are rejected with `AlreadyVoted` before the payment is
    /// looked at. Nothing is transferred unless every check passes.
    pub fn vote(
        env: Env,
        voter: Address,
        name: String,
        candidate: Address,
        payment: i128,
    ) -> Result<(), ContractError> {
        let config = storage::load_config(&env)?;
        voter.require_auth();

        let mut vote = storage::load_vote(&env, &name)?;
        vote.require_state(VotingState::InProgress)?;

        if storage::has_voted(&env, &name, &voter) {
            return Err(ContractError::AlreadyVoted);
        }
        if payment != config.vote_fee {
            return Err(ContractError::InvalidPayment);
        }

        vote.record_ballot(&candidate, payment)?;

        storage::mark_voted(&env, &name, &voter);
        storage::save_vote(&env, &vote);

        token::Client::new(&env, &config.payment_token).transfer(
            &voter,
            &env.current_contract_address(),
            &payment,
        );

        events::publish_vote_cast(&env, name, voter, candidate, payment);

        Ok(())
    }

    /// Close the vote, record the winner and pay them their share.
    ///
    /// Owner only, and only once `MIN_VOTING_DURATION` has passed since
    /// `start_time`. Returns the winner, if any vote was cast.
    pub fn end_vote(
        env: Env,
        caller: Address,
        name: String,
    ) -> Result<Option<Address>, ContractError> {
        let config = Self::require_owner(&env, &caller)?;

        let mut vote = storage::load_vote(&env, &name)?;
        vote.require_state(VotingState::InProgress)?;

        let ends_at = vote.start_time.saturating_add(config.min_voting_duration);
        if env.ledger().timestamp() < ends_at {
            return Err(ContractError::TooEarly);
        }

        let winner = leading_candidate(&vote.candidates).map(|c| c.address);
        let payout = match winner {
            Some(_) => winner_payout(vote.votes_cast, config.winner_share_per_vote()),
            None => 0,
        };

        vote.winner = winner.clone();
        vote.paid_out = vote.paid_out.saturating_add(payout);
        vote.transition(VotingState::Ended)?;
        storage::save_vote(&env, &vote);

        if let Some(recipient) = &winner {
            if payout > 0 {
                token::Client::new(&env, &config.payment_token).transfer(
                    &env.current_contract_address(),
                    recipient,
                    &payout,
                );
            }
        }

        events::publish_vote_ended(&env, name, winner.clone(), payout);

        Ok(winner)
    }

    /// Send what is left of an ended vote's fees to `target`, or to the
    /// owner when `target` is `None`. Allowed once per vote.
    pub fn withdraw(
        env: Env,
        caller: Address,
        name: String,
        target: Option<Address>,
    ) -> Result<i128, ContractError> {
        let config = Self::require_owner(&env, &caller)?;

        let mut vote = storage::load_vote(&env, &name)?;
        vote.require_state(VotingState::Ended)?;
        if vote.withdraw_occurred {
            return Err(ContractError::AlreadyWithdrawn);
        }

        let recipient = target.unwrap_or(config.owner);
        let amount = vote.available();

        // Mark as withdrawn before transfer (checks-effects-interactions).
        vote.withdraw_occurred = true;
        vote.paid_out = vote.paid_out.saturating_add(amount);
        storage::save_vote(&env, &vote);

        if amount > 0 {
            token::Client::new(&env, &config.payment_token).transfer(
                &env.current_contract_address(),
                &recipient,
                &amount,
            );
        }

        events::publish_withdrawn(&env, name, recipient, amount);

        Ok(amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_voting_info(env: Env, name: String) -> Result<VotingInfo, ContractError> {
        Ok(storage::load_vote(&env, &name)?.info())
    }

    pub fn get_voting_candidate_info(
        env: Env,
        name: String,
        candidate: Address,
    ) -> Result<Candidate, ContractError> {
        storage::load_vote(&env, &name)?
            .candidate(&candidate)
            .ok_or(ContractError::CandidateNotFound)
    }

    /// Addresses that never voted read as `voted: false`.
    pub fn get_voter_info(
        env: Env,
        name: String,
        voter: Address,
    ) -> Result<VoterInfo, ContractError> {
        if !storage::has_vote(&env, &name) {
            return Err(ContractError::VoteNotFound);
        }
        Ok(VoterInfo {
            voted: storage::has_voted(&env, &name, &voter),
        })
    }

    /// Number of votes created so far.
    pub fn vote_count(env: Env) -> u32 {
        storage::vote_count(&env)
    }

    /// Up to `limit` vote names in creation order, starting at index `start`.
    /// `limit` is capped at `MAX_PAGE_SIZE`.
    pub fn list_votes(env: Env, start: u32, limit: u32) -> Vec<String> {
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE))
            .min(storage::vote_count(&env));

        let mut names = Vec::new(&env);
        for index in start..end {
            if let Some(name) = storage::vote_name(&env, index) {
                names.push_back(name);
            }
        }
        names
    }

    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        storage::load_config(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        Ok(storage::load_config(&env)?.owner)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    // ── Ownership transfer (two-step) ──────────────────────────────────────

    /// Propose a new owner. The proposed address must call `accept_owner`.
    pub fn propose_owner(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        storage::set_pending_owner(&env, &new_owner);

        events::publish_owner_transfer_proposed(&env, caller, new_owner);

        Ok(())
    }

    /// Accept the pending transfer. Only the proposed owner can call this.
    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        let mut config = storage::load_config(&env)?;
        new_owner.require_auth();

        let pending = storage::pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        if new_owner != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_owner = config.owner.clone();
        config.owner = new_owner.clone();
        storage::save_config(&env, &config);
        storage::clear_pending_owner(&env);

        events::publish_owner_transfer_accepted(&env, old_owner, new_owner);

        Ok(())
    }

    pub fn cancel_owner_transfer(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_owner(&env, &caller)?;

        let pending = storage::pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        storage::clear_pending_owner(&env);

        events::publish_owner_transfer_cancelled(&env, caller, pending);

        Ok(())
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        storage::pending_owner(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: authenticate `caller` and revert unless it is the owner.
    /// Runs before any vote lookup so non-owners always see `Unauthorized`.
    fn require_owner(env: &Env, caller: &Address) -> Result<Config, ContractError> {
        let config = storage::load_config(env)?;
        caller.require_auth();
        if *caller != config.owner {
            return Err(ContractError::Unauthorized);
        }
        Ok(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
