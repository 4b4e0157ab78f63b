use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::config::{MAX_CANDIDATES, MAX_NAME_LEN};
use crate::errors::ContractError;

/// Lifecycle of a named vote. Moves forward one step at a time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VotingState {
    NotStarted = 0,
    InProgress = 1,
    Ended = 2,
}

impl VotingState {
    /// The only state reachable from `self`, if any.
    pub fn next(self) -> Option<VotingState> {
        match self {
            VotingState::NotStarted => Some(VotingState::InProgress),
            VotingState::InProgress => Some(VotingState::Ended),
            VotingState::Ended => None,
        }
    }
}

/// Candidate entry supplied by the owner to `create_vote`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateParams {
    /// Display name; may be empty.
    pub name: String,
    pub address: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub address: Address,
    pub vote_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterInfo {
    pub voted: bool,
}

/// Snapshot of a vote returned by `get_voting_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingInfo {
    pub state: VotingState,
    /// Gross fees collected.
    pub balance: i128,
    /// Funds still held for this vote after payouts.
    pub available: i128,
    pub withdraw_occurred: bool,
    pub winner: Option<Address>,
    pub start_time: u64,
    pub votes_cast: u32,
    pub candidate_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub name: String,
    pub state: VotingState,
    pub start_time: u64,
    pub candidates: Vec<Candidate>,
    pub votes_cast: u32,
    pub balance: i128,
    pub paid_out: i128,
    pub winner: Option<Address>,
    pub withdraw_occurred: bool,
}

impl Vote {
    /// Build a vote in `NotStarted`, validating the candidate list.
    pub fn new(
        env: &Env,
        name: String,
        params: &Vec<CandidateParams>,
        start_time: u64,
    ) -> Result<Self, ContractError> {
        if name.len() == 0 || name.len() > MAX_NAME_LEN {
            return Err(ContractError::InvalidInput);
        }
        if params.len() > MAX_CANDIDATES {
            return Err(ContractError::TooManyCandidates);
        }

        let mut candidates: Vec<Candidate> = Vec::new(env);
        for param in params.iter() {
            if param.name.len() > MAX_NAME_LEN {
                return Err(ContractError::InvalidInput);
            }
            if candidates.iter().any(|c| c.address == param.address) {
                return Err(ContractError::DuplicateCandidate);
            }
            candidates.push_back(Candidate {
                name: param.name,
                address: param.address,
                vote_count: 0,
            });
        }

        Ok(Self {
            name,
            state: VotingState::NotStarted,
            start_time,
            candidates,
            votes_cast: 0,
            balance: 0,
            paid_out: 0,
            winner: None,
            withdraw_occurred: false,
        })
    }

    /// Move to `target`, which must be the direct successor of the current state.
    pub fn transition(&mut self, target: VotingState) -> Result<(), ContractError> {
        if self.state.next() != Some(target) {
            return Err(match target {
                VotingState::Ended => ContractError::NotInProgress,
                _ => ContractError::InvalidInput,
            });
        }
        self.state = target;
        Ok(())
    }

    pub fn require_state(&self, expected: VotingState) -> Result<(), ContractError> {
        if self.state == expected {
            return Ok(());
        }
        Err(match expected {
            VotingState::Ended => ContractError::NotEnded,
            _ => ContractError::NotInProgress,
        })
    }

    pub fn candidate(&self, address: &Address) -> Option<Candidate> {
        self.candidates.iter().find(|c| c.address == *address)
    }

    /// Count one paid ballot for `candidate`.
    pub fn record_ballot(
        &mut self,
        candidate: &Address,
        payment: i128,
    ) -> Result<(), ContractError> {
        let index = self
            .candidates
            .iter()
            .position(|c| c.address == *candidate)
            .ok_or(ContractError::CandidateNotFound)? as u32;

        let mut entry = self
            .candidates
            .get(index)
            .ok_or(ContractError::CandidateNotFound)?;
        entry.vote_count = entry.vote_count.saturating_add(1);
        self.candidates.set(index, entry);

        self.votes_cast = self.votes_cast.saturating_add(1);
        self.balance = self.balance.saturating_add(payment);
        Ok(())
    }

    /// Funds still held by the contract for this vote.
    pub fn available(&self) -> i128 {
        self.balance.saturating_sub(self.paid_out)
    }

    pub fn info(&self) -> VotingInfo {
        VotingInfo {
            state: self.state,
            balance: self.balance,
            available: self.available(),
            withdraw_occurred: self.withdraw_occurred,
            winner: self.winner.clone(),
            start_time: self.start_time,
            votes_cast: self.votes_cast,
            candidate_count: self.candidates.len(),
        }
    }
}

/// Candidate with the strictly highest count. Ties go to the earliest
/// registered candidate; no votes at all means no winner.
pub fn leading_candidate(candidates: &Vec<Candidate>) -> Option<Candidate> {
    let mut leader: Option<Candidate> = None;
    for candidate in candidates.iter() {
        if candidate.vote_count == 0 {
            continue;
        }
        let ahead = match &leader {
            Some(current) => candidate.vote_count > current.vote_count,
            None => true,
        };
        if ahead {
            leader = Some(candidate);
        }
    }
    leader
}

/// Total owed to the winner once `votes_cast` fees have been collected,
/// at `share_per_vote` each.
pub fn winner_payout(votes_cast: u32, share_per_vote: i128) -> i128 {
    i128::from(votes_cast).saturating_mul(share_per_vote)
}
