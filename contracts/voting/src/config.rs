use soroban_sdk::{contracttype, Address};

/// Exact amount a voter must attach to `vote`.
pub const VOTE_FEE: i128 = 10_000_000_000_000_000;

/// Portion of each vote fee kept back from the winner for the owner's withdrawal.
pub const WINNER_RESIDUAL: i128 = 1_000_000_000_000_000;

/// Seconds after `start_time` before a vote may be ended.
pub const MIN_VOTING_DURATION: u64 = 180;

pub const MAX_CANDIDATES: u32 = 100;

/// Longest vote or candidate name, in bytes.
pub const MAX_NAME_LEN: u32 = 64;

/// Most vote names returned by a single `list_votes` page.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Deployment-time configuration, fixed by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Address allowed to create, end and withdraw votes.
    pub owner: Address,
    /// SAC address of the token voters pay the fee in.
    pub payment_token: Address,
    pub vote_fee: i128,
    pub winner_residual: i128,
    pub min_voting_duration: u64,
}

impl Config {
    pub fn new(owner: Address, payment_token: Address) -> Self {
        Self {
            owner,
            payment_token,
            vote_fee: VOTE_FEE,
            winner_residual: WINNER_RESIDUAL,
            min_voting_duration: MIN_VOTING_DURATION,
        }
    }

    /// Amount paid to the winner for every vote cast.
    pub fn winner_share_per_vote(&self) -> i128 {
        self.vote_fee.saturating_sub(self.winner_residual)
    }
}
