use soroban_sdk::contracttype;

/// Error categories, one per class of rejected call.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Malformed arguments or a call made before initialisation
    Validation = 1,
    /// Caller is not allowed to perform the operation
    Authorization = 2,
    /// Unknown vote or candidate
    NotFound = 3,
    /// Operation invoked in the wrong lifecycle state, or repeated
    StateConflict = 4,
    /// Vote ended before the minimum duration elapsed
    Timing = 5,
    /// Wrong attached value or a second vote
    Payment = 6,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    VoteNotFound = 5,
    VoteAlreadyExists = 6,
    CandidateNotFound = 7,
    DuplicateCandidate = 8,
    TooManyCandidates = 9,
    NotInProgress = 10,
    NotEnded = 11,
    TooEarly = 12,
    InvalidPayment = 13,
    AlreadyVoted = 14,
    AlreadyWithdrawn = 15,
    NoPendingOwner = 16,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::InvalidInput
            | ContractError::DuplicateCandidate
            | ContractError::TooManyCandidates => ErrorCategory::Validation,
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::VoteNotFound
            | ContractError::CandidateNotFound
            | ContractError::NoPendingOwner => ErrorCategory::NotFound,
            ContractError::VoteAlreadyExists
            | ContractError::NotInProgress
            | ContractError::NotEnded
            | ContractError::AlreadyWithdrawn => ErrorCategory::StateConflict,
            ContractError::TooEarly => ErrorCategory::Timing,
            ContractError::InvalidPayment | ContractError::AlreadyVoted => ErrorCategory::Payment,
        }
    }

    /// Returns the reason string a caller sees for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Only contractOwner can start and end the voting",
            ContractError::InvalidInput => "Invalid input parameters provided",
            ContractError::VoteNotFound => "Voting with this name does not exist",
            ContractError::VoteAlreadyExists => "Voting with this name already exists",
            ContractError::CandidateNotFound => "Candidate is not registered in this voting",
            ContractError::DuplicateCandidate => "Candidate address is listed more than once",
            ContractError::TooManyCandidates => "Too many candidates for a single voting",
            ContractError::NotInProgress => "It must be in InProgress votingState",
            ContractError::NotEnded => "It must be in Ended votingState",
            ContractError::TooEarly => "You can end voting only after 3 minutes",
            ContractError::InvalidPayment => {
                "Your payment should be equal to 10000000000000000 wei"
            }
            ContractError::AlreadyVoted => "You already voted",
            ContractError::AlreadyWithdrawn => "Withdraw for this voting has already been made",
            ContractError::NoPendingOwner => "No ownership transfer is pending",
        }
    }
}
