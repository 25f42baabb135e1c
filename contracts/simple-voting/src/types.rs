use soroban_sdk::{contracterror, contracttype, Address, Map};

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Admin,    // Voting authority
    Session,  // Current voting window
    Votes,    // Voter -> VoteRecord
    YesCount, // Running yes tally
    NoCount,  // Running no tally
}

/// One round's voting window
#[contracttype]
#[derive(Clone)]
pub struct Session {
    pub start_time: u64,
    pub end_time: u64,
    pub manually_ended: bool,
}

/// A single recorded vote
#[contracttype]
#[derive(Clone)]
pub struct VoteRecord {
    pub voter: Address,
    pub choice: bool,
    pub timestamp: u64,
}

/// Vote records for the current round
pub type VoteMap = Map<Address, VoteRecord>;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,     // Contract not initialized
    AlreadyInitialized = 2, // Contract already setup
    NotAuthorized = 3,      // Caller is not the admin
    VotingClosed = 4,       // Vote cast outside the open window
    AlreadyVoted = 5,       // Caller already voted this round
    HasNotVoted = 6,        // Vote lookup for a non-voter
}
