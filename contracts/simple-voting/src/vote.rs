use crate::session::SessionManager;
use crate::types::{DataKey, Error, VoteMap, VoteRecord};
use soroban_sdk::{symbol_short, Address, Env, Map};

pub struct VoteManager;

impl VoteManager {
    pub fn init(env: &Env) {
        let votes: VoteMap = Map::new(env);
        env.storage().instance().set(&DataKey::Votes, &votes);
        env.storage().instance().set(&DataKey::YesCount, &0u32);
        env.storage().instance().set(&DataKey::NoCount, &0u32);
    }

    pub fn cast_vote(env: &Env, voter: Address, choice: bool) -> Result<(), Error> {
        // Window check first, then the one-vote check.
        if !SessionManager::is_open(env) {
            return Err(Error::VotingClosed);
        }

        let mut votes: VoteMap = env
            .storage()
            .instance()
            .get(&DataKey::Votes)
            .ok_or(Error::NotInitialized)?;

        if votes.contains_key(voter.clone()) {
            return Err(Error::AlreadyVoted);
        }

        let record = VoteRecord {
            voter: voter.clone(),
            choice,
            timestamp: env.ledger().timestamp(),
        };
        votes.set(voter.clone(), record);
        env.storage().instance().set(&DataKey::Votes, &votes);

        let key = if choice {
            DataKey::YesCount
        } else {
            DataKey::NoCount
        };
        let count: u32 = env.storage().instance().get(&key).unwrap_or(0);
        env.storage().instance().set(&key, &(count + 1));

        env.events().publish(
            (symbol_short!("vote"), symbol_short!("cast")),
            (voter, choice),
        );

        Ok(())
    }

    pub fn has_voted(env: &Env, voter: &Address) -> bool {
        match env
            .storage()
            .instance()
            .get::<DataKey, VoteMap>(&DataKey::Votes)
        {
            Some(votes) => votes.contains_key(voter.clone()),
            None => false,
        }
    }

    pub fn get_vote(env: &Env, voter: &Address) -> Result<bool, Error> {
        let votes: VoteMap = env
            .storage()
            .instance()
            .get(&DataKey::Votes)
            .ok_or(Error::HasNotVoted)?;

        let record = votes.get(voter.clone()).ok_or(Error::HasNotVoted)?;
        Ok(record.choice)
    }

    pub fn yes_count(env: &Env) -> u32 {
        env.storage().instance().get(&DataKey::YesCount).unwrap_or(0)
    }

    pub fn no_count(env: &Env) -> u32 {
        env.storage().instance().get(&DataKey::NoCount).unwrap_or(0)
    }

    /// Drop every vote record and zero both tallies.
    pub fn clear(env: &Env) {
        Self::init(env);
    }
}
