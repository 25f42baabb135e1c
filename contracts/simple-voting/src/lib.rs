#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol};

mod results;
mod session;
mod types;
mod vote;

use crate::results::ResultsCalculator;
use crate::session::SessionManager;
use crate::types::{DataKey, Error};
use crate::vote::VoteManager;

pub trait SimpleVotingTrait {
    /// Set the admin and open the first voting window.
    /// A `start_time` of 0 means the current ledger time.
    fn initialize(env: Env, admin: Address, start_time: u64, duration: u64) -> Result<(), Error>;

    /// Cast a yes (true) or no (false) vote. One vote per address per round.
    fn vote(env: Env, voter: Address, choice: bool) -> Result<(), Error>;

    /// Close the window early. Admin only; idempotent.
    fn end_vote_manually(env: Env, caller: Address) -> Result<(), Error>;

    /// Clear all votes and open a fresh window. Admin only.
    fn reset_vote(env: Env, caller: Address, start_time: u64, duration: u64) -> Result<(), Error>;

    // View functions
    fn check_has_voted(env: Env, voter: Address) -> bool;
    fn get_my_vote(env: Env, voter: Address) -> Result<bool, Error>;
    fn get_yes_count(env: Env) -> u32;
    fn get_no_count(env: Env) -> u32;
    fn get_vote_count(env: Env) -> u32;
    fn get_winner(env: Env) -> String;
    fn get_participation_rate(env: Env) -> (u32, u32);
    fn get_start_time(env: Env) -> Result<u64, Error>;
    fn get_end_time(env: Env) -> Result<u64, Error>;
    fn is_voting_open(env: Env) -> bool;
}

#[contract]
pub struct SimpleVoting;

#[contractimpl]
impl SimpleVotingTrait for SimpleVoting {
    fn initialize(env: Env, admin: Address, start_time: u64, duration: u64) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);

        SessionManager::init(&env, start_time, duration);
        VoteManager::init(&env);

        env.events().publish((Symbol::new(&env, "init"),), (admin,));
        Ok(())
    }

    fn vote(env: Env, voter: Address, choice: bool) -> Result<(), Error> {
        voter.require_auth();
        VoteManager::cast_vote(&env, voter, choice)
    }

    fn end_vote_manually(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        SessionManager::end_manually(&env, &caller)
    }

    fn reset_vote(env: Env, caller: Address, start_time: u64, duration: u64) -> Result<(), Error> {
        caller.require_auth();
        SessionManager::reset(&env, &caller, start_time, duration)?;
        VoteManager::clear(&env);
        Ok(())
    }

    fn check_has_voted(env: Env, voter: Address) -> bool {
        VoteManager::has_voted(&env, &voter)
    }

    fn get_my_vote(env: Env, voter: Address) -> Result<bool, Error> {
        VoteManager::get_vote(&env, &voter)
    }

    fn get_yes_count(env: Env) -> u32 {
        VoteManager::yes_count(&env)
    }

    fn get_no_count(env: Env) -> u32 {
        VoteManager::no_count(&env)
    }

    fn get_vote_count(env: Env) -> u32 {
        ResultsCalculator::get_vote_count(&env)
    }

    fn get_winner(env: Env) -> String {
        ResultsCalculator::get_winner(&env)
    }

    fn get_participation_rate(env: Env) -> (u32, u32) {
        ResultsCalculator::get_participation_rate(&env)
    }

    fn get_start_time(env: Env) -> Result<u64, Error> {
        Ok(SessionManager::get_session(&env)?.start_time)
    }

    fn get_end_time(env: Env) -> Result<u64, Error> {
        Ok(SessionManager::get_session(&env)?.end_time)
    }

    fn is_voting_open(env: Env) -> bool {
        SessionManager::is_open(&env)
    }
}
