use crate::vote::VoteManager;
use soroban_sdk::{Env, String};

pub struct ResultsCalculator;

impl ResultsCalculator {
    pub fn get_vote_count(env: &Env) -> u32 {
        VoteManager::yes_count(env) + VoteManager::no_count(env)
    }

    /// Winner of the current tallies. A 0-0 round counts as a tie.
    pub fn get_winner(env: &Env) -> String {
        let yes = VoteManager::yes_count(env);
        let no = VoteManager::no_count(env);

        if yes > no {
            String::from_str(env, "Yes votes have won.")
        } else if no > yes {
            String::from_str(env, "No votes have won.")
        } else {
            String::from_str(env, "Votes are equal.")
        }
    }

    /// Each choice's share of the votes cast, as truncating integer
    /// percentages. Returns (0, 0) when nobody has voted.
    pub fn get_participation_rate(env: &Env) -> (u32, u32) {
        let yes = VoteManager::yes_count(env);
        let no = VoteManager::no_count(env);
        let total = yes + no;

        if total == 0 {
            return (0, 0);
        }

        (yes * 100 / total, no * 100 / total)
    }
}
