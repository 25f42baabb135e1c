use crate::types::{DataKey, Error, Session};
use soroban_sdk::{symbol_short, Address, Env};

pub struct SessionManager;

impl SessionManager {
    /// Open the first voting window. A `start_time` of 0 means "now".
    pub fn init(env: &Env, start_time: u64, duration: u64) {
        let session = Self::build_window(env, start_time, duration);
        env.storage().instance().set(&DataKey::Session, &session);
    }

    pub fn get_session(env: &Env) -> Result<Session, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Session)
            .ok_or(Error::NotInitialized)
    }

    /// True while the ledger time is inside `[start_time, end_time)` and
    /// no manual close has happened.
    pub fn is_open(env: &Env) -> bool {
        let session: Session = match env.storage().instance().get(&DataKey::Session) {
            Some(session) => session,
            None => return false,
        };

        if session.manually_ended {
            return false;
        }

        let now = env.ledger().timestamp();
        now >= session.start_time && now < session.end_time
    }

    /// Force the current window closed. Closing an already-closed window
    /// succeeds without effect.
    pub fn end_manually(env: &Env, caller: &Address) -> Result<(), Error> {
        Self::verify_admin(env, caller)?;

        let mut session = Self::get_session(env)?;
        if !session.manually_ended {
            session.manually_ended = true;
            env.storage().instance().set(&DataKey::Session, &session);

            env.events().publish(
                (symbol_short!("session"), symbol_short!("ended")),
                caller.clone(),
            );
        }

        Ok(())
    }

    /// Replace the window with a fresh one and reopen the session.
    /// Vote records are cleared separately by the vote manager.
    pub fn reset(
        env: &Env,
        caller: &Address,
        start_time: u64,
        duration: u64,
    ) -> Result<(), Error> {
        Self::verify_admin(env, caller)?;
        Self::get_session(env)?;

        let session = Self::build_window(env, start_time, duration);
        env.storage().instance().set(&DataKey::Session, &session);

        env.events().publish(
            (symbol_short!("session"), symbol_short!("reset")),
            (caller.clone(), session.start_time, session.end_time),
        );

        Ok(())
    }

    /// Verify admin
    pub fn verify_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;

        if caller != &admin {
            return Err(Error::NotAuthorized);
        }

        Ok(())
    }

    fn build_window(env: &Env, start_time: u64, duration: u64) -> Session {
        // A zero start time is the "start now" sentinel.
        let start = if start_time == 0 {
            env.ledger().timestamp()
        } else {
            start_time
        };

        Session {
            start_time: start,
            end_time: start + duration,
            manually_ended: false,
        }
    }
}
