//! Structured event publishing for the voting contract.

use soroban_sdk::{symbol_short, Env, String};

use crate::poll::Poll;

pub fn publish_poll_created(env: &Env, poll: &Poll) {
    env.events().publish(
        (symbol_short!("POLL_NEW"), poll.poll_id),
        (
            poll.description.clone(),
            poll.poll_start,
            poll.poll_end,
        ),
    );
}

pub fn publish_candidate_registered(env: &Env, poll_id: u64, name: &String) {
    env.events().publish(
        (symbol_short!("CAND_NEW"), poll_id),
        name.clone(),
    );
}

pub fn publish_vote_cast(env: &Env, poll_id: u64, name: &String, total_votes: u64) {
    env.events().publish(
        (symbol_short!("VOTE_CST"), poll_id),
        (name.clone(), total_votes),
    );
}
