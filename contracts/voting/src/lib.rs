#![no_std]

//! # Voting
//!
//! An on-ledger voting contract with three mutating operations:
//!
//! - **`initialize_poll`** — create a poll with a description and a
//!   `[poll_start, poll_end)` voting window.
//! - **`initialize_candidate`** — register a named candidate under an
//!   existing poll.
//! - **`vote`** — cast a vote for a candidate while the poll is open,
//!   incrementing its counter by exactly 1.
//!
//! Every record is content-addressed: a poll lives at a key derived from its
//! id, a candidate at a key derived from `(poll_id, name)`. Uniqueness falls
//! out of key derivation — creating a record that already exists fails with a
//! typed error instead of overwriting. Handlers touch only the records their
//! arguments derive, so votes for different candidates never contend.

pub mod candidate;
pub mod events;
pub mod poll;

use soroban_sdk::{contract, contractimpl, Env, String};

use candidate::{Candidate, MAX_NAME_LEN};
use poll::{Poll, MAX_DESCRIPTION_LEN};

// ── Error codes ───────────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VotingError {
    InvalidTimeRange = 1,
    DescriptionTooLong = 2,
    NameTooLong = 3,
    PollAlreadyExists = 4,
    CandidateAlreadyExists = 5,
    PollNotFound = 6,
    CandidateNotFound = 7,
    VotingNotOpen = 8,
    VotingClosed = 9,
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Poll creation ─────────────────────────────────────────────────────────

    /// Create a new poll.
    ///
    /// * `poll_id`     — caller-chosen identifier; at most one poll may ever
    ///                   exist per id.
    /// * `description` — the question, at most [`MAX_DESCRIPTION_LEN`] bytes.
    /// * `poll_start`  — unix seconds at which voting opens (inclusive).
    /// * `poll_end`    — unix seconds at which voting closes (exclusive).
    ///
    /// The poll record is immutable once created: there is no edit or delete
    /// operation.
    pub fn initialize_poll(
        env: Env,
        poll_id: u64,
        description: String,
        poll_start: u64,
        poll_end: u64,
    ) -> Result<(), VotingError> {
        if poll_start >= poll_end {
            return Err(VotingError::InvalidTimeRange);
        }
        if description.len() > MAX_DESCRIPTION_LEN {
            return Err(VotingError::DescriptionTooLong);
        }
        if poll::exists(&env, poll_id) {
            return Err(VotingError::PollAlreadyExists);
        }

        let new_poll = Poll {
            poll_id,
            description,
            poll_start,
            poll_end,
        };
        poll::store(&env, &new_poll);
        events::publish_poll_created(&env, &new_poll);

        Ok(())
    }

    // ── Candidate registration ────────────────────────────────────────────────

    /// Register a candidate under an existing poll.
    ///
    /// Names are unique per poll; the same name may be reused under a
    /// different poll since the storage key includes the poll id. The
    /// candidate's counter starts at 0.
    pub fn initialize_candidate(
        env: Env,
        candidate_name: String,
        poll_id: u64,
    ) -> Result<(), VotingError> {
        if candidate_name.len() > MAX_NAME_LEN {
            return Err(VotingError::NameTooLong);
        }
        if !poll::exists(&env, poll_id) {
            return Err(VotingError::PollNotFound);
        }
        if candidate::exists(&env, poll_id, &candidate_name) {
            return Err(VotingError::CandidateAlreadyExists);
        }

        let new_candidate = Candidate {
            candidate_name: candidate_name.clone(),
            candidate_votes: 0,
        };
        candidate::store(&env, poll_id, &new_candidate);
        events::publish_candidate_registered(&env, poll_id, &candidate_name);

        Ok(())
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    /// Cast one vote for `candidate_name` under `poll_id`.
    ///
    /// Accepted only while the ledger timestamp lies within the poll's
    /// `[poll_start, poll_end)` window. A vote is a single read-modify-write
    /// on the one candidate record it targets; no other record is touched.
    ///
    /// Returns the candidate's updated vote total.
    pub fn vote(env: Env, candidate_name: String, poll_id: u64) -> Result<u64, VotingError> {
        let target_poll = poll::load(&env, poll_id).ok_or(VotingError::PollNotFound)?;

        let now = env.ledger().timestamp();
        if now < target_poll.poll_start {
            return Err(VotingError::VotingNotOpen);
        }
        if now >= target_poll.poll_end {
            return Err(VotingError::VotingClosed);
        }

        let mut target = candidate::load(&env, poll_id, &candidate_name)
            .ok_or(VotingError::CandidateNotFound)?;

        target.candidate_votes = target.candidate_votes.saturating_add(1);
        candidate::store(&env, poll_id, &target);
        events::publish_vote_cast(&env, poll_id, &candidate_name, target.candidate_votes);

        Ok(target.candidate_votes)
    }

    // ── View functions ────────────────────────────────────────────────────────

    pub fn get_poll(env: Env, poll_id: u64) -> Option<Poll> {
        poll::load(&env, poll_id)
    }

    pub fn get_candidate(
        env: Env,
        poll_id: u64,
        candidate_name: String,
    ) -> Option<Candidate> {
        candidate::load(&env, poll_id, &candidate_name)
    }

    pub fn has_poll(env: Env, poll_id: u64) -> bool {
        poll::exists(&env, poll_id)
    }

    /// Whether the poll's voting window currently contains the ledger time.
    pub fn is_voting_open(env: Env, poll_id: u64) -> Result<bool, VotingError> {
        let target_poll = poll::load(&env, poll_id).ok_or(VotingError::PollNotFound)?;
        Ok(poll::is_open(&target_poll, env.ledger().timestamp()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
