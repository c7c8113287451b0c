//! Candidate record type and storage.

use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol};

// ── Storage key prefix ───────────────────────────────────────────────────────

const CANDIDATE: Symbol = symbol_short!("CAND");

// TTL: ~60 days at 5s/ledger
const TTL_THRESHOLD: u32 = 1_036_800;
const TTL_EXTEND_TO: u32 = 2_073_600;

/// Maximum byte length of a candidate name.
pub const MAX_NAME_LEN: u32 = 32;

// ── Types ─────────────────────────────────────────────────────────────────────

/// An option voters may choose under a specific poll.
///
/// The parent `poll_id` is not stored in the record — it is part of the
/// storage key, so a candidate's identity is fully determined by where it
/// lives. Two polls may each register the same name without interfering.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub candidate_name: String,
    /// Total accepted votes. Starts at 0, grows by exactly 1 per vote.
    pub candidate_votes: u64,
}

// ── Storage helpers ──────────────────────────────────────────────────────────

/// Derive the storage key for a candidate.
///
/// Keyed by `(poll_id, name)` so any caller can compute a candidate's
/// location from public knowledge without consulting an index.
pub(crate) fn candidate_key(poll_id: u64, name: &String) -> (Symbol, u64, String) {
    (CANDIDATE, poll_id, name.clone())
}

pub(crate) fn store(env: &Env, poll_id: u64, candidate: &Candidate) {
    let key = candidate_key(poll_id, &candidate.candidate_name);
    env.storage().persistent().set(&key, candidate);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn load(env: &Env, poll_id: u64, name: &String) -> Option<Candidate> {
    env.storage().persistent().get(&candidate_key(poll_id, name))
}

pub(crate) fn exists(env: &Env, poll_id: u64, name: &String) -> bool {
    env.storage().persistent().has(&candidate_key(poll_id, name))
}
