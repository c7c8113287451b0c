//! Poll record type and storage.

use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol};

// ── Storage key prefix ───────────────────────────────────────────────────────

const POLL: Symbol = symbol_short!("POLL");

// TTL: ~60 days at 5s/ledger
const TTL_THRESHOLD: u32 = 1_036_800;
const TTL_EXTEND_TO: u32 = 2_073_600;

/// Maximum byte length of a poll description.
pub const MAX_DESCRIPTION_LEN: u32 = 280;

// ── Types ─────────────────────────────────────────────────────────────────────

/// An on-chain poll record.
///
/// Created once by `initialize_poll` and immutable thereafter. The record
/// deliberately carries no candidate list: candidates are content-addressed
/// by `(poll_id, name)` and discovered by deriving their keys, so poll
/// records stay fixed-size no matter how many candidates register.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Poll {
    pub poll_id: u64,
    /// The question voters respond to.
    pub description: String,
    /// Unix timestamp (seconds) at which voting opens (inclusive).
    pub poll_start: u64,
    /// Unix timestamp (seconds) at which voting closes (exclusive).
    pub poll_end: u64,
}

// ── Storage helpers ──────────────────────────────────────────────────────────

/// Derive the storage key for a poll.
///
/// Identical ids always derive the identical key, and the `POLL` prefix
/// keeps poll keys disjoint from candidate keys.
pub(crate) fn poll_key(poll_id: u64) -> (Symbol, u64) {
    (POLL, poll_id)
}

pub(crate) fn store(env: &Env, poll: &Poll) {
    let key = poll_key(poll.poll_id);
    env.storage().persistent().set(&key, poll);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn load(env: &Env, poll_id: u64) -> Option<Poll> {
    env.storage().persistent().get(&poll_key(poll_id))
}

pub(crate) fn exists(env: &Env, poll_id: u64) -> bool {
    env.storage().persistent().has(&poll_key(poll_id))
}

// ── Window checks ────────────────────────────────────────────────────────────

/// Whether `now` lies within the poll's voting window `[poll_start, poll_end)`.
pub(crate) fn is_open(poll: &Poll, now: u64) -> bool {
    now >= poll.poll_start && now < poll.poll_end
}
