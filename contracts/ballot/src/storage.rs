use soroban_sdk::{Address, Env};

use crate::errors::BallotError;
use crate::types::{DataKey, Proposal, ProposalId, Voter, WorkflowStatus};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// ~5s per ledger. Entries are bumped on write, the instance on every call.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, BallotError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(BallotError::NotInitialized)
}

// ── Workflow ─────────────────────────────────────────────────────────────────

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

pub fn get_status(env: &Env) -> Result<WorkflowStatus, BallotError> {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .ok_or(BallotError::NotInitialized)
}

pub fn set_winning_proposal_id(env: &Env, proposal_id: ProposalId) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposalId, &proposal_id);
}

pub fn get_winning_proposal_id(env: &Env) -> ProposalId {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposalId)
        .unwrap_or(0)
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn get_voter(env: &Env, address: &Address) -> Voter {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(address.clone()))
        .unwrap_or_default()
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

/// Appends `proposal` at the next sequential id and returns that id.
pub fn push_proposal(env: &Env, proposal: &Proposal) -> ProposalId {
    let proposal_id = get_proposal_count(env);
    save_proposal(env, proposal_id, proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(proposal_id + 1));
    proposal_id
}

pub fn save_proposal(env: &Env, proposal_id: ProposalId, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn get_proposal(env: &Env, proposal_id: ProposalId) -> Option<Proposal> {
    if proposal_id >= get_proposal_count(env) {
        return None;
    }
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}
