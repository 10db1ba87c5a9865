//! Contract events emitted after a successful state change.
//!
//! Indexers subscribe to these topics; the payload layout is part of the
//! contract interface.

use soroban_sdk::{Address, Env, Symbol};

use crate::types::{ProposalId, WorkflowStatus};

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((Symbol::new(env, "voter_registered"), voter.clone()), ());
}

pub fn proposal_registered(env: &Env, proposal_id: ProposalId) {
    env.events()
        .publish((Symbol::new(env, "proposal_registered"),), proposal_id);
}

pub fn voted(env: &Env, voter: &Address, proposal_id: ProposalId) {
    env.events()
        .publish((Symbol::new(env, "voted"), voter.clone()), proposal_id);
}

pub fn workflow_status_change(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events().publish(
        (Symbol::new(env, "workflow_status_change"),),
        (previous, new),
    );
}
