use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::{
    errors::BallotError,
    events, storage, tally,
    types::{Proposal, ProposalId, Voter, WorkflowStatus},
};

/// Description of the sentinel proposal created when proposal registration opens.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

#[contract]
pub struct BallotContract;

// ── Guards ───────────────────────────────────────────────────────────────────
// Every guard runs before the first write of an entry point.

fn require_admin(env: &Env, caller: &Address) -> Result<(), BallotError> {
    caller.require_auth();
    let admin = storage::get_admin(env)?;
    if *caller != admin {
        return Err(BallotError::NotAdministrator);
    }
    Ok(())
}

fn require_voter(env: &Env, caller: &Address) -> Result<Voter, BallotError> {
    caller.require_auth();
    let voter = storage::get_voter(env, caller);
    if !voter.is_registered {
        return Err(BallotError::NotRegisteredVoter);
    }
    Ok(voter)
}

fn require_status(
    env: &Env,
    expected: WorkflowStatus,
    error: BallotError,
) -> Result<WorkflowStatus, BallotError> {
    let current = storage::get_status(env)?;
    if current != expected {
        log!(env, "rejected: requires status {}, current {}", expected, current);
        return Err(error);
    }
    Ok(current)
}

/// Checks that `caller` may move the ballot out of `from` and returns the
/// phase it moves into. Nothing is written.
fn check_transition(
    env: &Env,
    caller: &Address,
    from: WorkflowStatus,
    error: BallotError,
) -> Result<WorkflowStatus, BallotError> {
    require_admin(env, caller)?;
    require_status(env, from, error)?;
    from.next().ok_or(BallotError::InvalidTransition)
}

fn commit_transition(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    storage::set_status(env, new);
    log!(env, "workflow status {} -> {}", previous, new);
    events::workflow_status_change(env, previous, new);
}

#[contractimpl]
impl BallotContract {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Deploys the ballot with `admin` as its administrator for life.
    pub fn __constructor(env: Env, admin: Address) {
        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_winning_proposal_id(&env, 0);
        storage::bump_instance(&env);
    }

    // ── Registration ─────────────────────────────────────────────────────────

    /// Registers `voter`. Administrator only, while registering voters.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), BallotError> {
        storage::bump_instance(&env);
        require_admin(&env, &caller)?;
        require_status(
            &env,
            WorkflowStatus::RegisteringVoters,
            BallotError::RegistrationNotOpen,
        )?;
        if storage::get_voter(&env, &voter).is_registered {
            return Err(BallotError::AlreadyRegistered);
        }

        storage::save_voter(
            &env,
            &voter,
            &Voter {
                is_registered: true,
                has_voted: false,
                voted_proposal_id: None,
            },
        );
        events::voter_registered(&env, &voter);
        Ok(())
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Submits a proposal and returns its id.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<ProposalId, BallotError> {
        storage::bump_instance(&env);
        require_voter(&env, &caller)?;
        require_status(
            &env,
            WorkflowStatus::ProposalsRegistrationStarted,
            BallotError::ProposalsNotOpen,
        )?;
        if description.is_empty() {
            return Err(BallotError::EmptyProposal);
        }

        let proposal_id = storage::push_proposal(
            &env,
            &Proposal {
                description,
                vote_count: 0,
            },
        );
        events::proposal_registered(&env, proposal_id);
        Ok(proposal_id)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Casts the caller's single, final vote for `proposal_id`.
    pub fn set_vote(env: Env, caller: Address, proposal_id: ProposalId) -> Result<(), BallotError> {
        storage::bump_instance(&env);
        let mut voter = require_voter(&env, &caller)?;
        require_status(
            &env,
            WorkflowStatus::VotingSessionStarted,
            BallotError::VotingNotOpen,
        )?;
        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(BallotError::ProposalNotFound)?;
        if voter.has_voted {
            return Err(BallotError::AlreadyVoted);
        }

        proposal.vote_count += 1;
        voter.has_voted = true;
        voter.voted_proposal_id = Some(proposal_id);
        storage::save_proposal(&env, proposal_id, &proposal);
        storage::save_voter(&env, &caller, &voter);
        events::voted(&env, &caller, proposal_id);
        Ok(())
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    /// Opens proposal registration and appends the GENESIS proposal as id 0.
    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), BallotError> {
        storage::bump_instance(&env);
        let from = WorkflowStatus::RegisteringVoters;
        let to = check_transition(&env, &caller, from, BallotError::InvalidTransition)?;

        storage::push_proposal(
            &env,
            &Proposal {
                description: String::from_str(&env, GENESIS_DESCRIPTION),
                vote_count: 0,
            },
        );
        commit_transition(&env, from, to);
        Ok(())
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), BallotError> {
        storage::bump_instance(&env);
        let from = WorkflowStatus::ProposalsRegistrationStarted;
        let to = check_transition(&env, &caller, from, BallotError::InvalidTransition)?;
        commit_transition(&env, from, to);
        Ok(())
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), BallotError> {
        storage::bump_instance(&env);
        let from = WorkflowStatus::ProposalsRegistrationEnded;
        let to = check_transition(&env, &caller, from, BallotError::InvalidTransition)?;
        commit_transition(&env, from, to);
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), BallotError> {
        storage::bump_instance(&env);
        let from = WorkflowStatus::VotingSessionStarted;
        let to = check_transition(&env, &caller, from, BallotError::InvalidTransition)?;
        commit_transition(&env, from, to);
        Ok(())
    }

    /// Elects the proposal with the most votes; ties go to the lowest id.
    pub fn tally_votes(env: Env, caller: Address) -> Result<ProposalId, BallotError> {
        storage::bump_instance(&env);
        let from = WorkflowStatus::VotingSessionEnded;
        let to = check_transition(&env, &caller, from, BallotError::TallyNotReady)?;

        let count = storage::get_proposal_count(&env);
        let winner = tally::winning_proposal((0..count).filter_map(|proposal_id| {
            storage::get_proposal(&env, proposal_id).map(|p| (proposal_id, p.vote_count))
        }));

        storage::set_winning_proposal_id(&env, winner);
        commit_transition(&env, from, to);
        Ok(winner)
    }

    // ── Voter Queries ────────────────────────────────────────────────────────

    /// Registry record for `voter`; unregistered addresses read as default.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, BallotError> {
        storage::bump_instance(&env);
        require_voter(&env, &caller)?;
        Ok(storage::get_voter(&env, &voter))
    }

    pub fn get_proposal(
        env: Env,
        caller: Address,
        proposal_id: ProposalId,
    ) -> Result<Proposal, BallotError> {
        storage::bump_instance(&env);
        require_voter(&env, &caller)?;
        storage::get_proposal(&env, proposal_id).ok_or(BallotError::ProposalNotFound)
    }

    // ── Public Queries ───────────────────────────────────────────────────────

    pub fn winning_proposal_id(env: Env) -> ProposalId {
        storage::get_winning_proposal_id(&env)
    }

    pub fn workflow_status(env: Env) -> Result<WorkflowStatus, BallotError> {
        storage::get_status(&env)
    }

    pub fn admin(env: Env) -> Result<Address, BallotError> {
        storage::get_admin(&env)
    }

    /// Number of proposals, GENESIS included.
    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }
}
