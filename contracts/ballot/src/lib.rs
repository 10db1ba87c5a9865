#![no_std]
//! # Ballot Contract
//!
//! A single-administrator ballot: the administrator registers voters and
//! drives the workflow, voters submit proposals and cast one final vote each,
//! and the tally elects the proposal with the most votes.
//!
//! ## Workflow
//!
//! `RegisteringVoters → ProposalsRegistrationStarted → ProposalsRegistrationEnded
//! → VotingSessionStarted → VotingSessionEnded → VotesTallied`
//!
//! Opening proposal registration appends the `"GENESIS"` proposal as id 0.
//! Ties in the tally go to the lowest proposal id.

mod contract;
mod errors;
mod events;
mod storage;
mod tally;
mod types;

pub use contract::{BallotContract, BallotContractClient, GENESIS_DESCRIPTION};
pub use errors::BallotError;
pub use types::{Proposal, ProposalId, Voter, WorkflowStatus};
