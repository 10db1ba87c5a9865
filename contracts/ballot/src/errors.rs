//! Error codes returned by the ballot contract.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BallotError {
    /// Caller is not the ballot administrator
    NotAdministrator = 1,
    /// Caller is not a registered voter
    NotRegisteredVoter = 2,
    /// Voters can only be added while registering voters
    RegistrationNotOpen = 3,
    /// Address is already in the voter registry
    AlreadyRegistered = 4,
    /// Proposals can only be added while proposal registration is open
    ProposalsNotOpen = 5,
    /// Proposal description is empty
    EmptyProposal = 6,
    /// Votes can only be cast during the voting session
    VotingNotOpen = 7,
    /// No proposal with the given id
    ProposalNotFound = 8,
    /// Caller has already cast a vote
    AlreadyVoted = 9,
    /// Phase change requested from the wrong phase
    InvalidTransition = 10,
    /// Tally requested before the voting session ended
    TallyNotReady = 11,
    /// Administrator or workflow status record is missing
    NotInitialized = 12,
}
