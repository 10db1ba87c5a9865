use crate::types::ProposalId;

/// Picks the proposal with the strictly highest vote count.
///
/// A proposal only displaces the current leader with a strictly greater
/// count, so on a tie the lowest id wins. No proposals elects id 0.
pub fn winning_proposal<I>(vote_counts: I) -> ProposalId
where
    I: IntoIterator<Item = (ProposalId, u32)>,
{
    let mut winner: Option<(ProposalId, u32)> = None;
    for (proposal_id, votes) in vote_counts {
        match winner {
            Some((_, best)) if votes <= best => {}
            _ => winner = Some((proposal_id, votes)),
        }
    }
    winner.map(|(proposal_id, _)| proposal_id).unwrap_or(0)
}
