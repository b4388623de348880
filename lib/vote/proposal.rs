use crate::chess::Move;

/// A member's pending vote for the current turn of their team.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Proposal(Option<Move>);

impl Proposal {
    /// The move voted for, if any.
    pub fn get(&self) -> Option<&Move> {
        self.0.as_ref()
    }

    /// Whether no vote has been cast.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Replaces the vote, returning the previous one.
    pub fn vote(&mut self, m: Move) -> Option<Move> {
        self.0.replace(m)
    }

    /// Withdraws the vote, returning it.
    pub fn clear(&mut self) -> Option<Move> {
        self.0.take()
    }
}
