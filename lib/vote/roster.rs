use super::{Proposal, UserId};
use crate::chess::Move;
use std::collections::HashMap;

/// The members of one team and their pending [`Proposal`]s.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Roster(HashMap<UserId, Proposal>);

impl Roster {
    /// The number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the team has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the user is a member.
    pub fn contains(&self, user: &UserId) -> bool {
        self.0.contains_key(user)
    }

    /// Enrolls the user with an empty [`Proposal`], discarding any previous one.
    pub fn enroll(&mut self, user: UserId) {
        self.0.insert(user, Proposal::default());
    }

    /// Removes the user, returning whether they were a member.
    pub fn dismiss(&mut self, user: &UserId) -> bool {
        self.0.remove(user).is_some()
    }

    /// The user's [`Proposal`], if a member.
    pub fn proposal(&self, user: &UserId) -> Option<&Proposal> {
        self.0.get(user)
    }

    /// The user's mutable [`Proposal`], if a member.
    pub fn proposal_mut(&mut self, user: &UserId) -> Option<&mut Proposal> {
        self.0.get_mut(user)
    }

    /// An iterator over the members.
    pub fn members(&self) -> impl Iterator<Item = &UserId> {
        self.0.keys()
    }

    /// An iterator over the votes cast, skipping members that have not voted.
    pub fn votes(&self) -> impl Iterator<Item = &Move> {
        self.0.values().filter_map(Proposal::get)
    }

    /// Withdraws every vote while keeping every member.
    pub fn clear(&mut self) {
        self.0.values_mut().for_each(|p| {
            p.clear();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn enrolled_users_are_members(u: UserId) {
        let mut r = Roster::default();
        r.enroll(u.clone());
        assert!(r.contains(&u));
        assert_eq!(r.proposal(&u), Some(&Proposal::default()));
    }

    #[proptest]
    fn enrolling_again_discards_the_vote(u: UserId) {
        let mut r = Roster::default();
        r.enroll(u.clone());
        r.proposal_mut(&u).unwrap().vote("e2e4".parse()?);
        r.enroll(u.clone());
        assert_eq!(r.len(), 1);
        assert_eq!(r.votes().count(), 0);
    }

    #[proptest]
    fn dismissed_users_are_not_members(u: UserId) {
        let mut r = Roster::default();
        r.enroll(u.clone());
        assert!(r.dismiss(&u));
        assert!(!r.contains(&u));
        assert!(!r.dismiss(&u));
    }

    #[proptest]
    fn votes_skip_empty_proposals(#[strategy(1usize..10)] n: usize) {
        let mut r = Roster::default();

        for i in 0..n {
            r.enroll(format!("user{i}").into());
        }

        r.proposal_mut(&"user0".into()).unwrap().vote("e2e4".parse()?);

        assert_eq!(r.len(), n);
        assert_eq!(r.votes().collect::<Vec<_>>(), [&"e2e4".parse::<Move>()?]);
    }

    #[proptest]
    fn clearing_keeps_members(#[strategy(1usize..10)] n: usize) {
        let mut r = Roster::default();

        for i in 0..n {
            let u: UserId = format!("user{i}").into();
            r.enroll(u.clone());
            r.proposal_mut(&u).unwrap().vote("e2e4".parse()?);
        }

        r.clear();
        assert_eq!(r.len(), n);
        assert_eq!(r.votes().count(), 0);
    }
}
