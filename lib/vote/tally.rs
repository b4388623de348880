use crate::chess::{Move, Position};
use std::{collections::HashMap, fmt};

/// The number of votes each distinct [`Move`] received.
///
/// Moves are ranked by descending count and, among equal counts, by their pure coordinate
/// notation so that the ranking never depends on the order votes were cast in.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Tally {
    ranking: Vec<(Move, usize)>,
    total: usize,
}

impl<'a> FromIterator<&'a Move> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a Move>>(votes: I) -> Self {
        let mut counts = HashMap::<&Move, usize>::new();
        for m in votes {
            *counts.entry(m).or_default() += 1;
        }

        let mut ranking: Vec<_> = counts
            .into_iter()
            .map(|(m, n)| (m.to_string(), m.clone(), n))
            .collect();

        ranking.sort_unstable_by(|(a, _, i), (b, _, j)| j.cmp(i).then_with(|| a.cmp(b)));

        Tally {
            total: ranking.iter().map(|(_, _, n)| n).sum(),
            ranking: ranking.into_iter().map(|(_, m, n)| (m, n)).collect(),
        }
    }
}

impl Tally {
    /// The total number of votes cast.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether no votes were cast.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Every distinct move with its count, most voted first.
    pub fn ranking(&self) -> &[(Move, usize)] {
        &self.ranking
    }

    /// The number of votes a [`Move`] received.
    pub fn count(&self, m: &Move) -> usize {
        self.ranking
            .iter()
            .find_map(|(n, c)| (n == m).then_some(*c))
            .unwrap_or(0)
    }

    /// The moves that share the largest count, empty if no votes were cast.
    pub fn winners(&self) -> &[(Move, usize)] {
        match self.ranking.first() {
            None => &[],
            Some((_, max)) => {
                let ties = self.ranking.iter().take_while(|(_, c)| c == max).count();
                &self.ranking[..ties]
            }
        }
    }

    /// The leading `n` moves, labeled in algebraic notation when legal in `pos`.
    pub fn standings(&self, n: usize, pos: &Position) -> Standings {
        if self.is_empty() {
            return Standings::NoVotes;
        }

        let standings = self
            .ranking
            .iter()
            .take(n)
            .map(|(m, votes)| Standing {
                label: pos.san(m).map_or_else(|| m.to_string(), |san| san.to_string()),
                votes: *votes,
                share: 100. * *votes as f64 / self.total as f64,
            })
            .collect();

        Standings::Ranked(standings)
    }
}

/// A move among the leading votes.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    /// The move, in algebraic notation if possible.
    pub label: String,
    /// How many votes it received.
    pub votes: usize,
    /// The percentage of all votes it received.
    pub share: f64,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.votes == 1 { "vote" } else { "votes" };
        write!(f, "{}: {:.2}% ({} {unit})", self.label, self.share, self.votes)
    }
}

/// The leading votes of the team to move.
#[derive(Debug, Clone, PartialEq)]
pub enum Standings {
    /// Nobody voted yet.
    NoVotes,
    /// The leading moves, most voted first.
    Ranked(Vec<Standing>),
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Standings::NoVotes => f.write_str("no votes yet"),
            Standings::Ranked(standings) => {
                f.write_str("current votes:")?;
                for s in standings {
                    write!(f, "\n{s}")?;
                }

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{collection::vec, sample::select};
    use test_strategy::proptest;

    fn moves(s: &[&str]) -> Vec<Move> {
        s.iter().map(|m| m.parse().unwrap()).collect()
    }

    #[proptest]
    fn total_counts_every_vote(
        #[strategy(vec(select(moves(&["e2e4", "d2d4", "g1f3", "c2c4"])), 0..32))] votes: Vec<Move>,
    ) {
        let tally: Tally = votes.iter().collect();
        assert_eq!(tally.total(), votes.len());
        assert_eq!(tally.ranking().iter().map(|(_, n)| n).sum::<usize>(), votes.len());
    }

    #[proptest]
    fn ranking_is_sorted_by_descending_count(
        #[strategy(vec(select(moves(&["e2e4", "d2d4", "g1f3", "c2c4"])), 0..32))] votes: Vec<Move>,
    ) {
        let tally: Tally = votes.iter().collect();
        for w in tally.ranking().windows(2) {
            assert!(w[0].1 > w[1].1 || (w[0].1 == w[1].1 && w[0].0.to_string() < w[1].0.to_string()));
        }
    }

    #[proptest]
    fn winners_have_the_maximum_count(
        #[strategy(vec(select(moves(&["e2e4", "d2d4", "g1f3", "c2c4"])), 1..32))] votes: Vec<Move>,
    ) {
        let tally: Tally = votes.iter().collect();
        let max = votes.iter().map(|m| tally.count(m)).max().unwrap();

        assert!(!tally.winners().is_empty());
        for (m, n) in tally.winners() {
            assert_eq!(*n, max);
            assert_eq!(tally.count(m), max);
        }

        for m in &votes {
            let is_winner = tally.winners().iter().any(|(w, _)| w == m);
            assert_eq!(is_winner, tally.count(m) == max);
        }
    }

    #[proptest]
    fn empty_tally_has_no_winners() {
        let tally: Tally = std::iter::empty::<&Move>().collect();
        assert!(tally.is_empty());
        assert!(tally.winners().is_empty());
        assert_eq!(tally.standings(3, &Position::default()), Standings::NoVotes);
    }

    #[proptest]
    fn standings_are_labeled_in_algebraic_notation() {
        let votes = moves(&["e2e4", "e2e4", "g1f3"]);
        let tally: Tally = votes.iter().collect();

        assert_eq!(
            tally.standings(3, &Position::default()).to_string(),
            "current votes:\ne4: 66.67% (2 votes)\nNf3: 33.33% (1 vote)"
        );
    }

    #[proptest]
    fn standings_fall_back_to_coordinate_notation_for_illegal_moves() {
        let votes = moves(&["e2e5"]);
        let tally: Tally = votes.iter().collect();

        assert_eq!(
            tally.standings(3, &Position::default()),
            Standings::Ranked(vec![Standing {
                label: "e2e5".to_string(),
                votes: 1,
                share: 100.,
            }])
        );
    }

    #[proptest]
    fn standings_are_truncated(#[strategy(0usize..5)] n: usize) {
        let votes = moves(&["e2e4", "d2d4", "g1f3", "c2c4"]);
        let tally: Tally = votes.iter().collect();

        match tally.standings(n, &Position::default()) {
            Standings::Ranked(s) => assert_eq!(s.len(), n.min(4)),
            Standings::NoVotes => panic!("expected ranked standings"),
        }
    }

    #[proptest]
    fn equal_counts_are_ordered_by_coordinate_notation() {
        let votes = moves(&["g1f3", "e2e4", "d2d4"]);
        let tally: Tally = votes.iter().collect();
        let order: Vec<_> = tally.winners().iter().map(|(m, _)| m.to_string()).collect();
        assert_eq!(order, ["d2d4", "e2e4", "g1f3"]);
    }
}
