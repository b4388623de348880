use super::{Standings, Verdict};
use crate::chess::{Color, Move, Position, San};
use std::{fmt, time::SystemTime};

/// A consistent copy of the state of a [`Game`](super::Game), for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub position: Position,
    pub turn: Color,
    pub last_move: Option<(Move, San)>,
    pub deadline: Option<SystemTime>,
    pub votes: Vec<Move>,
    pub standings: Standings,
    pub verdict: Option<Verdict>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "position: {}", self.position)?;

        if let Some((m, san)) = &self.last_move {
            writeln!(f, "last move: {san} ({m})")?;
        }

        match &self.verdict {
            Some(v) => write!(f, "{v}"),
            None => {
                write!(f, "{} to move", self.turn)?;
                if let Some(d) = self.deadline {
                    write!(f, " until {}", humantime::format_rfc3339_seconds(d))?;
                }

                write!(f, "\n{}", self.standings)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Outcome;
    use std::time::Duration;
    use test_strategy::proptest;

    #[proptest]
    fn snapshot_shows_deadline_in_utc() {
        let s = Snapshot {
            position: Position::default(),
            turn: Color::White,
            last_move: None,
            deadline: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(86400)),
            votes: vec![],
            standings: Standings::NoVotes,
            verdict: None,
        };

        assert_eq!(
            s.to_string(),
            format!(
                "position: {}\nwhite to move until 1970-01-02T00:00:00Z\nno votes yet",
                Position::default()
            )
        );
    }

    #[proptest]
    fn snapshot_of_finished_game_shows_verdict(o: Outcome) {
        let pos = Position::default();
        let m = "e2e4".parse::<Move>()?;
        let san = pos.san(&m).unwrap();

        let s = Snapshot {
            position: pos.clone(),
            turn: Color::Black,
            last_move: Some((m, san)),
            deadline: None,
            votes: vec![],
            standings: Standings::NoVotes,
            verdict: Some(o.into()),
        };

        assert_eq!(
            s.to_string(),
            format!("position: {pos}\nlast move: e4 (e2e4)\n{}", Verdict::from(o))
        );
    }
}
