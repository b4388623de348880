use super::{Roster, Snapshot, Standings, Tally, UserId, Verdict, VoteError};
use crate::chess::{Color, Move, Outcome, Position, San};
use rand::{seq::SliceRandom, Rng};
use std::time::SystemTime;
use tracing::{field::display, info, instrument, warn, Span};

/// The state of a game of chess played by two teams that vote on their moves.
///
/// Each team votes while it is their turn, then the most voted move is played, ties broken at
/// random by the generator `R`.
#[derive(Debug, Clone)]
pub struct Game<R> {
    position: Position,
    turn: Color,
    rosters: [Roster; 2],
    last: Option<(Move, San)>,
    outcome: Option<Outcome>,
    deadline: Option<SystemTime>,
    rng: R,
}

impl<R> Game<R> {
    /// Starts a new game from the initial position.
    pub fn new(rng: R) -> Self {
        Self::with_position(Position::default(), rng)
    }

    /// Starts a new game from an arbitrary [`Position`].
    ///
    /// The game is over from the start if the position is final.
    pub fn with_position(position: Position, rng: R) -> Self {
        Game {
            turn: position.turn(),
            outcome: position.outcome(),
            position,
            rosters: Default::default(),
            last: None,
            deadline: None,
            rng,
        }
    }

    /// The current position on the board.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The team whose votes are being collected.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The members of a team.
    pub fn roster(&self, team: Color) -> &Roster {
        &self.rosters[team as usize]
    }

    /// The last move played and how it was written at the time.
    pub fn last_move(&self) -> Option<&(Move, San)> {
        self.last.as_ref()
    }

    /// Whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The [`Verdict`] if the game has ended.
    pub fn verdict(&self) -> Option<Verdict> {
        self.outcome.map(Verdict::from)
    }

    /// When the current turn is due to be resolved, if scheduled.
    pub fn deadline(&self) -> Option<SystemTime> {
        self.deadline
    }

    /// Records when the current turn is due to be resolved.
    pub fn set_deadline(&mut self, deadline: SystemTime) {
        self.deadline = Some(deadline);
    }

    /// The team the user belongs to, if any.
    pub fn team(&self, user: &UserId) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|&c| self.roster(c).contains(user))
    }

    /// Enrolls the user in a team, leaving the other one if necessary.
    ///
    /// Any vote the user had pending is withdrawn.
    /// Returns whether the user switched from the other team.
    #[instrument(level = "debug", skip(self, user), fields(%user))]
    pub fn join(&mut self, user: UserId, team: Color) -> bool {
        let switched = self.rosters[!team as usize].dismiss(&user);
        info!(%user, %team, switched, "joined");
        self.rosters[team as usize].enroll(user);
        switched
    }

    /// Checks whether the user may vote right now.
    ///
    /// Returns the user's team if so.
    pub fn check_turn(&self, user: &UserId) -> Result<Color, VoteError> {
        if self.is_game_over() {
            return Err(VoteError::GameOver);
        }

        match self.team(user) {
            None => Err(VoteError::NotJoined(user.clone())),
            Some(c) if c != self.turn => Err(VoteError::WrongTurn(self.turn)),
            Some(c) => Ok(c),
        }
    }

    /// Records the user's vote, replacing any previous one.
    ///
    /// The move may be written either in algebraic or in pure coordinate notation.
    /// Votes cast while it is the other team's turn are kept until it is their turn.
    #[instrument(level = "debug", skip(self, user), err, fields(%user))]
    pub fn propose(&mut self, user: &UserId, text: &str) -> Result<Move, VoteError> {
        if self.is_game_over() {
            return Err(VoteError::GameOver);
        }

        let team = self
            .team(user)
            .ok_or_else(|| VoteError::NotJoined(user.clone()))?;

        let m = self
            .position
            .decode(text)
            .ok_or_else(|| VoteError::InvalidMove(text.to_string()))?;

        if let Some(p) = self.rosters[team as usize].proposal_mut(user) {
            p.vote(m.clone());
        }

        info!(%user, %team, vote = %m, "voted");

        Ok(m)
    }

    /// Records the user's vote only if it is their team's turn.
    ///
    /// Checks the turn exactly like [`Game::check_turn`] before voting.
    pub fn propose_on_turn(&mut self, user: &UserId, text: &str) -> Result<Move, VoteError> {
        self.check_turn(user)?;
        self.propose(user, text)
    }

    /// The votes of the team to move, counted as they are.
    pub fn tally(&self) -> Tally {
        self.roster(self.turn).votes().collect()
    }

    /// Every vote cast by the team to move.
    pub fn votes(&self) -> Vec<Move> {
        self.roster(self.turn).votes().cloned().collect()
    }

    /// The `n` most voted moves of the team to move.
    pub fn standings(&self, n: usize) -> Standings {
        self.tally().standings(n, &self.position)
    }

    /// Every legal move paired with its algebraic notation.
    pub fn legal_moves(&self) -> Vec<(Move, San)> {
        self.position.notations().collect()
    }

    /// The position that would result from playing a move, written in either notation.
    pub fn preview(&self, text: &str) -> Result<Position, VoteError> {
        if self.is_game_over() {
            return Err(VoteError::GameOver);
        }

        self.position
            .decode(text)
            .and_then(|m| self.position.after(&m).ok())
            .ok_or_else(|| VoteError::InvalidMove(text.to_string()))
    }

    /// A copy of everything there is to show about the game.
    pub fn snapshot(&self, n: usize) -> Snapshot {
        Snapshot {
            position: self.position.clone(),
            turn: self.turn,
            last_move: self.last.clone(),
            deadline: self.deadline,
            votes: self.votes(),
            standings: self.standings(n),
            verdict: self.verdict(),
        }
    }

    /// Starts over from the initial position, keeping every member of both teams.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.position = Position::default();
        self.turn = self.position.turn();
        self.last = None;
        self.outcome = None;
        self.rosters.iter_mut().for_each(Roster::clear);
        info!("game reset");
    }
}

impl<R: Rng> Game<R> {
    /// Plays the most voted move of the team to move and passes the turn.
    ///
    /// Votes for moves that are no longer legal are discarded and ties are broken uniformly at
    /// random. If nobody voted, a random legal move is played instead.
    /// Returns the [`Verdict`] if the game has ended.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn, choice, outcome))]
    pub fn resolve(&mut self) -> Option<Verdict> {
        if let Some(v) = self.verdict() {
            warn!(verdict = %v, "the game is already over");
            return Some(v);
        }

        let tally: Tally = self
            .roster(self.turn)
            .votes()
            .filter(|m| self.position.is_legal(m))
            .collect();

        self.rosters[self.turn as usize].clear();

        let choice = match tally.winners() {
            [] => {
                let moves: Vec<_> = self.position.moves().collect();
                moves.choose(&mut self.rng).cloned()
            }

            [(m, _)] => Some(m.clone()),
            ties => ties.choose(&mut self.rng).map(|(m, _)| m.clone()),
        };

        if let Some(m) = choice {
            match self.position.play(&m) {
                Err(e) => warn!("{}", e),
                Ok(san) => {
                    Span::current().record("choice", display(&san));
                    info!(team = %self.turn, %san, votes = tally.count(&m), total = tally.total(), "played");
                    self.last = Some((m, san));
                }
            }
        }

        match self.position.outcome() {
            None => {
                self.turn = !self.turn;
                None
            }

            Some(o) => {
                Span::current().record("outcome", display(o));
                info!(outcome = %o, "game over");
                self.outcome = Some(o);
                Some(o.into())
            }
        }
    }
}
