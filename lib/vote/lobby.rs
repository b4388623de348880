use super::{Game, Snapshot, Standings, UserId, Verdict, VoteError};
use crate::chess::{Color, Move, Position, San};
use rand::Rng;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::SystemTime;

/// A shared handle to a [`Game`].
///
/// Mutations hold the write lock for their whole duration, queries hold the read lock.
#[derive(Debug)]
pub struct Lobby<R> {
    game: Arc<RwLock<Game<R>>>,
}

impl<R> Clone for Lobby<R> {
    fn clone(&self) -> Self {
        Lobby {
            game: self.game.clone(),
        }
    }
}

impl<R> From<Game<R>> for Lobby<R> {
    fn from(game: Game<R>) -> Self {
        Lobby {
            game: Arc::new(RwLock::new(game)),
        }
    }
}

impl<R> Lobby<R> {
    /// Shares a new game that starts from the initial position.
    pub fn new(rng: R) -> Self {
        Game::new(rng).into()
    }

    // Mutations never leave the game half updated.
    fn read(&self) -> RwLockReadGuard<'_, Game<R>> {
        self.game.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Game<R>> {
        self.game.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Game::join`].
    pub fn join(&self, user: UserId, team: Color) -> bool {
        self.write().join(user, team)
    }

    /// See [`Game::team`].
    pub fn team(&self, user: &UserId) -> Option<Color> {
        self.read().team(user)
    }

    /// See [`Game::check_turn`].
    pub fn check_turn(&self, user: &UserId) -> Result<Color, VoteError> {
        self.read().check_turn(user)
    }

    /// See [`Game::propose`].
    pub fn propose(&self, user: &UserId, text: &str) -> Result<Move, VoteError> {
        self.write().propose(user, text)
    }

    /// See [`Game::propose_on_turn`].
    pub fn propose_on_turn(&self, user: &UserId, text: &str) -> Result<Move, VoteError> {
        self.write().propose_on_turn(user, text)
    }

    /// See [`Game::reset`].
    pub fn reset(&self) {
        self.write().reset()
    }

    /// See [`Game::set_deadline`].
    pub fn set_deadline(&self, deadline: SystemTime) {
        self.write().set_deadline(deadline)
    }

    /// See [`Game::deadline`].
    pub fn deadline(&self) -> Option<SystemTime> {
        self.read().deadline()
    }

    /// See [`Game::is_game_over`].
    pub fn is_game_over(&self) -> bool {
        self.read().is_game_over()
    }

    /// See [`Game::votes`].
    pub fn votes(&self) -> Vec<Move> {
        self.read().votes()
    }

    /// See [`Game::standings`].
    pub fn standings(&self, n: usize) -> Standings {
        self.read().standings(n)
    }

    /// See [`Game::legal_moves`].
    pub fn legal_moves(&self) -> Vec<(Move, San)> {
        self.read().legal_moves()
    }

    /// See [`Game::preview`].
    pub fn preview(&self, text: &str) -> Result<Position, VoteError> {
        self.read().preview(text)
    }

    /// See [`Game::snapshot`].
    pub fn snapshot(&self, n: usize) -> Snapshot {
        self.read().snapshot(n)
    }
}

impl<R: Rng> Lobby<R> {
    /// See [`Game::resolve`].
    pub fn resolve(&self) -> Option<Verdict> {
        self.write().resolve()
    }
}
