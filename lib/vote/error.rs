use super::UserId;
use crate::chess::Color;
use derive_more::{Display, Error};

/// The reason why a vote or a query on behalf of a user was rejected.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum VoteError {
    /// The game ended and must be reset first.
    #[display(fmt = "the game is over")]
    GameOver,

    /// The user has not joined either team.
    #[display(fmt = "`{}` has not joined a team", _0)]
    NotJoined(#[error(not(source))] UserId),

    /// The text matches no legal move in either notation.
    #[display(fmt = "`{}` is not a legal move in this position", _0)]
    InvalidMove(#[error(not(source))] String),

    /// It is the other team's turn to vote.
    #[display(fmt = "it is the {} team's turn", _0)]
    WrongTurn(#[error(not(source))] Color),
}
