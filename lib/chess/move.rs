use derive_more::{DebugCustom, Display, Error};
use shakmaty as sm;
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// This is the machine notation votes are stored and counted in, it identifies a move
/// independently of the position it is played in.
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(DebugCustom, Display, Clone, Eq, PartialEq, Hash)]
#[debug(fmt = "Move({})", self)]
#[display(fmt = "{}", _0)]
pub struct Move(sm::uci::Uci);

/// The reason why the string is not valid move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse move")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<sm::uci::Uci>() {
            Ok(m @ sm::uci::Uci::Normal { .. }) => Ok(Move(m)),
            _ => Err(ParseMoveError),
        }
    }
}

#[doc(hidden)]
impl From<&sm::Move> for Move {
    fn from(m: &sm::Move) -> Self {
        Move(m.to_uci(sm::CastlingMode::Standard))
    }
}

#[doc(hidden)]
impl AsRef<sm::uci::Uci> for Move {
    fn as_ref(&self) -> &sm::uci::Uci {
        &self.0
    }
}
