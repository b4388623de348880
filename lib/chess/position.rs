use super::{Color, Move, Outcome, San};
use derive_more::{DebugCustom, Display, Error};
use shakmaty as sm;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(test)]
use proptest::{prelude::*, sample::Selector};

/// Represents an illegal [`Move`] in a given [`Position`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "move `{}` is illegal in this position", _0)]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// The current position on the chess board.
///
/// This type guarantees that it only holds valid positions.
#[derive(DebugCustom, Display, Default, Clone, Eq)]
#[debug(fmt = "Position({})", self)]
#[display(
    fmt = "{}",
    "sm::fen::Fen::from_position(self.chess.clone(), sm::EnPassantMode::Legal)"
)]
pub struct Position {
    chess: sm::Chess,
    history: Vec<u64>,
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.zobrist())
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.chess == other.chess
    }
}

#[cfg(test)]
impl Arbitrary for Position {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..256usize, any::<Selector>())
            .prop_map(|(plies, selector)| {
                let mut pos = Position::default();

                for _ in 0..plies {
                    if pos.outcome().is_some() {
                        break;
                    }

                    match selector.try_select(pos.moves()) {
                        None => break,
                        Some(m) => {
                            if pos.play(&m).is_err() {
                                break;
                            }
                        }
                    }
                }

                pos
            })
            .boxed()
    }
}

impl Position {
    /// The side to move.
    pub fn turn(&self) -> Color {
        sm::Position::turn(&self.chess).into()
    }

    /// The number of halfmoves since the last capture or pawn advance.
    pub fn halfmoves(&self) -> u32 {
        sm::Position::halfmoves(&self.chess)
    }

    /// This position's [zobrist hash].
    ///
    /// [zobrist hash]: https://www.chessprogramming.org/Zobrist_Hashing
    pub fn zobrist(&self) -> u64 {
        sm::zobrist::ZobristHash::zobrist_hash(&self.chess)
    }

    /// How many other times this position has occurred since the last irreversible move.
    pub fn repetitions(&self) -> usize {
        let zobrist = self.zobrist();
        self.history.iter().filter(|&&z| z == zobrist).count()
    }

    /// Whether this position is a [check].
    ///
    /// [check]: https://www.chessprogramming.org/Check
    pub fn is_check(&self) -> bool {
        sm::Position::is_check(&self.chess)
    }

    /// Whether this position is a [checkmate].
    ///
    /// [checkmate]: https://www.chessprogramming.org/Checkmate
    pub fn is_checkmate(&self) -> bool {
        sm::Position::is_checkmate(&self.chess)
    }

    /// Whether this position is a [stalemate].
    ///
    /// [stalemate]: https://www.chessprogramming.org/Stalemate
    pub fn is_stalemate(&self) -> bool {
        sm::Position::is_stalemate(&self.chess)
    }

    /// Whether this position has [insufficient material].
    ///
    /// [insufficient material]: https://www.chessprogramming.org/Material#InsufficientMaterial
    pub fn is_material_insufficient(&self) -> bool {
        sm::Position::is_insufficient_material(&self.chess)
    }

    /// Whether the game is drawn by [fivefold repetition].
    ///
    /// [fivefold repetition]: https://en.wikipedia.org/wiki/Threefold_repetition#Fivefold_repetition
    pub fn is_draw_by_fivefold_repetition(&self) -> bool {
        self.repetitions() >= 4
    }

    /// Whether the game is drawn by the [75-move rule].
    ///
    /// [75-move rule]: https://en.wikipedia.org/wiki/Fifty-move_rule#Seventy-five-move_rule
    pub fn is_draw_by_75_move_rule(&self) -> bool {
        self.halfmoves() >= 150
    }

    /// The [`Outcome`] of the game in case this position is final.
    ///
    /// Only outcomes that end the game without either side claiming them are reported.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmate() {
            Some(Outcome::Checkmate(!self.turn()))
        } else if self.is_stalemate() {
            Some(Outcome::Stalemate)
        } else if self.is_material_insufficient() {
            Some(Outcome::DrawByInsufficientMaterial)
        } else if self.is_draw_by_fivefold_repetition() {
            Some(Outcome::DrawByFivefoldRepetition)
        } else if self.is_draw_by_75_move_rule() {
            Some(Outcome::DrawBy75MoveRule)
        } else {
            None
        }
    }

    /// An iterator over the legal [`Move`]s that can be played in this position.
    pub fn moves(&self) -> impl DoubleEndedIterator<Item = Move> + ExactSizeIterator {
        sm::Position::legal_moves(&self.chess)
            .into_iter()
            .map(|m| Move::from(&m))
    }

    /// An iterator over the legal [`Move`]s paired with their [`San`].
    pub fn notations(&self) -> impl DoubleEndedIterator<Item = (Move, San)> + ExactSizeIterator + '_ {
        sm::Position::legal_moves(&self.chess)
            .into_iter()
            .map(|m| (Move::from(&m), San::encode(&self.chess, &m)))
    }

    /// Whether a [`Move`] is legal in this position.
    pub fn is_legal(&self, m: &Move) -> bool {
        self.legal(m).is_some()
    }

    /// The [`San`] of a [`Move`] if legal in this position.
    pub fn san(&self, m: &Move) -> Option<San> {
        self.legal(m).map(|vm| San::encode(&self.chess, &vm))
    }

    /// Finds the legal [`Move`] written either in [`San`] or in pure coordinate notation.
    ///
    /// The algebraic notation takes precedence and both comparisons are exact.
    pub fn decode(&self, s: &str) -> Option<Move> {
        let legals = sm::Position::legal_moves(&self.chess);

        legals
            .iter()
            .find(|m| San::encode(&self.chess, m).to_string() == s)
            .or_else(|| legals.iter().find(|m| Move::from(*m).to_string() == s))
            .map(Move::from)
    }

    /// Play a [`Move`] if legal in this position.
    ///
    /// Returns the [`San`] of the move as it was played.
    pub fn play(&mut self, m: &Move) -> Result<San, IllegalMove> {
        let vm = self.legal(m).ok_or_else(|| IllegalMove(m.clone()))?;
        let san = San::encode(&self.chess, &vm);

        if vm.is_zeroing() {
            self.history.clear();
        } else {
            let zobrist = self.zobrist();
            self.history.push(zobrist);
        }

        sm::Position::play_unchecked(&mut self.chess, &vm);
        Ok(san)
    }

    /// The position that results from playing a [`Move`], if legal.
    pub fn after(&self, m: &Move) -> Result<Position, IllegalMove> {
        let mut next = self.clone();
        next.play(m)?;
        Ok(next)
    }

    fn legal(&self, m: &Move) -> Option<sm::Move> {
        m.as_ref()
            .to_move(&self.chess)
            .ok()
            .filter(|vm| sm::Position::is_legal(&self.chess, vm))
    }
}

/// The reason why parsing the FEN string failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParsePositionError {
    #[display(fmt = "syntax error in the FEN string")]
    InvalidFen,
    #[display(fmt = "the FEN string describes an illegal position")]
    IllegalPosition,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fen: sm::fen::Fen = s.parse().map_err(|_| ParsePositionError::InvalidFen)?;
        let chess: sm::Chess = sm::Setup::from(fen)
            .position(sm::CastlingMode::Standard)
            .map_err(|_| ParsePositionError::IllegalPosition)?;

        Ok(Position {
            chess,
            history: Vec::new(),
        })
    }
}
