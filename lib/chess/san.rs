use derive_more::{DebugCustom, Display};
use shakmaty as sm;

/// A move in [standard algebraic notation], including the check or checkmate suffix.
///
/// Unlike [`Move`](super::Move), it only makes sense relative to the position it was encoded in.
///
/// [standard algebraic notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation
#[derive(DebugCustom, Display, Clone, Eq, PartialEq)]
#[debug(fmt = "San({})", self)]
#[display(fmt = "{}", _0)]
pub struct San(sm::san::SanPlus);

impl San {
    /// Encodes a legal move played from `chess`.
    pub(super) fn encode(chess: &sm::Chess, m: &sm::Move) -> Self {
        let san = sm::san::San::from_move(chess, m);

        let mut next = chess.clone();
        sm::Position::play_unchecked(&mut next, m);

        let suffix = if sm::Position::is_checkmate(&next) {
            Some(sm::san::Suffix::Checkmate)
        } else if sm::Position::is_check(&next) {
            Some(sm::san::Suffix::Check)
        } else {
            None
        };

        San(sm::san::SanPlus { san, suffix })
    }
}

#[doc(hidden)]
impl From<San> for sm::san::SanPlus {
    fn from(san: San) -> Self {
        san.0
    }
}

#[cfg(test)]
mod tests {
    use crate::chess::Position;
    use proptest::sample::Selector;
    use test_strategy::proptest;

    #[proptest]
    fn pawn_pushes_are_written_as_the_destination_square() {
        let pos = Position::default();
        let m = "e2e4".parse()?;
        assert_eq!(pos.san(&m).map(|s| s.to_string()), Some("e4".to_string()));
    }

    #[proptest]
    fn checks_carry_a_suffix() {
        let pos: Position = "4k3/8/8/8/8/8/8/3QK3 w - - 0 1".parse()?;
        let m = "d1d7".parse()?;
        assert_eq!(pos.san(&m).map(|s| s.to_string()), Some("Qd7+".to_string()));
    }

    #[proptest]
    fn checkmates_carry_a_suffix() {
        let pos: Position = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1".parse()?;
        let m = "a1a8".parse()?;
        assert_eq!(pos.san(&m).map(|s| s.to_string()), Some("Ra8#".to_string()));
    }

    #[proptest]
    fn every_legal_move_has_a_distinct_san(
        #[filter(#pos.moves().len() > 0)] pos: Position,
        selector: Selector,
    ) {
        let m = selector.select(pos.moves());
        let san = pos.san(&m).unwrap().to_string();
        assert_eq!(pos.moves().filter(|n| pos.san(n).unwrap().to_string() == san).count(), 1);
    }
}
