use thiserror::Error;

use crate::board::{Coordinate, Side};

/// Errors reported by the rules engine.
///
/// Everything except [`EngineError::MissingKing`] is a rejected request:
/// the board and turn are left untouched and the caller may try again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("coordinate {0} is outside the board")]
    OutOfRange(Coordinate),

    #[error("no piece on {0}")]
    NoPieceAtSource(Coordinate),

    #[error("it is {expected}'s turn, but the piece on {square} belongs to {found}")]
    WrongSideToMove {
        square: Coordinate,
        expected: Side,
        found: Side,
    },

    #[error("illegal move {from}-{to}")]
    IllegalMove { from: Coordinate, to: Coordinate },

    #[error("move {from}-{to} leaves the {side} king in check")]
    LeavesKingInCheck {
        from: Coordinate,
        to: Coordinate,
        side: Side,
    },

    /// The board has no king for this side. The game cannot continue.
    #[error("no {0} king on the board")]
    MissingKing(Side),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

impl EngineError {
    /// True when the error signals a corrupted board rather than a bad request.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingKing(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_king_is_fatal() {
        let e4: Coordinate = "e4".parse().unwrap();

        assert!(EngineError::MissingKing(Side::White).is_fatal());
        assert!(!EngineError::OutOfRange(Coordinate::new(8, 0)).is_fatal());
        assert!(!EngineError::NoPieceAtSource(e4).is_fatal());
        assert!(!EngineError::IllegalMove { from: e4, to: e4 }.is_fatal());
    }

    #[test]
    fn messages_use_algebraic_squares() {
        let err = EngineError::IllegalMove {
            from: "e2".parse().unwrap(),
            to: "e5".parse().unwrap(),
        };
        assert_eq!(err.to_string(), "illegal move e2-e5");

        let err = EngineError::WrongSideToMove {
            square: "e7".parse().unwrap(),
            expected: Side::White,
            found: Side::Black,
        };
        assert_eq!(
            err.to_string(),
            "it is white's turn, but the piece on e7 belongs to black"
        );
    }
}
