use crate::board::{Board, Coordinate, Side};
use crate::error::{EngineError, Result};

/// Whether `side`'s king is attacked by any opposing piece.
///
/// Fails with [`EngineError::MissingKing`] if `side` has no king.
pub fn is_in_check(board: &Board, side: Side) -> Result<bool> {
    let king = locate_king(board, side)?;
    Ok(attacking(board, side, king).next().is_some())
}

/// Squares of every opposing piece attacking `side`'s king.
pub fn attackers(board: &Board, side: Side) -> Result<Vec<Coordinate>> {
    let king = locate_king(board, side)?;
    Ok(attacking(board, side, king).collect())
}

fn locate_king(board: &Board, side: Side) -> Result<Coordinate> {
    board.find_king(side).ok_or_else(|| {
        log::error!("{side} king missing from board");
        EngineError::MissingKing(side)
    })
}

/// Squares of every piece opposing `side` that could move onto `target`.
pub fn attackers_at(board: &Board, side: Side, target: Coordinate) -> Vec<Coordinate> {
    attacking(board, side, target).collect()
}

fn attacking(board: &Board, side: Side, king: Coordinate) -> impl Iterator<Item = Coordinate> {
    let enemy = side.opponent();
    board
        .occupants()
        .filter(move |(_, piece)| piece.owner() == Some(enemy))
        .filter(move |(from, piece)| piece.is_legal_destination(board, *from, king))
        .map(|(from, _)| from)
}
