//! Factories for starting positions.
//!
//! Kept apart from [`Board::empty`] so tests and variants can build their own
//! layouts without going through the standard one.

use shakmaty::{Color, Role, Square, fen::Fen};

use super::{Board, Coordinate, Side};
use crate::error::{EngineError, Result};
use crate::piece::Piece;

/// Standard FEN of the initial position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-row piece order from the a-file to the h-file.
const BACK_ROW: [fn(Side) -> Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Standard chess starting layout: White on ranks 1-2, Black on ranks 7-8.
pub fn standard() -> Board {
    let mut board = Board::empty();
    for side in [Side::White, Side::Black] {
        for (file, piece) in BACK_ROW.into_iter().enumerate() {
            board.place(file, side.back_rank() as usize, piece(side));
            board.place(file, side.pawn_rank() as usize, Piece::Pawn(side));
        }
    }
    log::info!("standard board set up");
    board
}

/// Knights on their home squares plus both kings, nothing else.
pub fn knights_only() -> Board {
    let mut board = Board::empty();
    for side in [Side::White, Side::Black] {
        let rank = side.back_rank() as usize;
        board.place(1, rank, Piece::Knight(side));
        board.place(6, rank, Piece::Knight(side));
        board.place(4, rank, Piece::King(side));
    }
    board
}

/// Build a board from the piece placement of a FEN string.
///
/// Returns the board and the side to move. Each side must have exactly one
/// king. Castling and en passant fields are parsed but ignored.
pub fn from_fen(fen: &str) -> Result<(Board, Side)> {
    let setup = fen
        .trim()
        .parse::<Fen>()
        .map_err(|e| EngineError::InvalidFen(e.to_string()))?
        .into_setup();

    let mut board = Board::empty();
    for square in Square::ALL {
        if let Some(piece) = setup.board.piece_at(square) {
            board.set(coordinate_of(square)?, convert_piece(piece.role, piece.color))?;
        }
    }

    for side in [Side::White, Side::Black] {
        let kings = board
            .occupants()
            .filter(|(_, piece)| *piece == Piece::King(side))
            .count();
        if kings != 1 {
            return Err(EngineError::InvalidFen(format!(
                "expected one {side} king, found {kings}"
            )));
        }
    }

    let turn = match setup.turn {
        Color::White => Side::White,
        Color::Black => Side::Black,
    };
    log::info!("board loaded from FEN, {turn} to move");
    Ok((board, turn))
}

fn coordinate_of(square: Square) -> Result<Coordinate> {
    Coordinate::from_algebraic(square.file().char(), square.rank().char())
        .ok_or_else(|| EngineError::InvalidFen(format!("unexpected square {square}")))
}

fn convert_piece(role: Role, color: Color) -> Piece {
    let side = match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    };
    match role {
        Role::Pawn => Piece::Pawn(side),
        Role::Knight => Piece::Knight(side),
        Role::Bishop => Piece::Bishop(side),
        Role::Rook => Piece::Rook(side),
        Role::Queen => Piece::Queen(side),
        Role::King => Piece::King(side),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sq(text: &str) -> Coordinate {
        text.parse().expect("test square is invalid")
    }

    #[test_case("a1", Piece::Rook(Side::White))]
    #[test_case("b1", Piece::Knight(Side::White))]
    #[test_case("d1", Piece::Queen(Side::White))]
    #[test_case("e1", Piece::King(Side::White))]
    #[test_case("e2", Piece::Pawn(Side::White))]
    #[test_case("e7", Piece::Pawn(Side::Black))]
    #[test_case("d8", Piece::Queen(Side::Black))]
    #[test_case("e8", Piece::King(Side::Black))]
    #[test_case("h8", Piece::Rook(Side::Black))]
    #[test_case("e4", Piece::Empty)]
    fn standard_layout(square: &str, expected: Piece) {
        assert_eq!(standard().get(sq(square)), Ok(expected));
    }

    #[test]
    fn standard_has_thirty_two_pieces() {
        assert_eq!(standard().occupants().count(), 32);
    }

    #[test]
    fn knights_only_layout() {
        let board = knights_only();

        assert_eq!(board.occupants().count(), 6);
        assert_eq!(board.get(sq("g1")), Ok(Piece::Knight(Side::White)));
        assert_eq!(board.get(sq("b8")), Ok(Piece::Knight(Side::Black)));
        assert_eq!(board.find_king(Side::Black), Some(sq("e8")));
    }

    #[test]
    fn starting_fen_matches_standard() {
        let (board, turn) = from_fen(STARTING_FEN).unwrap();
        assert_eq!(board, standard());
        assert_eq!(turn, Side::White);
    }

    #[test]
    fn fen_reads_side_to_move() {
        let (board, turn) = from_fen("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1").unwrap();

        assert_eq!(turn, Side::Black);
        assert_eq!(board.get(sq("e4")), Ok(Piece::Pawn(Side::White)));
        assert_eq!(board.occupants().count(), 3);
    }

    #[test_case("8/8/8/8/8/8/8/R7 w - - 0 1"; "no kings")]
    #[test_case("8/8/8/8/8/8/8/4K3 w - - 0 1"; "no black king")]
    #[test_case("3kk3/8/8/8/8/8/8/4K3 w - - 0 1"; "two black kings")]
    fn fen_needs_one_king_per_side(fen: &str) {
        assert!(matches!(from_fen(fen), Err(EngineError::InvalidFen(_))));
    }

    #[test]
    fn invalid_fen_is_rejected() {
        assert!(matches!(
            from_fen("not a fen"),
            Err(EngineError::InvalidFen(_))
        ));
    }
}
