use crate::board::{Board, Coordinate, Side};

/// Occupant of a board square.
///
/// [`Piece::Empty`] is the sentinel for a vacant square; it has no owner and
/// never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Pawn(Side),
    Knight(Side),
    Bishop(Side),
    Rook(Side),
    Queen(Side),
    King(Side),
}

impl Piece {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub const fn owner(self) -> Option<Side> {
        match self {
            Self::Empty => None,
            Self::Pawn(side)
            | Self::Knight(side)
            | Self::Bishop(side)
            | Self::Rook(side)
            | Self::Queen(side)
            | Self::King(side) => Some(side),
        }
    }

    /// Piece-type letter, `None` for an empty square.
    #[inline]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Pawn(_) => Some('P'),
            Self::Knight(_) => Some('N'),
            Self::Bishop(_) => Some('B'),
            Self::Rook(_) => Some('R'),
            Self::Queen(_) => Some('Q'),
            Self::King(_) => Some('K'),
        }
    }

    /// Whether this piece, standing on `from`, could move to `to`.
    ///
    /// Only the piece's own movement rule is considered: whose turn it is and
    /// whether the mover's king would be left in check are not.
    pub fn is_legal_destination(self, board: &Board, from: Coordinate, to: Coordinate) -> bool {
        let Some(owner) = self.owner() else {
            return false;
        };
        if from == to || !from.is_on_board() {
            return false;
        }
        // Rejects off-board targets and own-piece captures alike.
        let target = match board.get(to) {
            Ok(target) => target,
            Err(_) => return false,
        };
        if target.owner() == Some(owner) {
            return false;
        }

        let df = to.file() - from.file();
        let dr = to.rank() - from.rank();
        let (dx, dy) = (df.abs(), dr.abs());

        match self {
            Self::Empty => false,
            Self::Rook(_) => (dx == 0 || dy == 0) && path_is_clear(board, from, to),
            Self::Bishop(_) => dx == dy && path_is_clear(board, from, to),
            Self::Queen(_) => (dx == 0 || dy == 0 || dx == dy) && path_is_clear(board, from, to),
            Self::Knight(_) => (dx == 1 && dy == 2) || (dx == 2 && dy == 1),
            Self::King(_) => dx <= 1 && dy <= 1,
            Self::Pawn(side) => pawn_can_reach(board, side, from, df, dr, target),
        }
    }

    /// Every square this piece could move to from `from`, a1 through h8.
    pub fn legal_destinations(self, board: &Board, from: Coordinate) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|&to| self.is_legal_destination(board, from, to))
            .collect()
    }
}

fn pawn_can_reach(
    board: &Board,
    side: Side,
    from: Coordinate,
    df: i8,
    dr: i8,
    target: Piece,
) -> bool {
    let forward = side.forward();
    match (df.abs(), dr) {
        (0, dr) if dr == forward => target.is_empty(),
        (0, dr) if dr == 2 * forward => {
            from.rank() == side.pawn_rank()
                && target.is_empty()
                && board.is_empty(from.offset(0, forward)).unwrap_or(false)
        }
        // The caller has already ruled out our own pieces.
        (1, dr) if dr == forward => !target.is_empty(),
        _ => false,
    }
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares on a shared rank, file or diagonal.
fn path_is_clear(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    let step_file = (to.file() - from.file()).signum();
    let step_rank = (to.rank() - from.rank()).signum();

    let mut square = from.offset(step_file, step_rank);
    while square != to {
        if !board.is_empty(square).unwrap_or(false) {
            return false;
        }
        square = square.offset(step_file, step_rank);
    }
    true
}
