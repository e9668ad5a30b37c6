mod coordinate;
pub mod setup;

use std::fmt;

pub use coordinate::{BOARD_SIZE, Coordinate, ParseCoordinateError};

use crate::error::{EngineError, Result};
use crate::piece::Piece;

/// Two-character marker rendered for an empty square.
pub const EMPTY_MARKER: &str = "--";

/// The two players, and the owner of every non-empty piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Rank step a pawn of this side advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Rank index this side's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    /// Rank index this side's back row occupies.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Single-letter initial used by [`Board::render`].
    #[inline]
    pub const fn initial(self) -> char {
        match self {
            Self::White => 'W',
            Self::Black => 'B',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "white",
            Self::Black => "black",
        })
    }
}

/// 8×8 grid of occupants, indexed `[rank][file]`.
///
/// Every slot always holds a [`Piece`]; vacant squares hold [`Piece::Empty`].
/// The board is the only record of where pieces stand.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Piece; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with every square empty.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[Piece::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The occupant of `coord`.
    pub fn get(&self, coord: Coordinate) -> Result<Piece> {
        let (rank, file) = coord.index().ok_or(EngineError::OutOfRange(coord))?;
        Ok(self.squares[rank][file])
    }

    /// Fill a slot addressed by array indices. Used by the setup factories,
    /// whose squares are constants inside the board.
    fn place(&mut self, file: usize, rank: usize, piece: Piece) {
        self.squares[rank][file] = piece;
    }

    /// Overwrite the slot at `coord`, returning the previous occupant.
    pub fn set(&mut self, coord: Coordinate, piece: Piece) -> Result<Piece> {
        let (rank, file) = coord.index().ok_or(EngineError::OutOfRange(coord))?;
        Ok(std::mem::replace(&mut self.squares[rank][file], piece))
    }

    pub fn is_empty(&self, coord: Coordinate) -> Result<bool> {
        self.get(coord).map(Piece::is_empty)
    }

    /// Every non-empty square with its occupant, a1 through h8.
    pub fn occupants(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(|coord| {
            let (rank, file) = coord.index()?;
            let piece = self.squares[rank][file];
            (!piece.is_empty()).then_some((coord, piece))
        })
    }

    /// Square of `side`'s king, if it has one.
    pub fn find_king(&self, side: Side) -> Option<Coordinate> {
        self.occupants()
            .find(|(_, piece)| *piece == Piece::King(side))
            .map(|(coord, _)| coord)
    }

    /// Text grid with rank 8 on top, one two-character cell per square.
    ///
    /// Cells are owner initial plus piece letter (`WP`, `BK`, ...) or
    /// [`EMPTY_MARKER`]. Each row is prefixed with its rank number and the
    /// last line holds the file letters.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, row) in self.squares.iter().enumerate().rev() {
            out.push((b'1' + index as u8) as char);
            for piece in row {
                out.push(' ');
                match (piece.owner(), piece.symbol()) {
                    (Some(side), Some(symbol)) => {
                        out.push(side.initial());
                        out.push(symbol);
                    }
                    _ => out.push_str(EMPTY_MARKER),
                }
            }
            out.push('\n');
        }
        out.push_str("  a  b  c  d  e  f  g  h\n");
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        f.write_str(&self.render())
    }
}
