use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: i8 = 8;

/// Error when parsing algebraic square notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square notation: '{0}'")]
pub struct ParseCoordinateError(pub(crate) String);

/// Zero-based grid coordinate (a1 = (0, 0), h1 = (7, 0), a8 = (0, 7)).
///
/// Components are signed so that stepping off the edge of the board yields
/// a representable value that board lookups reject, instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    file: i8,
    rank: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Map an algebraic file (`a`..`h`) and rank (`1`..`8`) to grid space.
    pub fn from_algebraic(file: char, rank: char) -> Option<Self> {
        let file = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return None,
        };
        let rank = match rank {
            '1'..='8' => rank as u8 - b'1',
            _ => return None,
        };
        Some(Self::new(file as i8, rank as i8))
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// The coordinate `(df, dr)` away from this one. May be off the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Self {
        Self::new(self.file.saturating_add(df), self.rank.saturating_add(dr))
    }

    /// Array indices `(rank, file)` if the coordinate is on the board.
    #[inline]
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        self.is_on_board().then(|| (self.rank as usize, self.file as usize))
    }

    /// All 64 squares, a1 through h8, rank by rank.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Self::new(file, rank)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(
                f,
                "{}{}",
                (b'a' + self.file as u8) as char,
                (b'1' + self.rank as u8) as char
            )
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let coord = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Self::from_algebraic(file, rank),
            _ => None,
        };
        coord.ok_or_else(|| ParseCoordinateError(s.to_string()))
    }
}
