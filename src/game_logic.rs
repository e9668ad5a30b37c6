use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::{Board, Coordinate, Side, setup};
use crate::check;
use crate::error::{EngineError, Result};
use crate::feedback::{CheckInfo, Destination, FeedbackSource};
use crate::piece::Piece;

/// Error when parsing move notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid move notation: '{0}'")]
pub struct ParseMoveError(String);

/// A proposed move from one square to another.
///
/// Parses long algebraic notation such as `"e2-e4"`; the hyphen may be
/// omitted (`"e2e4"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl MoveRequest {
    #[inline]
    pub const fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }
}

impl FromStr for MoveRequest {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || ParseMoveError(s.to_string());
        let (from, to) = match s.split_once('-') {
            Some(parts) => parts,
            None if s.len() == 4 && s.is_ascii() => s.split_at(2),
            None => return Err(err()),
        };
        Ok(Self {
            from: from.parse().map_err(|_| err())?,
            to: to.parse().map_err(|_| err())?,
        })
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Optional rule strengthenings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleSet {
    /// Reject moves that leave the mover's own king attacked.
    pub forbid_self_check: bool,
}

/// Snapshot of the current turn for feedback and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSnapshot {
    side: Side,
    selected: Option<Coordinate>,
    destinations: Vec<Destination>,
    check: Option<CheckInfo>,
}

impl TurnSnapshot {
    /// Side whose turn it is.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }
}

impl FeedbackSource for TurnSnapshot {
    fn selected(&self) -> Option<Coordinate> {
        self.selected
    }

    fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    fn check_info(&self) -> Option<&CheckInfo> {
        self.check.as_ref()
    }
}

/// Board plus turn sequencing.
///
/// White moves on even turn counts and Black on odd ones. A rejected move
/// leaves both the board and the counter untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: u32,
    rules: RuleSet,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A new game from the standard starting position.
    #[inline]
    pub fn new() -> Self {
        Self::with_board(setup::standard())
    }

    /// A new game on an arbitrary board, White to move.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            turn: 0,
            rules: RuleSet::default(),
        }
    }

    /// A new game from a FEN string, honoring its side to move.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let (board, side) = setup::from_fen(fen)?;
        let mut game = Self::with_board(board);
        if side == Side::Black {
            game.turn = 1;
        }
        Ok(game)
    }

    #[inline]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Number of moves applied so far (plus one if the game began with Black to move).
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn current_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    #[inline]
    pub fn piece_at(&self, coord: Coordinate) -> Result<Piece> {
        self.board.get(coord)
    }

    /// Validate and play a move for the side to move.
    ///
    /// Returns the captured piece, if any.
    pub fn apply_move(&mut self, from: Coordinate, to: Coordinate) -> Result<Option<Piece>> {
        let mover = self.board.get(from)?;
        self.board.get(to)?;

        let side = self.current_side();
        let Some(owner) = mover.owner() else {
            return Err(EngineError::NoPieceAtSource(from));
        };
        if owner != side {
            return Err(EngineError::WrongSideToMove {
                square: from,
                expected: side,
                found: owner,
            });
        }
        if !mover.is_legal_destination(&self.board, from, to) {
            return Err(EngineError::IllegalMove { from, to });
        }

        if self.rules.forbid_self_check {
            let mut after = self.board;
            relocate(&mut after, from, to)?;
            if check::is_in_check(&after, side)? {
                return Err(EngineError::LeavesKingInCheck { from, to, side });
            }
        }

        let captured = relocate(&mut self.board, from, to)?;
        self.turn += 1;
        log::debug!("{side} played {from}-{to}, turn {}", self.turn);

        Ok((!captured.is_empty()).then_some(captured))
    }

    /// [`Self::apply_move`] for a parsed request.
    #[inline]
    pub fn apply(&mut self, request: MoveRequest) -> Result<Option<Piece>> {
        self.apply_move(request.from, request.to)
    }

    /// Squares the piece on `from` could move to, ignoring whose turn it is.
    pub fn legal_destinations(&self, from: Coordinate) -> Result<Vec<Coordinate>> {
        let piece = self.board.get(from)?;
        Ok(piece.legal_destinations(&self.board, from))
    }

    #[inline]
    pub fn is_in_check(&self, side: Side) -> Result<bool> {
        check::is_in_check(&self.board, side)
    }

    /// Capture the state needed to compute feedback for the side to move.
    ///
    /// Destinations are listed only when `selected` holds one of that side's
    /// pieces. Check info is omitted on boards without that side's king.
    pub fn snapshot(&self, selected: Option<Coordinate>) -> TurnSnapshot {
        let side = self.current_side();

        let destinations = selected
            .and_then(|from| {
                let piece = self.board.get(from).ok()?;
                (piece.owner() == Some(side)).then(|| {
                    piece
                        .legal_destinations(&self.board, from)
                        .into_iter()
                        .map(|to| Destination {
                            square: to,
                            capture: !self.board.is_empty(to).unwrap_or(true),
                        })
                        .collect::<Vec<_>>()
                })
            })
            .unwrap_or_default();

        let check = self.board.find_king(side).and_then(|king_square| {
            let checkers = check::attackers_at(&self.board, side, king_square);
            (!checkers.is_empty()).then_some(CheckInfo {
                king_square,
                checkers,
            })
        });

        TurnSnapshot {
            side,
            selected,
            destinations,
            check,
        }
    }
}

/// Move the occupant of `from` onto `to`, leaving `from` empty.
fn relocate(board: &mut Board, from: Coordinate, to: Coordinate) -> Result<Piece> {
    let mover = board.set(from, Piece::Empty)?;
    board.set(to, mover)
}
