pub mod board;
pub mod check;
pub mod error;
pub mod feedback;
pub mod game_logic;
pub mod piece;
pub mod terminal;

pub use board::{Board, Coordinate, Side};
pub use error::{EngineError, Result};
pub use game_logic::{GameState, MoveRequest, RuleSet};
pub use piece::Piece;

/// Trait for displaying the board and its feedback to the player.
///
/// Abstracts over output front ends, keeping rendering out of the
/// rules engine itself.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the board with the given feedback highlights.
    ///
    /// Implementations map [`feedback::SquareFeedback`] variants
    /// to front-end specific output (terminal colors, etc.).
    fn show(
        &mut self,
        board: &Board,
        feedback: &feedback::BoardFeedback,
    ) -> std::result::Result<(), Self::Error>;
}
