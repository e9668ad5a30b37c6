use std::io::{self, Write};

use crate::BoardDisplay;
use crate::board::{BOARD_SIZE, Board, Coordinate, Side};
use crate::feedback::{BoardFeedback, SquareFeedback};
use crate::piece::Piece;

/// Terminal-based board display.
///
/// Renders the board as an 8×8 grid of piece letters (uppercase White,
/// lowercase Black) with ANSI color-coded squares matching the feedback type.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, board: &Board, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        render_feedback(&mut io::stdout(), board, feedback)
    }
}

/// Render board and feedback to any writer. Extracted for testability.
fn render_feedback(
    w: &mut impl Write,
    board: &Board,
    feedback: &BoardFeedback,
) -> Result<(), DisplayError> {
    for rank in (0..BOARD_SIZE).rev() {
        write!(w, " {} ", rank + 1)?;
        for file in 0..BOARD_SIZE {
            let square = Coordinate::new(file, rank);
            let piece = board.get(square).unwrap_or_default();
            write!(w, "{}", format_square(piece, feedback.get(square)))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}

/// Cell text for a piece, wrapped in the ANSI background for its feedback.
fn format_square(piece: Piece, feedback: Option<SquareFeedback>) -> String {
    let symbol = match (piece.owner(), piece.symbol()) {
        (Some(Side::White), Some(symbol)) => symbol,
        (Some(Side::Black), Some(symbol)) => symbol.to_ascii_lowercase(),
        _ => '·',
    };
    match feedback.map(background) {
        Some(code) => format!("\x1b[{code}m {symbol} \x1b[0m"),
        None => format!(" {symbol} "),
    }
}

fn background(feedback: SquareFeedback) -> u8 {
    match feedback {
        SquareFeedback::Destination => 44,
        SquareFeedback::Capture => 41,
        SquareFeedback::Origin => 42,
        SquareFeedback::Check => 45,
        SquareFeedback::Checker => 43,
    }
}
