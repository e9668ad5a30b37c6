use crate::board::Coordinate;

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// The selected piece can move here
    Destination,
    /// Moving here captures an opponent piece
    Capture,
    /// The selected piece
    Origin,
    /// King of the side to move, currently attacked
    Check,
    /// Opponent piece attacking the king
    Checker,
}

/// A square the selected piece can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    pub square: Coordinate,
    /// The square holds an opponent piece.
    pub capture: bool,
}

/// King under attack and the pieces attacking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInfo {
    pub king_square: Coordinate,
    pub checkers: Vec<Coordinate>,
}

/// Per-square highlights for the current board state.
///
/// `BoardFeedback` is computed by [`compute_feedback`] and consumed by
/// [`crate::BoardDisplay`] implementations. Each square carries at most one
/// feedback kind; later entries replace earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Coordinate, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Get all square feedback entries
    #[inline]
    pub fn squares(&self) -> &[(Coordinate, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, square: Coordinate) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, feedback)| *feedback)
    }

    /// Set the feedback for a square, replacing any previous entry.
    pub fn set(&mut self, square: Coordinate, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(sq, _)| *sq == square) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((square, feedback)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

/// Game state information needed to compute feedback
pub trait FeedbackSource {
    /// Square the player has picked, if any
    fn selected(&self) -> Option<Coordinate>;

    /// Where the selected piece may go
    fn destinations(&self) -> &[Destination];

    /// Check on the side to move, if any
    fn check_info(&self) -> Option<&CheckInfo>;
}

/// Compute visual feedback based on current game state.
///
/// - King in check: king and its attackers are marked
/// - Piece selected: origin plus destinations, captures marked separately
///
/// Selection marks win over check marks on the same square.
pub fn compute_feedback(source: &impl FeedbackSource) -> BoardFeedback {
    let mut feedback = BoardFeedback::new();

    if let Some(check) = source.check_info() {
        feedback.set(check.king_square, SquareFeedback::Check);
        for &checker in &check.checkers {
            feedback.set(checker, SquareFeedback::Checker);
        }
    }

    if let Some(from) = source.selected() {
        feedback.set(from, SquareFeedback::Origin);
        for destination in source.destinations() {
            feedback.set(destination.square, classify(destination));
        }
    }

    feedback
}

fn classify(destination: &Destination) -> SquareFeedback {
    if destination.capture {
        SquareFeedback::Capture
    } else {
        SquareFeedback::Destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_logic::GameState;

    fn sq(text: &str) -> Coordinate {
        text.parse().expect("test square is invalid")
    }

    struct MockFeedbackSource {
        selected: Option<Coordinate>,
        destinations: Vec<Destination>,
        check: Option<CheckInfo>,
    }

    impl FeedbackSource for MockFeedbackSource {
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

    #[test]
    fn test_no_feedback_when_nothing_happening() {
        let game = GameState::new();

        let feedback = compute_feedback(&game.snapshot(None));

        assert_eq!(feedback.squares().len(), 0);
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_show_destinations_when_piece_selected() {
        let game = GameState::new();

        let feedback = compute_feedback(&game.snapshot(Some(sq("e2"))));

        assert_eq!(feedback.get(sq("e2")), Some(SquareFeedback::Origin));
        assert_eq!(feedback.get(sq("e3")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(sq("e4")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(sq("d2")), None);
    }

    #[test]
    fn test_distinguish_captures() {
        let mut game = GameState::new();
        game.apply_move(sq("e2"), sq("e4")).unwrap();
        game.apply_move(sq("d7"), sq("d5")).unwrap();

        let feedback = compute_feedback(&game.snapshot(Some(sq("e4"))));

        assert_eq!(feedback.get(sq("e4")), Some(SquareFeedback::Origin));
        assert_eq!(feedback.get(sq("e5")), Some(SquareFeedback::Destination));
        assert_eq!(feedback.get(sq("d5")), Some(SquareFeedback::Capture));
    }

    #[test]
    fn test_check_marks_king_and_checkers() {
        let source = MockFeedbackSource {
            selected: None,
            destinations: Vec::new(),
            check: Some(CheckInfo {
                king_square: sq("e1"),
                checkers: vec![sq("e8"), sq("b4")],
            }),
        };

        let feedback = compute_feedback(&source);

        assert_eq!(feedback.get(sq("e1")), Some(SquareFeedback::Check));
        assert_eq!(feedback.get(sq("e8")), Some(SquareFeedback::Checker));
        assert_eq!(feedback.get(sq("b4")), Some(SquareFeedback::Checker));
        assert_eq!(feedback.squares().len(), 3);
    }

    #[test]
    fn test_capturing_a_checker_shows_capture() {
        let source = MockFeedbackSource {
            selected: Some(sq("d1")),
            destinations: vec![Destination {
                square: sq("d8"),
                capture: true,
            }],
            check: Some(CheckInfo {
                king_square: sq("e1"),
                checkers: vec![sq("d8")],
            }),
        };

        let feedback = compute_feedback(&source);

        assert_eq!(feedback.get(sq("d8")), Some(SquareFeedback::Capture));
        assert_eq!(feedback.get(sq("e1")), Some(SquareFeedback::Check));
        assert_eq!(feedback.get(sq("d1")), Some(SquareFeedback::Origin));
    }

    #[test]
    fn test_set_replaces_existing_entry() {
        let mut feedback = BoardFeedback::new();
        feedback.set(sq("a1"), SquareFeedback::Destination);
        feedback.set(sq("a1"), SquareFeedback::Capture);

        assert_eq!(feedback.squares(), &[(sq("a1"), SquareFeedback::Capture)]);
    }
}
