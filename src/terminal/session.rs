use crate::board::{Coordinate, setup};
use crate::error::EngineError;
use crate::game_logic::{GameState, MoveRequest, TurnSnapshot};
use crate::piece::Piece;

/// Result of handling one line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A move was played.
    Moved {
        request: MoveRequest,
        captured: Option<Piece>,
        /// The side now to move is in check.
        check: bool,
    },
    /// The engine refused the move; the turn did not pass.
    Rejected(EngineError),
    /// The board can no longer be played on, e.g. a king was captured.
    Fatal(EngineError),
    Selected(Coordinate),
    Loaded,
    Reset,
    Refresh,
    Quit,
    /// The line was not understood.
    Usage(&'static str),
}

/// One interactive game: the engine state plus the player's selection.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: GameState,
    selected: Option<Coordinate>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Feedback snapshot for the current selection.
    pub fn snapshot(&self) -> TurnSnapshot {
        self.game.snapshot(self.selected)
    }

    /// Handle one input line.
    ///
    /// Commands: `<from>-<to>` | `s <square>` | `load <fen>` | `load startpos`
    /// | `r` (reset) | `p` (refresh) | `q` (quit).
    pub fn handle(&mut self, input: &str) -> Reply {
        let input = input.trim();
        let (command, rest) = input
            .split_once(char::is_whitespace)
            .map_or((input, ""), |(command, rest)| (command, rest.trim()));

        match command {
            "" | "p" => Reply::Refresh,
            "q" => Reply::Quit,
            "r" => {
                *self = Self::new();
                log::info!("game reset");
                Reply::Reset
            }
            "s" => match rest.parse() {
                Ok(square) => {
                    self.selected = Some(square);
                    Reply::Selected(square)
                }
                Err(_) => Reply::Usage("Usage: s <square>"),
            },
            "load" => self.load(rest),
            _ => match command.parse::<MoveRequest>() {
                Ok(request) => self.play(request),
                Err(_) => Reply::Usage("Unknown command"),
            },
        }
    }

    fn load(&mut self, fen: &str) -> Reply {
        let fen = match fen {
            "" => return Reply::Usage("Usage: load <fen> | load startpos"),
            "startpos" => setup::STARTING_FEN,
            fen => fen,
        };
        match GameState::from_fen(fen) {
            Ok(game) => {
                self.game = game.with_rules(self.game.rules());
                self.selected = None;
                Reply::Loaded
            }
            Err(e) => Reply::Rejected(e),
        }
    }

    fn play(&mut self, request: MoveRequest) -> Reply {
        match self.game.apply(request) {
            Ok(captured) => {
                self.selected = None;
                match self.game.is_in_check(self.game.current_side()) {
                    Ok(check) => Reply::Moved {
                        request,
                        captured,
                        check,
                    },
                    Err(e) => {
                        log::error!("board unplayable after {request}: {e}");
                        Reply::Fatal(e)
                    }
                }
            }
            Err(e) if e.is_fatal() => {
                log::error!("board unplayable at {request}: {e}");
                Reply::Fatal(e)
            }
            Err(e) => {
                log::warn!("rejected {request}: {e}");
                Reply::Rejected(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;
    use crate::feedback::FeedbackSource;

    fn sq(text: &str) -> Coordinate {
        text.parse().expect("test square is invalid")
    }

    #[test]
    fn move_command_plays_and_clears_selection() {
        let mut session = Session::new();
        assert_eq!(session.handle("s e2"), Reply::Selected(sq("e2")));

        let reply = session.handle("e2-e4\n");

        assert_eq!(
            reply,
            Reply::Moved {
                request: "e2-e4".parse().unwrap(),
                captured: None,
                check: false,
            }
        );
        assert_eq!(session.snapshot().selected(), None);
        assert_eq!(session.game().current_side(), Side::Black);
    }

    #[test]
    fn rejected_move_is_reported() {
        let mut session = Session::new();
        assert_eq!(
            session.handle("e7-e5"),
            Reply::Rejected(EngineError::WrongSideToMove {
                square: sq("e7"),
                expected: Side::White,
                found: Side::Black,
            })
        );
        assert_eq!(session.game().turn(), 0);
    }

    #[test]
    fn move_into_check_is_flagged() {
        let mut session = Session::new();
        assert_eq!(session.handle("load 4k3/8/8/8/8/8/8/R3K3 w - - 0 1"), Reply::Loaded);

        let reply = session.handle("a1-a8");

        assert!(matches!(reply, Reply::Moved { check: true, .. }));
    }

    #[test]
    fn load_and_reset() {
        let mut session = Session::new();
        assert_eq!(session.handle("load 4k3/8/8/8/8/8/8/4K3 b - - 0 1"), Reply::Loaded);
        assert_eq!(session.game().current_side(), Side::Black);

        assert_eq!(session.handle("load startpos"), Reply::Loaded);
        assert_eq!(session.game(), &GameState::new());

        session.handle("e2-e4");
        assert_eq!(session.handle("r"), Reply::Reset);
        assert_eq!(session.game(), &GameState::new());
    }

    #[test]
    fn bad_input_gets_usage() {
        let mut session = Session::new();
        assert_eq!(session.handle("s"), Reply::Usage("Usage: s <square>"));
        assert_eq!(session.handle("s z9"), Reply::Usage("Usage: s <square>"));
        assert_eq!(session.handle("load"), Reply::Usage("Usage: load <fen> | load startpos"));
        assert_eq!(session.handle("castle"), Reply::Usage("Unknown command"));
        assert!(matches!(
            session.handle("load nonsense"),
            Reply::Rejected(EngineError::InvalidFen(_))
        ));
        assert_eq!(session.handle("q"), Reply::Quit);
        assert_eq!(session.handle("   "), Reply::Refresh);
    }

    #[test]
    fn kingless_position_is_not_loaded() {
        let mut session = Session::new();

        let reply = session.handle("load 8/8/8/8/8/8/8/R7 w - - 0 1");

        assert!(matches!(reply, Reply::Rejected(EngineError::InvalidFen(_))));
        assert_eq!(session.game(), &GameState::new());
    }

    #[test]
    fn capturing_a_king_ends_the_game() {
        let mut session = Session::new();
        assert_eq!(session.handle("load 4k3/4R3/8/8/8/8/8/4K3 w - - 0 1"), Reply::Loaded);

        assert_eq!(
            session.handle("e7-e8"),
            Reply::Fatal(EngineError::MissingKing(Side::Black))
        );
        assert_eq!(session.game().board().find_king(Side::Black), None);
    }
}
