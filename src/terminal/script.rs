use std::collections::VecDeque;

use crate::game_logic::{MoveRequest, ParseMoveError};

/// A queue of moves read from a script.
///
/// Scripts are whitespace-separated moves in long algebraic notation,
/// e.g. `"e2-e4 d7-d5 e4-d5"`. More script can be appended at any time.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    pending: VecDeque<MoveRequest>,
}

impl ScriptedMoves {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and queue additional moves.
    ///
    /// Nothing is queued if any move in `script` fails to parse.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseMoveError> {
        let moves = script
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<MoveRequest>, _>>()?;
        self.pending.extend(moves);
        Ok(())
    }

    /// Next queued move, if any.
    #[inline]
    pub fn next_move(&mut self) -> Option<MoveRequest> {
        self.pending.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all pending moves, calling the provided callback for each.
    pub fn drain<F>(&mut self, mut on_move: F)
    where
        F: FnMut(MoveRequest),
    {
        while let Some(mv) = self.next_move() {
            on_move(mv);
        }
    }
}
