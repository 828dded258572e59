//! Game state service - the application layer for chess game state.
//!
//! [`GameService`] is the single access point the board UI talks to: it owns
//! the injected rules oracle and the move history, and derives everything
//! else (board snapshots, turn, status) from the oracle on demand.

use crate::domain::{Board, GridPos, Piece, PieceColor, PieceKind, format_position};
use crate::oracle::{RulesOracle, ShakmatyOracle};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One executed move. Append-only: records are never mutated or removed.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct MoveRecord {
    /// The moving piece, as it stood before the move.
    pub piece: Piece,
    pub from: GridPos,
    pub to: GridPos,
    /// The piece that stood on the target square before the move, if any.
    pub captured: Option<Piece>,
    /// Algebraic notation as reported by the oracle, e.g. "e4" or "exd5".
    pub notation: String,
    pub timestamp: DateTime<Utc>,
}

/// Tracks a single chess session: authoritative position (via the oracle),
/// move history, turn order, and game-ending conditions.
///
/// Construct one per session and pass it to whatever owns the UI; there is
/// no shared global instance.
pub struct GameService<O = ShakmatyOracle> {
    oracle: O,
    history: Vec<MoveRecord>,
}

impl GameService<ShakmatyOracle> {
    /// A fresh game with full rule enforcement.
    pub fn new() -> Self {
        Self::with_oracle(ShakmatyOracle::new())
    }
}

impl Default for GameService<ShakmatyOracle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: RulesOracle> GameService<O> {
    /// A fresh game using the given rules oracle.
    pub fn with_oracle(oracle: O) -> Self {
        Self {
            oracle,
            history: Vec::new(),
        }
    }

    /// Piece at a grid coordinate, or `None` for an empty or out-of-range
    /// square. Out-of-range coordinates are not an error.
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        if row > 7 || col > 7 {
            return None;
        }
        self.oracle.board()[row][col]
    }

    /// An independent 8x8 snapshot of the current position. Each call builds
    /// a new copy; mutating the result cannot corrupt the game.
    pub fn board(&self) -> Board {
        self.oracle.board()
    }

    /// Try to move a piece between two grid coordinates. Returns whether the
    /// move was accepted.
    ///
    /// On success the position advances and exactly one history record is
    /// appended; on failure (empty source, out-of-range target, or rejection
    /// by the oracle) nothing changes. Promotions are resolved to a queen,
    /// since the board UI offers no promotion picker.
    pub fn move_piece(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> bool {
        if to_row > 7 || to_col > 7 {
            return false;
        }
        let Some(piece) = self.piece_at(from_row, from_col) else {
            return false;
        };

        let from = format_position(from_row, from_col);
        let to = format_position(to_row, to_col);
        // Snapshot the target square before the oracle mutates the position.
        let captured = self.piece_at(to_row, to_col);

        let notation = match self
            .oracle
            .submit_move(&from, &to, Some(PieceKind::Queen))
        {
            Ok(san) => san,
            Err(_) => return false,
        };

        self.history.push(MoveRecord {
            piece,
            from: GridPos {
                row: from_row,
                col: from_col,
            },
            to: GridPos {
                row: to_row,
                col: to_col,
            },
            captured,
            notation,
            timestamp: Utc::now(),
        });
        true
    }

    /// Defensive copy of the move history, in order of execution.
    pub fn move_history(&self) -> Vec<MoveRecord> {
        self.history.clone()
    }

    /// Side to move.
    pub fn turn(&self) -> PieceColor {
        self.oracle.turn()
    }

    pub fn is_check(&self) -> bool {
        self.oracle.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.oracle.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.oracle.is_stalemate()
    }

    pub fn is_draw(&self) -> bool {
        self.oracle.is_draw()
    }

    pub fn is_game_over(&self) -> bool {
        self.oracle.is_game_over()
    }

    /// Human-readable game status for the UI's status line.
    ///
    /// Exactly one branch applies: checkmate (naming the winner), then
    /// stalemate, then any other draw, then check (naming the side to move),
    /// then whose turn it is.
    pub fn status(&self) -> String {
        let to_move = self.oracle.turn();
        if self.oracle.is_checkmate() {
            format!("{} wins by checkmate", to_move.opposite())
        } else if self.oracle.is_stalemate() {
            "Draw by stalemate".to_string()
        } else if self.oracle.is_draw() {
            "Draw".to_string()
        } else if self.oracle.is_check() {
            format!("{to_move} is in check")
        } else {
            format!("{to_move} to move")
        }
    }

    /// Restore the starting position and clear the history.
    pub fn reset(&mut self) {
        self.oracle.reset();
        self.history.clear();
    }
}
