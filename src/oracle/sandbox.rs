//! Rule-free fallback oracle.
//!
//! Legacy sandbox mode: any piece may move to any in-range square and an
//! occupied destination is simply overwritten. No check, mate, or draw
//! detection. Intended for unrefereed board play, not as the canonical
//! game mode.

use crate::domain::{Board, Piece, PieceColor, PieceKind, col_to_file, parse_square};
use crate::oracle::RulesOracle;
use anyhow::{Context, Result, bail};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

fn starting_board() -> Board {
    let mut board: Board = [[None; 8]; 8];
    for col in 0..8 {
        board[0][col] = Some(Piece {
            kind: BACK_RANK[col],
            color: PieceColor::Black,
        });
        board[1][col] = Some(Piece {
            kind: PieceKind::Pawn,
            color: PieceColor::Black,
        });
        board[6][col] = Some(Piece {
            kind: PieceKind::Pawn,
            color: PieceColor::White,
        });
        board[7][col] = Some(Piece {
            kind: BACK_RANK[col],
            color: PieceColor::White,
        });
    }
    board
}

pub struct SandboxOracle {
    board: Board,
    to_move: PieceColor,
}

impl SandboxOracle {
    pub fn new() -> Self {
        Self {
            board: starting_board(),
            to_move: PieceColor::White,
        }
    }
}

impl Default for SandboxOracle {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal SAN-style rendering: piece letter, `x` on capture, destination.
fn notation(piece: Piece, from_col: usize, capture: bool, to: &str) -> String {
    let letter = match piece.kind {
        PieceKind::Pawn => None,
        PieceKind::Knight => Some('N'),
        PieceKind::Bishop => Some('B'),
        PieceKind::Rook => Some('R'),
        PieceKind::Queen => Some('Q'),
        PieceKind::King => Some('K'),
    };
    match (letter, capture) {
        (None, false) => to.to_string(),
        (None, true) => format!("{}x{to}", col_to_file(from_col)),
        (Some(letter), false) => format!("{letter}{to}"),
        (Some(letter), true) => format!("{letter}x{to}"),
    }
}

impl RulesOracle for SandboxOracle {
    fn board(&self) -> Board {
        self.board
    }

    fn submit_move(
        &mut self,
        from: &str,
        to: &str,
        _promotion: Option<PieceKind>,
    ) -> Result<String> {
        let (from_row, from_col) =
            parse_square(from).with_context(|| format!("malformed source square {from:?}"))?;
        let (to_row, to_col) =
            parse_square(to).with_context(|| format!("malformed target square {to:?}"))?;

        let Some(piece) = self.board[from_row][from_col] else {
            bail!("no piece on {from}");
        };

        let capture = self.board[to_row][to_col].is_some();
        self.board[to_row][to_col] = Some(piece);
        self.board[from_row][from_col] = None;
        self.to_move = self.to_move.opposite();
        Ok(notation(piece, from_col, capture, to))
    }

    fn turn(&self) -> PieceColor {
        self.to_move
    }

    // Sandbox play has no referee: nothing is ever check, mate, or drawn.
    fn is_check(&self) -> bool {
        false
    }

    fn is_checkmate(&self) -> bool {
        false
    }

    fn is_stalemate(&self) -> bool {
        false
    }

    fn is_draw(&self) -> bool {
        false
    }

    fn is_game_over(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        self.board = starting_board();
        self.to_move = PieceColor::White;
    }
}
