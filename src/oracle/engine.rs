//! Full-rules oracle backed by the shakmaty chess library.

use crate::domain::{Board, PieceColor, PieceKind, kind_to_role, shakmaty_to_piece, to_square};
use crate::oracle::RulesOracle;
use anyhow::{Result, anyhow, bail};
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, Color as SColor, File, Move, Position, Rank, Role, Square};

/// Wraps a live `shakmaty::Chess` position and enforces the full rules of
/// chess: move legality, castling, en passant, promotion, and all
/// game-termination conditions.
pub struct ShakmatyOracle {
    position: Chess,
}

impl ShakmatyOracle {
    pub fn new() -> Self {
        Self {
            position: Chess::default(),
        }
    }

    /// Start from an arbitrary position. Mainly useful for tests and for
    /// hosts that restore a saved game.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let position = fen
            .parse::<Fen>()
            .map_err(|err| anyhow!("invalid FEN: {err}"))?
            .into_position(CastlingMode::Standard)
            .map_err(|err| anyhow!("FEN is not a playable position: {err}"))?;
        Ok(Self { position })
    }
}

impl Default for ShakmatyOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesOracle for ShakmatyOracle {
    fn board(&self) -> Board {
        let mut board: Board = [[None; 8]; 8];
        for (row, squares) in board.iter_mut().enumerate() {
            for (col, square) in squares.iter_mut().enumerate() {
                *square = self
                    .position
                    .board()
                    .piece_at(to_square(row, col))
                    .map(shakmaty_to_piece);
            }
        }
        board
    }

    fn submit_move(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<PieceKind>,
    ) -> Result<String> {
        let from_sq: Square = from
            .parse()
            .map_err(|_| anyhow!("malformed source square {from:?}"))?;
        let to_sq: Square = to
            .parse()
            .map_err(|_| anyhow!("malformed target square {to:?}"))?;

        let position = self.position.clone();
        for m in &position.legal_moves() {
            let (move_from, move_to) = match m {
                Move::Normal { from, to, .. } => (*from, *to),
                Move::EnPassant { from, to, .. } => (*from, *to),
                Move::Castle { king, rook, .. } => {
                    // For castling, the user drags the king to its destination
                    // (g1/g8 or c1/c8)
                    let king_dest = if rook.file() == File::H {
                        Square::from_coords(File::G, rook.rank())
                    } else {
                        Square::from_coords(File::C, rook.rank())
                    };
                    (*king, king_dest)
                }
                Move::Put { .. } => continue,
            };

            if move_from == from_sq && move_to == to_sq {
                // Promotion moves are enumerated once per target role; pick
                // the requested one, defaulting to queen.
                let requested = match promotion.map(kind_to_role) {
                    Some(Role::Pawn) | Some(Role::King) | None => Role::Queen,
                    Some(role) => role,
                };
                let move_to_play = match m {
                    Move::Normal {
                        role: Role::Pawn,
                        from,
                        to,
                        capture,
                        promotion: Some(_),
                    } if to.rank() == Rank::Eighth || to.rank() == Rank::First => Move::Normal {
                        role: Role::Pawn,
                        from: *from,
                        to: *to,
                        capture: *capture,
                        promotion: Some(requested),
                    },
                    _ => m.clone(),
                };

                let mut san = San::from_move(&position, move_to_play.clone()).to_string();
                let next = position
                    .play(move_to_play)
                    .map_err(|_| anyhow!("move rejected by rules engine"))?;
                if next.is_checkmate() {
                    san.push('#');
                } else if next.is_check() {
                    san.push('+');
                }
                self.position = next;
                return Ok(san);
            }
        }
        bail!("no legal move from {from} to {to}")
    }

    fn turn(&self) -> PieceColor {
        match self.position.turn() {
            SColor::White => PieceColor::White,
            SColor::Black => PieceColor::Black,
        }
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn is_draw(&self) -> bool {
        self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.position.halfmoves() >= 100
    }

    fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    fn reset(&mut self) {
        self.position = Chess::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_move_returns_san() {
        let mut oracle = ShakmatyOracle::new();
        let san = oracle.submit_move("e2", "e4", None).unwrap();
        assert_eq!(san, "e4");
        assert_eq!(oracle.turn(), PieceColor::Black);
    }

    #[test]
    fn test_illegal_move_leaves_position_unchanged() {
        let mut oracle = ShakmatyOracle::new();
        assert!(oracle.submit_move("e2", "e5", None).is_err());
        assert_eq!(oracle.turn(), PieceColor::White);
        assert_eq!(oracle.board(), ShakmatyOracle::new().board());
    }

    #[test]
    fn test_wrong_turn_is_rejected() {
        let mut oracle = ShakmatyOracle::new();
        assert!(oracle.submit_move("e7", "e5", None).is_err());
    }

    #[test]
    fn test_malformed_squares_are_rejected() {
        let mut oracle = ShakmatyOracle::new();
        assert!(oracle.submit_move("e9", "e4", None).is_err());
        assert!(oracle.submit_move("", "e4", None).is_err());
        assert!(oracle.submit_move("e2", "x4", None).is_err());
    }

    #[test]
    fn test_promotion_defaults_to_queen() {
        let mut oracle = ShakmatyOracle::from_fen("7k/P7/8/8/8/8/8/7K w - - 0 1").unwrap();
        let san = oracle.submit_move("a7", "a8", None).unwrap();
        assert_eq!(san, "a8=Q+");
        let board = oracle.board();
        assert_eq!(board[0][0].map(|p| p.kind), Some(PieceKind::Queen));
    }

    #[test]
    fn test_promotion_honors_requested_piece() {
        let mut oracle = ShakmatyOracle::from_fen("7k/P7/8/8/8/8/8/7K w - - 0 1").unwrap();
        let san = oracle.submit_move("a7", "a8", Some(PieceKind::Knight)).unwrap();
        assert_eq!(san, "a8=N");
    }

    #[test]
    fn test_castling_by_king_drag() {
        let mut oracle =
            ShakmatyOracle::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let san = oracle.submit_move("e1", "g1", None).unwrap();
        assert_eq!(san, "O-O");
        let board = oracle.board();
        assert_eq!(board[7][6].map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board[7][5].map(|p| p.kind), Some(PieceKind::Rook));
    }

    #[test]
    fn test_stalemate_is_draw() {
        let oracle = ShakmatyOracle::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(oracle.is_stalemate());
        assert!(oracle.is_draw());
        assert!(oracle.is_game_over());
        assert!(!oracle.is_checkmate());
    }

    #[test]
    fn test_insufficient_material_is_draw() {
        let oracle = ShakmatyOracle::from_fen("7k/8/8/8/8/8/8/7K w - - 0 1").unwrap();
        assert!(oracle.is_draw());
        assert!(!oracle.is_stalemate());
    }
}
