//! The rules oracle seam.
//!
//! The game service never decides legality itself: it delegates to an
//! implementation of [`RulesOracle`], which owns the authoritative position.
//! [`ShakmatyOracle`] is the canonical full-rules implementation;
//! [`SandboxOracle`] is a rule-free fallback for unrefereed board play.

mod engine;
mod sandbox;

pub use engine::ShakmatyOracle;
pub use sandbox::SandboxOracle;

use crate::domain::{Board, PieceColor, PieceKind};
use anyhow::Result;

pub trait RulesOracle {
    /// Fresh 8x8 snapshot of the current position.
    fn board(&self) -> Board;

    /// Submit a move between two algebraic squares.
    ///
    /// `promotion` is consulted only when the move requires a promotion
    /// choice. On success the position advances (side to move flips) and the
    /// move's algebraic notation is returned; on rejection the position is
    /// left unchanged.
    fn submit_move(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<PieceKind>,
    ) -> Result<String>;

    /// Side to move.
    fn turn(&self) -> PieceColor;

    fn is_check(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_draw(&self) -> bool;
    fn is_game_over(&self) -> bool;

    /// Restore the standard starting position.
    fn reset(&mut self);
}
