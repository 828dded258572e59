//! Domain layer: chess value types and coordinate translation.

pub mod chess;
pub mod coords;

pub use chess::{
    Board, GridPos, Piece, PieceColor, PieceKind, kind_to_role, shakmaty_to_piece, to_square,
};
pub use coords::{col_to_file, format_position, parse_square, row_to_rank};
