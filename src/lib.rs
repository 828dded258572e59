//! State tracking for a single-session, two-player chess game behind a
//! board UI.
//!
//! The UI layer renders from [`GameService::board`] and
//! [`GameService::status`], and translates drag-and-drop gestures into
//! [`GameService::move_piece`] calls with grid coordinates (row 0 = rank 8,
//! col 0 = file a). Move legality is owned by a pluggable [`RulesOracle`];
//! the default [`ShakmatyOracle`] enforces the full rules of chess.
//!
//! ```
//! use chessboard_service::GameService;
//!
//! let mut game = GameService::new();
//! assert!(game.move_piece(6, 4, 4, 4)); // e2-e4
//! assert_eq!(game.move_history()[0].notation, "e4");
//! assert_eq!(game.status(), "Black to move");
//! ```

pub mod domain;
pub mod models;
pub mod oracle;

pub use domain::{Board, GridPos, Piece, PieceColor, PieceKind};
pub use domain::{col_to_file, format_position, parse_square, row_to_rank};
pub use models::{GameService, MoveRecord};
pub use oracle::{RulesOracle, SandboxOracle, ShakmatyOracle};
