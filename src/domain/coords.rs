//! Translation between zero-indexed grid coordinates and algebraic square names.
//!
//! The grid is how the board UI addresses squares (row 0 = rank 8, col 0 =
//! file a, row increasing downward); algebraic notation is how the rules
//! oracle and the move history address them.

/// Convert a column index to its file letter ('a'..'h').
/// Callers guarantee `col` is in 0..=7.
pub fn col_to_file(col: usize) -> char {
    (b'a' + col as u8) as char
}

/// Convert a row index to its rank digit ('8'..'1').
/// Inverted because row increases downward while rank increases upward.
/// Callers guarantee `row` is in 0..=7.
pub fn row_to_rank(row: usize) -> char {
    (b'8' - row as u8) as char
}

/// Format a grid coordinate as an algebraic square name, e.g. (6, 4) -> "e2".
pub fn format_position(row: usize, col: usize) -> String {
    format!("{}{}", col_to_file(col), row_to_rank(row))
}

/// Parse an algebraic square name back to grid coordinates.
/// Returns `None` for anything that is not a valid two-character square.
pub fn parse_square(square: &str) -> Option<(usize, usize)> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].checked_sub(b'a')?;
    let row = b'8'.checked_sub(bytes[1])?;
    if col > 7 || row > 7 {
        return None;
    }
    Some((row as usize, col as usize))
}
