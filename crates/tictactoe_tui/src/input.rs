//! Keyboard mapping for board navigation.

use crossterm::event::KeyCode;
use tictactoe::Square;

/// Moves the cursor one step with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Square, key: KeyCode) -> Square {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => Square::new(row, col.wrapping_sub(1)),
        KeyCode::Right => Square::new(row, col + 1),
        KeyCode::Up => Square::new(row.wrapping_sub(1), col),
        KeyCode::Down => Square::new(row + 1, col),
        _ => return cursor,
    };
    target.unwrap_or(cursor)
}

/// Maps digits `1`-`9` to squares in reading order.
pub fn digit_square(c: char) -> Option<Square> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Square::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(sq(1, 1), KeyCode::Left), sq(1, 0));
        assert_eq!(move_cursor(sq(1, 1), KeyCode::Right), sq(1, 2));
        assert_eq!(move_cursor(sq(1, 1), KeyCode::Up), sq(0, 1));
        assert_eq!(move_cursor(sq(1, 1), KeyCode::Down), sq(2, 1));
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(sq(0, 0), KeyCode::Left), sq(0, 0));
        assert_eq!(move_cursor(sq(0, 0), KeyCode::Up), sq(0, 0));
        assert_eq!(move_cursor(sq(2, 2), KeyCode::Right), sq(2, 2));
        assert_eq!(move_cursor(sq(2, 2), KeyCode::Down), sq(2, 2));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(sq(1, 2), KeyCode::Tab), sq(1, 2));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_square('1'), Some(sq(0, 0)));
        assert_eq!(digit_square('5'), Some(sq(1, 1)));
        assert_eq!(digit_square('9'), Some(sq(2, 2)));
        assert_eq!(digit_square('0'), None);
        assert_eq!(digit_square('a'), None);
    }
}
