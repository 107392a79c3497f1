//! Cell contents: the two players and the empty marker.

use std::fmt;
use std::ops::Not;

/// The occupant of a cell.
///
/// `Empty` marks an unoccupied cell and is never a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Side {
    First = 0,
    Second = 1,
    #[default]
    Empty = 2,
}

impl Side {
    /// Number of players.
    pub const PLAYERS: usize = 2;

    /// Both players in index order.
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// Return the index (0 for First, 1 for Second, 2 for Empty).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return `true` for `First` and `Second`.
    #[inline]
    pub const fn is_stone(self) -> bool {
        !matches!(self, Side::Empty)
    }

    /// Return the other player. `Empty` maps to itself.
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
            Side::Empty => Side::Empty,
        }
    }

    /// The character used in the text board format.
    pub const fn to_char(self) -> char {
        match self {
            Side::First => 'x',
            Side::Second => 'o',
            Side::Empty => '.',
        }
    }

    /// Parse a text board character (`x`, `o`, `.` or `-`).
    pub fn from_char(c: char) -> Option<Side> {
        match c {
            'x' | 'X' => Some(Side::First),
            'o' | 'O' => Some(Side::Second),
            '.' | '-' => Some(Side::Empty),
            _ => None,
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Side;

    #[test]
    fn opponent_swaps_players() {
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::Second.opponent(), Side::First);
        assert_eq!(!Side::First, Side::Second);
    }

    #[test]
    fn empty_is_not_a_player() {
        assert!(!Side::Empty.is_stone());
        assert_eq!(Side::Empty.opponent(), Side::Empty);
        assert!(Side::BOTH.iter().all(|s| s.is_stone()));
    }

    #[test]
    fn char_roundtrip() {
        for side in [Side::First, Side::Second, Side::Empty] {
            assert_eq!(Side::from_char(side.to_char()), Some(side));
        }
        assert_eq!(Side::from_char('?'), None);
    }
}
