use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// The color of a stone. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    /// Both colors in turn order.
    pub const ALL: [Stone; 2] = [Stone::Black, Stone::White];

    pub fn from_int(v: i8) -> Option<Self> {
        match v.signum() {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn to_int(self) -> i8 {
        self as i8
    }

    /// Slot of this color in per-color arrays: Black is 0, White is 1.
    pub fn index(self) -> usize {
        match self {
            Stone::Black => 0,
            Stone::White => 1,
        }
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Stone::Black => 'B',
            Stone::White => 'W',
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_int_uses_sign() {
        assert_eq!(Stone::from_int(1), Some(Stone::Black));
        assert_eq!(Stone::from_int(7), Some(Stone::Black));
        assert_eq!(Stone::from_int(-1), Some(Stone::White));
        assert_eq!(Stone::from_int(-3), Some(Stone::White));
        assert_eq!(Stone::from_int(0), None);
    }

    #[test]
    fn turn_order_starts_with_black() {
        assert_eq!(Stone::ALL[0], Stone::Black);
        assert_eq!(Stone::Black.index(), 0);
        assert_eq!(Stone::White.index(), 1);
    }

    #[test]
    fn opponent_and_negation_agree() {
        for stone in Stone::ALL {
            assert_eq!(-stone, stone.opp());
            assert_eq!(stone.opp().opp(), stone);
        }
    }

    #[test]
    fn display_and_letter() {
        assert_eq!(Stone::Black.to_string(), "Black");
        assert_eq!(Stone::White.to_string(), "White");
        assert_eq!(Stone::Black.letter(), 'B');
        assert_eq!(Stone::White.letter(), 'W');
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_value(Stone::White).unwrap(), -1);
        let stone: Stone = serde_json::from_value(serde_json::json!(1)).unwrap();
        assert_eq!(stone, Stone::Black);
    }
}
