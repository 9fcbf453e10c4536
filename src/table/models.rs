use std::fmt;
use serde::{Deserialize, Serialize};

/// Rank 2..=14 where 11 = Jack, 12 = Queen, 13 = King, 14 = Ace.
///
/// No suit is modeled — a deck holds four indistinguishable copies of each
/// rank, so two `Rank` values of the same number compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Lowest valid rank (deuce).
    pub const MIN: u8 = 2;
    /// Highest valid rank (ace).
    pub const MAX: u8 = 14;

    /// Is the underlying value inside the valid 2..=14 range?
    pub fn is_valid(self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
