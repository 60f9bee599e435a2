use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const PLUS_STRAND: i8 = 1;
pub const MINUS_STRAND: i8 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strand {
    Plus,
    Minus,
}

impl Strand {
    /// `'+'` -> Plus, `'-'` -> Minus, anything else -> None
    pub fn from_pm(s: &str) -> Option<Strand> {
        match s {
            "+" => Some(Strand::Plus),
            "-" => Some(Strand::Minus),
            _ => None,
        }
    }

    /// `1` -> Plus, `-1` -> Minus, anything else -> None
    pub fn from_int(i: i64) -> Option<Strand> {
        match i {
            1 => Some(Strand::Plus),
            -1 => Some(Strand::Minus),
            _ => None,
        }
    }

    pub fn to_pm(self) -> char {
        match self {
            Strand::Plus => '+',
            Strand::Minus => '-',
        }
    }

    pub fn to_int(self) -> i8 {
        match self {
            Strand::Plus => PLUS_STRAND,
            Strand::Minus => MINUS_STRAND,
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_pm())
    }
}
