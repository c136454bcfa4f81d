use std::fmt;

use crate::types::NumeralValue;
use crate::Error;

/// One of the seven Roman numeral symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RomanDigit {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl RomanDigit {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(RomanDigit::I),
            'V' => Some(RomanDigit::V),
            'X' => Some(RomanDigit::X),
            'L' => Some(RomanDigit::L),
            'C' => Some(RomanDigit::C),
            'D' => Some(RomanDigit::D),
            'M' => Some(RomanDigit::M),
            _ => None,
        }
    }

    /// Parses the right-hand side of a symbol definition, which must be exactly one digit.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut chars = text.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| Error::InvalidDigit(text.to_string()))
            }
            _ => Err(Error::InvalidDigit(text.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            RomanDigit::I => 'I',
            RomanDigit::V => 'V',
            RomanDigit::X => 'X',
            RomanDigit::L => 'L',
            RomanDigit::C => 'C',
            RomanDigit::D => 'D',
            RomanDigit::M => 'M',
        }
    }

    pub fn value(self) -> NumeralValue {
        match self {
            RomanDigit::I => 1,
            RomanDigit::V => 5,
            RomanDigit::X => 10,
            RomanDigit::L => 50,
            RomanDigit::C => 100,
            RomanDigit::D => 500,
            RomanDigit::M => 1000,
        }
    }

    /// Powers of ten (I, X, C, M) may repeat; the fives (V, L, D) never may.
    pub fn is_repeatable(self) -> bool {
        matches!(
            self,
            RomanDigit::I | RomanDigit::X | RomanDigit::C | RomanDigit::M
        )
    }
}

impl fmt::Display for RomanDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
