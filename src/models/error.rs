use std::fmt;

use crate::constants::MAX_NUMERAL_VALUE;

#[derive(Debug)]
pub enum Error {
    /// The line matches none of the statement shapes.
    UnrecognizedStatement(String),
    /// A token has no entry in the symbol table.
    UnknownToken(String),
    /// The digits assembled from a token sequence do not form a valid numeral.
    InvalidNumeral(String),
    /// A credit query references an item without a stored rate.
    UnknownItem(String),
    /// A valuation resolved to a zero quantity, leaving the rate undefined.
    ZeroQuantity(String),
    /// A symbol definition names a character outside `IVXLCDM`.
    InvalidDigit(String),
    /// Integer cannot be written as a Roman numeral.
    OutOfRange(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnrecognizedStatement(line) => write!(f, "Unrecognized Statement: {}", line),
            Error::UnknownToken(token) => write!(f, "Unknown Token: {}", token),
            Error::InvalidNumeral(numeral) => write!(f, "Invalid Numeral: {}", numeral),
            Error::UnknownItem(item) => write!(f, "Unknown Item: {}", item),
            Error::ZeroQuantity(item) => write!(f, "Zero Quantity: {}", item),
            Error::InvalidDigit(digit) => write!(f, "Invalid Digit: {}", digit),
            Error::OutOfRange(value) => write!(
                f,
                "Out Of Range: {} (expected 1..={})",
                value, MAX_NUMERAL_VALUE
            ),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}
