use crate::models::RomanDigit;
use crate::types::NumeralValue;

/// Response written for any statement which cannot be understood or resolved.
pub const UNKNOWN_STATEMENT_RESPONSE: &str = "I have no idea what you are talking about";

/// Message emitted by the standalone converter for a rejected numeral.
pub const INVALID_NUMERAL_MESSAGE: &str = "Error: Invalid Roman numeral structure.";

pub const KEYWORD_IS: &str = "is";
pub const KEYWORD_HOW: &str = "how";
pub const KEYWORD_MUCH: &str = "much";
pub const KEYWORD_MANY: &str = "many";
pub const QUESTION_MARK: &str = "?";

/// Largest value expressible under the repetition rules (`MMMCMXCIX`).
pub const MAX_NUMERAL_VALUE: NumeralValue = 3999;

/// Consecutive repeats allowed for the repeatable digits (I, X, C, M).
pub const MAX_CONSECUTIVE_REPEATS: usize = 3;

/// Descending (value, symbol) pairs used for greedy integer-to-numeral conversion.
pub const CANONICAL_NUMERAL_TABLE: [(NumeralValue, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// The only adjacencies where a smaller digit may precede a larger one.
pub const SUBTRACTIVE_PAIRS: [(RomanDigit, RomanDigit); 6] = [
    (RomanDigit::I, RomanDigit::V),
    (RomanDigit::I, RomanDigit::X),
    (RomanDigit::X, RomanDigit::L),
    (RomanDigit::X, RomanDigit::C),
    (RomanDigit::C, RomanDigit::D),
    (RomanDigit::C, RomanDigit::M),
];
