use crate::models::RomanNumeral;
use crate::types::NumeralValue;
use crate::Error;

/// String-level entry points for converting between Roman numerals and integers.
pub struct NumeralEngine;

impl NumeralEngine {
    /// Returns `true` if `numeral` satisfies every structural rule.
    pub fn validate(numeral: &str) -> bool {
        RomanNumeral::parse(numeral).is_ok()
    }

    /// Converts a numeral string to its integer value, rejecting invalid numerals.
    pub fn to_integer(numeral: &str) -> Result<NumeralValue, Error> {
        Ok(RomanNumeral::parse(numeral)?.value())
    }

    /// Converts a positive integer to its canonical numeral.
    pub fn to_roman(value: NumeralValue) -> Result<String, Error> {
        Ok(RomanNumeral::from_value(value)?.to_string())
    }

    /// Converts in whichever direction `text` calls for: a run of decimal digits becomes a
    /// numeral, anything else is read as a numeral and becomes an integer.
    pub fn convert(text: &str) -> Result<String, Error> {
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            let value = text
                .parse::<NumeralValue>()
                .map_err(|_| Error::OutOfRange(text.to_string()))?;

            return Self::to_roman(value);
        }

        Ok(Self::to_integer(text)?.to_string())
    }
}
