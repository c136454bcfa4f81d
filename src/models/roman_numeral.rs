use log::debug;
use std::fmt;

use crate::constants::{
    CANONICAL_NUMERAL_TABLE, MAX_CONSECUTIVE_REPEATS, MAX_NUMERAL_VALUE, SUBTRACTIVE_PAIRS,
};
use crate::models::RomanDigit;
use crate::types::NumeralValue;
use crate::Error;

/// A structurally valid Roman numeral.
///
/// Digits are either validated by [`RomanNumeral::from_digits`] or generated canonically by
/// [`RomanNumeral::from_value`], so `from_value(n.value())` always reproduces `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomanNumeral {
    digits: Vec<RomanDigit>,
}

impl RomanNumeral {
    /// Validates a digit sequence against the repetition, subtraction and place-order rules.
    pub fn from_digits(digits: Vec<RomanDigit>) -> Result<Self, Error> {
        if digits.is_empty() {
            return Err(Error::InvalidNumeral(String::new()));
        }

        if let Err(reason) = Self::check_repetition(&digits)
            .and_then(|_| Self::check_subtraction(&digits))
            .and_then(|_| Self::check_place_order(&digits))
        {
            let numeral = Self::digits_to_string(&digits);
            debug!("Rejected numeral {}: {}", numeral, reason);

            return Err(Error::InvalidNumeral(numeral));
        }

        Ok(Self { digits })
    }

    /// Parses a numeral string such as `MCMXLIV`.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let digits = text
            .chars()
            .map(RomanDigit::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::InvalidNumeral(text.to_string()))?;

        Self::from_digits(digits)
    }

    /// Builds the canonical (shortest) numeral for `value` by greedy substitution.
    pub fn from_value(value: NumeralValue) -> Result<Self, Error> {
        if value == 0 || value > MAX_NUMERAL_VALUE {
            return Err(Error::OutOfRange(value.to_string()));
        }

        let mut remaining = value;
        let mut numeral = String::new();

        for &(table_value, symbol) in CANONICAL_NUMERAL_TABLE.iter() {
            while remaining >= table_value {
                numeral.push_str(symbol);
                remaining -= table_value;
            }
        }

        let digits = numeral.chars().filter_map(RomanDigit::from_char).collect();

        Ok(Self { digits })
    }

    /// Sums the digits from right to left; a digit smaller than the one after it is subtracted.
    pub fn value(&self) -> NumeralValue {
        let mut total: NumeralValue = 0;
        let mut prev_value: NumeralValue = 0;

        for digit in self.digits.iter().rev() {
            let current_value = digit.value();

            if current_value < prev_value {
                total -= current_value;
            } else {
                total += current_value;
            }

            prev_value = current_value;
        }

        total
    }

    pub fn digits(&self) -> &[RomanDigit] {
        &self.digits
    }

    fn digits_to_string(digits: &[RomanDigit]) -> String {
        digits.iter().map(|digit| digit.as_char()).collect()
    }

    fn check_repetition(digits: &[RomanDigit]) -> Result<(), String> {
        let mut run_length = 0;

        for (idx, &digit) in digits.iter().enumerate() {
            if idx > 0 && digits[idx - 1] == digit {
                run_length += 1;
            } else {
                run_length = 1;
            }

            if !digit.is_repeatable() && run_length > 1 {
                return Err(format!("{} may not be repeated", digit));
            }

            if run_length > MAX_CONSECUTIVE_REPEATS {
                return Err(format!(
                    "{} repeated more than {} times",
                    digit, MAX_CONSECUTIVE_REPEATS
                ));
            }
        }

        Ok(())
    }

    fn check_subtraction(digits: &[RomanDigit]) -> Result<(), String> {
        for pair in digits.windows(2) {
            let (left, right) = (pair[0], pair[1]);

            if left.value() < right.value() && !SUBTRACTIVE_PAIRS.contains(&(left, right)) {
                return Err(format!("{} may not precede {}", left, right));
            }
        }

        Ok(())
    }

    /// Walks the decimal places from thousands down to units, each written at most once.
    ///
    /// Catches sequences which pass the pairwise rules but mix places, such as `IIX`, `IXI` or
    /// `VIV`.
    fn check_place_order(digits: &[RomanDigit]) -> Result<(), String> {
        use crate::models::RomanDigit::*;

        let mut pos = 0;

        // Thousands have no five or ten digit; repetition is already bounded.
        while pos < digits.len() && digits[pos] == M {
            pos += 1;
        }

        for &(one, five, ten) in &[(C, D, M), (X, L, C), (I, V, X)] {
            pos = Self::consume_place(digits, pos, one, five, ten);
        }

        if pos == digits.len() {
            Ok(())
        } else {
            Err(format!("{} is out of place", digits[pos]))
        }
    }

    fn consume_place(
        digits: &[RomanDigit],
        mut pos: usize,
        one: RomanDigit,
        five: RomanDigit,
        ten: RomanDigit,
    ) -> usize {
        let next = digits.get(pos).copied();
        let after = digits.get(pos + 1).copied();

        if next == Some(one) && (after == Some(five) || after == Some(ten)) {
            return pos + 2;
        }

        if next == Some(five) {
            pos += 1;
        }

        let mut ones = 0;
        while ones < MAX_CONSECUTIVE_REPEATS && digits.get(pos) == Some(&one) {
            pos += 1;
            ones += 1;
        }

        pos
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::digits_to_string(&self.digits))
    }
}
