use std::collections::HashMap;

use crate::models::RomanDigit;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a user-defined word as an owned `String`. Each token stands for exactly one
/// Roman digit once it has been defined.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the name of a tradeable item (e.g. `Silver`) as an owned `String`.
pub type ItemName = String;

/// Credits per single unit of an item.
pub type Credits = f64;

/// The integer value of a validated Roman numeral.
pub type NumeralValue = u32;

/// Maps tokens to the Roman digit they stand for.
pub type SymbolMap = HashMap<Token, RomanDigit>;

/// Maps item names to their credits-per-unit rate.
pub type ItemRateMap = HashMap<ItemName, Credits>;

/// Credits quoted back to the user, truncated toward zero.
pub type WholeCredits = u64;
