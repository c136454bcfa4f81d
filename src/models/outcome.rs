use crate::models::RomanDigit;
use crate::types::{Credits, ItemName, NumeralValue, Token, WholeCredits};

/// The successful result of executing one statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    SymbolDefined {
        token: Token,
        digit: RomanDigit,
    },
    ItemValued {
        item_name: ItemName,
        rate: Credits,
    },
    NumeralValue {
        tokens: Vec<Token>,
        value: NumeralValue,
    },
    CreditValue {
        tokens: Vec<Token>,
        credits: WholeCredits,
    },
}

impl Outcome {
    /// Renders the line written back to the user, if any.
    ///
    /// Definitions and valuations are silent.
    pub fn render(&self, credit_unit: &str) -> Option<String> {
        match self {
            Outcome::SymbolDefined { .. } | Outcome::ItemValued { .. } => None,
            Outcome::NumeralValue { tokens, value } => {
                Some(format!("{} is {}", tokens.join(" "), value))
            }
            Outcome::CreditValue { tokens, credits } => {
                Some(format!("{} is {} {}", tokens.join(" "), credits, credit_unit))
            }
        }
    }
}
