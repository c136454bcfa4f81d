use log::debug;

use crate::constants::{KEYWORD_HOW, KEYWORD_IS, KEYWORD_MANY, KEYWORD_MUCH, QUESTION_MARK};
use crate::types::{Credits, ItemName, Token};
use crate::utils::split_tokens;

/// A single line of input, classified by shape only.
///
/// Token membership is not checked here; that happens when the statement is executed.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `<token> is <digit>`
    SymbolDefinition { token: Token, digit: String },
    /// `<token>* <item> is <integer> Credits`
    ItemValuation {
        tokens: Vec<Token>,
        item_name: ItemName,
        total_credits: Credits,
    },
    /// `how much is <token>+ ?`
    NumeralQuery { tokens: Vec<Token> },
    /// `how many Credits is <token>+ <item> ?`
    ///
    /// The last token is the item name.
    CreditQuery { tokens: Vec<Token> },
    Unrecognized(String),
}

impl Statement {
    /// Classifies a line. `credit_unit` is the keyword used for credits (normally `Credits`).
    pub fn parse(line: &str, credit_unit: &str) -> Self {
        let words = split_tokens(line);
        let words: Vec<&str> = words.iter().map(|word| word.as_str()).collect();

        let statement = Self::parse_symbol_definition(&words)
            .or_else(|| Self::parse_item_valuation(&words, credit_unit))
            .or_else(|| Self::parse_numeral_query(&words))
            .or_else(|| Self::parse_credit_query(&words, credit_unit))
            .unwrap_or_else(|| Statement::Unrecognized(line.trim().to_string()));

        debug!("Classified {:?} as {}", line, statement.kind());

        statement
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Statement::SymbolDefinition { .. } => "symbol definition",
            Statement::ItemValuation { .. } => "item valuation",
            Statement::NumeralQuery { .. } => "numeral query",
            Statement::CreditQuery { .. } => "credit query",
            Statement::Unrecognized(_) => "unrecognized",
        }
    }

    fn parse_symbol_definition(words: &[&str]) -> Option<Self> {
        match words {
            [token, KEYWORD_IS, digit] if digit.chars().count() == 1 => {
                Some(Statement::SymbolDefinition {
                    token: token.to_string(),
                    digit: digit.to_string(),
                })
            }
            _ => None,
        }
    }

    fn parse_item_valuation(words: &[&str], credit_unit: &str) -> Option<Self> {
        match words {
            [tokens @ .., item_name, KEYWORD_IS, amount, unit] if *unit == credit_unit => {
                if amount.is_empty() || !amount.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }

                // Any digit string parses as a float, however long.
                let total_credits = amount.parse::<Credits>().ok()?;

                Some(Statement::ItemValuation {
                    tokens: to_owned_tokens(tokens),
                    item_name: item_name.to_string(),
                    total_credits,
                })
            }
            _ => None,
        }
    }

    fn parse_numeral_query(words: &[&str]) -> Option<Self> {
        match words {
            [KEYWORD_HOW, KEYWORD_MUCH, KEYWORD_IS, tokens @ .., QUESTION_MARK]
                if !tokens.is_empty() =>
            {
                Some(Statement::NumeralQuery {
                    tokens: to_owned_tokens(tokens),
                })
            }
            _ => None,
        }
    }

    fn parse_credit_query(words: &[&str], credit_unit: &str) -> Option<Self> {
        match words {
            [KEYWORD_HOW, KEYWORD_MANY, unit, KEYWORD_IS, tokens @ .., QUESTION_MARK]
                if *unit == credit_unit && tokens.len() >= 2 =>
            {
                Some(Statement::CreditQuery {
                    tokens: to_owned_tokens(tokens),
                })
            }
            _ => None,
        }
    }
}

fn to_owned_tokens(tokens: &[&str]) -> Vec<Token> {
    tokens.iter().map(|token| token.to_string()).collect()
}
