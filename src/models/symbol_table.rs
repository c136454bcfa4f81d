use log::debug;

use crate::models::{RomanDigit, RomanNumeral};
use crate::types::{Credits, ItemRateMap, NumeralValue, SymbolMap, Token, TokenRef};
use crate::Error;

/// Owns the token-to-digit mapping and the per-item credit rates built up by a session.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    symbols: SymbolMap,
    item_rates: ItemRateMap,
}

impl SymbolTable {
    /// Creates an empty SymbolTable
    pub fn new() -> Self {
        SymbolTable {
            symbols: SymbolMap::new(),
            item_rates: ItemRateMap::new(),
        }
    }

    /// Binds `token` to `digit`, replacing any earlier binding.
    pub fn define_symbol(&mut self, token: &TokenRef, digit: RomanDigit) {
        if let Some(previous) = self.symbols.insert(token.to_string(), digit) {
            debug!("Redefined {} from {} to {}", token, previous, digit);
        } else {
            debug!("Defined {} as {}", token, digit);
        }
    }

    /// Gets the digit bound to a token, or None if the token is not present
    pub fn get_digit(&self, token: &TokenRef) -> Option<RomanDigit> {
        self.symbols.get(token).copied()
    }

    /// Maps every token through the table, failing on the first unknown one.
    pub fn resolve_digits(&self, tokens: &[Token]) -> Result<Vec<RomanDigit>, Error> {
        tokens
            .iter()
            .map(|token| {
                self.get_digit(token)
                    .ok_or_else(|| Error::UnknownToken(token.clone()))
            })
            .collect()
    }

    /// Resolves a token sequence into a validated numeral.
    pub fn resolve_numeral(&self, tokens: &[Token]) -> Result<RomanNumeral, Error> {
        let digits = self.resolve_digits(tokens)?;

        RomanNumeral::from_digits(digits)
    }

    /// Stores `total_credits / quantity` as the rate for `item_name`, where the quantity is the
    /// value of `tokens`.
    ///
    /// Nothing is stored unless every step succeeds. An empty token sequence has a quantity of
    /// zero and is rejected with [`Error::ZeroQuantity`].
    pub fn define_item_rate(
        &mut self,
        tokens: &[Token],
        item_name: &str,
        total_credits: Credits,
    ) -> Result<Credits, Error> {
        let quantity: NumeralValue = if tokens.is_empty() {
            0
        } else {
            self.resolve_numeral(tokens)?.value()
        };

        if quantity == 0 {
            return Err(Error::ZeroQuantity(item_name.to_string()));
        }

        let rate = total_credits / quantity as Credits;
        self.item_rates.insert(item_name.to_string(), rate);

        debug!(
            "Rate for {} set to {} ({} / {})",
            item_name, rate, total_credits, quantity
        );

        Ok(rate)
    }

    /// Gets the credits-per-unit rate for an item, or None if it has not been valued
    pub fn get_item_rate(&self, item_name: &str) -> Option<Credits> {
        self.item_rates.get(item_name).copied()
    }

    pub fn get_symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn get_item_count(&self) -> usize {
        self.item_rates.len()
    }
}
