use log::debug;

use crate::models::SymbolTable;
use crate::types::{Credits, NumeralValue, Token, WholeCredits};
use crate::utils::truncate_credits;
use crate::Error;

/// Answers the two query forms against a borrowed [`SymbolTable`].
pub struct QueryResolver<'a> {
    symbol_table: &'a SymbolTable,
}

impl<'a> QueryResolver<'a> {
    pub fn new(symbol_table: &'a SymbolTable) -> Self {
        QueryResolver { symbol_table }
    }

    /// Value of the numeral spelled by `tokens`.
    pub fn resolve_numeral_query(&self, tokens: &[Token]) -> Result<NumeralValue, Error> {
        let numeral = self.symbol_table.resolve_numeral(tokens)?;
        let value = numeral.value();

        debug!("Resolved {:?} to {} ({})", tokens, numeral, value);

        Ok(value)
    }

    /// Credits for a quantity of an item. The last token names the item; the rest spell the
    /// quantity.
    ///
    /// The product of quantity and rate is truncated toward zero, not rounded.
    pub fn resolve_credit_query(&self, tokens: &[Token]) -> Result<WholeCredits, Error> {
        let (item_name, numeral_tokens) = tokens
            .split_last()
            .ok_or_else(|| Error::InvalidNumeral(String::new()))?;

        let quantity = self.resolve_numeral_query(numeral_tokens)?;

        let rate = self
            .symbol_table
            .get_item_rate(item_name)
            .ok_or_else(|| Error::UnknownItem(item_name.clone()))?;

        let credits = quantity as Credits * rate;

        debug!(
            "{} x {} at {} per unit = {} credits",
            quantity, item_name, rate, credits
        );

        Ok(truncate_credits(credits))
    }
}
