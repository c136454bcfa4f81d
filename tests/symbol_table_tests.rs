use galactic_numerals::{Error, QueryResolver, RomanDigit, SymbolTable};

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

fn merchant_table() -> SymbolTable {
    let mut symbol_table = SymbolTable::new();
    symbol_table.define_symbol("glob", RomanDigit::I);
    symbol_table.define_symbol("prok", RomanDigit::V);
    symbol_table.define_symbol("pish", RomanDigit::X);
    symbol_table.define_symbol("tegj", RomanDigit::L);
    symbol_table
}

#[cfg(test)]
mod symbol_table_tests {
    use super::*;

    #[test]
    fn test_define_and_get_symbol() {
        let symbol_table = merchant_table();

        assert_eq!(symbol_table.get_digit("tegj"), Some(RomanDigit::L));
        assert_eq!(symbol_table.get_digit("blarg"), None);
        assert_eq!(symbol_table.get_symbol_count(), 4);
    }

    #[test]
    fn test_redefine_symbol_overwrites() {
        let mut symbol_table = merchant_table();
        symbol_table.define_symbol("glob", RomanDigit::C);

        assert_eq!(symbol_table.get_digit("glob"), Some(RomanDigit::C));
        assert_eq!(symbol_table.get_symbol_count(), 4);
    }

    #[test]
    fn test_resolve_numeral_preserves_token_order() {
        let symbol_table = merchant_table();
        let numeral = symbol_table
            .resolve_numeral(&tokens(&["pish", "tegj", "glob", "glob"]))
            .unwrap();

        assert_eq!(numeral.to_string(), "XLII");
        assert_eq!(numeral.value(), 42);
    }

    #[test]
    fn test_define_item_rate() {
        let mut symbol_table = merchant_table();
        let rate = symbol_table
            .define_item_rate(&tokens(&["glob", "glob"]), "Silver", 34.0)
            .unwrap();

        assert_eq!(rate, 17.0);
        assert_eq!(symbol_table.get_item_rate("Silver"), Some(17.0));
    }

    #[test]
    fn test_define_item_rate_overwrites() {
        let mut symbol_table = merchant_table();
        symbol_table
            .define_item_rate(&tokens(&["glob", "glob"]), "Silver", 34.0)
            .unwrap();
        symbol_table
            .define_item_rate(&tokens(&["prok"]), "Silver", 50.0)
            .unwrap();

        assert_eq!(symbol_table.get_item_rate("Silver"), Some(10.0));
        assert_eq!(symbol_table.get_item_count(), 1);
    }

    #[test]
    fn test_define_item_rate_unknown_token() {
        let mut symbol_table = merchant_table();
        let result = symbol_table.define_item_rate(&tokens(&["glob", "blarg"]), "Silver", 34.0);

        assert!(matches!(result, Err(Error::UnknownToken(ref token)) if token == "blarg"));
        assert_eq!(symbol_table.get_item_rate("Silver"), None);
    }

    #[test]
    fn test_define_item_rate_invalid_numeral_keeps_previous_rate() {
        let mut symbol_table = merchant_table();
        symbol_table
            .define_item_rate(&tokens(&["glob", "glob"]), "Silver", 34.0)
            .unwrap();

        let result = symbol_table.define_item_rate(&tokens(&["prok", "prok"]), "Silver", 99.0);

        assert!(matches!(result, Err(Error::InvalidNumeral(ref numeral)) if numeral == "VV"));
        assert_eq!(symbol_table.get_item_rate("Silver"), Some(17.0));
    }

    #[test]
    fn test_define_item_rate_zero_quantity() {
        let mut symbol_table = merchant_table();
        let result = symbol_table.define_item_rate(&[], "Silver", 34.0);

        assert!(matches!(result, Err(Error::ZeroQuantity(_))));
        assert_eq!(symbol_table.get_item_rate("Silver"), None);
    }
}

#[cfg(test)]
mod query_resolver_tests {
    use super::*;

    #[test]
    fn test_resolve_numeral_query() {
        let symbol_table = merchant_table();
        let resolver = QueryResolver::new(&symbol_table);

        assert_eq!(
            resolver
                .resolve_numeral_query(&tokens(&["pish", "tegj", "glob", "glob"]))
                .unwrap(),
            42
        );
    }

    #[test]
    fn test_resolve_numeral_query_unknown_token() {
        let symbol_table = merchant_table();
        let resolver = QueryResolver::new(&symbol_table);

        assert!(matches!(
            resolver.resolve_numeral_query(&tokens(&["pish", "blarg"])),
            Err(Error::UnknownToken(_))
        ));
    }

    #[test]
    fn test_resolve_credit_query() {
        let mut symbol_table = merchant_table();
        symbol_table
            .define_item_rate(&tokens(&["glob", "glob"]), "Silver", 34.0)
            .unwrap();
        let resolver = QueryResolver::new(&symbol_table);

        assert_eq!(
            resolver
                .resolve_credit_query(&tokens(&["glob", "prok", "Silver"]))
                .unwrap(),
            68
        );
    }

    #[test]
    fn test_resolve_credit_query_truncates() {
        let mut symbol_table = merchant_table();
        // 3910 / 20 = 195.5 per unit
        symbol_table
            .define_item_rate(&tokens(&["pish", "pish"]), "Iron", 3910.0)
            .unwrap();
        let resolver = QueryResolver::new(&symbol_table);

        // 3 x 195.5 = 586.5
        assert_eq!(
            resolver
                .resolve_credit_query(&tokens(&["glob", "glob", "glob", "Iron"]))
                .unwrap(),
            586
        );
    }

    #[test]
    fn test_resolve_credit_query_unknown_token_reported_before_item() {
        let symbol_table = merchant_table();
        let resolver = QueryResolver::new(&symbol_table);

        // Neither the token nor the item is known; the token is reported.
        assert!(matches!(
            resolver.resolve_credit_query(&tokens(&["blarg", "Gold"])),
            Err(Error::UnknownToken(ref token)) if token == "blarg"
        ));
    }

    #[test]
    fn test_resolve_credit_query_invalid_numeral_reported_before_item() {
        let symbol_table = merchant_table();
        let resolver = QueryResolver::new(&symbol_table);

        assert!(matches!(
            resolver.resolve_credit_query(&tokens(&["prok", "prok", "Gold"])),
            Err(Error::InvalidNumeral(_))
        ));
    }

    #[test]
    fn test_resolve_credit_query_unknown_item() {
        let symbol_table = merchant_table();
        let resolver = QueryResolver::new(&symbol_table);

        assert!(matches!(
            resolver.resolve_credit_query(&tokens(&["glob", "Gold"])),
            Err(Error::UnknownItem(ref item)) if item == "Gold"
        ));
    }

    #[test]
    fn test_resolve_credit_query_invalid_numeral() {
        let mut symbol_table = merchant_table();
        symbol_table
            .define_item_rate(&tokens(&["glob"]), "Gold", 10.0)
            .unwrap();
        let resolver = QueryResolver::new(&symbol_table);

        assert!(matches!(
            resolver.resolve_credit_query(&tokens(&["glob", "tegj", "Gold"])),
            Err(Error::InvalidNumeral(_))
        ));
    }
}
