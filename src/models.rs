pub mod config;
pub use config::InterpreterConfig;

pub mod error;
pub use error::Error;

pub mod roman_digit;
pub use roman_digit::RomanDigit;

pub mod roman_numeral;
pub use roman_numeral::RomanNumeral;

pub mod numeral_engine;
pub use numeral_engine::NumeralEngine;

pub mod symbol_table;
pub use symbol_table::SymbolTable;

pub mod statement;
pub use statement::Statement;

pub mod query_resolver;
pub use query_resolver::QueryResolver;

pub mod outcome;
pub use outcome::Outcome;

pub mod interpreter;
pub use interpreter::Interpreter;
