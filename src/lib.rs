mod config;
pub use config::DEFAULT_INTERPRETER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    Error, Interpreter, InterpreterConfig, NumeralEngine, Outcome, QueryResolver, RomanDigit,
    RomanNumeral, Statement, SymbolTable,
};
pub mod types;
mod utils;
pub use types::{Credits, ItemName, NumeralValue, Token, TokenRef, WholeCredits};
pub use utils::{split_tokens, truncate_credits};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Runs every line of `text` through a fresh [`Interpreter`] and collects the responses.
pub fn interpret_text(text: &str) -> Vec<String> {
    interpret_text_with_custom_config(DEFAULT_INTERPRETER_CONFIG, text)
}

pub fn interpret_text_with_custom_config(
    interpreter_config: &InterpreterConfig,
    text: &str,
) -> Vec<String> {
    let mut interpreter = Interpreter::with_config(interpreter_config);

    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| interpreter.process_line(line))
        .collect()
}
