use crate::constants::QUESTION_MARK;
use crate::types::Token;

/// Splits a statement into whitespace separated words.
///
/// A question mark glued to the final word (`glob?`) is split off into its own word so that
/// `glob ?` and `glob?` classify the same way.
pub fn split_tokens(line: &str) -> Vec<Token> {
    let mut words: Vec<Token> = line.split_whitespace().map(|word| word.to_string()).collect();

    if let Some(last) = words.last_mut() {
        if last.len() > QUESTION_MARK.len() && last.ends_with(QUESTION_MARK) {
            last.truncate(last.len() - QUESTION_MARK.len());
            words.push(QUESTION_MARK.to_string());
        }
    }

    words
}
