use log::{debug, warn};
use std::io::{BufRead, Write};

use crate::config::DEFAULT_INTERPRETER_CONFIG;
use crate::models::{
    InterpreterConfig, Outcome, QueryResolver, RomanDigit, Statement, SymbolTable,
};
use crate::Error;

/// Owns the tables for one session and executes statements against them, one at a time.
pub struct Interpreter {
    config: InterpreterConfig,
    symbol_table: SymbolTable,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_INTERPRETER_CONFIG)
    }

    pub fn with_config(config: &InterpreterConfig) -> Self {
        Interpreter {
            config: *config,
            symbol_table: SymbolTable::new(),
        }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn parse(&self, line: &str) -> Statement {
        Statement::parse(line, self.config.credit_unit)
    }

    /// Executes a classified statement.
    ///
    /// On error the tables are left exactly as they were.
    pub fn execute(&mut self, statement: &Statement) -> Result<Outcome, Error> {
        match statement {
            Statement::SymbolDefinition { token, digit } => {
                let digit = RomanDigit::parse(digit)?;
                self.symbol_table.define_symbol(token, digit);

                Ok(Outcome::SymbolDefined {
                    token: token.clone(),
                    digit,
                })
            }
            Statement::ItemValuation {
                tokens,
                item_name,
                total_credits,
            } => {
                let rate =
                    self.symbol_table
                        .define_item_rate(tokens, item_name, *total_credits)?;

                Ok(Outcome::ItemValued {
                    item_name: item_name.clone(),
                    rate,
                })
            }
            Statement::NumeralQuery { tokens } => {
                let value = QueryResolver::new(&self.symbol_table).resolve_numeral_query(tokens)?;

                Ok(Outcome::NumeralValue {
                    tokens: tokens.clone(),
                    value,
                })
            }
            Statement::CreditQuery { tokens } => {
                let credits =
                    QueryResolver::new(&self.symbol_table).resolve_credit_query(tokens)?;

                Ok(Outcome::CreditValue {
                    tokens: tokens.clone(),
                    credits,
                })
            }
            Statement::Unrecognized(line) => Err(Error::UnrecognizedStatement(line.clone())),
        }
    }

    /// Classifies and executes one line, returning the text to write back, if any.
    ///
    /// Every failure renders as the configured unknown-statement response.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        let statement = self.parse(line);

        match self.execute(&statement) {
            Ok(outcome) => outcome.render(self.config.credit_unit),
            Err(err) => {
                warn!("Rejected {:?}: {}", line.trim(), err);
                Some(self.render_error(&err))
            }
        }
    }

    pub fn render_error(&self, _err: &Error) -> String {
        self.config.unknown_statement_response.to_string()
    }

    /// Processes every non-blank line from `reader`, writing one line per response to `writer`.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<(), Error> {
        let mut line_count = 0;

        for line in reader.lines() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            line_count += 1;

            if let Some(response) = self.process_line(&line) {
                writeln!(writer, "{}", response)?;
            }
        }

        writer.flush()?;

        debug!(
            "Processed {} statements ({} symbols, {} items defined)",
            line_count,
            self.symbol_table.get_symbol_count(),
            self.symbol_table.get_item_count()
        );

        Ok(())
    }
}
