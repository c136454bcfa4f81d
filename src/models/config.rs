#[derive(Debug, Clone, Copy)]
pub struct InterpreterConfig {
    /// Written in place of a result whenever a statement fails.
    pub unknown_statement_response: &'static str,
    /// Keyword closing a valuation and opening a credit query (`how many <unit> is ...`).
    pub credit_unit: &'static str,
}
