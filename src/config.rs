use crate::constants::UNKNOWN_STATEMENT_RESPONSE;
use crate::models::InterpreterConfig;

pub const DEFAULT_INTERPRETER_CONFIG: &InterpreterConfig = &InterpreterConfig {
    unknown_statement_response: UNKNOWN_STATEMENT_RESPONSE,
    credit_unit: "Credits",
};
