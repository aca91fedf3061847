use thiserror::Error;

/// Failures of a single arithmetic evaluation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(char),
}

/// Which of the two operands a malformed token was read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::First => write!(f, "A"),
            Operand::Second => write!(f, "B"),
        }
    }
}

/// Recoverable problems with what the user typed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("menu input '{0}' is not an integer")]
    MenuInputMalformed(String),

    #[error("menu choice {0} is out of range")]
    MenuChoiceOutOfRange(i64),

    #[error("operand {operand} input '{token}' is not a number")]
    OperandInputMalformed { operand: Operand, token: String },

    #[error("operand {0} input is missing")]
    OperandInputMissing(Operand),

    #[error("operator input is missing")]
    OperatorInputMissing,
}

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(e) => format!("I/O failure: {}", e),
            CalcError::TomlError(_) => "The settings file is not valid TOML".to_string(),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
pub type EvalResult<T> = std::result::Result<T, EvalError>;
