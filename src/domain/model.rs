use crate::utils::error::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four supported arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EvalError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(EvalError::UnsupportedOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One fully collected operation. The operator is kept as the raw symbol so
/// an unsupported one can still be reported by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationRequest {
    pub operand_a: f64,
    pub operand_b: f64,
    pub operator: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StartOperation,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn from_value(value: i64) -> Self {
        match value {
            1 => MenuChoice::StartOperation,
            0 => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingMenuChoice,
    RunningOperation,
    Terminated,
}

/// Language of the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub operations_completed: usize,
    pub input_errors: usize,
    pub evaluation_errors: usize,
}
