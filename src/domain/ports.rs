use crate::domain::model::{Language, OperationRequest};
use crate::utils::error::EvalResult;

/// Evaluation strategy used by the shell.
pub trait Evaluator {
    fn evaluate(&self, request: &OperationRequest) -> EvalResult<f64>;
}

pub trait ConfigProvider {
    fn precision(&self) -> Option<usize>;
    fn language(&self) -> Option<Language>;
}
