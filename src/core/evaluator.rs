use crate::core::Evaluator;
use crate::domain::model::{OperationRequest, Operator};
use crate::utils::error::{EvalError, EvalResult};

/// Applies one of the four operators with plain IEEE-754 double arithmetic.
pub fn evaluate(a: f64, b: f64, op: char) -> EvalResult<f64> {
    match Operator::try_from(op)? {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide => {
            // Also matches -0.0
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticEvaluator;

impl ArithmeticEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for ArithmeticEvaluator {
    fn evaluate(&self, request: &OperationRequest) -> EvalResult<f64> {
        evaluate(request.operand_a, request.operand_b, request.operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(evaluate(5.0, 3.0, '+'), Ok(8.0));
        assert_eq!(evaluate(5.0, 3.0, '-'), Ok(2.0));
        assert_eq!(evaluate(5.0, 3.0, '*'), Ok(15.0));
        assert_eq!(evaluate(6.0, 4.0, '/'), Ok(1.5));
        assert_eq!(evaluate(-2.5, 0.5, '*'), Ok(-1.25));
    }

    #[test]
    fn test_division_matches_native_float() {
        for (a, b) in [(1.0, 3.0), (-7.25, 2.0), (1e300, 1e-10), (0.0, -4.0)] {
            assert_eq!(evaluate(a, b, '/'), Ok(a / b));
        }
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(5.0, 0.0, '/'), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate(0.0, 0.0, '/'), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate(-3.0, -0.0, '/'), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_zero_divisor_is_fine_for_other_operators() {
        assert_eq!(evaluate(5.0, 0.0, '+'), Ok(5.0));
        assert_eq!(evaluate(5.0, 0.0, '*'), Ok(0.0));
    }

    #[test]
    fn test_unsupported_operator() {
        for op in ['%', '^', 'x', '=', '1'] {
            assert_eq!(
                evaluate(5.0, 3.0, op),
                Err(EvalError::UnsupportedOperator(op))
            );
        }
    }

    #[test]
    fn test_overflow_follows_float_semantics() {
        assert_eq!(evaluate(f64::MAX, f64::MAX, '+'), Ok(f64::INFINITY));
    }

    #[test]
    fn test_trait_and_function_agree() {
        let evaluator = ArithmeticEvaluator::new();
        let request = OperationRequest {
            operand_a: 9.0,
            operand_b: 3.0,
            operator: '/',
        };
        assert_eq!(evaluator.evaluate(&request), evaluate(9.0, 3.0, '/'));
        assert_eq!(evaluator.evaluate(&request), evaluator.evaluate(&request));
    }
}
