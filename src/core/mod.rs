pub mod evaluator;
pub mod input;
pub mod messages;
pub mod shell;

pub use crate::domain::model::{MenuChoice, OperationRequest, Operator, SessionState};
pub use crate::domain::ports::{ConfigProvider, Evaluator};
pub use crate::utils::error::Result;
