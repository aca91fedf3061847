pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{resolve_settings, toml_config::TomlConfig};
pub use crate::core::{
    evaluator::{evaluate, ArithmeticEvaluator},
    shell::{Console, Shell, ShellSettings},
};
pub use crate::domain::model::{Language, SessionSummary};
pub use crate::utils::error::{CalcError, EvalError, InputError, Result};
