pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::app::{form::PayrollForm, presenters::OutputFormat, session::FormSession};
pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::brackets::{progressive_tax, BracketTable};
pub use crate::core::calculator::{compute_deductions, PayrollCalculator};
pub use crate::domain::model::{PayrollDeductionResult, PayrollReport, TaxBracket};
pub use crate::utils::error::{PayrollError, Result};
