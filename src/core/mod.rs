pub mod brackets;
pub mod calculator;

pub use crate::domain::model::{PayrollDeductionResult, PayrollReport, TaxBracket};
pub use crate::domain::ports::{DisplayProvider, Presenter, TaxSchedule};
pub use crate::utils::error::Result;
