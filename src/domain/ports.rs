use crate::domain::model::PayrollReport;
use crate::utils::error::Result;

/// Annual income tax as a function of annual taxable income.
pub trait TaxSchedule: Send + Sync {
    fn annual_tax(&self, annual_income: f64) -> f64;
}

/// Settings a presentation layer needs to render amounts.
pub trait DisplayProvider: Send + Sync {
    fn currency_symbol(&self) -> &str;
    fn decimals(&self) -> u32;
}

pub trait Presenter {
    fn render(&self, report: &PayrollReport) -> Result<String>;

    /// What the form shows after "New": every amount at zero.
    fn render_blank(&self) -> Result<String>;
}
