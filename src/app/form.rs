use crate::config::Settings;
use crate::domain::model::PayrollReport;
use crate::utils::error::Result;
use crate::utils::validation::{parse_display_name, parse_salary};

/// Entry fields and last result of the payroll form.
#[derive(Debug, Clone, Default)]
pub struct PayrollForm {
    name: String,
    salary: String,
    report: Option<PayrollReport>,
}

impl PayrollForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_salary(&mut self, salary: impl Into<String>) {
        self.salary = salary.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    pub fn report(&self) -> Option<&PayrollReport> {
        self.report.as_ref()
    }

    /// Validates the fields and computes. A failed attempt leaves the
    /// previous result untouched.
    pub fn calculate(&mut self, settings: &Settings) -> Result<&PayrollReport> {
        let salary = parse_salary(&self.salary)?;
        let result = settings.calculator.compute(salary)?;
        let report = PayrollReport::new(parse_display_name(&self.name), result);
        tracing::info!(
            employee = report.employee_name.as_deref().unwrap_or("-"),
            net_salary = report.result.net_salary,
            "payroll calculated"
        );
        Ok(self.report.insert(report))
    }

    /// Clears every field for a new calculation.
    pub fn reset(&mut self) {
        self.name.clear();
        self.salary.clear();
        self.report = None;
        tracing::debug!("form reset");
    }
}
