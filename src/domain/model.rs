use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// One row of a progressive tax table. Applies to income strictly above
/// `threshold`: `tax = base + (income - threshold) * rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub threshold: f64,
    pub rate: f64,
    pub base: f64,
}

impl TaxBracket {
    pub const fn new(threshold: f64, rate: f64, base: f64) -> Self {
        Self {
            threshold,
            rate,
            base,
        }
    }

    pub fn tax_for(&self, annual_income: f64) -> f64 {
        self.base + (annual_income - self.threshold) * self.rate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollDeductionResult {
    pub gross_monthly_salary: f64,
    pub inss_contribution: f64,
    pub monthly_income_tax: f64,
    pub total_deductions: f64,
    pub net_salary: f64,
}

impl PayrollDeductionResult {
    /// Post-INSS income projected over a year; the IR base.
    pub fn annual_taxable_income(&self) -> f64 {
        (self.gross_monthly_salary - self.inss_contribution) * MONTHS_PER_YEAR
    }

    pub fn annual_income_tax(&self) -> f64 {
        self.monthly_income_tax * MONTHS_PER_YEAR
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(flatten)]
    pub result: PayrollDeductionResult,
}

impl PayrollReport {
    pub fn new(employee_name: Option<String>, result: PayrollDeductionResult) -> Self {
        Self {
            employee_name,
            result,
        }
    }
}
