use crate::core::brackets::BracketTable;
use crate::domain::model::{PayrollDeductionResult, MONTHS_PER_YEAR};
use crate::domain::ports::TaxSchedule;
use crate::utils::error::{PayrollError, Result};
use crate::utils::validation::{validate_salary, SALARY_FIELD};

/// Employee share of the INSS contribution.
pub const DEFAULT_INSS_RATE: f64 = 0.07;

/// Stateless INSS + IR calculator over a tax schedule.
#[derive(Debug, Clone)]
pub struct PayrollCalculator<S: TaxSchedule> {
    inss_rate: f64,
    schedule: S,
}

impl PayrollCalculator<BracketTable> {
    pub fn nicaragua() -> Self {
        Self {
            inss_rate: DEFAULT_INSS_RATE,
            schedule: BracketTable::nicaragua(),
        }
    }
}

impl Default for PayrollCalculator<BracketTable> {
    fn default() -> Self {
        Self::nicaragua()
    }
}

impl<S: TaxSchedule> PayrollCalculator<S> {
    pub fn new(inss_rate: f64, schedule: S) -> Result<Self> {
        if !(0.0..1.0).contains(&inss_rate) {
            return Err(PayrollError::InvalidConfigValue {
                field: "inss.rate".to_string(),
                value: inss_rate.to_string(),
                reason: "rate must be at least 0 and below 1".to_string(),
            });
        }
        Ok(Self {
            inss_rate,
            schedule,
        })
    }

    pub fn inss_rate(&self) -> f64 {
        self.inss_rate
    }

    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    pub fn compute(&self, gross_monthly_salary: f64) -> Result<PayrollDeductionResult> {
        validate_salary(gross_monthly_salary)?;

        let inss_contribution = gross_monthly_salary * self.inss_rate;
        let post_inss_monthly = gross_monthly_salary - inss_contribution;
        let annual_taxable_income = post_inss_monthly * MONTHS_PER_YEAR;
        let annual_income_tax = self.schedule.annual_tax(annual_taxable_income);
        if !annual_taxable_income.is_finite() || !annual_income_tax.is_finite() {
            return Err(PayrollError::InvalidInput {
                field: SALARY_FIELD.to_string(),
                value: gross_monthly_salary.to_string(),
                reason: "salary is too large to annualize".to_string(),
            });
        }
        let monthly_income_tax = annual_income_tax / MONTHS_PER_YEAR;
        let total_deductions = inss_contribution + monthly_income_tax;
        let net_salary = gross_monthly_salary - total_deductions;

        tracing::debug!(
            gross_monthly_salary,
            inss_contribution,
            annual_taxable_income,
            annual_income_tax,
            net_salary,
            "computed payroll deductions"
        );

        Ok(PayrollDeductionResult {
            gross_monthly_salary,
            inss_contribution,
            monthly_income_tax,
            total_deductions,
            net_salary,
        })
    }
}

/// Deductions under the built-in Nicaraguan rates.
pub fn compute_deductions(gross_monthly_salary: f64) -> Result<PayrollDeductionResult> {
    PayrollCalculator::nicaragua().compute(gross_monthly_salary)
}
