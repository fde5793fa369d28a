use crate::domain::model::{PayrollDeductionResult, PayrollReport};
use crate::domain::ports::{DisplayProvider, Presenter};
use crate::utils::currency::format_currency;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn presenter_for<D: DisplayProvider>(format: OutputFormat, display: &D) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter::from_display(display)),
        OutputFormat::Json => Box::new(JsonPresenter::from_display(display)),
    }
}

const BLANK_RESULT: PayrollDeductionResult = PayrollDeductionResult {
    gross_monthly_salary: 0.0,
    inss_contribution: 0.0,
    monthly_income_tax: 0.0,
    total_deductions: 0.0,
    net_salary: 0.0,
};

#[derive(Debug, Clone, Serialize)]
pub struct FormattedAmounts {
    pub inss_contribution: String,
    pub monthly_income_tax: String,
    pub total_deductions: String,
    pub net_salary: String,
}

impl FormattedAmounts {
    fn new(result: &PayrollDeductionResult, symbol: &str, decimals: u32) -> Self {
        Self {
            inss_contribution: format_currency(result.inss_contribution, symbol, decimals),
            monthly_income_tax: format_currency(result.monthly_income_tax, symbol, decimals),
            total_deductions: format_currency(result.total_deductions, symbol, decimals),
            net_salary: format_currency(result.net_salary, symbol, decimals),
        }
    }
}

/// Four labelled lines, like the result panel of the form.
#[derive(Debug, Clone)]
pub struct TextPresenter {
    currency_symbol: String,
    decimals: u32,
}

impl TextPresenter {
    pub fn new(currency_symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            decimals,
        }
    }

    pub fn from_display<D: DisplayProvider>(display: &D) -> Self {
        Self::new(display.currency_symbol(), display.decimals())
    }

    fn render_amounts(&self, name: Option<&str>, result: &PayrollDeductionResult) -> String {
        let amounts = FormattedAmounts::new(result, &self.currency_symbol, self.decimals);
        let mut out = String::new();
        if let Some(name) = name {
            out.push_str(&format!("{:<18} {}\n", "Employee:", name));
        }
        out.push_str(&format!("{:<18} {}\n", "INSS contribution:", amounts.inss_contribution));
        out.push_str(&format!("{:<18} {}\n", "Monthly IR:", amounts.monthly_income_tax));
        out.push_str(&format!("{:<18} {}\n", "Total deductions:", amounts.total_deductions));
        out.push_str(&format!("{:<18} {}", "Net salary:", amounts.net_salary));
        out
    }
}

impl Presenter for TextPresenter {
    fn render(&self, report: &PayrollReport) -> Result<String> {
        Ok(self.render_amounts(report.employee_name.as_deref(), &report.result))
    }

    fn render_blank(&self) -> Result<String> {
        Ok(self.render_amounts(None, &BLANK_RESULT))
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a PayrollReport,
    annual_taxable_income: f64,
    annual_income_tax: f64,
    formatted: FormattedAmounts,
}

/// Full-precision values plus their display strings.
#[derive(Debug, Clone)]
pub struct JsonPresenter {
    currency_symbol: String,
    decimals: u32,
}

impl JsonPresenter {
    pub fn new(currency_symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            decimals,
        }
    }

    pub fn from_display<D: DisplayProvider>(display: &D) -> Self {
        Self::new(display.currency_symbol(), display.decimals())
    }
}

impl Presenter for JsonPresenter {
    fn render(&self, report: &PayrollReport) -> Result<String> {
        let json = JsonReport {
            report,
            annual_taxable_income: report.result.annual_taxable_income(),
            annual_income_tax: report.result.annual_income_tax(),
            formatted: FormattedAmounts::new(&report.result, &self.currency_symbol, self.decimals),
        };
        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn render_blank(&self) -> Result<String> {
        self.render(&PayrollReport::new(None, BLANK_RESULT))
    }
}
