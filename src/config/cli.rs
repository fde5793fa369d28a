use crate::app::presenters::OutputFormat;
use crate::utils::validation::Validate;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "nic-payroll")]
#[command(about = "INSS and IR payroll deductions for Nicaraguan salaries")]
pub struct CliConfig {
    /// Gross monthly salary; omit to open the interactive form
    #[arg(short, long)]
    pub salary: Option<String>,

    /// Employee name shown with the result
    #[arg(short, long)]
    pub name: Option<String>,

    /// TOML file overriding rates, tax table and display settings
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Run the interactive form even when --salary is given
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(long)]
    pub currency_symbol: Option<String>,

    #[arg(long)]
    pub decimals: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn runs_interactive(&self) -> bool {
        self.interactive || self.salary.is_none()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(symbol) = &self.currency_symbol {
            crate::utils::validation::validate_non_empty_string("currency_symbol", symbol)?;
        }
        if let Some(decimals) = self.decimals {
            crate::utils::validation::validate_range(
                "decimals",
                decimals,
                0,
                crate::utils::currency::MAX_DECIMALS,
            )?;
        }
        Ok(())
    }
}
