#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::brackets::BracketTable;
use crate::core::calculator::PayrollCalculator;
use crate::domain::ports::DisplayProvider;
use crate::utils::currency::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMALS};
use crate::utils::error::Result;
use toml_config::TomlConfig;

/// Effective settings after merging defaults, the TOML file and CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub calculator: PayrollCalculator<BracketTable>,
    pub currency_symbol: String,
    pub decimals: u32,
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate_display()?;
        Ok(Self {
            calculator: config.build_calculator()?,
            currency_symbol: config.currency_symbol().to_string(),
            decimals: config.decimals(),
        })
    }

    pub fn with_display_overrides(mut self, symbol: Option<String>, decimals: Option<u32>) -> Self {
        if let Some(symbol) = symbol {
            self.currency_symbol = symbol;
        }
        if let Some(decimals) = decimals {
            self.decimals = decimals;
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            calculator: PayrollCalculator::nicaragua(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl DisplayProvider for Settings {
    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    fn decimals(&self) -> u32 {
        self.decimals
    }
}
