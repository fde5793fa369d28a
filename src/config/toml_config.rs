use crate::core::brackets::BracketTable;
use crate::core::calculator::{PayrollCalculator, DEFAULT_INSS_RATE};
use crate::utils::currency::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::utils::error::{PayrollError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional overrides for rates, tax table and display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub inss: Option<InssConfig>,
    pub display: Option<DisplayConfig>,
    pub brackets: Option<Vec<BracketConfig>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InssConfig {
    pub rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
    pub decimals: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketConfig {
    pub threshold: f64,
    pub rate: f64,
    pub base: Option<f64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PayrollError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PayrollError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PayrollError::ConfigValidation {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Checks the `[display]` section; rates and brackets are checked when
    /// the calculator is built.
    pub fn validate_display(&self) -> Result<()> {
        if let Some(display) = &self.display {
            if let Some(symbol) = &display.currency_symbol {
                validate_non_empty_string("display.currency_symbol", symbol)?;
            }
            if let Some(decimals) = display.decimals {
                validate_range("display.decimals", decimals, 0, MAX_DECIMALS)?;
            }
        }
        Ok(())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.validate_display()?;
        self.build_calculator()?;
        Ok(())
    }

    pub fn inss_rate(&self) -> f64 {
        self.inss.as_ref().map(|i| i.rate).unwrap_or(DEFAULT_INSS_RATE)
    }

    pub fn currency_symbol(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.currency_symbol.as_deref())
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    pub fn decimals(&self) -> u32 {
        self.display
            .as_ref()
            .and_then(|d| d.decimals)
            .unwrap_or(DEFAULT_DECIMALS)
    }

    pub fn bracket_table(&self) -> Result<BracketTable> {
        match &self.brackets {
            None => Ok(BracketTable::nicaragua()),
            Some(brackets) => {
                let rows: Vec<(f64, f64, Option<f64>)> = brackets
                    .iter()
                    .map(|b| (b.threshold, b.rate, b.base))
                    .collect();
                BracketTable::from_rows(&rows)
            }
        }
    }

    pub fn build_calculator(&self) -> Result<PayrollCalculator<BracketTable>> {
        PayrollCalculator::new(self.inss_rate(), self.bracket_table()?)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.inss_rate(), 0.07);
        assert_eq!(config.currency_symbol(), "C$");
        assert_eq!(config.decimals(), 2);
        assert_eq!(config.bracket_table().unwrap(), BracketTable::nicaragua());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[inss]
rate = 0.0625

[display]
currency_symbol = "NIO"
decimals = 3

[[brackets]]
threshold = 0.0
rate = 0.0

[[brackets]]
threshold = 50000.0
rate = 0.10

[[brackets]]
threshold = 150000.0
rate = 0.20
base = 10000.0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.inss_rate(), 0.0625);
        assert_eq!(config.currency_symbol(), "NIO");
        assert_eq!(config.decimals(), 3);

        let table = config.bracket_table().unwrap();
        assert_eq!(table.brackets().len(), 3);
        assert_eq!(table.brackets()[1].base, 0.0);
        assert!((table.tax(250_000.0) - 30_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NIC_PAYROLL_TEST_INSS_RATE", "0.05");

        let toml_content = r#"
[inss]
rate = ${NIC_PAYROLL_TEST_INSS_RATE}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.inss_rate(), 0.05);

        std::env::remove_var("NIC_PAYROLL_TEST_INSS_RATE");
    }

    #[test]
    fn test_config_validation() {
        let bad_rate = TomlConfig::from_toml_str("[inss]\nrate = 1.2\n").unwrap();
        assert!(matches!(
            bad_rate.validate(),
            Err(PayrollError::InvalidConfigValue { ref field, .. }) if field == "inss.rate"
        ));

        let bad_symbol =
            TomlConfig::from_toml_str("[display]\ncurrency_symbol = \" \"\n").unwrap();
        assert!(bad_symbol.validate().is_err());

        let bad_decimals = TomlConfig::from_toml_str("[display]\ndecimals = 9\n").unwrap();
        assert!(bad_decimals.validate().is_err());

        let gap = r#"
[[brackets]]
threshold = 0.0
rate = 0.0

[[brackets]]
threshold = 100000.0
rate = 0.15
base = 1000.0
"#;
        let discontinuous = TomlConfig::from_toml_str(gap).unwrap();
        assert!(discontinuous.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[inss\nrate = ").unwrap_err();
        assert!(matches!(err, PayrollError::ConfigValidation { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\ncurrency_symbol = \"US$\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.currency_symbol(), "US$");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/nic-payroll.toml").unwrap_err();
        assert!(matches!(err, PayrollError::Io(_)));
    }
}
