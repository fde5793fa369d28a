use crate::utils::error::{PayrollError, Result};

pub const SALARY_FIELD: &str = "monthly_salary";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses the salary entry field. Blank input is reported as missing, anything
/// that is not a finite number above zero as invalid.
pub fn parse_salary(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PayrollError::MissingInput {
            field: SALARY_FIELD.to_string(),
        });
    }

    let value: f64 = trimmed.parse().map_err(|_| PayrollError::InvalidInput {
        field: SALARY_FIELD.to_string(),
        value: trimmed.to_string(),
        reason: "not a number".to_string(),
    })?;

    validate_salary(value)?;
    Ok(value)
}

pub fn validate_salary(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PayrollError::InvalidInput {
            field: SALARY_FIELD.to_string(),
            value: value.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    if value <= 0.0 {
        return Err(PayrollError::InvalidInput {
            field: SALARY_FIELD.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// The display name is optional; blank means absent.
pub fn parse_display_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PayrollError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so test containment rather than exclusion
    if !(value >= min && value <= max) {
        return Err(PayrollError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
