use crate::domain::model::TaxBracket;
use crate::domain::ports::TaxSchedule;
use crate::utils::error::{PayrollError, Result};

/// Allowed drift between a configured base and the cumulative tax at its threshold.
pub const CONTINUITY_TOLERANCE: f64 = 1e-6;

/// Annual IR table for Nicaraguan salaried income, in córdobas.
pub const NICARAGUA_IR_BRACKETS: [TaxBracket; 5] = [
    TaxBracket::new(0.0, 0.0, 0.0),
    TaxBracket::new(100_000.0, 0.15, 0.0),
    TaxBracket::new(200_000.0, 0.20, 15_000.0),
    TaxBracket::new(350_000.0, 0.25, 45_000.0),
    TaxBracket::new(500_000.0, 0.30, 82_500.0),
];

/// Ordered, continuous progressive tax table.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Builds a table, rejecting anything that would make the tax
    /// discontinuous or decreasing.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self> {
        validate_brackets(&brackets)?;
        Ok(Self { brackets })
    }

    pub fn nicaragua() -> Self {
        Self {
            brackets: NICARAGUA_IR_BRACKETS.to_vec(),
        }
    }

    /// Builds a table from `(threshold, rate, base)` rows where a missing
    /// base is filled with the cumulative tax at that threshold.
    pub fn from_rows(rows: &[(f64, f64, Option<f64>)]) -> Result<Self> {
        let mut brackets: Vec<TaxBracket> = Vec::with_capacity(rows.len());
        for &(threshold, rate, base) in rows {
            let base = match (base, brackets.last()) {
                (Some(base), _) => base,
                (None, Some(prev)) => prev.tax_for(threshold),
                (None, None) => 0.0,
            };
            brackets.push(TaxBracket::new(threshold, rate, base));
        }
        Self::new(brackets)
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// The bracket an income falls in: the last one whose threshold it
    /// strictly exceeds, or the first.
    pub fn bracket_for(&self, annual_income: f64) -> &TaxBracket {
        let idx = self
            .brackets
            .iter()
            .rposition(|b| annual_income > b.threshold)
            .unwrap_or(0);
        &self.brackets[idx]
    }

    pub fn tax(&self, annual_income: f64) -> f64 {
        if !(annual_income > 0.0) {
            return 0.0;
        }
        self.bracket_for(annual_income).tax_for(annual_income).max(0.0)
    }
}

impl Default for BracketTable {
    fn default() -> Self {
        Self::nicaragua()
    }
}

impl TaxSchedule for BracketTable {
    fn annual_tax(&self, annual_income: f64) -> f64 {
        self.tax(annual_income)
    }
}

/// Annual IR under the Nicaraguan table.
pub fn progressive_tax(annual_income: f64) -> f64 {
    let table = BracketTable::nicaragua();
    table.tax(annual_income)
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<()> {
    let first = brackets.first().ok_or_else(|| PayrollError::ConfigValidation {
        field: "brackets".to_string(),
        message: "tax table must contain at least one bracket".to_string(),
    })?;

    if first.threshold != 0.0 {
        return Err(PayrollError::InvalidConfigValue {
            field: "brackets[0].threshold".to_string(),
            value: first.threshold.to_string(),
            reason: "first bracket must start at 0".to_string(),
        });
    }

    for (i, bracket) in brackets.iter().enumerate() {
        check_finite(i, "threshold", bracket.threshold)?;
        check_finite(i, "rate", bracket.rate)?;
        check_finite(i, "base", bracket.base)?;

        if !(0.0..=1.0).contains(&bracket.rate) {
            return Err(PayrollError::InvalidConfigValue {
                field: format!("brackets[{}].rate", i),
                value: bracket.rate.to_string(),
                reason: "rate must be between 0 and 1".to_string(),
            });
        }
        if bracket.base < 0.0 {
            return Err(PayrollError::InvalidConfigValue {
                field: format!("brackets[{}].base", i),
                value: bracket.base.to_string(),
                reason: "base cannot be negative".to_string(),
            });
        }
    }

    for (i, pair) in brackets.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.threshold <= prev.threshold {
            return Err(PayrollError::InvalidConfigValue {
                field: format!("brackets[{}].threshold", i + 1),
                value: next.threshold.to_string(),
                reason: format!("thresholds must ascend (previous is {})", prev.threshold),
            });
        }

        let expected = prev.tax_for(next.threshold);
        if (next.base - expected).abs() > CONTINUITY_TOLERANCE {
            return Err(PayrollError::InvalidConfigValue {
                field: format!("brackets[{}].base", i + 1),
                value: next.base.to_string(),
                reason: format!(
                    "base must equal the cumulative tax at the threshold ({})",
                    expected
                ),
            });
        }
    }

    Ok(())
}

fn check_finite(index: usize, name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PayrollError::InvalidConfigValue {
            field: format!("brackets[{}].{}", index, name),
            value: value.to_string(),
            reason: "must be a finite number".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_nicaragua_table_is_valid() {
        let table = BracketTable::new(NICARAGUA_IR_BRACKETS.to_vec()).unwrap();
        assert_eq!(table, BracketTable::nicaragua());
    }

    #[test]
    fn test_progressive_tax_per_bracket() {
        assert_eq!(progressive_tax(0.0), 0.0);
        assert_eq!(progressive_tax(80_000.0), 0.0);
        assert_eq!(progressive_tax(100_000.0), 0.0);
        assert!((progressive_tax(150_000.0) - 7_500.0).abs() < EPS);
        assert!((progressive_tax(223_200.0) - 19_640.0).abs() < EPS);
        assert!((progressive_tax(400_000.0) - 57_500.0).abs() < EPS);
        assert!((progressive_tax(600_000.0) - 112_500.0).abs() < EPS);
    }

    #[test]
    fn test_progressive_tax_at_thresholds() {
        assert!((progressive_tax(200_000.0) - 15_000.0).abs() < EPS);
        assert!((progressive_tax(350_000.0) - 45_000.0).abs() < EPS);
        assert!((progressive_tax(500_000.0) - 82_500.0).abs() < EPS);
    }

    #[test]
    fn test_non_positive_income_is_untaxed() {
        assert_eq!(progressive_tax(-1_000.0), 0.0);
        assert_eq!(progressive_tax(f64::NAN), 0.0);
    }

    #[test]
    fn test_bracket_for_boundaries_belong_to_lower_bracket() {
        let table = BracketTable::nicaragua();
        assert_eq!(table.bracket_for(100_000.0).threshold, 0.0);
        assert_eq!(table.bracket_for(100_000.01).threshold, 100_000.0);
        assert_eq!(table.bracket_for(500_000.0).threshold, 350_000.0);
        assert_eq!(table.bracket_for(1e9).threshold, 500_000.0);
    }

    #[test]
    fn test_from_rows_derives_missing_bases() {
        let table = BracketTable::from_rows(&[
            (0.0, 0.0, None),
            (100_000.0, 0.15, None),
            (200_000.0, 0.20, None),
            (350_000.0, 0.25, None),
            (500_000.0, 0.30, None),
        ])
        .unwrap();
        let bases: Vec<f64> = table.brackets().iter().map(|b| b.base).collect();
        assert_eq!(bases, vec![0.0, 0.0, 15_000.0, 45_000.0, 82_500.0]);
    }

    #[test]
    fn test_rejects_discontinuous_base() {
        let err = BracketTable::from_rows(&[(0.0, 0.0, None), (100_000.0, 0.15, Some(500.0))])
            .unwrap_err();
        assert!(matches!(err, PayrollError::InvalidConfigValue { ref field, .. } if field == "brackets[1].base"));
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert!(BracketTable::new(vec![]).is_err());
        assert!(BracketTable::from_rows(&[(10.0, 0.0, None)]).is_err());
        assert!(BracketTable::from_rows(&[(0.0, 0.0, None), (0.0, 0.1, None)]).is_err());
        assert!(BracketTable::from_rows(&[(0.0, 1.5, None)]).is_err());
        assert!(BracketTable::from_rows(&[(0.0, 0.1, Some(-1.0))]).is_err());
        assert!(BracketTable::from_rows(&[(0.0, 0.0, None), (f64::INFINITY, 0.1, None)]).is_err());
    }
}
