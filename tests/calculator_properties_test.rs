use anyhow::Result;
use nic_payroll::{compute_deductions, progressive_tax, BracketTable, PayrollCalculator, PayrollError};

const THRESHOLDS: [f64; 4] = [100_000.0, 200_000.0, 350_000.0, 500_000.0];

fn sample_salaries() -> Vec<f64> {
    let mut salaries = vec![0.01, 1.0, 999.99, 8_960.57, 8_960.58];
    let mut s = 250.0;
    while s < 150_000.0 {
        salaries.push(s);
        s *= 1.137;
    }
    salaries
}

fn annualize(salary: f64) -> f64 {
    (salary - salary * 0.07) * 12.0
}

#[test]
fn test_inss_is_seven_percent_of_gross() -> Result<()> {
    for s in sample_salaries() {
        let result = compute_deductions(s)?;
        assert!(
            (result.inss_contribution - s * 0.07).abs() <= 1e-9 * s.max(1.0),
            "inss mismatch for {s}"
        );
    }
    Ok(())
}

#[test]
fn test_net_plus_deductions_equals_gross() -> Result<()> {
    for s in sample_salaries() {
        let result = compute_deductions(s)?;
        assert!(
            (result.net_salary + result.total_deductions - s).abs() <= 1e-9 * s.max(1.0),
            "identity broken for {s}"
        );
        assert!(
            (result.total_deductions - result.inss_contribution - result.monthly_income_tax).abs()
                <= 1e-9 * s.max(1.0)
        );
    }
    Ok(())
}

#[test]
fn test_exempt_boundary_has_no_income_tax() -> Result<()> {
    let salary = 100_000.0 / (0.93 * 12.0);
    let result = compute_deductions(salary)?;
    assert!((result.annual_taxable_income() - 100_000.0).abs() < 1e-6);
    assert!(result.monthly_income_tax.abs() < 1e-9);
    Ok(())
}

#[test]
fn test_tax_is_monotonic_in_salary() {
    let salaries = sample_salaries();
    let mut sorted = salaries.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));

    for pair in sorted.windows(2) {
        let low = progressive_tax(annualize(pair[0]));
        let high = progressive_tax(annualize(pair[1]));
        assert!(high >= low - 1e-9, "tax decreased between {} and {}", pair[0], pair[1]);
    }
}

#[test]
fn test_tax_is_continuous_at_thresholds() {
    let eps = 1e-6;
    for t in THRESHOLDS {
        let below = progressive_tax(t - eps);
        let above = progressive_tax(t + eps);
        assert!((above - below).abs() < 1e-5, "jump at threshold {t}");
        assert!(above >= below);
    }
}

#[test]
fn test_rejects_zero_and_negative_salary() {
    for salary in [0.0, -5.0] {
        let err = compute_deductions(salary).unwrap_err();
        assert!(matches!(err, PayrollError::InvalidInput { .. }), "got {err:?}");
    }
}

#[test]
fn test_twenty_thousand_salary_breakdown() -> Result<()> {
    let result = compute_deductions(20_000.0)?;
    assert!((result.inss_contribution - 1_400.00).abs() < 1e-6);
    assert!((result.annual_taxable_income() - 223_200.0).abs() < 1e-6);
    assert!((result.annual_income_tax() - 19_640.0).abs() < 1e-6);
    assert!((result.monthly_income_tax - 1_636.67).abs() < 0.005);
    assert!((result.total_deductions - 3_036.67).abs() < 0.005);
    assert!((result.net_salary - 16_963.33).abs() < 0.005);
    Ok(())
}

#[test]
fn test_configured_calculator_matches_default() -> Result<()> {
    let calculator = PayrollCalculator::new(0.07, BracketTable::nicaragua())?;
    for s in sample_salaries() {
        assert_eq!(calculator.compute(s)?, compute_deductions(s)?);
    }
    Ok(())
}
