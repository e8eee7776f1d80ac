//! Tests for the mortgage payment calculator
//!
//! These tests verify:
//! - The breakdown total is the exact sum of its components
//! - The worked reference scenario ($450k home, 30y at 6.5%)
//! - Degenerate inputs (zero rate, zero term) surface as non-finite values
//! - The amortization schedule pays the loan down to zero

use crate::mortgage::{amortization_schedule, monthly_breakdown, CalculatorInputs};

fn reference_inputs() -> CalculatorInputs {
    CalculatorInputs {
        home_price: 450_000.0,
        down_payment: 90_000.0,
        loan_term_years: 30.0,
        annual_interest_rate_pct: 6.5,
        annual_property_tax: 5_400.0,
        annual_insurance: 1_200.0,
        annual_pmi: 0.0,
        monthly_hoa: 0.0,
    }
}

#[test]
fn test_total_is_sum_of_components() {
    let inputs = CalculatorInputs {
        home_price: 320_000.0,
        down_payment: 16_000.0,
        loan_term_years: 15.0,
        annual_interest_rate_pct: 5.75,
        annual_property_tax: 3_840.0,
        annual_insurance: 960.0,
        annual_pmi: 1_600.0,
        monthly_hoa: 250.0,
    };

    let b = monthly_breakdown(&inputs);
    let sum = b.principal_and_interest + b.monthly_tax + b.monthly_insurance + b.monthly_pmi
        + b.monthly_hoa;

    assert_eq!(b.total, sum);
}

#[test]
fn test_reference_scenario() {
    let b = monthly_breakdown(&reference_inputs());

    // $360k at 6.5% over 360 payments is the textbook $2,275.44.
    assert!(
        (b.principal_and_interest - 2_275.44).abs() < 0.01,
        "expected P&I ~= $2275.44, got ${:.2}",
        b.principal_and_interest
    );
    assert!((b.monthly_tax - 450.0).abs() < f64::EPSILON);
    assert!((b.monthly_insurance - 100.0).abs() < f64::EPSILON);
    assert_eq!(b.monthly_pmi, 0.0);
    assert_eq!(b.monthly_hoa, 0.0);
    assert!(
        (b.total - 2_825.44).abs() < 0.01,
        "expected total ~= $2825.44, got ${:.2}",
        b.total
    );
}

#[test]
fn test_zero_rate_is_not_finite() {
    // 0% interest makes the formula divide by zero. The calculator does not
    // paper over it; the caller sees a non-finite number.
    let inputs = CalculatorInputs {
        annual_interest_rate_pct: 0.0,
        ..reference_inputs()
    };

    let b = monthly_breakdown(&inputs);
    assert!(!b.is_finite(), "zero rate should not produce a number");
}

#[test]
fn test_zero_term_is_not_finite() {
    let inputs = CalculatorInputs {
        loan_term_years: 0.0,
        ..reference_inputs()
    };

    let b = monthly_breakdown(&inputs);
    assert!(!b.is_finite(), "zero term should not produce a number");
}

#[test]
fn test_hoa_passes_through_unscaled() {
    // HOA is already monthly; everything else annual gets divided by 12.
    let inputs = CalculatorInputs {
        monthly_hoa: 185.0,
        ..reference_inputs()
    };

    let b = monthly_breakdown(&inputs);
    assert_eq!(b.monthly_hoa, 185.0);
}

#[test]
fn test_schedule_amortizes_to_zero() {
    let rows = amortization_schedule(&reference_inputs());

    assert_eq!(rows.len(), 360);
    let last = rows.last().unwrap();
    assert!(
        last.balance.abs() < 0.01,
        "final balance should be ~$0, got ${:.4}",
        last.balance
    );

    // Interest share falls month over month on a fixed-rate loan.
    assert!(rows[0].interest > rows[359].interest);
    // First month's interest on $360k at 6.5%/12.
    assert!((rows[0].interest - 1_950.0).abs() < 0.01);
}

#[test]
fn test_schedule_empty_for_degenerate_inputs() {
    let inputs = CalculatorInputs {
        annual_interest_rate_pct: 0.0,
        ..reference_inputs()
    };

    assert!(amortization_schedule(&inputs).is_empty());
}
