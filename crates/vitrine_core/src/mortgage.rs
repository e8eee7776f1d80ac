//! Mortgage payment math
//!
//! The calculator is a pure function of its inputs. Nothing is cached: the
//! front-end recomputes the breakdown on every draw, which is cheap and
//! removes any invalidation concern.

use serde::{Deserialize, Serialize};

/// User-supplied figures for the mortgage calculator.
///
/// All fields are plain dollar amounts except `loan_term_years` (whole years)
/// and `annual_interest_rate_pct` (percentage points, e.g. `6.5`). Values are
/// expected to be non-negative; they are not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub home_price: f64,
    pub down_payment: f64,
    pub loan_term_years: f64,
    pub annual_interest_rate_pct: f64,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub annual_pmi: f64,
    pub monthly_hoa: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
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
}

impl CalculatorInputs {
    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_interest_rate_pct / 100.0 / 12.0
    }

    pub fn num_payments(&self) -> f64 {
        self.loan_term_years * 12.0
    }
}

/// Monthly payment decomposed into its five components.
///
/// `total` is the sum of the other five fields by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub principal_and_interest: f64,
    pub monthly_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_pmi: f64,
    pub monthly_hoa: f64,
    pub total: f64,
}

impl PaymentBreakdown {
    /// Whether every component is a usable number.
    ///
    /// False when the inputs were degenerate (see [`monthly_breakdown`]).
    pub fn is_finite(&self) -> bool {
        self.total.is_finite()
    }
}

/// Compute the monthly payment breakdown with the standard amortizing-loan
/// formula:
///
/// ```text
/// P&I = L * r(1+r)^n / ((1+r)^n - 1)
/// ```
///
/// where `L` is the loan amount, `r` the monthly rate and `n` the number of
/// payments.
///
/// A zero interest rate or a zero term makes the denominator zero and the
/// result non-finite (NaN). That matches the behavior of the screen this was
/// lifted from and is deliberately not guarded; callers can check
/// [`PaymentBreakdown::is_finite`] before display. Negative inputs are not
/// validated either.
pub fn monthly_breakdown(inputs: &CalculatorInputs) -> PaymentBreakdown {
    let r = inputs.monthly_rate();
    let n = inputs.num_payments();
    let growth = (1.0 + r).powf(n);
    let principal_and_interest = inputs.loan_amount() * (r * growth) / (growth - 1.0);

    let monthly_tax = inputs.annual_property_tax / 12.0;
    let monthly_insurance = inputs.annual_insurance / 12.0;
    let monthly_pmi = inputs.annual_pmi / 12.0;
    let monthly_hoa = inputs.monthly_hoa;

    PaymentBreakdown {
        principal_and_interest,
        monthly_tax,
        monthly_insurance,
        monthly_pmi,
        monthly_hoa,
        total: principal_and_interest + monthly_tax + monthly_insurance + monthly_pmi + monthly_hoa,
    }
}

/// One month of the amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

/// Month-by-month split of each payment into interest and principal.
///
/// Returns an empty schedule when the breakdown is non-finite, since there is
/// no meaningful payment to amortize.
pub fn amortization_schedule(inputs: &CalculatorInputs) -> Vec<AmortizationRow> {
    let payment = monthly_breakdown(inputs).principal_and_interest;
    if !payment.is_finite() {
        return Vec::new();
    }

    let r = inputs.monthly_rate();
    let n = inputs.num_payments() as u32;
    let mut balance = inputs.loan_amount();
    let mut rows = Vec::with_capacity(n as usize);

    for month in 1..=n {
        let interest = balance * r;
        // Final payment clears whatever remains instead of overshooting.
        let principal = (payment - interest).min(balance);
        balance -= principal;
        rows.push(AmortizationRow {
            month,
            interest,
            principal,
            balance,
        });
        if balance <= 0.0 {
            break;
        }
    }

    rows
}
