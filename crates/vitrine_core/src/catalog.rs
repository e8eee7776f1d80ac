//! Loan-offer catalog
//!
//! Offers are static for the lifetime of a session: the front-end builds the
//! catalog once from literal data and only ever filters and sorts copies of
//! it for display.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Fixed set of loan product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanType {
    Conventional,
    Fha,
    Va,
    Jumbo,
    Arm,
}

impl LoanType {
    pub const ALL: [LoanType; 5] = [
        LoanType::Conventional,
        LoanType::Fha,
        LoanType::Va,
        LoanType::Jumbo,
        LoanType::Arm,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LoanType::Conventional => "Conventional",
            LoanType::Fha => "FHA",
            LoanType::Va => "VA",
            LoanType::Jumbo => "Jumbo",
            LoanType::Arm => "ARM",
        }
    }

    /// Parse the lowercase label used by the front-end filter cycle.
    pub fn from_label(label: &str) -> Result<Self, CatalogError> {
        match label {
            "conventional" => Ok(LoanType::Conventional),
            "fha" => Ok(LoanType::Fha),
            "va" => Ok(LoanType::Va),
            "jumbo" => Ok(LoanType::Jumbo),
            "arm" => Ok(LoanType::Arm),
            other => Err(CatalogError::UnknownLoanType(other.to_string())),
        }
    }
}

/// A displayed mortgage product. Immutable for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub id: u32,
    pub name: String,
    pub loan_type: LoanType,
    /// Note rate, percentage points.
    pub rate: f64,
    /// Annual percentage rate including fees, percentage points.
    pub apr: f64,
    pub term_years: u32,
    pub down_payment_pct: f64,
    pub monthly_payment: f64,
    pub closing_costs: f64,
    pub lender: String,
    pub features: Vec<String>,
}

/// Which offers to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanFilter {
    #[default]
    All,
    Type(LoanType),
}

impl LoanFilter {
    pub fn matches(&self, offer: &LoanOffer) -> bool {
        match self {
            LoanFilter::All => true,
            LoanFilter::Type(t) => offer.loan_type == *t,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoanFilter::All => "All",
            LoanFilter::Type(t) => t.name(),
        }
    }

    /// Cycle All -> Conventional -> ... -> ARM -> All.
    pub fn next(self) -> Self {
        match self {
            LoanFilter::All => LoanFilter::Type(LoanType::ALL[0]),
            LoanFilter::Type(t) => {
                let idx = LoanType::ALL.iter().position(|x| *x == t).unwrap_or(0);
                match LoanType::ALL.get(idx + 1) {
                    Some(next) => LoanFilter::Type(*next),
                    None => LoanFilter::All,
                }
            }
        }
    }
}

/// Sort key for the offer table. Always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Rate,
    MonthlyPayment,
    DownPayment,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Rate, SortKey::MonthlyPayment, SortKey::DownPayment];

    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Rate => "Rate",
            SortKey::MonthlyPayment => "Payment",
            SortKey::DownPayment => "Down payment",
        }
    }

    pub fn next(self) -> Self {
        let idx = SortKey::ALL.iter().position(|x| *x == self).unwrap_or(0);
        SortKey::ALL[(idx + 1) % SortKey::ALL.len()]
    }

    fn compare(&self, a: &LoanOffer, b: &LoanOffer) -> Ordering {
        match self {
            SortKey::Rate => a.rate.total_cmp(&b.rate),
            SortKey::MonthlyPayment => a.monthly_payment.total_cmp(&b.monthly_payment),
            SortKey::DownPayment => a.down_payment_pct.total_cmp(&b.down_payment_pct),
        }
    }
}

/// Filter the catalog, then sort ascending by the chosen key.
///
/// The result is a subset of `offers` and a permutation of the filtered
/// input. Ties keep their catalog order (`sort_by` is stable), though nothing
/// relies on that.
pub fn select_offers(offers: &[LoanOffer], filter: LoanFilter, sort: SortKey) -> Vec<LoanOffer> {
    let mut selected: Vec<LoanOffer> = offers
        .iter()
        .filter(|o| filter.matches(o))
        .cloned()
        .collect();
    selected.sort_by(|a, b| sort.compare(a, b));
    selected
}
