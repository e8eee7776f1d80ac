//! Tests for loan-catalog filtering and sorting
//!
//! These tests verify:
//! - Filters are sound (every kept offer matches, result is a subset)
//! - Sorting is non-decreasing in the chosen key and element-preserving
//! - The fixed six-offer sample contains exactly one FHA product

use std::collections::HashSet;

use crate::catalog::{select_offers, LoanFilter, LoanOffer, LoanType, SortKey};

fn offer(id: u32, loan_type: LoanType, rate: f64, payment: f64, down_pct: f64) -> LoanOffer {
    LoanOffer {
        id,
        name: format!("Offer {id}"),
        loan_type,
        rate,
        apr: rate + 0.2,
        term_years: 30,
        down_payment_pct: down_pct,
        monthly_payment: payment,
        closing_costs: 8_000.0,
        lender: "Test Lender".to_string(),
        features: vec![],
    }
}

/// Mirrors the shipped sample catalog: six offers, exactly one FHA.
fn sample_catalog() -> Vec<LoanOffer> {
    vec![
        offer(1, LoanType::Conventional, 6.5, 2_275.0, 20.0),
        offer(2, LoanType::Conventional, 6.125, 2_389.0, 10.0),
        offer(3, LoanType::Fha, 6.25, 2_101.0, 3.5),
        offer(4, LoanType::Va, 5.99, 2_248.0, 0.0),
        offer(5, LoanType::Jumbo, 6.875, 4_604.0, 25.0),
        offer(6, LoanType::Arm, 5.625, 2_072.0, 15.0),
    ]
}

#[test]
fn test_filter_all_keeps_everything() {
    let catalog = sample_catalog();
    let result = select_offers(&catalog, LoanFilter::All, SortKey::Rate);

    assert_eq!(result.len(), catalog.len());
}

#[test]
fn test_filter_is_sound_for_every_type() {
    let catalog = sample_catalog();
    let catalog_ids: HashSet<u32> = catalog.iter().map(|o| o.id).collect();

    for loan_type in LoanType::ALL {
        let result = select_offers(&catalog, LoanFilter::Type(loan_type), SortKey::Rate);

        for kept in &result {
            assert_eq!(kept.loan_type, loan_type);
            assert!(catalog_ids.contains(&kept.id), "result must be a subset");
        }
    }
}

#[test]
fn test_fha_scenario_returns_exactly_one() {
    let result = select_offers(&sample_catalog(), LoanFilter::Type(LoanType::Fha), SortKey::Rate);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 3);
}

#[test]
fn test_sort_is_non_decreasing_for_every_key() {
    let catalog = sample_catalog();

    for key in SortKey::ALL {
        let result = select_offers(&catalog, LoanFilter::All, key);

        let values: Vec<f64> = result
            .iter()
            .map(|o| match key {
                SortKey::Rate => o.rate,
                SortKey::MonthlyPayment => o.monthly_payment,
                SortKey::DownPayment => o.down_payment_pct,
            })
            .collect();

        assert!(
            values.windows(2).all(|w| w[0] <= w[1]),
            "{key:?} ordering violated: {values:?}"
        );
    }
}

#[test]
fn test_sort_is_a_permutation() {
    let catalog = sample_catalog();
    let before: HashSet<u32> = catalog.iter().map(|o| o.id).collect();

    let result = select_offers(&catalog, LoanFilter::All, SortKey::MonthlyPayment);
    let after: HashSet<u32> = result.iter().map(|o| o.id).collect();

    assert_eq!(before, after);
    assert_eq!(result.len(), catalog.len());
}

#[test]
fn test_filter_cycle_visits_every_type_and_returns_to_all() {
    let mut filter = LoanFilter::All;
    let mut seen = Vec::new();

    for _ in 0..LoanType::ALL.len() {
        filter = filter.next();
        seen.push(filter);
    }

    for loan_type in LoanType::ALL {
        assert!(seen.contains(&LoanFilter::Type(loan_type)));
    }
    assert_eq!(filter.next(), LoanFilter::All);
}

#[test]
fn test_loan_type_labels_round_trip() {
    for loan_type in LoanType::ALL {
        let parsed = LoanType::from_label(&loan_type.name().to_lowercase()).unwrap();
        assert_eq!(parsed, loan_type);
    }

    assert!(LoanType::from_label("balloon").is_err());
}
