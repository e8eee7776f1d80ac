//! The fixed loan-offer catalog shown by the mortgage demo.

use vitrine_core::{LoanOffer, LoanType};

/// Six offers, one per headline product plus two conventional variants.
/// Exactly one FHA product, which the catalog tests rely on.
pub fn catalog() -> Vec<LoanOffer> {
    vec![
        LoanOffer {
            id: 1,
            name: "30-Year Fixed".to_string(),
            loan_type: LoanType::Conventional,
            rate: 6.5,
            apr: 6.68,
            term_years: 30,
            down_payment_pct: 20.0,
            monthly_payment: 2_275.0,
            closing_costs: 9_400.0,
            lender: "First Harbor Bank".to_string(),
            features: vec![
                "Rate lock for 60 days".to_string(),
                "No prepayment penalty".to_string(),
            ],
        },
        LoanOffer {
            id: 2,
            name: "15-Year Fixed".to_string(),
            loan_type: LoanType::Conventional,
            rate: 5.875,
            apr: 6.02,
            term_years: 15,
            down_payment_pct: 20.0,
            monthly_payment: 3_014.0,
            closing_costs: 8_100.0,
            lender: "First Harbor Bank".to_string(),
            features: vec![
                "Fastest equity build".to_string(),
                "No prepayment penalty".to_string(),
            ],
        },
        LoanOffer {
            id: 3,
            name: "FHA 30-Year".to_string(),
            loan_type: LoanType::Fha,
            rate: 6.25,
            apr: 7.01,
            term_years: 30,
            down_payment_pct: 3.5,
            monthly_payment: 2_589.0,
            closing_costs: 10_200.0,
            lender: "Cornerstone Home Loans".to_string(),
            features: vec![
                "Low down payment".to_string(),
                "Flexible credit requirements".to_string(),
                "Upfront mortgage insurance premium".to_string(),
            ],
        },
        LoanOffer {
            id: 4,
            name: "VA 30-Year".to_string(),
            loan_type: LoanType::Va,
            rate: 5.99,
            apr: 6.24,
            term_years: 30,
            down_payment_pct: 0.0,
            monthly_payment: 2_395.0,
            closing_costs: 7_600.0,
            lender: "Veterans United Mutual".to_string(),
            features: vec![
                "Zero down for eligible veterans".to_string(),
                "No PMI".to_string(),
            ],
        },
        LoanOffer {
            id: 5,
            name: "Jumbo 30-Year".to_string(),
            loan_type: LoanType::Jumbo,
            rate: 6.875,
            apr: 6.99,
            term_years: 30,
            down_payment_pct: 25.0,
            monthly_payment: 4_604.0,
            closing_costs: 15_800.0,
            lender: "Summit Private Lending".to_string(),
            features: vec![
                "Loan amounts above conforming limits".to_string(),
                "Interest-only option".to_string(),
            ],
        },
        LoanOffer {
            id: 6,
            name: "7/1 ARM".to_string(),
            loan_type: LoanType::Arm,
            rate: 5.625,
            apr: 6.81,
            term_years: 30,
            down_payment_pct: 15.0,
            monthly_payment: 2_072.0,
            closing_costs: 8_900.0,
            lender: "Cornerstone Home Loans".to_string(),
            features: vec![
                "Fixed for 7 years, then adjusts annually".to_string(),
                "2/2/5 rate caps".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{select_offers, LoanFilter, SortKey};

    #[test]
    fn test_catalog_has_exactly_one_fha_offer() {
        let fha = select_offers(&catalog(), LoanFilter::Type(LoanType::Fha), SortKey::Rate);
        assert_eq!(fha.len(), 1);
        assert_eq!(fha[0].name, "FHA 30-Year");
    }
}
