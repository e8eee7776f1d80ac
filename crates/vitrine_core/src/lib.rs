//! Shared logic for the vitrine demo gallery
//!
//! This crate holds the only real computation behind the demo screens:
//! - The mortgage payment calculator (amortizing-loan formula and schedule)
//! - The loan-offer catalog with its filter and sort operations
//! - The cancellable authentication timer used by the banking demo
//!
//! Everything here is pure and synchronous. The terminal front-end lives in
//! the `vitrine` crate.

#![warn(clippy::all)]

pub mod auth;
pub mod catalog;
pub mod error;
pub mod mortgage;

#[cfg(test)]
mod tests;

pub use auth::{AuthOutcome, AuthTimer};
pub use catalog::{select_offers, LoanFilter, LoanOffer, LoanType, SortKey};
pub use error::CatalogError;
pub use mortgage::{
    amortization_schedule, monthly_breakdown, AmortizationRow, CalculatorInputs, PaymentBreakdown,
};
