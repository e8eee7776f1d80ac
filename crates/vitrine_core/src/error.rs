use std::fmt;

/// Errors from catalog lookups and label parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownLoanType(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownLoanType(label) => {
                write!(f, "unknown loan type {label:?}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
