//! Tests for the demo-gallery core logic
//!
//! Organized by topic:
//! - `mortgage` - payment breakdown and amortization schedule
//! - `catalog` - loan-offer filtering and sorting
//!
//! The auth timer's tests live next to it in `auth.rs` because they use its
//! private deadline constructor.

mod catalog;
mod mortgage;
