//! Literal sample data for the demo screens.
//!
//! Each module builds its fixtures on demand; offers, events, listings and
//! the rest are never created or destroyed at runtime, only filtered and
//! sorted for display.

pub mod agency;
pub mod banking;
pub mod catering;
pub mod events_board;
pub mod loans;
pub mod market;
