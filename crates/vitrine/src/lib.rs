//! vitrine - a terminal gallery of self-contained demo screens
//!
//! Six independent demos live behind one tab bar: a creative agency site, an
//! events dashboard, a mobile banking mockup, an NFT marketplace, a
//! mortgage-comparison tool and a catering site. Every demo renders literal
//! sample data and keeps its UI state in memory; there is no persistence and
//! no network. The mortgage demo's math and the banking demo's fake
//! biometric timer come from `vitrine_core`.

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
