mod app_state;
mod demos;
mod screen_state;

pub use app_state::*;
pub use demos::*;
pub use screen_state::*;
