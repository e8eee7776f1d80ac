pub mod agency;
pub mod banking;
pub mod catering;
pub mod events_board;
pub mod market;
pub mod mortgage;

use crate::components::Component;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}
