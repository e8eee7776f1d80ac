use super::demos::DemoId;
use super::screen_state::{
    AgencyState, BankingState, CateringState, EventsBoardState, MarketState, MortgageState,
};

/// Main application state: the active demo plus one state struct per demo.
#[derive(Debug, Default)]
pub struct AppState {
    pub active_demo: DemoId,
    pub agency_state: AgencyState,
    pub events_board_state: EventsBoardState,
    pub banking_state: BankingState,
    pub market_state: MarketState,
    pub mortgage_state: MortgageState,
    pub catering_state: CateringState,

    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switch_demo(&mut self, demo: DemoId) {
        self.active_demo = demo;
    }

    pub fn next_demo(&mut self) {
        let next = (self.active_demo.index() + 1) % DemoId::ALL.len();
        self.active_demo = DemoId::ALL[next];
    }

    pub fn prev_demo(&mut self) {
        let count = DemoId::ALL.len();
        let prev = (self.active_demo.index() + count - 1) % count;
        self.active_demo = DemoId::ALL[prev];
    }

    /// Recreate the active demo's state from scratch.
    ///
    /// This is the demo's "close" hook: the hosting shell owns nothing, so
    /// leaving a demo simply drops its in-memory state.
    pub fn reset_active_demo(&mut self) {
        match self.active_demo {
            DemoId::Agency => self.agency_state = AgencyState::default(),
            DemoId::EventsBoard => self.events_board_state = EventsBoardState::default(),
            DemoId::Banking => self.banking_state = BankingState::default(),
            DemoId::Market => self.market_state = MarketState::default(),
            DemoId::Mortgage => self.mortgage_state = MortgageState::default(),
            DemoId::Catering => self.catering_state = CateringState::default(),
        }
        tracing::debug!(demo = self.active_demo.name(), "demo state reset");
    }

    /// True while some demo's text field is capturing keystrokes, which
    /// suspends the global single-letter bindings.
    pub fn is_capturing_text(&self) -> bool {
        match self.active_demo {
            DemoId::Mortgage => self.mortgage_state.editing,
            DemoId::Catering => self.catering_state.editing,
            _ => false,
        }
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!(%message, "ui error");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BankingStage;

    #[test]
    fn test_demo_switching_is_pure_reassignment() {
        let mut state = AppState::new();
        state.mortgage_state.focused_field = 3;

        state.switch_demo(DemoId::Banking);
        state.switch_demo(DemoId::Mortgage);

        // Coming back finds the demo exactly as it was left.
        assert_eq!(state.mortgage_state.focused_field, 3);
    }

    #[test]
    fn test_next_prev_demo_wrap() {
        let mut state = AppState::new();
        assert_eq!(state.active_demo, DemoId::Agency);

        state.prev_demo();
        assert_eq!(state.active_demo, DemoId::Catering);
        state.next_demo();
        assert_eq!(state.active_demo, DemoId::Agency);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = AppState::new();
        state.switch_demo(DemoId::Banking);
        state.banking_state.screen = BankingStage::Accounts;
        state.banking_state.selected_account = 2;

        state.reset_active_demo();

        assert_eq!(state.banking_state.screen, BankingStage::Login);
        assert_eq!(state.banking_state.selected_account, 0);
    }
}
