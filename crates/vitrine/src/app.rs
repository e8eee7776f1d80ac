use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    DefaultTerminal, Frame,
};

use vitrine_core::AuthOutcome;

use crate::components::{status_bar::StatusBar, tab_bar::TabBar, Component, EventResult};
use crate::screens::{
    agency::AgencyScreen, banking::BankingScreen, catering::CateringScreen,
    events_board::EventsBoardScreen, market::MarketScreen, mortgage::MortgageScreen,
};
use crate::state::{AppState, BankingStage, DemoId};

/// How long to wait for input before running a tick. Keeps the scan gauge
/// moving while the keyboard is idle.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    agency_screen: AgencyScreen,
    events_board_screen: EventsBoardScreen,
    banking_screen: BankingScreen,
    market_screen: MarketScreen,
    mortgage_screen: MortgageScreen,
    catering_screen: CateringScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            agency_screen: AgencyScreen::new(),
            events_board_screen: EventsBoardScreen::new(),
            banking_screen: BankingScreen::new(),
            market_screen: MarketScreen::new(),
            mortgage_screen: MortgageScreen::new(),
            catering_screen: CateringScreen::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_demo {
            DemoId::Agency => self.agency_screen.render(frame, area, &self.state),
            DemoId::EventsBoard => self.events_board_screen.render(frame, area, &self.state),
            DemoId::Banking => self.banking_screen.render(frame, area, &self.state),
            DemoId::Market => self.market_screen.render(frame, area, &self.state),
            DemoId::Mortgage => self.mortgage_screen.render(frame, area, &self.state),
            DemoId::Catering => self.catering_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        // Wait briefly for input so timers still advance on an idle keyboard.
        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)
                }
                _ => {}
            }
        }
        self.tick();
        Ok(())
    }

    /// Advance anything time-driven. Today that is only the banking demo's
    /// fake fingerprint scan.
    fn tick(&mut self) {
        let Some(timer) = self.state.banking_state.auth.as_mut() else {
            return;
        };
        let Some(outcome) = timer.poll(Instant::now()) else {
            return;
        };

        self.state.banking_state.auth = None;
        match outcome {
            AuthOutcome::Approved => {
                self.state.banking_state.screen = BankingStage::Accounts;
                tracing::info!("fingerprint scan approved");
            }
            AuthOutcome::Denied => {
                self.state.banking_state.screen = BankingStage::Login;
                self.state.set_error("Fingerprint not recognized".to_string());
            }
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                if !self.state.is_capturing_text() {
                    self.state.exit = true;
                    return;
                }
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('r') if key_event.modifiers.is_empty() => {
                if !self.state.is_capturing_text() {
                    self.state.reset_active_demo();
                    return;
                }
            }
            KeyCode::Esc if self.state.error_message.is_some() => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        match self.state.active_demo {
            DemoId::Agency => self.agency_screen.handle_key(key_event, &mut self.state),
            DemoId::EventsBoard => self
                .events_board_screen
                .handle_key(key_event, &mut self.state),
            DemoId::Banking => self.banking_screen.handle_key(key_event, &mut self.state),
            DemoId::Market => self.market_screen.handle_key(key_event, &mut self.state),
            DemoId::Mortgage => self.mortgage_screen.handle_key(key_event, &mut self.state),
            DemoId::Catering => self.catering_screen.handle_key(key_event, &mut self.state),
        };
    }
}
