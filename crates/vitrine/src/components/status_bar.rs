use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Component, EventResult};
use crate::state::{AppState, BankingStage, DemoId, MortgagePanel};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> &'static str {
        match state.active_demo {
            DemoId::Agency => {
                "1-6: demo | Tab: section | j/k: nav | Enter: open | r: reset | q: quit"
            }
            DemoId::EventsBoard => {
                "1-6: demo | j/k: nav | f: filter status | Enter: details | r: reset | q: quit"
            }
            DemoId::Banking => match state.banking_state.screen {
                BankingStage::Login => "Enter: scan fingerprint | r: reset | q: quit",
                BankingStage::Scanning => "Esc: cancel scan",
                BankingStage::Accounts => "j/k: nav | Enter: transactions | Esc: log out | q: quit",
                BankingStage::Transactions => "j/k: scroll | Esc: back | q: quit",
            },
            DemoId::Market => {
                "1-6: demo | j/k: nav | f: filter | s: sort by price | r: reset | q: quit"
            }
            DemoId::Mortgage => match state.mortgage_state.panel {
                MortgagePanel::Form => {
                    if state.mortgage_state.editing {
                        "type digits | Enter: done | Esc: cancel edit"
                    } else {
                        "Tab: panel | j/k: field | Enter: edit | r: reset | q: quit"
                    }
                }
                MortgagePanel::Offers => {
                    "Tab: panel | j/k: nav | f: filter type | s: sort key | q: quit"
                }
                MortgagePanel::Schedule => "Tab: panel | j/k: scroll | g/G: ends | q: quit",
            },
            DemoId::Catering => {
                if state.catering_state.editing {
                    "type | Enter: done | Esc: cancel edit"
                } else {
                    "1-6: demo | j/k: package | Tab: form | Enter: edit | s: send | r: reset"
                }
            }
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
                Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
