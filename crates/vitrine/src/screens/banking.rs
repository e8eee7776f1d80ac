//! Mobile banking mockup: login, fake biometric scan, accounts and
//! transactions.
//!
//! The scan is the one "asynchronous" thing in the gallery. It is an
//! [`AuthTimer`] polled from the app's tick, so Esc can cancel it mid-flight
//! and a denied outcome has somewhere to go, even though the demo only ever
//! starts approving scans.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use vitrine_core::{AuthOutcome, AuthTimer};

use super::Screen;
use crate::components::{
    lists::{handle_list_navigation, handle_scroll},
    Component, EventResult,
};
use crate::data::banking::{self, BankAccount, Transaction};
use crate::state::{AppState, BankingStage as Stage};
use crate::util::format::format_currency;

/// How long the pretend fingerprint scan takes.
pub const SCAN_DURATION: Duration = Duration::from_secs(2);

pub struct BankingScreen {
    accounts: Vec<BankAccount>,
    transactions: Vec<Transaction>,
}

impl BankingScreen {
    pub fn new() -> Self {
        Self {
            accounts: banking::accounts(),
            transactions: banking::transactions(),
        }
    }

    fn phone_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
        // The mockup draws inside a narrow centered column, phone-ish.
        let width = 46.min(area.width);
        let x = area.x + (area.width - width) / 2;
        let phone = Rect::new(x, area.y, width, area.height);

        let block = Block::default().borders(Borders::ALL).title(format!(" {title} "));
        let inner = block.inner(phone);
        frame.render_widget(block, phone);
        inner
    }

    fn render_login(&self, frame: &mut Frame, area: Rect) {
        let inner = Self::phone_frame(frame, area, "NORTHWIND BANK");

        let lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled("Welcome back, Jordan", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from("       .---."),
            Line::from("      ( o o )"),
            Line::from("       `---'"),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to sign in with fingerprint",
                Style::default().fg(Color::Cyan),
            )),
        ];

        let login = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(login, inner);
    }

    fn render_scanning(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let inner = Self::phone_frame(frame, area, "NORTHWIND BANK");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let prompt = Paragraph::new(vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Reading fingerprint...",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("keep your finger on the sensor", Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(prompt, chunks[0]);

        let progress = state
            .banking_state
            .auth
            .map(|timer| timer.progress(Instant::now(), SCAN_DURATION))
            .unwrap_or(0.0);
        let gauge = Gauge::default()
            .ratio(progress)
            .gauge_style(Style::default().fg(Color::Green));
        frame.render_widget(gauge, chunks[1]);
    }

    fn render_accounts(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let inner = Self::phone_frame(frame, area, "ACCOUNTS");

        let total: f64 = self.accounts.iter().map(|a| a.balance).sum();
        let mut items = vec![ListItem::new(Line::from(vec![
            Span::raw("Net position  "),
            Span::styled(
                format_currency(total),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))];
        items.push(ListItem::new(Line::from("")));

        for (idx, account) in self.accounts.iter().enumerate() {
            let style = if idx == state.banking_state.selected_account {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let balance_style = if account.balance < 0.0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            items.push(ListItem::new(vec![
                Line::from(vec![
                    Span::styled(account.name, style),
                    Span::styled(format!("  ...{}", account.number_suffix), Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(Span::styled(format!("  {}", format_currency(account.balance)), balance_style)),
            ]));
        }

        let list = List::new(items);
        frame.render_widget(list, inner);
    }

    fn render_transactions(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let account = self
            .accounts
            .get(state.banking_state.selected_account)
            .map(|a| a.name)
            .unwrap_or("ACCOUNT");
        let inner = Self::phone_frame(frame, area, account);

        let items: Vec<ListItem> = self
            .transactions
            .iter()
            .skip(state.banking_state.transactions_scroll)
            .map(|tx| {
                let amount_style = if tx.amount < 0.0 {
                    Style::default()
                } else {
                    Style::default().fg(Color::Green)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{}  ", tx.date), Style::default().fg(Color::DarkGray)),
                        Span::styled(tx.merchant, Style::default().add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(vec![
                        Span::styled(format!("      {}", tx.category), Style::default().fg(Color::DarkGray)),
                        Span::styled(format!("  {}", format_currency(tx.amount)), amount_style),
                    ]),
                ])
            })
            .collect();

        frame.render_widget(List::new(items), inner);
    }
}

impl Component for BankingScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let banking = &mut state.banking_state;
        match banking.screen {
            Stage::Login => match key.code {
                KeyCode::Enter => {
                    // The demo always approves; denial exists for completeness.
                    banking.auth = Some(AuthTimer::start(SCAN_DURATION, AuthOutcome::Approved));
                    banking.screen = Stage::Scanning;
                    tracing::debug!("fingerprint scan started");
                    EventResult::Handled
                }
                _ => EventResult::NotHandled,
            },
            Stage::Scanning => match key.code {
                KeyCode::Esc => {
                    // Dropping the timer is the cancellation.
                    banking.auth = None;
                    banking.screen = Stage::Login;
                    tracing::debug!("fingerprint scan cancelled");
                    EventResult::Handled
                }
                _ => EventResult::Handled, // ignore input mid-scan
            },
            Stage::Accounts => match key.code {
                KeyCode::Enter => {
                    banking.transactions_scroll = 0;
                    banking.screen = Stage::Transactions;
                    EventResult::Handled
                }
                KeyCode::Esc => {
                    banking.screen = Stage::Login;
                    EventResult::Handled
                }
                _ => {
                    if handle_list_navigation(&key, &mut banking.selected_account, self.accounts.len())
                    {
                        EventResult::Handled
                    } else {
                        EventResult::NotHandled
                    }
                }
            },
            Stage::Transactions => match key.code {
                KeyCode::Esc => {
                    banking.screen = Stage::Accounts;
                    EventResult::Handled
                }
                _ => {
                    let max = self.transactions.len().saturating_sub(1);
                    if handle_scroll(&key, &mut banking.transactions_scroll, max) {
                        EventResult::Handled
                    } else {
                        EventResult::NotHandled
                    }
                }
            },
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        match state.banking_state.screen {
            Stage::Login => self.render_login(frame, area),
            Stage::Scanning => self.render_scanning(frame, area, state),
            Stage::Accounts => self.render_accounts(frame, area, state),
            Stage::Transactions => self.render_transactions(frame, area, state),
        }
    }
}

impl Screen for BankingScreen {
    fn title(&self) -> &str {
        "Banking"
    }
}
