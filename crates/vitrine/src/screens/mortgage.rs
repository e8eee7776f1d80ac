//! Mortgage comparison demo: calculator form, loan-offer table and
//! amortization schedule.
//!
//! The breakdown is recomputed from the form on every draw. Parse failures
//! and degenerate inputs (zero rate, zero term) show up inline instead of
//! killing the screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use vitrine_core::{amortization_schedule, monthly_breakdown, select_offers, LoanOffer};

use super::Screen;
use crate::components::{lists::{handle_list_navigation, handle_scroll}, Component, EventResult};
use crate::data::loans;
use crate::state::{AppState, MortgagePanel, MORTGAGE_FIELDS};
use crate::util::format::{format_currency, format_currency_short, format_rate};

pub struct MortgageScreen {
    catalog: Vec<LoanOffer>,
}

impl MortgageScreen {
    pub fn new() -> Self {
        Self {
            catalog: loans::catalog(),
        }
    }

    fn render_panel_tabs(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let sections: Vec<Span> = [
            (MortgagePanel::Form, "Calculator"),
            (MortgagePanel::Offers, "Compare offers"),
            (MortgagePanel::Schedule, "Schedule"),
        ]
        .iter()
        .map(|(panel, label)| {
            if *panel == state.mortgage_state.panel {
                Span::styled(
                    format!("  {label}  "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!("  {label}  "), Style::default().fg(Color::Gray))
            }
        })
        .collect();

        let mut line = vec![Span::styled(
            "RATEWISE ",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        line.extend(sections);

        let tabs = Paragraph::new(Line::from(line)).block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(tabs, area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let mortgage = &state.mortgage_state;
        let items: Vec<ListItem> = MORTGAGE_FIELDS
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                let focused = idx == mortgage.focused_field;
                let label_style = if focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let value = if focused && mortgage.editing {
                    format!("{}_", mortgage.fields[idx])
                } else {
                    mortgage.fields[idx].clone()
                };
                let value_style = if focused && mortgage.editing {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{label:20}"), label_style),
                    Span::styled(value, value_style),
                ]))
            })
            .collect();

        let form = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" LOAN DETAILS "),
        );
        frame.render_widget(form, chunks[0]);

        self.render_breakdown(frame, chunks[1], state);
    }

    fn render_breakdown(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" MONTHLY PAYMENT ");

        let inputs = match state.mortgage_state.inputs() {
            Ok(inputs) => inputs,
            Err(message) => {
                let error = Paragraph::new(Line::from(Span::styled(
                    message,
                    Style::default().fg(Color::Red),
                )))
                .block(block);
                frame.render_widget(error, area);
                return;
            }
        };

        let breakdown = monthly_breakdown(&inputs);
        // Non-finite components (zero rate or term) render as placeholders.
        let money = |v: f64| {
            if v.is_finite() {
                format_currency(v)
            } else {
                "--".to_string()
            }
        };

        let component = |label: &str, v: f64| {
            Line::from(vec![
                Span::raw(format!("{label:22}")),
                Span::raw(money(v)),
            ])
        };

        let lines = vec![
            Line::from(vec![
                Span::raw(format!("{:22}", "Total")),
                Span::styled(
                    money(breakdown.total),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            component("Principal & interest", breakdown.principal_and_interest),
            component("Property tax", breakdown.monthly_tax),
            component("Home insurance", breakdown.monthly_insurance),
            component("PMI", breakdown.monthly_pmi),
            component("HOA", breakdown.monthly_hoa),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Loan amount {} at {} over {:.0} years",
                    format_currency_short(inputs.loan_amount()),
                    format_rate(inputs.annual_interest_rate_pct),
                    inputs.loan_term_years,
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_offers(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mortgage = &state.mortgage_state;
        let offers = select_offers(&self.catalog, mortgage.filter, mortgage.sort);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(area);

        let header = Row::new(["", "Product", "Rate", "APR", "Payment", "Down", "Lender"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = offers
            .iter()
            .enumerate()
            .map(|(idx, offer)| {
                let marker = if idx == mortgage.selected_offer { ">" } else { " " };
                let style = if idx == mortgage.selected_offer {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(marker),
                    Cell::from(offer.name.clone()),
                    Cell::from(format_rate(offer.rate)),
                    Cell::from(format_rate(offer.apr)),
                    Cell::from(format_currency_short(offer.monthly_payment)),
                    Cell::from(format!("{:.1}%", offer.down_payment_pct)),
                    Cell::from(offer.lender.clone()),
                ])
                .style(style)
            })
            .collect();

        let title = format!(
            " OFFERS ({})  filter: {}  sort: {} ",
            offers.len(),
            mortgage.filter.name(),
            mortgage.sort.name(),
        );
        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(16),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(9),
                Constraint::Length(7),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(table, chunks[0]);

        self.render_offer_features(frame, chunks[1], &offers, mortgage.selected_offer);
    }

    fn render_offer_features(
        &self,
        frame: &mut Frame,
        area: Rect,
        offers: &[LoanOffer],
        selected: usize,
    ) {
        let block = Block::default().borders(Borders::ALL).title(" FEATURES ");
        let Some(offer) = offers.get(selected) else {
            frame.render_widget(block, area);
            return;
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(offer.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  closing costs {}", format_currency_short(offer.closing_costs)),
                Style::default().fg(Color::DarkGray),
            ),
        ])];
        for feature in &offer.features {
            lines.push(Line::from(format!("  - {feature}")));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_schedule(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" AMORTIZATION ");

        let inputs = match state.mortgage_state.inputs() {
            Ok(inputs) => inputs,
            Err(message) => {
                let error = Paragraph::new(Line::from(Span::styled(
                    message,
                    Style::default().fg(Color::Red),
                )))
                .block(block);
                frame.render_widget(error, area);
                return;
            }
        };

        let schedule = amortization_schedule(&inputs);
        if schedule.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No schedule for these inputs (check rate and term)",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(["Month", "Interest", "Principal", "Balance"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = schedule
            .iter()
            .skip(state.mortgage_state.schedule_scroll)
            .map(|row| {
                Row::new(vec![
                    Cell::from(format!("{:>5}", row.month)),
                    Cell::from(format_currency(row.interest)),
                    Cell::from(format_currency(row.principal)),
                    Cell::from(format_currency(row.balance.max(0.0))),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Min(12),
            ],
        )
        .header(header)
        .block(block);
        frame.render_widget(table, area);
    }

    fn handle_form_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let mortgage = &mut state.mortgage_state;

        if mortgage.editing {
            match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                    mortgage.fields[mortgage.focused_field].push(c);
                    EventResult::Handled
                }
                KeyCode::Backspace => {
                    mortgage.fields[mortgage.focused_field].pop();
                    EventResult::Handled
                }
                KeyCode::Enter | KeyCode::Esc => {
                    mortgage.editing = false;
                    EventResult::Handled
                }
                _ => EventResult::Handled, // swallow strays while capturing
            }
        } else {
            match key.code {
                KeyCode::Enter => {
                    mortgage.editing = true;
                    EventResult::Handled
                }
                _ => {
                    if handle_list_navigation(
                        &key,
                        &mut mortgage.focused_field,
                        MORTGAGE_FIELDS.len(),
                    ) {
                        EventResult::Handled
                    } else {
                        EventResult::NotHandled
                    }
                }
            }
        }
    }

    fn handle_offers_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let mortgage = &mut state.mortgage_state;
        match key.code {
            KeyCode::Char('f') => {
                mortgage.filter = mortgage.filter.next();
                mortgage.selected_offer = 0;
                EventResult::Handled
            }
            KeyCode::Char('s') => {
                mortgage.sort = mortgage.sort.next();
                mortgage.selected_offer = 0;
                EventResult::Handled
            }
            _ => {
                let count = select_offers(&self.catalog, mortgage.filter, mortgage.sort).len();
                if handle_list_navigation(&key, &mut mortgage.selected_offer, count) {
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
        }
    }

    fn handle_schedule_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let mortgage = &mut state.mortgage_state;
        let rows = match mortgage.inputs() {
            Ok(inputs) => amortization_schedule(&inputs).len(),
            Err(_) => 0,
        };
        if handle_scroll(&key, &mut mortgage.schedule_scroll, rows.saturating_sub(1)) {
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }
}

impl Component for MortgageScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if key.code == KeyCode::Tab && !state.mortgage_state.editing {
            state.mortgage_state.panel = state.mortgage_state.panel.next();
            return EventResult::Handled;
        }

        match state.mortgage_state.panel {
            MortgagePanel::Form => self.handle_form_key(key, state),
            MortgagePanel::Offers => self.handle_offers_key(key, state),
            MortgagePanel::Schedule => self.handle_schedule_key(key, state),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.render_panel_tabs(frame, chunks[0], state);

        match state.mortgage_state.panel {
            MortgagePanel::Form => self.render_form(frame, chunks[1], state),
            MortgagePanel::Offers => self.render_offers(frame, chunks[1], state),
            MortgagePanel::Schedule => self.render_schedule(frame, chunks[1], state),
        }
    }
}

impl Screen for MortgageScreen {
    fn title(&self) -> &str {
        "Mortgage"
    }
}
