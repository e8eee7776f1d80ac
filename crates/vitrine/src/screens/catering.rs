//! Catering site demo: menu packages plus an inquiry form.
//!
//! The form is entirely local. "Sending" just flips a flag and shows a
//! confirmation; nothing leaves the process.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::Screen;
use crate::components::{lists::handle_list_navigation, Component, EventResult};
use crate::data::catering::{self, MenuPackage};
use crate::state::{AppState, INQUIRY_FIELDS};
use crate::util::format::format_currency_short;

pub struct CateringScreen {
    packages: Vec<MenuPackage>,
}

impl CateringScreen {
    pub fn new() -> Self {
        Self {
            packages: catering::packages(),
        }
    }

    fn render_packages(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(self.packages.len() as u16 + 2), Constraint::Min(0)])
            .split(area);

        let focused = !state.catering_state.form_focused;
        let items: Vec<ListItem> = self
            .packages
            .iter()
            .enumerate()
            .map(|(idx, package)| {
                let style = if focused && idx == state.catering_state.selected_package {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else if idx == state.catering_state.selected_package {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:20}", package.name), style),
                    Span::styled(
                        format!(
                            "{} / guest, {}+ guests",
                            format_currency_short(package.price_per_guest),
                            package.min_guests,
                        ),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" MENUS "),
        );
        frame.render_widget(list, chunks[0]);

        self.render_package_detail(frame, chunks[1], state);
    }

    fn render_package_detail(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(package) = self.packages.get(state.catering_state.selected_package) else {
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                package.name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(package.description),
            Line::from(""),
        ];
        for course in package.courses {
            lines.push(Line::from(format!("  - {course}")));
        }

        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" ON THE TABLE "));
        frame.render_widget(detail, area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let catering = &state.catering_state;
        let border_style = if catering.form_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" PLAN AN EVENT ");

        if catering.submitted {
            let package = self
                .packages
                .get(catering.selected_package)
                .map(|p| p.name)
                .unwrap_or("a package");
            let confirmation = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Inquiry received",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!("Thanks, {}!", catering.fields[0])),
                Line::from(format!("We'll follow up about {package} within two days.")),
                Line::from(""),
                Line::from(Span::styled(
                    "r resets the demo to send another",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .wrap(Wrap { trim: false })
            .block(block);
            frame.render_widget(confirmation, area);
            return;
        }

        let mut items: Vec<ListItem> = INQUIRY_FIELDS
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                let focused = catering.form_focused && idx == catering.focused_field;
                let label_style = if focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let value = if focused && catering.editing {
                    format!("{}_", catering.fields[idx])
                } else {
                    catering.fields[idx].clone()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{label:14}"), label_style),
                    Span::raw(value),
                ]))
            })
            .collect();
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(Span::styled(
            "s to send (name and email required)",
            Style::default().fg(Color::DarkGray),
        ))));

        frame.render_widget(List::new(items).block(block), area);
    }
}

impl Component for CateringScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.catering_state.editing {
            let catering = &mut state.catering_state;
            return match key.code {
                KeyCode::Char(c) => {
                    catering.fields[catering.focused_field].push(c);
                    EventResult::Handled
                }
                KeyCode::Backspace => {
                    catering.fields[catering.focused_field].pop();
                    EventResult::Handled
                }
                KeyCode::Enter | KeyCode::Esc => {
                    catering.editing = false;
                    EventResult::Handled
                }
                _ => EventResult::Handled,
            };
        }

        if key.code == KeyCode::Tab {
            state.catering_state.form_focused = !state.catering_state.form_focused;
            return EventResult::Handled;
        }

        if state.catering_state.form_focused {
            match key.code {
                KeyCode::Enter if !state.catering_state.submitted => {
                    state.catering_state.editing = true;
                    EventResult::Handled
                }
                KeyCode::Char('s') if !state.catering_state.submitted => {
                    let complete = !state.catering_state.fields[0].trim().is_empty()
                        && !state.catering_state.fields[1].trim().is_empty();
                    if complete {
                        state.catering_state.submitted = true;
                        tracing::info!("catering inquiry submitted");
                    } else {
                        state.set_error("Name and email are required".to_string());
                    }
                    EventResult::Handled
                }
                _ => {
                    if !state.catering_state.submitted
                        && handle_list_navigation(
                            &key,
                            &mut state.catering_state.focused_field,
                            INQUIRY_FIELDS.len(),
                        )
                    {
                        EventResult::Handled
                    } else {
                        EventResult::NotHandled
                    }
                }
            }
        } else if handle_list_navigation(
            &key,
            &mut state.catering_state.selected_package,
            self.packages.len(),
        ) {
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.render_packages(frame, chunks[0], state);
        self.render_form(frame, chunks[1], state);
    }
}

impl Screen for CateringScreen {
    fn title(&self) -> &str {
        "Catering"
    }
}
