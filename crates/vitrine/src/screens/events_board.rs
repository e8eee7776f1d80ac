//! Events-management dashboard demo: filterable event list with a detail
//! modal.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph},
    Frame,
};

use super::Screen;
use crate::components::{lists::handle_list_navigation, Component, EventResult};
use crate::data::events_board::{self, EventStatus, ManagedEvent};
use crate::state::AppState;

pub struct EventsBoardScreen {
    events: Vec<ManagedEvent>,
}

impl EventsBoardScreen {
    pub fn new() -> Self {
        Self {
            events: events_board::events(),
        }
    }

    /// Events passing the current status filter, in catalog order.
    fn visible<'a>(&'a self, state: &AppState) -> Vec<&'a ManagedEvent> {
        self.events
            .iter()
            .filter(|e| match state.events_board_state.status_filter {
                None => true,
                Some(status) => e.status == status,
            })
            .collect()
    }

    fn status_style(status: EventStatus) -> Style {
        match status {
            EventStatus::Upcoming => Style::default().fg(Color::Cyan),
            EventStatus::Live => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            EventStatus::Ended => Style::default().fg(Color::DarkGray),
        }
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let count = |status: EventStatus| self.events.iter().filter(|e| e.status == status).count();
        let filter_name = state
            .events_board_state
            .status_filter
            .map(|s| s.name())
            .unwrap_or("All");

        let line = Line::from(vec![
            Span::styled("EVENT OPERATIONS  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("{} upcoming", count(EventStatus::Upcoming)), Self::status_style(EventStatus::Upcoming)),
            Span::raw("  "),
            Span::styled(format!("{} live", count(EventStatus::Live)), Self::status_style(EventStatus::Live)),
            Span::raw("  "),
            Span::styled(format!("{} ended", count(EventStatus::Ended)), Self::status_style(EventStatus::Ended)),
            Span::styled(format!("   filter: {filter_name}"), Style::default().fg(Color::Yellow)),
        ]);

        let summary = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(summary, area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let visible = self.visible(state);

        let items: Vec<ListItem> = visible
            .iter()
            .enumerate()
            .map(|(idx, event)| {
                let marker = if idx == state.events_board_state.selected_event {
                    "> "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{:8}", event.status.name()), Self::status_style(event.status)),
                    Span::raw(format!(" {}  ", event.date)),
                    Span::styled(event.name, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {}/{} registered", event.registered, event.capacity),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let title = format!(" EVENTS ({}) ", visible.len());
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(list, area);
    }

    fn render_detail_modal(&self, frame: &mut Frame, state: &AppState) {
        let visible = self.visible(state);
        let Some(event) = visible.get(state.events_board_state.selected_event) else {
            return;
        };

        let area = centered_rect(50, 11, frame.area());
        frame.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .split(area);

        let lines = vec![
            Line::from(Span::styled(event.name, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(format!("Date:      {}", event.date)),
            Line::from(format!("Venue:     {}", event.venue)),
            Line::from(format!("Organizer: {}", event.organizer)),
            Line::from(vec![
                Span::raw("Status:    "),
                Span::styled(event.status.name(), Self::status_style(event.status)),
            ]),
        ];
        frame.render_widget(
            Block::default().borders(Borders::ALL).title(" EVENT DETAILS "),
            area,
        );
        frame.render_widget(Paragraph::new(lines), chunks[0]);

        let fill = Gauge::default()
            .ratio(event.fill_ratio())
            .label(format!("{}/{} seats", event.registered, event.capacity))
            .gauge_style(Style::default().fg(Color::Green));
        frame.render_widget(fill, chunks[1]);
    }
}

/// Center a fixed-size rect inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

impl Component for EventsBoardScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.events_board_state.show_detail {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    state.events_board_state.show_detail = false;
                    EventResult::Handled
                }
                _ => EventResult::Handled, // modal swallows everything else
            };
        }

        let visible_count = self.visible(state).len();
        match key.code {
            KeyCode::Char('f') => {
                state.events_board_state.cycle_filter();
                EventResult::Handled
            }
            KeyCode::Enter if visible_count > 0 => {
                state.events_board_state.show_detail = true;
                EventResult::Handled
            }
            _ => {
                if handle_list_navigation(
                    &key,
                    &mut state.events_board_state.selected_event,
                    visible_count,
                ) {
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.render_summary(frame, chunks[0], state);
        self.render_list(frame, chunks[1], state);

        if state.events_board_state.show_detail {
            self.render_detail_modal(frame, state);
        }
    }
}

impl Screen for EventsBoardScreen {
    fn title(&self) -> &str {
        "Events"
    }
}
