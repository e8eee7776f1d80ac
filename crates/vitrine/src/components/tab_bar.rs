use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::{Component, EventResult};
use crate::state::{AppState, DemoId};

pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        // Digits belong to the focused field while a form is capturing text.
        if state.is_capturing_text() {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                if let Some(demo) = DemoId::from_index(idx) {
                    state.switch_demo(demo);
                }
                EventResult::Handled
            }
            KeyCode::Char(']') => {
                state.next_demo();
                EventResult::Handled
            }
            KeyCode::Char('[') => {
                state.prev_demo();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = DemoId::ALL
            .iter()
            .enumerate()
            .map(|(idx, demo)| {
                let content = format!("[{}] {}", idx + 1, demo.name());
                if *demo == state.active_demo {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM).title(" vitrine "))
            .select(state.active_demo.index());

        frame.render_widget(tabs, area);
    }
}
