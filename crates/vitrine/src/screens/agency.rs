//! Creative agency site demo: portfolio, services, studio.

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
use crate::data::agency::{self, Project};
use crate::state::{AgencyPanel, AppState};

pub struct AgencyScreen {
    projects: Vec<Project>,
}

impl AgencyScreen {
    pub fn new() -> Self {
        Self {
            projects: agency::projects(),
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let sections: Vec<Span> = [AgencyPanel::Work, AgencyPanel::Services, AgencyPanel::Studio]
            .iter()
            .map(|panel| {
                if *panel == state.agency_state.panel {
                    Span::styled(
                        format!("  {}  ", panel.name()),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(format!("  {}  ", panel.name()), Style::default().fg(Color::Gray))
                }
            })
            .collect();

        let mut line = vec![Span::styled(
            "VOSS & CO ",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        line.extend(sections);

        let header = Paragraph::new(Line::from(line))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }

    fn render_work(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let items: Vec<ListItem> = self
            .projects
            .iter()
            .enumerate()
            .map(|(idx, project)| {
                let style = if idx == state.agency_state.selected_project {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(project.title, style),
                    Span::styled(
                        format!("  {} - {}", project.client, project.year),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" SELECTED WORK "),
        );
        frame.render_widget(list, chunks[0]);

        self.render_project_detail(frame, chunks[1], state);
    }

    fn render_project_detail(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(project) = self.projects.get(state.agency_state.selected_project) else {
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                project.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} / {} / {}", project.client, project.discipline, project.year),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        if state.agency_state.show_project_detail {
            lines.push(Line::from(""));
            lines.push(Line::from(project.blurb));
        } else {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Enter to open case study",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" CASE STUDY "));
        frame.render_widget(detail, area);
    }

    fn render_services(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for service in agency::services() {
            lines.push(Line::from(Span::styled(
                service.name,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", service.description),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
        }

        let services = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" WHAT WE DO "));
        frame.render_widget(services, area);
    }

    fn render_studio(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from("An independent design studio of five, working from a converted"),
            Line::from("sailmaker's loft. We take on a handful of projects a year and"),
            Line::from("stay close to each one from kickoff to shipping."),
            Line::from(""),
        ];
        for member in agency::team() {
            lines.push(Line::from(vec![
                Span::styled(member.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", member.role), Style::default().fg(Color::DarkGray)),
            ]));
        }

        let studio = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" THE STUDIO "));
        frame.render_widget(studio, area);
    }
}

impl Component for AgencyScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Tab => {
                state.agency_state.panel = state.agency_state.panel.next();
                state.agency_state.show_project_detail = false;
                EventResult::Handled
            }
            KeyCode::Enter if state.agency_state.panel == AgencyPanel::Work => {
                state.agency_state.show_project_detail = !state.agency_state.show_project_detail;
                EventResult::Handled
            }
            KeyCode::Esc if state.agency_state.show_project_detail => {
                state.agency_state.show_project_detail = false;
                EventResult::Handled
            }
            _ if state.agency_state.panel == AgencyPanel::Work => {
                if handle_list_navigation(
                    &key,
                    &mut state.agency_state.selected_project,
                    self.projects.len(),
                ) {
                    state.agency_state.show_project_detail = false;
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.render_header(frame, chunks[0], state);

        match state.agency_state.panel {
            AgencyPanel::Work => self.render_work(frame, chunks[1], state),
            AgencyPanel::Services => self.render_services(frame, chunks[1]),
            AgencyPanel::Studio => self.render_studio(frame, chunks[1]),
        }
    }
}

impl Screen for AgencyScreen {
    fn title(&self) -> &str {
        "Agency"
    }
}
