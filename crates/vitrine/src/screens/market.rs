//! NFT marketplace demo: browsable listing grid with category filter and a
//! price sort toggle.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::Screen;
use crate::components::{lists::handle_list_navigation, Component, EventResult};
use crate::data::market::{self, NftCategory, NftListing};
use crate::state::AppState;

pub struct MarketScreen {
    listings: Vec<NftListing>,
}

impl MarketScreen {
    pub fn new() -> Self {
        Self {
            listings: market::listings(),
        }
    }

    /// Listings passing the category filter, optionally sorted by price
    /// ascending. Without the sort toggle the catalog order is kept.
    fn visible<'a>(&'a self, state: &AppState) -> Vec<&'a NftListing> {
        let mut visible: Vec<&NftListing> = self
            .listings
            .iter()
            .filter(|l| match state.market_state.category_filter {
                None => true,
                Some(category) => l.category == category,
            })
            .collect();

        if state.market_state.sort_by_price {
            visible.sort_by(|a, b| a.price_eth.total_cmp(&b.price_eth));
        }
        visible
    }

    fn category_style(category: NftCategory) -> Style {
        let color = match category {
            NftCategory::Art => Color::Magenta,
            NftCategory::Photography => Color::Cyan,
            NftCategory::Music => Color::Blue,
            NftCategory::Collectible => Color::Yellow,
        };
        Style::default().fg(color)
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let filter_name = state
            .market_state
            .category_filter
            .map(|c| c.name())
            .unwrap_or("All");
        let sort_name = if state.market_state.sort_by_price {
            "price (low to high)"
        } else {
            "featured"
        };

        let line = Line::from(vec![
            Span::styled("MINTRAL ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("marketplace", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("   filter: {filter_name}"),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("   sort: {sort_name}"),
                Style::default().fg(Color::Yellow),
            ),
        ]);

        let header = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }

    fn render_listings(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let visible = self.visible(state);

        let items: Vec<ListItem> = visible
            .iter()
            .enumerate()
            .map(|(idx, listing)| {
                let marker = if idx == state.market_state.selected_listing {
                    "> "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(
                        format!("{:12}", listing.category.name()),
                        Self::category_style(listing.category),
                    ),
                    Span::styled(listing.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        format!("  {:.2} ETH", listing.price_eth),
                        Style::default().fg(Color::Green),
                    ),
                ]))
            })
            .collect();

        let title = format!(" LISTINGS ({}) ", visible.len());
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(list, area);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let visible = self.visible(state);
        let block = Block::default().borders(Borders::ALL).title(" ITEM ");

        let Some(listing) = visible.get(state.market_state.selected_listing) else {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No listings in this category",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(empty, area);
            return;
        };

        let lines = vec![
            Line::from(Span::styled(
                listing.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} by {}", listing.collection, listing.creator),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Category  "),
                Span::styled(listing.category.name(), Self::category_style(listing.category)),
            ]),
            Line::from(vec![
                Span::raw("Price     "),
                Span::styled(
                    format!("{:.2} ETH", listing.price_eth),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Likes     {}", listing.likes)),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for MarketScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('f') => {
                state.market_state.cycle_filter();
                EventResult::Handled
            }
            KeyCode::Char('s') => {
                state.market_state.sort_by_price = !state.market_state.sort_by_price;
                state.market_state.selected_listing = 0;
                EventResult::Handled
            }
            _ => {
                let visible_count = self.visible(state).len();
                if handle_list_navigation(
                    &key,
                    &mut state.market_state.selected_listing,
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
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.render_header(frame, rows[0], state);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        self.render_listings(frame, columns[0], state);
        self.render_detail(frame, columns[1], state);
    }
}

impl Screen for MarketScreen {
    fn title(&self) -> &str {
        "Market"
    }
}
