//! # TabBar Component
//!
//! Bottom navigation bar with the three top-level destinations. The active
//! tab is the one whose template exactly matches the current route, so
//! detail and sub-screens leave every tab unhighlighted.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::router::Tab;
use crate::tui::component::Component;
use crate::tui::components::PRIMARY;

pub const TAB_BAR_HEIGHT: u16 = 2;

pub struct TabBar {
    /// `Router::active_tab()` (Prop)
    pub active: Option<Tab>,
}

impl TabBar {
    pub fn new(active: Option<Tab>) -> Self {
        Self { active }
    }

    fn icon(tab: Tab) -> &'static str {
        match tab {
            Tab::Home => "⌂",
            Tab::Favorites => "♥",
            Tab::Profile => "☺",
        }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
        for (i, tab) in Tab::ALL.iter().enumerate() {
            let style = if self.active == Some(*tab) {
                Style::default()
                    .fg(Color::White)
                    .bg(PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let label = format!("{} {} (F{})", Self::icon(*tab), tab.title(), i + 1);
            frame.render_widget(
                Paragraph::new(Line::from(label).centered()).style(style),
                cells[i],
            );
        }
    }
}
