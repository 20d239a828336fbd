//! # Property Detail Screen
//!
//! Shows one listing, resolved from the route's `PropertyRef`. A lookup miss
//! (unknown id or malformed parameter) renders the not-found view instead;
//! it is an ordinary state, not an error.
//!
//! ```text
//! ♥ Modern Villa
//! ╭──────────────╮
//! │  ascii art   │   ImagePanel (or "Image not found")
//! ╰──────────────╯
//! $250000
//! @ 123 Maple St, California
//! Bedrooms   Bathrooms   Area
//! 4          3           2400 sqft
//! Amenities / Description / [ Contact Agent ]
//! ```
//!
//! The body is taller than most terminals, so it is drawn into a
//! `ScrollView` sized from the measured content.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::Action;
use crate::core::property::Property;
use crate::core::route::Route;
use crate::tui::component::{Component, EventResult};
use crate::tui::components::{
    FAVORITE, HEART_EMPTY, HEART_FILLED, ImagePanel, PRIMARY, ScreenContext, centered_rect,
};
use crate::tui::event::TuiEvent;

pub const NOT_FOUND_TITLE: &str = "Property Not Found";
pub const NOT_FOUND_BODY: &str = "Property not found";

#[derive(Debug, Default)]
pub struct DetailState {
    pub scroll_state: ScrollViewState,
    /// Measured at the last render, for clamping
    content_height: u16,
    viewport_height: u16,
}

impl DetailState {
    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, ctx: &ScreenContext) -> EventResult {
        let Some(property) = ctx.route.property().and_then(|r| ctx.catalog.resolve(r)) else {
            // Not-found view: Enter is the back control
            return match event {
                TuiEvent::Submit => EventResult::Dispatch(Action::Back),
                _ => EventResult::Ignored,
            };
        };

        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::CursorHome => self.scroll_state.scroll_to_top(),
            TuiEvent::CursorEnd => self.scroll_state.scroll_to_bottom(),
            TuiEvent::InputChar('f') => {
                return EventResult::Dispatch(Action::ToggleFavorite(property.clone()));
            }
            TuiEvent::InputChar('c') | TuiEvent::Submit => {
                return EventResult::Dispatch(Action::Navigate(Route::contact_agent(property.id)));
            }
            _ => return EventResult::Ignored,
        }
        self.clamp_scroll();
        EventResult::Consumed
    }
}

pub struct DetailScreen<'a> {
    state: &'a mut DetailState,
    ctx: &'a ScreenContext<'a>,
}

impl<'a> DetailScreen<'a> {
    pub fn new(state: &'a mut DetailState, ctx: &'a ScreenContext<'a>) -> Self {
        Self { state, ctx }
    }

    fn render_not_found(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(NOT_FOUND_TITLE)
            .title_bottom(Line::from(" Enter/Esc Back ").centered());
        let body = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(NOT_FOUND_BODY, Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::styled("‹ Back", Style::default().fg(PRIMARY)),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(body, centered_rect(60, 50, area));
    }

    fn render_property(&mut self, frame: &mut Frame, area: Rect, property: &Property) {
        // Leave a column for the scrollbar
        let width = area.width.saturating_sub(1);

        let heart = if self.ctx.is_favorite(property.id) {
            Span::styled(format!("{HEART_FILLED} (f)"), Style::default().fg(FAVORITE))
        } else {
            Span::styled(format!("{HEART_EMPTY} (f)"), Style::default().fg(Color::Gray))
        };
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                property.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            heart,
        ]));

        let image = ImagePanel::new(self.ctx.assets.resolve(&property.image_name));
        let image_height = image.height();

        let summary = Paragraph::new(vec![
            Line::styled(
                property.price_label(),
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("@ {}", property.address),
                Style::default().fg(Color::Gray),
            ),
        ]);

        let stats = [
            ("Bedrooms", property.beds.to_string()),
            ("Bathrooms", property.baths.to_string()),
            ("Area", property.area_label()),
        ];

        let amenities = Paragraph::new(vec![
            Line::styled("Amenities", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(format!(
                "Garage: {}",
                if property.is_garage { "Yes" } else { "No" }
            )),
        ]);

        let description = Paragraph::new(property.description()).wrap(Wrap { trim: true });
        let description_height = description.line_count(width) as u16;

        let button = Paragraph::new(Line::styled(
            "[ Contact Agent (c) ]",
            Style::default()
                .fg(Color::White)
                .bg(PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);

        // Rows, top to bottom, with one-line spacers between sections
        let heights = [1, 1, image_height, 1, 2, 1, 2, 1, 2, 1, 1, description_height, 1, 1];
        let content_height: u16 = heights.iter().sum();
        let rows = Layout::vertical(heights.map(Constraint::Length))
            .split(Rect::new(0, 0, width, content_height));

        let mut scroll_view = ScrollView::new(Size::new(width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(header, rows[0]);
        scroll_view.render_widget(image.paragraph(image_height), rows[2]);
        scroll_view.render_widget(summary, rows[4]);

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(rows[6]);
        for (column, (label, value)) in columns.iter().zip(stats) {
            let stat = Paragraph::new(vec![
                Line::styled(label, Style::default().fg(Color::Gray)),
                Line::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            ]);
            scroll_view.render_widget(stat, *column);
        }

        scroll_view.render_widget(amenities, rows[8]);
        scroll_view.render_widget(
            Line::styled("Description", Style::default().add_modifier(Modifier::BOLD)),
            rows[10],
        );
        scroll_view.render_widget(description, rows[11]);
        scroll_view.render_widget(button, rows[13]);

        self.state.content_height = content_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl Component for DetailScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let ctx = self.ctx;
        match ctx.route.property().and_then(|r| ctx.catalog.resolve(r)) {
            Some(property) => self.render_property(frame, area, property),
            None => self.render_not_found(frame, area),
        }
    }
}
