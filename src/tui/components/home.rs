//! # Home Screen
//!
//! Header, search bar, category chips and the "Nearby Properties" card list.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HomeState` lives in `TuiState`, keyed by the back-stack entry
//! - `HomeScreen` is created each frame with borrowed state
//!
//! ## Focus
//!
//! `/` moves focus into the search bar. While it is focused, keystrokes edit
//! the query (so `q` and `f` are text), and Esc, Enter or ↓ hand focus back
//! to the list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::catalog::Category;
use crate::core::notifications::unread_count;
use crate::core::property::Property;
use crate::core::route::Route;
use crate::tui::component::{Component, EventHandler, EventResult};
use crate::tui::components::text_field::FIELD_HEIGHT;
use crate::tui::components::{
    CardList, CardListState, CategoryRow, PRIMARY, ScreenContext, TextField,
};
use crate::tui::event::TuiEvent;

pub struct HomeState {
    pub search: TextField,
    pub category: Category,
    pub list: CardListState,
}

impl HomeState {
    pub fn new() -> Self {
        Self {
            search: TextField::new("Search", "Search properties (/)"),
            category: Category::default(),
            list: CardListState::default(),
        }
    }

    /// Listings matching the current query, in catalog order.
    fn visible<'c>(&self, ctx: &'c ScreenContext) -> Vec<&'c Property> {
        ctx.catalog.search(self.search.text())
    }

    pub fn handle_event(&mut self, event: &TuiEvent, ctx: &ScreenContext) -> EventResult {
        if self.search.focused {
            return match event {
                TuiEvent::Escape | TuiEvent::Submit | TuiEvent::CursorDown => {
                    self.search.focused = false;
                    EventResult::Consumed
                }
                _ => match self.search.handle_event(event) {
                    Some(_) => {
                        // New query, start from the top of the results
                        self.list.selected = 0;
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                },
            };
        }

        let visible = self.visible(ctx);
        match event {
            TuiEvent::InputChar('/') => {
                self.search.focused = true;
                EventResult::Consumed
            }
            TuiEvent::CursorUp => {
                self.list.select_prev(visible.len());
                EventResult::Consumed
            }
            TuiEvent::CursorDown => {
                self.list.select_next(visible.len());
                EventResult::Consumed
            }
            TuiEvent::CursorLeft => {
                self.category = self.category.prev();
                EventResult::Consumed
            }
            TuiEvent::CursorRight => {
                self.category = self.category.next();
                EventResult::Consumed
            }
            TuiEvent::InputChar('n') => EventResult::Dispatch(Action::Navigate(Route::Notifications)),
            TuiEvent::Submit => match self.list.selected(&visible) {
                Some(p) => EventResult::Dispatch(Action::Navigate(Route::property_detail(p.id))),
                None => EventResult::Consumed,
            },
            TuiEvent::InputChar('f') => match self.list.selected(&visible) {
                Some(p) => EventResult::Dispatch(Action::ToggleFavorite(p.clone())),
                None => EventResult::Consumed,
            },
            _ => EventResult::Ignored,
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct HomeScreen<'a> {
    state: &'a mut HomeState,
    ctx: &'a ScreenContext<'a>,
}

impl<'a> HomeScreen<'a> {
    pub fn new(state: &'a mut HomeState, ctx: &'a ScreenContext<'a>) -> Self {
        Self { state, ctx }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let [avatar_area, location_area, bell_area] = Layout::horizontal([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(18),
        ])
        .areas(area);

        let initials: String = self
            .ctx
            .profile
            .name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("({initials})"),
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ))),
            avatar_area,
        );

        let location = Paragraph::new(vec![
            Line::styled("Location", Style::default().fg(Color::Gray)),
            Line::styled(
                self.ctx.profile.location.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(location, location_area);

        let unread = unread_count(self.ctx.notifications);
        let bell = if unread > 0 {
            format!("Alerts ({unread}) n")
        } else {
            "Alerts n".to_string()
        };
        frame.render_widget(
            Paragraph::new(bell).alignment(Alignment::Right),
            bell_area,
        );
    }
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header, search, categories, heading, list] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_header(frame, header);
        self.state.search.render(frame, search);
        CategoryRow {
            selected: self.state.category,
        }
        .render(frame, categories);

        frame.render_widget(
            Line::styled(
                "Nearby Properties",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            heading,
        );

        let ctx = self.ctx;
        let visible = self.state.visible(ctx);
        if visible.is_empty() {
            let message = format!("No properties match \"{}\"", self.state.search.text().trim());
            frame.render_widget(
                Paragraph::new(message)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                list,
            );
            return;
        }

        let is_favorite = |p: &Property| ctx.is_favorite(p.id);
        CardList {
            state: &mut self.state.list,
            items: &visible,
            is_favorite: &is_favorite,
        }
        .render(frame, list);
    }
}
