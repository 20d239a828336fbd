//! # Favorites Screen
//!
//! Lists the store snapshot as cards. Every card here is favorited, so `f`
//! removes the selected listing and the list shrinks on the next frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::property::Property;
use crate::core::route::Route;
use crate::tui::component::{Component, EventResult};
use crate::tui::components::{CardList, CardListState, ScreenContext};
use crate::tui::event::TuiEvent;

pub const EMPTY_FAVORITES: &str = "Your favorite properties will appear here.";

#[derive(Debug, Default)]
pub struct FavoritesState {
    pub list: CardListState,
}

impl FavoritesState {
    pub fn handle_event(&mut self, event: &TuiEvent, ctx: &ScreenContext) -> EventResult {
        let items: Vec<&Property> = ctx.favorites.iter().collect();
        match event {
            TuiEvent::CursorUp => {
                self.list.select_prev(items.len());
                EventResult::Consumed
            }
            TuiEvent::CursorDown => {
                self.list.select_next(items.len());
                EventResult::Consumed
            }
            TuiEvent::Submit => match self.list.selected(&items) {
                Some(p) => EventResult::Dispatch(Action::Navigate(Route::property_detail(p.id))),
                None => EventResult::Consumed,
            },
            TuiEvent::InputChar('f') => match self.list.selected(&items) {
                Some(p) => EventResult::Dispatch(Action::ToggleFavorite(p.clone())),
                None => EventResult::Consumed,
            },
            _ => EventResult::Ignored,
        }
    }
}

pub struct FavoritesScreen<'a> {
    state: &'a mut FavoritesState,
    ctx: &'a ScreenContext<'a>,
}

impl<'a> FavoritesScreen<'a> {
    pub fn new(state: &'a mut FavoritesState, ctx: &'a ScreenContext<'a>) -> Self {
        Self { state, ctx }
    }
}

impl Component for FavoritesScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title, subtitle, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Line::styled("Favorites", Style::default().add_modifier(Modifier::BOLD)),
            title,
        );

        if self.ctx.favorites.is_empty() {
            frame.render_widget(
                Paragraph::new(EMPTY_FAVORITES)
                    .style(Style::default().fg(Color::Gray))
                    .alignment(Alignment::Center),
                list,
            );
            return;
        }

        frame.render_widget(
            Line::styled("Your Favorite Properties", Style::default().fg(Color::Gray)),
            subtitle,
        );
        let items: Vec<&Property> = self.ctx.favorites.iter().collect();
        CardList {
            state: &mut self.state.list,
            items: &items,
            is_favorite: &|_: &Property| true,
        }
        .render(frame, list);
    }
}
