//! # Profile Screen
//!
//! Avatar, name and email, an option list, and a "My Favorites" section fed
//! by the same store snapshot as the Favorites tab. One cursor walks the
//! options first, then the favorites.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::action::Action;
use crate::core::route::Route;
use crate::tui::component::{Component, EventResult};
use crate::tui::components::{FAVORITE, HEART_FILLED, PRIMARY, ScreenContext, step_selection};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileOption {
    EditProfile,
    Settings,
    Favorites,
    Help,
    Logout,
}

impl ProfileOption {
    const ALL: [ProfileOption; 5] = [
        ProfileOption::EditProfile,
        ProfileOption::Settings,
        ProfileOption::Favorites,
        ProfileOption::Help,
        ProfileOption::Logout,
    ];

    fn label(self) -> &'static str {
        match self {
            ProfileOption::EditProfile => "Edit Profile",
            ProfileOption::Settings => "Settings",
            ProfileOption::Favorites => "Favorites",
            ProfileOption::Help => "Help & Support",
            ProfileOption::Logout => "Logout",
        }
    }

    fn action(self) -> Action {
        match self {
            ProfileOption::EditProfile => Action::Navigate(Route::EditProfile),
            ProfileOption::Settings => Action::Navigate(Route::Settings),
            ProfileOption::Favorites => Action::Navigate(Route::Favorites),
            ProfileOption::Help => Action::Unavailable("Help & Support"),
            ProfileOption::Logout => Action::Unavailable("Logout"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ProfileState {
    pub selected: usize,
    list_state: ListState,
}

impl ProfileState {
    pub fn handle_event(&mut self, event: &TuiEvent, ctx: &ScreenContext) -> EventResult {
        let len = ProfileOption::ALL.len() + ctx.favorites.len();
        match event {
            TuiEvent::CursorUp => {
                self.selected = step_selection(self.selected, -1, len);
                EventResult::Consumed
            }
            TuiEvent::CursorDown => {
                self.selected = step_selection(self.selected, 1, len);
                EventResult::Consumed
            }
            TuiEvent::Submit => {
                if let Some(option) = ProfileOption::ALL.get(self.selected) {
                    return EventResult::Dispatch(option.action());
                }
                match ctx.favorites.get(self.selected - ProfileOption::ALL.len()) {
                    Some(p) => EventResult::Dispatch(Action::Navigate(Route::property_detail(p.id))),
                    None => EventResult::Consumed,
                }
            }
            _ => EventResult::Ignored,
        }
    }
}

pub struct ProfileScreen<'a> {
    state: &'a mut ProfileState,
    ctx: &'a ScreenContext<'a>,
}

impl<'a> ProfileScreen<'a> {
    pub fn new(state: &'a mut ProfileState, ctx: &'a ScreenContext<'a>) -> Self {
        Self { state, ctx }
    }
}

impl Component for ProfileScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let favorites = self.ctx.favorites;
        // The favorites list may have shrunk since the last event
        let len = ProfileOption::ALL.len() + favorites.len();
        self.state.selected = self.state.selected.min(len - 1);

        let [identity, options_area] =
            Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

        let profile = self.ctx.profile;
        let header = Paragraph::new(vec![
            Line::styled("(  ☺  )", Style::default().fg(PRIMARY)),
            Line::raw(""),
            Line::styled(
                profile.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(profile.email.as_str(), Style::default().fg(Color::Gray)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, identity);

        let mut items: Vec<ListItem> = ProfileOption::ALL
            .iter()
            .map(|option| ListItem::new(format!("  {}  ›", option.label())))
            .collect();
        let mut selectable_rows: Vec<usize> = (0..items.len()).collect();

        if !favorites.is_empty() {
            items.push(ListItem::new(""));
            items.push(ListItem::new(Line::styled(
                "My Favorites",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for property in favorites {
                selectable_rows.push(items.len());
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(format!("  {HEART_FILLED} "), Style::default().fg(FAVORITE)),
                    Span::raw(property.title.as_str()),
                    Span::styled(
                        format!("  {}", property.price_label()),
                        Style::default().fg(PRIMARY),
                    ),
                ])));
            }
        }

        self.state
            .list_state
            .select(selectable_rows.get(self.state.selected).copied());
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, list_area(options_area), &mut self.state.list_state);
    }
}

/// Options column, inset from the edges.
fn list_area(area: Rect) -> Rect {
    let [_, center, _] = Layout::horizontal([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);
    center
}
