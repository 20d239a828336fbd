//! # Edit Profile Screen
//!
//! Four text fields prefilled from the profile plus Save / Cancel. The edits
//! live only in this screen's state; both buttons leave the screen and
//! nothing is written back.
//!
//! Tab / ↓ and Shift+Tab / ↑ move focus; Enter in a field moves to the next.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::profile::UserProfile;
use crate::tui::component::{Component, EventHandler, EventResult};
use crate::tui::components::text_field::FIELD_HEIGHT;
use crate::tui::components::{PRIMARY, TextField};
use crate::tui::event::TuiEvent;

const FIELD_COUNT: usize = 4;
const SAVE: usize = FIELD_COUNT;
const CANCEL: usize = FIELD_COUNT + 1;
const FOCUS_SLOTS: usize = FIELD_COUNT + 2;

pub struct EditProfileState {
    /// Full Name, Email, Phone Number, Bio
    pub fields: [TextField; FIELD_COUNT],
    pub focus: usize,
}

impl EditProfileState {
    pub fn new(profile: &UserProfile) -> Self {
        let mut state = Self {
            fields: [
                TextField::with_text("Full Name", &profile.name),
                TextField::with_text("Email", &profile.email),
                TextField::with_text("Phone Number", &profile.phone),
                TextField::with_text("Bio", &profile.bio),
            ],
            focus: 0,
        };
        state.sync_focus();
        state
    }

    fn sync_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = i == self.focus;
        }
    }

    fn move_focus(&mut self, forward: bool) {
        self.focus = if forward {
            (self.focus + 1) % FOCUS_SLOTS
        } else {
            (self.focus + FOCUS_SLOTS - 1) % FOCUS_SLOTS
        };
        self.sync_focus();
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> EventResult {
        match event {
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.move_focus(true);
                EventResult::Consumed
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.move_focus(false);
                EventResult::Consumed
            }
            TuiEvent::Submit if self.focus == SAVE => EventResult::Dispatch(Action::SaveProfile),
            TuiEvent::Submit if self.focus == CANCEL => EventResult::Dispatch(Action::Back),
            TuiEvent::Submit => {
                self.move_focus(true);
                EventResult::Consumed
            }
            _ => match self.fields.get_mut(self.focus) {
                Some(field) => match field.handle_event(event) {
                    Some(_) => EventResult::Consumed,
                    None => EventResult::Ignored,
                },
                None => EventResult::Ignored,
            },
        }
    }
}

pub struct EditProfileScreen<'a> {
    state: &'a mut EditProfileState,
}

impl<'a> EditProfileScreen<'a> {
    pub fn new(state: &'a mut EditProfileState) -> Self {
        Self { state }
    }

    fn button(label: &str, focused: bool) -> Paragraph<'_> {
        let style = if focused {
            Style::default()
                .fg(Color::White)
                .bg(PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(PRIMARY)
        };
        Paragraph::new(Line::styled(format!("[ {label} ]"), style)).alignment(Alignment::Center)
    }
}

impl Component for EditProfileScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend([Constraint::Length(FIELD_HEIGHT); FIELD_COUNT]);
        constraints.extend([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]);
        let rows = Layout::vertical(constraints).split(area);

        frame.render_widget(
            Line::styled("Edit Profile", Style::default().add_modifier(Modifier::BOLD)),
            rows[0],
        );
        for (i, field) in self.state.fields.iter_mut().enumerate() {
            field.render(frame, rows[i + 1]);
        }

        let [save, cancel] =
            Layout::horizontal([Constraint::Ratio(1, 2); 2]).areas(rows[FIELD_COUNT + 2]);
        frame.render_widget(Self::button("Save Changes", self.state.focus == SAVE), save);
        frame.render_widget(Self::button("Cancel", self.state.focus == CANCEL), cancel);
    }
}
