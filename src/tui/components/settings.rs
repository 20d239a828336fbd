//! # Settings Screen
//!
//! Sectioned list of navigation rows and switches. Switch positions are
//! screen-local and reset when the screen leaves the back-stack.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use crate::core::action::Action;
use crate::core::route::Route;
use crate::tui::component::{Component, EventResult};
use crate::tui::components::{PRIMARY, step_selection};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Switch {
    PushNotifications,
    DarkMode,
    LocationServices,
    MarketingEmails,
}

#[derive(Debug, Clone)]
enum RowKind {
    /// Opens another screen
    Link(Option<Route>),
    Toggle(Switch),
    /// Destructive account action
    Danger,
}

struct Row {
    title: &'static str,
    subtitle: &'static str,
    kind: RowKind,
}

const fn link(title: &'static str, subtitle: &'static str) -> Row {
    Row {
        title,
        subtitle,
        kind: RowKind::Link(None),
    }
}

const fn toggle(title: &'static str, subtitle: &'static str, switch: Switch) -> Row {
    Row {
        title,
        subtitle,
        kind: RowKind::Toggle(switch),
    }
}

const fn danger(title: &'static str, subtitle: &'static str) -> Row {
    Row {
        title,
        subtitle,
        kind: RowKind::Danger,
    }
}

const SECTIONS: &[(&str, &[Row])] = &[
    (
        "Account Settings",
        &[
            Row {
                title: "Profile Information",
                subtitle: "Update your personal details",
                kind: RowKind::Link(Some(Route::EditProfile)),
            },
            link("Change Password", "Update your account password"),
            link("Email Preferences", "Manage email notifications"),
        ],
    ),
    (
        "App Preferences",
        &[
            toggle(
                "Push Notifications",
                "Receive notifications about new properties",
                Switch::PushNotifications,
            ),
            toggle("Dark Mode", "Switch to dark theme", Switch::DarkMode),
            toggle(
                "Location Services",
                "Allow access to location for better recommendations",
                Switch::LocationServices,
            ),
            link("Language", "English"),
        ],
    ),
    (
        "Privacy & Security",
        &[
            link("Privacy Policy", "Read our privacy policy"),
            link("Data & Privacy", "Manage your data and privacy settings"),
            toggle(
                "Marketing Emails",
                "Receive promotional emails",
                Switch::MarketingEmails,
            ),
        ],
    ),
    (
        "Support",
        &[
            link("Help Center", "Get help and support"),
            link("Send Feedback", "Share your thoughts with us"),
            link("About", "App version and information"),
        ],
    ),
    (
        "Account Actions",
        &[
            danger("Sign Out", "Sign out of your account"),
            danger("Delete Account", "Permanently delete your account"),
        ],
    ),
];

fn rows() -> impl Iterator<Item = &'static Row> {
    SECTIONS.iter().flat_map(|(_, rows)| rows.iter())
}

fn row_count() -> usize {
    rows().count()
}

#[derive(Debug)]
pub struct SettingsState {
    pub selected: usize,
    push_notifications: bool,
    dark_mode: bool,
    location_services: bool,
    marketing_emails: bool,
    list_state: ListState,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            selected: 0,
            push_notifications: true,
            dark_mode: false,
            location_services: true,
            marketing_emails: false,
            list_state: ListState::default(),
        }
    }
}

impl SettingsState {
    fn switch_mut(&mut self, switch: Switch) -> &mut bool {
        match switch {
            Switch::PushNotifications => &mut self.push_notifications,
            Switch::DarkMode => &mut self.dark_mode,
            Switch::LocationServices => &mut self.location_services,
            Switch::MarketingEmails => &mut self.marketing_emails,
        }
    }

    fn switch(&self, switch: Switch) -> bool {
        match switch {
            Switch::PushNotifications => self.push_notifications,
            Switch::DarkMode => self.dark_mode,
            Switch::LocationServices => self.location_services,
            Switch::MarketingEmails => self.marketing_emails,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> EventResult {
        match event {
            TuiEvent::CursorUp => {
                self.selected = step_selection(self.selected, -1, row_count());
                EventResult::Consumed
            }
            TuiEvent::CursorDown => {
                self.selected = step_selection(self.selected, 1, row_count());
                EventResult::Consumed
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                let Some(row) = rows().nth(self.selected) else {
                    return EventResult::Consumed;
                };
                match row.kind {
                    RowKind::Toggle(switch) => {
                        let value = self.switch_mut(switch);
                        *value = !*value;
                        log::debug!("Setting {:?} -> {}", switch, *value);
                        EventResult::Consumed
                    }
                    RowKind::Link(Some(ref route)) => {
                        EventResult::Dispatch(Action::Navigate(route.clone()))
                    }
                    RowKind::Link(None) | RowKind::Danger => {
                        EventResult::Dispatch(Action::Unavailable(row.title))
                    }
                }
            }
            _ => EventResult::Ignored,
        }
    }
}

pub struct SettingsScreen<'a> {
    state: &'a mut SettingsState,
}

impl<'a> SettingsScreen<'a> {
    pub fn new(state: &'a mut SettingsState) -> Self {
        Self { state }
    }
}

impl Component for SettingsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut items = vec![ListItem::new(Line::styled(
            "Settings",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        let mut selected_row = None;
        let mut index = 0;

        for (section, rows) in SECTIONS {
            items.push(ListItem::new(""));
            items.push(ListItem::new(Line::styled(
                *section,
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            )));
            for row in rows.iter() {
                if index == self.state.selected {
                    selected_row = Some(items.len());
                }
                index += 1;

                let title_style = match row.kind {
                    RowKind::Danger => Style::default().fg(Color::Red),
                    _ => Style::default(),
                };
                let marker = match row.kind {
                    RowKind::Toggle(switch) if self.state.switch(switch) => "[on]  ",
                    RowKind::Toggle(_) => "[off] ",
                    _ => "      ",
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(PRIMARY)),
                    Span::styled(row.title, title_style),
                    Span::styled(
                        format!("  {}", row.subtitle),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])));
            }
        }

        self.state.list_state.select(selected_row);
        let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_text;

    fn select(state: &mut SettingsState, title: &str) {
        state.selected = rows().position(|r| r.title == title).unwrap();
    }

    #[test]
    fn test_initial_switches() {
        let state = SettingsState::default();
        assert!(state.switch(Switch::PushNotifications));
        assert!(!state.switch(Switch::DarkMode));
        assert!(state.switch(Switch::LocationServices));
        assert!(!state.switch(Switch::MarketingEmails));
    }

    #[test]
    fn test_toggle_switch_is_local() {
        let mut state = SettingsState::default();
        select(&mut state, "Dark Mode");
        assert_eq!(state.handle_event(&TuiEvent::Submit), EventResult::Consumed);
        assert!(state.switch(Switch::DarkMode));
        state.handle_event(&TuiEvent::InputChar(' '));
        assert!(!state.switch(Switch::DarkMode));
    }

    #[test]
    fn test_profile_information_opens_edit_profile() {
        let mut state = SettingsState::default();
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            EventResult::Dispatch(Action::Navigate(Route::EditProfile))
        );
    }

    #[test]
    fn test_other_rows_are_unavailable() {
        let mut state = SettingsState::default();
        select(&mut state, "Sign Out");
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            EventResult::Dispatch(Action::Unavailable("Sign Out"))
        );
    }

    #[test]
    fn test_selection_clamped() {
        let mut state = SettingsState::default();
        for _ in 0..100 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, row_count() - 1);
        assert_eq!(state.handle_event(&TuiEvent::Escape), EventResult::Ignored);
    }

    #[test]
    fn test_render_sections() {
        let mut state = SettingsState::default();
        let text = render_to_text(80, 40, |f| SettingsScreen::new(&mut state).render(f, f.area()));
        for (section, _) in SECTIONS {
            assert!(text.contains(section), "missing section {section}");
        }
        assert!(text.contains("[on]  Push Notifications"));
        assert!(text.contains("[off] Dark Mode"));
    }
}
