//! # Notifications Screen
//!
//! The static feed with an unread badge. Opening an entry marks it read in
//! this screen's copy only; the feed itself is never written.

use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::notifications::{Notification, NotificationKind};
use crate::tui::component::{Component, EventResult};
use crate::tui::components::{PRIMARY, ScreenContext, step_selection};
use crate::tui::event::TuiEvent;

pub const EMPTY_NOTIFICATIONS: &str = "No notifications yet";
const INDENT: &str = "   ";

fn kind_marker(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Property => ("⌂", PRIMARY),
        NotificationKind::Price => ("$", Color::Green),
        NotificationKind::Appointment => ("◷", Color::Yellow),
        NotificationKind::Welcome => ("★", Color::Magenta),
        NotificationKind::Market => ("↗", Color::Cyan),
    }
}

#[derive(Debug, Default)]
pub struct NotificationsState {
    pub selected: usize,
    /// Ids opened on this screen
    read_here: HashSet<u32>,
    list_state: ListState,
}

impl NotificationsState {
    fn is_read(&self, notification: &Notification) -> bool {
        notification.is_read || self.read_here.contains(&notification.id)
    }

    pub fn unread(&self, notifications: &[Notification]) -> usize {
        notifications.iter().filter(|n| !self.is_read(n)).count()
    }

    pub fn handle_event(&mut self, event: &TuiEvent, ctx: &ScreenContext) -> EventResult {
        let len = ctx.notifications.len();
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
                if let Some(n) = ctx.notifications.get(self.selected) {
                    log::debug!("Opened notification {}", n.id);
                    self.read_here.insert(n.id);
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

pub struct NotificationsScreen<'a> {
    state: &'a mut NotificationsState,
    ctx: &'a ScreenContext<'a>,
}

impl<'a> NotificationsScreen<'a> {
    pub fn new(state: &'a mut NotificationsState, ctx: &'a ScreenContext<'a>) -> Self {
        Self { state, ctx }
    }

    fn item(&self, notification: &'a Notification, width: usize) -> ListItem<'a> {
        let (icon, color) = kind_marker(notification.kind);
        let unread = !self.state.is_read(notification);
        let title_style = if unread {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let dot = if unread { " •" } else { "" };

        let mut lines = vec![Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(color)),
            Span::styled(notification.title.as_str(), title_style),
            Span::styled(dot, Style::default().fg(PRIMARY)),
        ])];
        // Message wraps under the title, indented past the icon
        let wrap_width = width.saturating_sub(INDENT.len()).max(1);
        lines.extend(
            textwrap::wrap(&notification.message, wrap_width)
                .into_iter()
                .map(|line| Line::styled(format!("{INDENT}{line}"), Style::default().fg(Color::Gray))),
        );
        lines.push(Line::styled(
            format!("{INDENT}{}", notification.timestamp),
            Style::default().fg(Color::DarkGray),
        ));
        ListItem::new(lines)
    }
}

impl Component for NotificationsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let notifications = self.ctx.notifications;
        let [header, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let mut title = vec![Span::styled(
            "Notifications",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        let unread = self.state.unread(notifications);
        if unread > 0 {
            title.push(Span::styled(
                format!(" ({unread})"),
                Style::default().fg(Color::White).bg(PRIMARY),
            ));
        }
        frame.render_widget(Line::from(title), header);

        if notifications.is_empty() {
            frame.render_widget(
                Paragraph::new(EMPTY_NOTIFICATIONS).style(Style::default().fg(Color::DarkGray)),
                body,
            );
            return;
        }

        self.state.selected = self.state.selected.min(notifications.len() - 1);
        let width = body.width as usize;
        let items: Vec<ListItem> = notifications.iter().map(|n| self.item(n, width)).collect();
        self.state.list_state.select(Some(self.state.selected));
        let list = List::new(items).highlight_style(Style::default().bg(Color::Rgb(0x1E, 0x29, 0x3B)));
        frame.render_stateful_widget(list, body, &mut self.state.list_state);
    }
}
