//! # Contact Agent Screen
//!
//! Agent card for the routed listing and a message box. Enter sends: the
//! shell acknowledges through the status line and the box is cleared.
//! The message box always holds focus, so `q` is typed rather than quitting.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::action::Action;
use crate::tui::component::{Component, EventHandler, EventResult};
use crate::tui::components::text_field::FIELD_HEIGHT;
use crate::tui::components::{FieldEvent, PRIMARY, ScreenContext, TextField};
use crate::tui::event::TuiEvent;

pub struct ContactAgentState {
    pub message: TextField,
}

impl Default for ContactAgentState {
    fn default() -> Self {
        let mut message = TextField::new("Message", "Write your message to the agent...");
        message.focused = true;
        Self { message }
    }
}

impl ContactAgentState {
    pub fn handle_event(&mut self, event: &TuiEvent, ctx: &ScreenContext) -> EventResult {
        match self.message.handle_event(event) {
            Some(FieldEvent::Submit(message)) => {
                let Some(property) = ctx.route.property() else {
                    return EventResult::Consumed;
                };
                if !message.trim().is_empty() {
                    self.message.clear();
                }
                EventResult::Dispatch(Action::SendAgentMessage {
                    agent: ctx.catalog.agent_for(property).name,
                    message,
                })
            }
            Some(FieldEvent::Changed) => EventResult::Consumed,
            None => EventResult::Ignored,
        }
    }
}

pub struct ContactAgentScreen<'a> {
    state: &'a mut ContactAgentState,
    ctx: &'a ScreenContext<'a>,
}

impl<'a> ContactAgentScreen<'a> {
    pub fn new(state: &'a mut ContactAgentState, ctx: &'a ScreenContext<'a>) -> Self {
        Self { state, ctx }
    }
}

impl Component for ContactAgentScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title, card, about, field, hint, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(7),
            Constraint::Length(2),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Line::styled("Contact Agent", Style::default().add_modifier(Modifier::BOLD)),
            title,
        );

        let Some(property) = self.ctx.route.property() else {
            return;
        };
        let agent = self.ctx.catalog.agent_for(property);
        let label = Style::default().fg(Color::DarkGray);
        let card_text = Paragraph::new(vec![
            Line::styled(
                agent.name.as_str(),
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Line::from(vec![Span::styled("Email  ", label), Span::raw(agent.email.as_str())]),
            Line::from(vec![Span::styled("Phone  ", label), Span::raw(agent.phone.as_str())]),
            Line::styled(agent.bio.as_str(), Style::default().fg(Color::Gray)),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title(" Agent "),
        );
        frame.render_widget(card_text, card);

        if let Some(listing) = self.ctx.catalog.resolve(property) {
            frame.render_widget(
                Line::from(vec![
                    Span::styled("About: ", label),
                    Span::raw(listing.title.as_str()),
                ]),
                about,
            );
        }

        self.state.message.render(frame, field);
        frame.render_widget(
            Line::styled("Enter send · Esc back", Style::default().fg(Color::DarkGray)),
            hint,
        );
    }
}
