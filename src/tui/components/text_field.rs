//! # TextField Component
//!
//! Single-line text input used by the search bar, the contact form and the
//! edit-profile form.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste (newlines flattened to spaces)
//! - Handle editing (backspace, delete, cursor movement, Home/End)
//! - Scroll horizontally so the cursor stays visible
//! - Place the terminal cursor while focused
//!
//! The buffer and cursor are internal state; `label`, `placeholder` and
//! `focused` are props set by the owning screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::PRIMARY;
use crate::tui::event::TuiEvent;

/// Top + bottom borders
pub const FIELD_HEIGHT: u16 = 3;

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Enter pressed; carries the current text. The field keeps its content.
    Submit(String),
    /// Buffer or cursor changed
    Changed,
}

pub struct TextField {
    /// Border title (Prop)
    pub label: &'static str,
    /// Shown dimmed while the buffer is empty (Prop)
    pub placeholder: &'static str,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
    buffer: String,
    /// Byte offset into `buffer`, always on a char boundary
    cursor: usize,
    /// First visible column, in display cells
    scroll: usize,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            focused: false,
            buffer: String::new(),
            cursor: 0,
            scroll: 0,
        }
    }

    /// Prefilled field with the cursor at the end.
    pub fn with_text(label: &'static str, text: &str) -> Self {
        let mut field = Self::new(label, "");
        field.set_text(text);
        field
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer = flatten(text);
        self.cursor = self.buffer.len();
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Display width of the buffer up to the cursor.
    fn cursor_column(&self) -> usize {
        display_width(&self.buffer[..self.cursor])
    }

    /// Adjust the horizontal scroll so the cursor fits in `width` cells.
    fn update_scroll(&mut self, width: usize) {
        if width == 0 {
            return;
        }
        let column = self.cursor_column();
        if column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll + width {
            self.scroll = column + 1 - width;
        }
    }

    /// The slice of the buffer that starts at the scroll column.
    fn visible_text(&self, width: usize) -> String {
        let mut skipped = 0;
        let mut taken = 0;
        let mut out = String::new();
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0);
            if skipped < self.scroll {
                skipped += w;
                continue;
            }
            if taken + w > width {
                break;
            }
            taken += w;
            out.push(c);
        }
        out
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        self.update_scroll(inner_width);

        let border_color = if self.focused { PRIMARY } else { Color::DarkGray };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(self.label);

        let content = if self.buffer.is_empty() {
            Span::styled(self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.visible_text(inner_width))
        };
        frame.render_widget(Paragraph::new(content).block(block), area);

        if self.focused && area.width > 2 && area.height > 2 {
            let offset = self.cursor_column().saturating_sub(self.scroll) as u16;
            let x = (area.x + 1 + offset).min(area.right().saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                let text = flatten(text);
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                FieldEvent::Changed
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                FieldEvent::Changed
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                FieldEvent::Changed
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                FieldEvent::Changed
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldEvent::Changed
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                FieldEvent::Changed
            }),
            TuiEvent::Submit => Some(FieldEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

fn flatten(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
