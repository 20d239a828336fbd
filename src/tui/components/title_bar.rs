//! # TitleBar Component
//!
//! Top line of the screen: app name, the current route path, and the status
//! message set by the last action.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Estate | property_detail/2 | Added Modern Villa to favorites"`
//! 2. **Default**: `"Estate | home"`
//!
//! The route path is always shown so the back-stack position is visible even
//! on screens without a tab highlighted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::components::PRIMARY;

/// Top status bar component.
///
/// # Props
///
/// - `route_path`: `Route::path()` of the top back-stack entry
/// - `status_message`: from `App::status_message`
pub struct TitleBar {
    pub route_path: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(route_path: String, status_message: String) -> Self {
        Self {
            route_path,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Estate",
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {}", self.route_path)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
