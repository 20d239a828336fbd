use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::Action;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state (via `&mut State` fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// The `render` method takes `&mut self` so components can update
/// presentation state (scroll offsets, cursor positions) during rendering,
/// in line with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

/// What a screen did with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Not for this screen; the shell applies its global keys (Esc, q).
    Ignored,
    /// Handled locally (selection, text editing, switches).
    Consumed,
    /// Handled, and the app should apply this action.
    Dispatch(Action),
}
