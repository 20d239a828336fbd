//! # Property Cards
//!
//! `PropertyCard` draws one listing as a bordered card. `CardList` stacks
//! cards vertically and scrolls so the selected card stays on screen; its
//! selection lives in `CardListState`, which each list screen owns.
//!
//! ```text
//! ╭───────────────────────────────────────╮
//! │ ♥ Modern Villa                $250000 │
//! │ @ 123 Maple St, California            │
//! │ 4 Beds · 3 Baths · 2400 sqft · Garage │
//! │                        View Detail  › │
//! ╰───────────────────────────────────────╯
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::property::Property;
use crate::tui::component::Component;
use crate::tui::components::{FAVORITE, HEART_EMPTY, HEART_FILLED, PRIMARY, truncate_str};

/// Four content rows plus borders
pub const CARD_HEIGHT: u16 = 6;

pub struct PropertyCard<'a> {
    pub property: &'a Property,
    pub is_favorite: bool,
    pub selected: bool,
}

impl Component for PropertyCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.selected {
            Style::default().fg(PRIMARY)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = inner.width as usize;
        let price = self.property.price_label();
        let heart = if self.is_favorite {
            Span::styled(HEART_FILLED, Style::default().fg(FAVORITE))
        } else {
            Span::styled(HEART_EMPTY, Style::default().fg(Color::Gray))
        };
        // heart + space + title + gap + price
        let title_width = width.saturating_sub(price.width() + 3);
        let title = truncate_str(&self.property.title, title_width);
        let gap = width.saturating_sub(title.width() + price.width() + 2);

        let mut stats = format!(
            "{} Beds · {} Baths · {}",
            self.property.beds,
            self.property.baths,
            self.property.area_label()
        );
        if self.property.is_garage {
            stats.push_str(" · Garage");
        }

        let mut lines = vec![
            Line::from(vec![
                heart,
                Span::raw(" "),
                Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" ".repeat(gap)),
                Span::styled(price, Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)),
            ]),
            Line::styled(
                truncate_str(&format!("@ {}", self.property.address), width),
                Style::default().fg(Color::Gray),
            ),
            Line::raw(truncate_str(&stats, width)),
        ];
        if self.selected {
            lines.push(
                Line::styled("View Detail  › ", Style::default().fg(PRIMARY)).right_aligned(),
            );
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Selection and scroll offset for a list of cards.
#[derive(Debug, Default, Clone)]
pub struct CardListState {
    pub selected: usize,
    offset: usize,
}

impl CardListState {
    pub fn select_next(&mut self, len: usize) {
        self.selected = super::step_selection(self.selected, 1, len);
    }

    pub fn select_prev(&mut self, len: usize) {
        self.selected = super::step_selection(self.selected, -1, len);
    }

    /// Keep the selection valid after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn selected<'p>(&self, items: &[&'p Property]) -> Option<&'p Property> {
        items.get(self.selected).copied()
    }

    /// First visible card such that the selection fits in `visible` slots.
    fn scroll_into_view(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }
}

/// Transient wrapper: renders `items` as cards into the area.
pub struct CardList<'a> {
    pub state: &'a mut CardListState,
    pub items: &'a [&'a Property],
    /// Decides the heart marker for each card
    pub is_favorite: &'a dyn Fn(&Property) -> bool,
}

impl Component for CardList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.items.len());
        let visible = (area.height / CARD_HEIGHT) as usize;
        self.state.scroll_into_view(visible);

        let slots = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible]).split(area);
        let shown = self.items.iter().copied().enumerate().skip(self.state.offset);
        for (slot, (index, property)) in slots.iter().zip(shown) {
            let mut card = PropertyCard {
                property,
                is_favorite: (self.is_favorite)(property),
                selected: index == self.state.selected,
            };
            card.render(frame, *slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_property;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_card_shows_listing_fields() {
        let property = sample_property(1);
        let backend = TestBackend::new(50, CARD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                PropertyCard {
                    property: &property,
                    is_favorite: true,
                    selected: true,
                }
                .render(f, f.area())
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Modern Villa"));
        assert!(text.contains("$250000"));
        assert!(text.contains("123 Maple St, California"));
        assert!(text.contains("4 Beds · 3 Baths · 2400 sqft · Garage"));
        assert!(text.contains(HEART_FILLED));
        assert!(text.contains("View Detail"));
    }

    #[test]
    fn test_unfavorited_card_has_empty_heart() {
        let property = sample_property(2);
        let backend = TestBackend::new(50, CARD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                PropertyCard {
                    property: &property,
                    is_favorite: false,
                    selected: false,
                }
                .render(f, f.area())
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(HEART_EMPTY));
        assert!(!text.contains(HEART_FILLED));
        assert!(!text.contains("Garage"));
        assert!(!text.contains("View Detail"));
    }

    #[test]
    fn test_card_list_scrolls_to_selection() {
        let properties: Vec<Property> = (1..=4).map(sample_property).collect();
        let items: Vec<&Property> = properties.iter().collect();
        let mut state = CardListState::default();
        for _ in 0..3 {
            state.select_next(items.len());
        }
        assert_eq!(state.selected, 3);

        // Room for two cards only
        let backend = TestBackend::new(50, CARD_HEIGHT * 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let never = |_: &Property| false;
        terminal
            .draw(|f| {
                CardList {
                    state: &mut state,
                    items: &items,
                    is_favorite: &never,
                }
                .render(f, f.area())
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Skyline Penthouse"));
        assert!(text.contains("Cosy House"));
        assert!(!text.contains("Modern Villa"));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = CardListState {
            selected: 3,
            offset: 0,
        };
        state.clamp(2);
        assert_eq!(state.selected, 1);
        state.clamp(0);
        assert_eq!(state.selected, 0);
    }
}
