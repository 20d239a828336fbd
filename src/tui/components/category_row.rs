use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::catalog::Category;
use crate::tui::component::Component;
use crate::tui::components::PRIMARY;

/// One line of category chips; the selected chip is filled.
pub struct CategoryRow {
    pub selected: Category,
}

impl Component for CategoryRow {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(Category::ALL.len() * 2);
        for category in Category::ALL {
            let style = if category == self.selected {
                Style::default()
                    .fg(Color::White)
                    .bg(PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", category.label()), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_selected_chip_is_filled() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                CategoryRow {
                    selected: Category::Villa,
                }
                .render(f, f.area())
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.starts_with(" House   Apartment   Villa "));

        let villa_col = text.find("Villa").unwrap() as u16;
        assert_eq!(buffer[(villa_col, 0)].bg, PRIMARY);
        assert_ne!(buffer[(0, 0)].bg, PRIMARY);
    }
}
