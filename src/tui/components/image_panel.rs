//! # ImagePanel Component
//!
//! A listing's picture as a widget. A resolved asset is drawn centered inside
//! a rounded frame and clipped to the area; a miss draws the placeholder panel.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::assets::Asset;

pub const IMAGE_NOT_FOUND: &str = "Image not found";
/// Placeholder rows between the borders
const PLACEHOLDER_HEIGHT: u16 = 5;

pub struct ImagePanel {
    pub asset: Option<Asset>,
}

impl ImagePanel {
    pub fn new(asset: Option<Asset>) -> Self {
        Self { asset }
    }

    /// Rows needed to show the whole picture, borders included.
    pub fn height(&self) -> u16 {
        let content = self
            .asset
            .as_ref()
            .map(|a| a.height() as u16)
            .unwrap_or(PLACEHOLDER_HEIGHT);
        content.max(1) + 2
    }

    /// The framed picture for an area `area_height` rows tall.
    pub fn paragraph(&self, area_height: u16) -> Paragraph<'_> {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = match &self.asset {
            Some(asset) => {
                let lines: Vec<Line> = asset.lines().map(Line::raw).collect();
                Paragraph::new(lines).style(Style::default().fg(Color::Gray))
            }
            None => {
                // Vertically center the label in the placeholder
                let inner_height = area_height.saturating_sub(2) as usize;
                let mut lines = vec![Line::raw(""); inner_height.saturating_sub(1) / 2];
                lines.push(Line::raw(IMAGE_NOT_FOUND));
                Paragraph::new(lines).style(Style::default().fg(Color::DarkGray))
            }
        };
        paragraph.alignment(Alignment::Center).block(block)
    }
}
