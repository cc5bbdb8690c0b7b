use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::ui::Theme;

/// The panel's open/close trigger: a small framed arrow.
#[derive(Debug, Clone, Copy)]
pub struct ArrowButton<'a> {
	pub open: bool,
	pub theme: &'a Theme,
}

impl Widget for ArrowButton<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let arrow = if self.open { "◀" } else { "▶" };
		Paragraph::new(arrow)
			.alignment(Alignment::Center)
			.block(
				Block::bordered()
					.border_type(BorderType::Rounded)
					.border_style(self.theme.border),
			)
			.render(area, buf);
	}
}

/// A single-row `[ title ]` button.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
	pub title: &'a str,
	pub style: Style,
}

impl Button<'_> {
	/// Columns the button occupies when rendered.
	#[must_use]
	pub fn width(title: &str) -> u16 {
		title.chars().count() as u16 + 4
	}
}

impl Widget for Button<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		Line::styled(format!("[ {} ]", self.title), self.style).render(area, buf);
	}
}
