use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::step_option;
use crate::page::PointerPress;
use crate::params::StyleOption;
use crate::ui::Theme;

const PREVIOUS: &str = "‹ ";
const NEXT: &str = " ›";

/// Single-choice picker rendered as a title row and a `‹ value ›` row.
///
/// Pressing the left arrow selects the previous option; pressing anywhere
/// else on the value row selects the next one.
#[derive(Debug, Clone, Copy)]
pub struct Select<'a> {
	pub title: &'a str,
	pub options: &'static [StyleOption],
	pub selected: StyleOption,
	pub focused: bool,
	pub theme: &'a Theme,
}

impl Select<'_> {
	#[must_use]
	pub fn step(&self, delta: isize) -> Option<StyleOption> {
		step_option(self.options, self.selected, delta)
	}

	/// Translate a press inside `area` into a new selection.
	#[must_use]
	pub fn press(&self, area: Rect, press: PointerPress) -> Option<StyleOption> {
		let value_row = value_row(area)?;
		if !press.within(value_row) {
			return None;
		}
		let arrow_width = PREVIOUS.chars().count() as u16;
		if press.column < value_row.x.saturating_add(arrow_width) {
			self.step(-1)
		} else {
			self.step(1)
		}
	}
}

fn value_row(area: Rect) -> Option<Rect> {
	(area.height >= 2).then(|| Rect::new(area.x, area.y + 1, area.width, 1))
}

impl Widget for Select<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.height == 0 {
			return;
		}
		Line::styled(self.title, self.theme.label_style(self.focused)).render(
			Rect::new(area.x, area.y, area.width, 1),
			buf,
		);
		if let Some(row) = value_row(area) {
			Line::from(vec![
				Span::styled(PREVIOUS, self.theme.muted),
				Span::styled(self.selected.label, self.theme.value),
				Span::styled(NEXT, self.theme.muted),
			])
			.render(row, buf);
		}
	}
}
