use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use super::step_option;
use crate::page::PointerPress;
use crate::params::StyleOption;
use crate::ui::Theme;

const CHECKED: &str = "(•) ";
const UNCHECKED: &str = "( ) ";
const GAP: u16 = 2;

/// Single-choice group with every option visible on one row.
#[derive(Debug, Clone, Copy)]
pub struct RadioGroup<'a> {
	pub title: &'a str,
	pub options: &'static [StyleOption],
	pub selected: StyleOption,
	pub focused: bool,
	pub theme: &'a Theme,
}

impl RadioGroup<'_> {
	#[must_use]
	pub fn step(&self, delta: isize) -> Option<StyleOption> {
		step_option(self.options, self.selected, delta)
	}

	/// Translate a press inside `area` into the option under the pointer.
	#[must_use]
	pub fn press(&self, area: Rect, press: PointerPress) -> Option<StyleOption> {
		if area.height < 2 || press.row != area.y + 1 {
			return None;
		}
		item_spans(self.options, area.x)
			.find(|(_, start, width)| press.column >= *start && press.column < start + width)
			.map(|(option, _, _)| *option)
	}
}

/// Yield each option with its starting column and rendered width.
fn item_spans(
	options: &'static [StyleOption],
	origin: u16,
) -> impl Iterator<Item = (&'static StyleOption, u16, u16)> {
	let mut column = origin;
	options.iter().map(move |option| {
		let width = (CHECKED.width() + option.label.width()) as u16;
		let start = column;
		column = column.saturating_add(width + GAP);
		(option, start, width)
	})
}

impl Widget for RadioGroup<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.height == 0 {
			return;
		}
		Line::styled(self.title, self.theme.label_style(self.focused)).render(
			Rect::new(area.x, area.y, area.width, 1),
			buf,
		);
		if area.height < 2 {
			return;
		}

		let mut spans = Vec::with_capacity(self.options.len() * 2);
		for (index, option) in self.options.iter().enumerate() {
			if index > 0 {
				spans.push(Span::raw(" ".repeat(GAP as usize)));
			}
			let (marker, style) = if *option == self.selected {
				(CHECKED, self.theme.value)
			} else {
				(UNCHECKED, self.theme.muted)
			};
			spans.push(Span::styled(format!("{marker}{}", option.label), style));
		}
		Line::from(spans).render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
	}
}
