use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::page::PointerPress;
use crate::params::{Dimension, StyleOption, StyleSelection};
use crate::ui::Theme;
use crate::ui::controls::{RadioGroup, Select};

/// The control presenting one dimension in the form.
pub(super) enum FieldControl<'a> {
	Select(Select<'a>),
	Radio(RadioGroup<'a>),
}

impl<'a> FieldControl<'a> {
	/// Font size is a radio group; every other dimension is a select.
	pub(super) fn for_dimension(
		dimension: Dimension,
		draft: &StyleSelection,
		focused: bool,
		theme: &'a Theme,
	) -> Self {
		let title = dimension.title();
		let options = dimension.options();
		let selected = draft.get(dimension);
		match dimension {
			Dimension::FontSize => Self::Radio(RadioGroup {
				title,
				options,
				selected,
				focused,
				theme,
			}),
			_ => Self::Select(Select {
				title,
				options,
				selected,
				focused,
				theme,
			}),
		}
	}

	pub(super) fn step(&self, delta: isize) -> Option<StyleOption> {
		match self {
			Self::Select(select) => select.step(delta),
			Self::Radio(group) => group.step(delta),
		}
	}

	pub(super) fn press(&self, area: Rect, press: PointerPress) -> Option<StyleOption> {
		match self {
			Self::Select(select) => select.press(area, press),
			Self::Radio(group) => group.press(area, press),
		}
	}
}

impl Widget for FieldControl<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		match self {
			Self::Select(select) => select.render(area, buf),
			Self::Radio(group) => group.render(area, buf),
		}
	}
}
