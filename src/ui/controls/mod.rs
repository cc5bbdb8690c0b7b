//! Presentational form controls.
//!
//! Each control renders a value and translates key steps or pointer presses
//! into a change. Controls only ever emit members of the option list they were
//! given; the panel owns the state.

mod button;
mod radio_group;
mod select;

pub use button::{ArrowButton, Button};
pub use radio_group::RadioGroup;
pub use select::Select;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::params::StyleOption;

/// Option `delta` places away from `selected`, wrapping at both ends.
///
/// An unknown `selected` starts from the first option.
#[must_use]
pub(crate) fn step_option(
	options: &'static [StyleOption],
	selected: StyleOption,
	delta: isize,
) -> Option<StyleOption> {
	if options.is_empty() {
		return None;
	}
	let len = options.len() as isize;
	let current = options
		.iter()
		.position(|option| *option == selected)
		.map_or(0, |index| index as isize);
	let next = (current + delta).rem_euclid(len) as usize;
	Some(options[next])
}

/// A horizontal rule between form groups.
pub struct Separator {
	pub style: Style,
}

impl Widget for Separator {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.height == 0 {
			return;
		}
		let line = "─".repeat(area.width as usize);
		buf.set_string(area.x, area.y, line, self.style);
	}
}
