use ratatui::layout::Rect;

use crate::page::PointerPress;
use crate::ui::controls::Button;

/// Width of the toggle button.
pub const TOGGLE_WIDTH: u16 = 5;
/// Height of the toggle button.
pub const TOGGLE_HEIGHT: u16 = 3;
/// Width of the form, borders included.
pub const FORM_WIDTH: u16 = 42;

pub(super) const RESET_TITLE: &str = "Reset";
pub(super) const APPLY_TITLE: &str = "Apply";

/// Screen regions of every interactive part of the panel.
///
/// Depends only on the frame area, so it is valid whether or not the form is
/// currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelLayout {
	pub toggle: Rect,
	pub form: Rect,
	pub heading: Rect,
	/// One region per dimension, in form order.
	pub controls: [Rect; 5],
	pub separator: Rect,
	pub reset: Rect,
	pub apply: Rect,
}

impl PanelLayout {
	#[must_use]
	pub fn compute(area: Rect) -> Self {
		let toggle = Rect::new(area.x, area.y, TOGGLE_WIDTH, TOGGLE_HEIGHT).intersection(area);
		let form = Rect::new(
			area.x,
			area.y.saturating_add(TOGGLE_HEIGHT),
			FORM_WIDTH,
			area.height.saturating_sub(TOGGLE_HEIGHT),
		)
		.intersection(area);

		let inner_x = form.x.saturating_add(2);
		let inner_width = form.width.saturating_sub(4);
		let mut y = form.y.saturating_add(1);
		let mut row = |height: u16, gap_after: u16| {
			let rect = Rect::new(inner_x, y, inner_width, height).intersection(form);
			y = y.saturating_add(height + gap_after);
			rect
		};

		let heading = row(1, 1);
		let font_family = row(2, 1);
		let font_size = row(2, 1);
		let font_color = row(2, 0);
		let separator = row(1, 0);
		let background_color = row(2, 1);
		let content_width = row(2, 1);
		let buttons = row(1, 0);

		let reset_width = Button::width(RESET_TITLE);
		let apply_width = Button::width(APPLY_TITLE);
		let reset = Rect::new(buttons.x, buttons.y, reset_width, buttons.height).intersection(buttons);
		let apply = Rect::new(
			buttons.right().saturating_sub(apply_width),
			buttons.y,
			apply_width,
			buttons.height,
		)
		.intersection(buttons);

		Self {
			toggle,
			form,
			heading,
			controls: [
				font_family,
				font_size,
				font_color,
				background_color,
				content_width,
			],
			separator,
			reset,
			apply,
		}
	}

	/// The region that counts as "inside the panel": toggle plus form.
	#[must_use]
	pub fn bounds(&self) -> PanelBounds {
		PanelBounds {
			toggle: self.toggle,
			form: self.form,
		}
	}
}

/// The containment region checked by the outside-press listener.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelBounds {
	pub toggle: Rect,
	pub form: Rect,
}

impl PanelBounds {
	#[must_use]
	pub fn contains(&self, press: PointerPress) -> bool {
		press.within(self.toggle) || press.within(self.form)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn regions_stack_inside_the_form() {
		let layout = PanelLayout::compute(Rect::new(0, 0, 120, 40));
		assert_eq!(layout.toggle, Rect::new(0, 0, 5, 3));
		assert_eq!(layout.form, Rect::new(0, 3, 42, 37));
		assert_eq!(layout.heading, Rect::new(2, 4, 38, 1));
		assert_eq!(layout.controls[0], Rect::new(2, 6, 38, 2));
		assert_eq!(layout.controls[1], Rect::new(2, 9, 38, 2));
		assert_eq!(layout.controls[2], Rect::new(2, 12, 38, 2));
		assert_eq!(layout.separator, Rect::new(2, 14, 38, 1));
		assert_eq!(layout.controls[3], Rect::new(2, 15, 38, 2));
		assert_eq!(layout.controls[4], Rect::new(2, 18, 38, 2));
		assert_eq!(layout.reset, Rect::new(2, 21, 9, 1));
		assert_eq!(layout.apply, Rect::new(31, 21, 9, 1));
	}

	#[test]
	fn tiny_areas_clip_instead_of_overflowing() {
		let area = Rect::new(0, 0, 10, 4);
		let layout = PanelLayout::compute(area);
		assert_eq!(layout.form, Rect::new(0, 3, 10, 1));
		for control in layout.controls {
			assert!(control.is_empty() || area.union(control) == area);
		}
	}

	#[test]
	fn bounds_cover_toggle_and_form_only() {
		let bounds = PanelLayout::compute(Rect::new(0, 0, 120, 40)).bounds();
		assert!(bounds.contains(PointerPress::new(1, 1)));
		assert!(bounds.contains(PointerPress::new(41, 39)));
		assert!(!bounds.contains(PointerPress::new(42, 10)));
		assert!(!bounds.contains(PointerPress::new(6, 1)));
	}
}
