use super::catalog::{BACKGROUND_COLORS, CONTENT_WIDTHS, FONT_COLORS, FONT_FAMILIES, FONT_SIZES};
use super::{Dimension, StyleMap, StyleOption};

/// One chosen option per [`Dimension`].
///
/// Used both as the settings form's draft and as the record of what was last
/// applied. Every field always holds a member of its dimension's option set;
/// [`StyleSelection::with`] is the only way to change a field and it returns
/// a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleSelection {
	font_family: StyleOption,
	font_size: StyleOption,
	font_color: StyleOption,
	background_color: StyleOption,
	content_width: StyleOption,
}

impl Default for StyleSelection {
	/// The distinguished default: Open Sans, 18, black on white, 800 wide.
	fn default() -> Self {
		Self {
			font_family: FONT_FAMILIES[0],
			font_size: FONT_SIZES[0],
			font_color: FONT_COLORS[0],
			background_color: BACKGROUND_COLORS[0],
			content_width: CONTENT_WIDTHS[1],
		}
	}
}

impl StyleSelection {
	/// Read the option chosen for `dimension`.
	#[must_use]
	pub fn get(&self, dimension: Dimension) -> StyleOption {
		match dimension {
			Dimension::FontFamily => self.font_family,
			Dimension::FontSize => self.font_size,
			Dimension::FontColor => self.font_color,
			Dimension::BackgroundColor => self.background_color,
			Dimension::ContentWidth => self.content_width,
		}
	}

	/// Return a copy with `dimension` replaced by `option`.
	///
	/// Returns `None` when `option` is not a member of the dimension's set,
	/// which keeps every selection valid by construction.
	#[must_use]
	pub fn with(mut self, dimension: Dimension, option: StyleOption) -> Option<Self> {
		if !dimension.contains(&option) {
			return None;
		}
		let slot = match dimension {
			Dimension::FontFamily => &mut self.font_family,
			Dimension::FontSize => &mut self.font_size,
			Dimension::FontColor => &mut self.font_color,
			Dimension::BackgroundColor => &mut self.background_color,
			Dimension::ContentWidth => &mut self.content_width,
		};
		*slot = option;
		Some(self)
	}

	/// Project the selection into style variables.
	#[must_use]
	pub fn style_map(&self) -> StyleMap {
		StyleMap::from(self)
	}

	/// Iterate `(dimension, option)` pairs in form order.
	pub fn iter(&self) -> impl Iterator<Item = (Dimension, StyleOption)> + '_ {
		Dimension::ALL
			.into_iter()
			.map(move |dimension| (dimension, self.get(dimension)))
	}
}
