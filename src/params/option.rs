use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::catalog;
use crate::error::{Error, Result};

/// One selectable choice within a [`Dimension`].
///
/// Two options are equal when their values match; labels are presentation
/// only.
#[derive(Debug, Clone, Copy, Eq, Serialize)]
pub struct StyleOption {
	/// Value written into the style variable.
	pub value: &'static str,
	/// Text shown in the form controls.
	pub label: &'static str,
}

impl StyleOption {
	#[must_use]
	pub const fn new(value: &'static str, label: &'static str) -> Self {
		Self { value, label }
	}
}

impl PartialEq for StyleOption {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl Hash for StyleOption {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state);
	}
}

impl fmt::Display for StyleOption {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label)
	}
}

/// An independently configurable style axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
	FontFamily,
	FontSize,
	FontColor,
	BackgroundColor,
	ContentWidth,
}

impl Dimension {
	/// Every dimension, in the order the settings form lists them.
	pub const ALL: [Dimension; 5] = [
		Dimension::FontFamily,
		Dimension::FontSize,
		Dimension::FontColor,
		Dimension::BackgroundColor,
		Dimension::ContentWidth,
	];

	/// Stable identifier used in configuration and diagnostics.
	#[must_use]
	pub const fn key(self) -> &'static str {
		match self {
			Self::FontFamily => "font-family",
			Self::FontSize => "font-size",
			Self::FontColor => "font-color",
			Self::BackgroundColor => "background-color",
			Self::ContentWidth => "content-width",
		}
	}

	/// Name of the style variable this dimension projects into.
	#[must_use]
	pub const fn variable(self) -> &'static str {
		match self {
			Self::FontFamily => "--font-family",
			Self::FontSize => "--font-size",
			Self::FontColor => "--font-color",
			Self::BackgroundColor => "--bg-color",
			Self::ContentWidth => "--container-width",
		}
	}

	/// Heading rendered above the dimension's control.
	#[must_use]
	pub const fn title(self) -> &'static str {
		match self {
			Self::FontFamily => "Font",
			Self::FontSize => "Font size",
			Self::FontColor => "Font color",
			Self::BackgroundColor => "Background color",
			Self::ContentWidth => "Content width",
		}
	}

	/// The configured, ordered option set for this dimension.
	#[must_use]
	pub fn options(self) -> &'static [StyleOption] {
		match self {
			Self::FontFamily => &catalog::FONT_FAMILIES,
			Self::FontSize => &catalog::FONT_SIZES,
			Self::FontColor => &catalog::FONT_COLORS,
			Self::BackgroundColor => &catalog::BACKGROUND_COLORS,
			Self::ContentWidth => &catalog::CONTENT_WIDTHS,
		}
	}

	#[must_use]
	pub fn contains(self, option: &StyleOption) -> bool {
		self.options().contains(option)
	}

	/// Look up an option by value, ignoring ASCII case and surrounding
	/// whitespace.
	pub fn find(self, value: &str) -> Result<StyleOption> {
		let needle = value.trim();
		self.options()
			.iter()
			.find(|option| option.value.eq_ignore_ascii_case(needle))
			.copied()
			.ok_or_else(|| Error::UnknownOption {
				dimension: self.key(),
				value: needle.to_string(),
				expected: self
					.options()
					.iter()
					.map(|option| option.value)
					.collect::<Vec<_>>()
					.join(", "),
			})
	}
}

impl fmt::Display for Dimension {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}
